//! Hover and selection state.
//!
//! Hover drives the dimmed/highlighted classes and the central panel; it is
//! transient and changes only on pointer enter/leave. Selection opens the
//! detail view and persists until replaced or cleared.

use crate::data::{Dataset, Solution, SolutionId};

/// The record under the pointer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoverTarget {
    pub id: SolutionId,
    pub category: String,
}

impl HoverTarget {
    pub fn of(solution: &Solution) -> Self {
        Self {
            id: solution.id.clone(),
            category: solution.category.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum HoverState {
    #[default]
    NoHover,
    Hovered(HoverTarget),
}

impl HoverState {
    pub fn target(&self) -> Option<&HoverTarget> {
        match self {
            HoverState::NoHover => None,
            HoverState::Hovered(target) => Some(target),
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, HoverState::Hovered(_))
    }
}

/// Pointer input on a petal's hit target
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PointerEvent {
    Enter(SolutionId),
    Leave(SolutionId),
    Click(SolutionId),
}

impl PointerEvent {
    pub fn id(&self) -> &SolutionId {
        match self {
            PointerEvent::Enter(id) | PointerEvent::Leave(id) | PointerEvent::Click(id) => id,
        }
    }
}

/// What the central content panel shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CenterPanel {
    /// Title, how-to text and the hover/click illustration
    Instructions,
    Preview(Preview),
}

/// Hovered record summary for the central panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    pub id: SolutionId,
    pub category: String,
    pub abbreviation: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InteractionState {
    hover: HoverState,
    selected: Option<SolutionId>,
}

impl InteractionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hover(&self) -> &HoverState {
        &self.hover
    }

    pub fn selected(&self) -> Option<&SolutionId> {
        self.selected.as_ref()
    }

    /// Apply a pointer event and report whether anything visible changed.
    ///
    /// Enter and click events naming an id missing from `dataset` are ignored.
    /// Leave always returns to `NoHover`, whichever petal it names.
    pub fn apply(&mut self, event: &PointerEvent, dataset: &Dataset) -> bool {
        match event {
            PointerEvent::Enter(id) => {
                let Some(solution) = dataset.find(id) else {
                    crate::log::debug!(%id, "pointer enter on unknown solution");
                    return false;
                };
                self.set_hover(HoverState::Hovered(HoverTarget::of(solution)))
            }
            PointerEvent::Leave(_) => self.set_hover(HoverState::NoHover),
            PointerEvent::Click(id) => {
                if dataset.find(id).is_none() {
                    crate::log::debug!(%id, "click on unknown solution");
                    return false;
                }
                self.select(id.clone())
            }
        }
    }

    fn set_hover(&mut self, hover: HoverState) -> bool {
        if self.hover == hover {
            return false;
        }
        self.hover = hover;
        true
    }

    /// Replace the selection. Returns whether it changed.
    pub fn select(&mut self, id: SolutionId) -> bool {
        if self.selected.as_ref() == Some(&id) {
            return false;
        }
        self.selected = Some(id);
        true
    }

    /// Returns whether there was a selection to clear.
    pub fn clear_selection(&mut self) -> bool {
        self.selected.take().is_some()
    }

    pub fn is_petal_hovered(&self, id: &SolutionId) -> bool {
        self.hover.target().is_some_and(|t| &t.id == id)
    }

    /// A petal is dimmed while another petal is hovered.
    pub fn is_petal_dimmed(&self, id: &SolutionId) -> bool {
        self.hover.target().is_some_and(|t| &t.id != id)
    }

    /// A category is dimmed while a petal of another category is hovered.
    pub fn is_category_dimmed(&self, category: &str) -> bool {
        self.hover.target().is_some_and(|t| t.category != category)
    }

    /// Central panel content for the current hover.
    pub fn center_panel(&self, dataset: &Dataset) -> CenterPanel {
        let Some(solution) = self.hover.target().and_then(|t| dataset.find(&t.id)) else {
            return CenterPanel::Instructions;
        };
        CenterPanel::Preview(Preview {
            id: solution.id.clone(),
            category: solution.category.clone(),
            abbreviation: solution.abbreviation.clone(),
            name: solution.name.clone(),
        })
    }
}
