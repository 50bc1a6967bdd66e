//! Detail view population on petal click.
//!
//! The host page owns the detail DOM; this module only issues commands to a
//! [`DetailSink`]. Each list is fetched, filtered to the clicked solution and
//! turned into themed HTML fragments.

use enum_dispatch::enum_dispatch;
use std::fmt;

use crate::data::{
    CaseStudy, DataSource, Dataset, DatasetKind, FromRow, Quote, Resource, SolutionId, decode,
};
use crate::errors::DataError;
use crate::render::svg::escape;
use crate::theme::{ColorTheme, ThemeRegistry};

/// The three lists of the detail view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    Resources,
    Quotes,
    CaseStudies,
}

impl ListKind {
    pub const ALL: [ListKind; 3] = [ListKind::Resources, ListKind::Quotes, ListKind::CaseStudies];

    pub fn dataset(self) -> DatasetKind {
        match self {
            ListKind::Resources => DatasetKind::Resources,
            ListKind::Quotes => DatasetKind::Quotes,
            ListKind::CaseStudies => DatasetKind::CaseStudies,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ListKind::Resources => "resources",
            ListKind::Quotes => "quotes",
            ListKind::CaseStudies => "case-studies",
        }
    }
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Receiver of detail-view commands, keyed by solution id.
///
/// Implementations treat commands for targets they do not have as no-ops.
pub trait DetailSink {
    /// Show the detail group for `id`, hiding any other.
    fn show_group(&mut self, id: &SolutionId);
    /// Mark the navigation item for `id` as the only selected one.
    fn set_selected_nav(&mut self, id: &SolutionId);
    /// Replace the contents of one list in the group for `id`.
    fn render_list(&mut self, kind: ListKind, id: &SolutionId, items: &[String]);
    fn set_nav_visible(&mut self, visible: bool);
}

/// A detail row that can render itself as a list item.
#[enum_dispatch]
pub trait DetailMarkup {
    fn solution_id(&self) -> &SolutionId;
    fn markup(&self, theme: &ColorTheme) -> String;
}

impl DetailMarkup for Resource {
    fn solution_id(&self) -> &SolutionId {
        &self.solution_id
    }

    fn markup(&self, theme: &ColorTheme) -> String {
        format!(
            r#"<a class="resource" href="{link}" target="_blank" style="border-color: {base}"><p class="resource-title" style="color: {deep}">{title}</p><p class="resource-description">{description}</p></a>"#,
            link = escape(&self.link),
            base = theme.base,
            deep = theme.deep,
            title = escape(&self.title),
            description = escape(&self.description),
        )
    }
}

impl DetailMarkup for Quote {
    fn solution_id(&self) -> &SolutionId {
        &self.solution_id
    }

    fn markup(&self, theme: &ColorTheme) -> String {
        format!(
            r#"<div class="quote" style="background-color: {transparent}"><p class="quote-text">“{quote}”</p><p class="quote-author" style="color: {deep}">{name}</p><p class="quote-author-title">{title}</p></div>"#,
            transparent = theme.transparent,
            quote = escape(&self.quote),
            deep = theme.deep,
            name = escape(&self.author_name),
            title = escape(&self.author_title),
        )
    }
}

impl DetailMarkup for CaseStudy {
    fn solution_id(&self) -> &SolutionId {
        &self.solution_id
    }

    fn markup(&self, theme: &ColorTheme) -> String {
        format!(
            r#"<div class="case-study" style="border-color: {base}"><p class="case-study-title">{title}</p><p class="case-study-description">{description}</p><a class="case-study-link" href="{link}" target="_blank" style="background-color: {deep}; color: {text}">Read the case study</a></div>"#,
            base = theme.base,
            title = escape(&self.title),
            description = escape(&self.description),
            link = escape(&self.link),
            deep = theme.deep,
            text = theme.text,
        )
    }
}

#[enum_dispatch(DetailMarkup)]
#[derive(Debug, Clone, PartialEq)]
pub enum DetailEntry {
    Resource,
    Quote,
    CaseStudy,
}

fn matching<T>(source: &dyn DataSource, kind: DatasetKind, id: &SolutionId) -> Result<Vec<DetailEntry>, DataError>
where
    T: FromRow + Into<DetailEntry>,
{
    let table = source.fetch(kind)?;
    if table.headers().is_empty() {
        return Ok(Vec::new());
    }
    Ok(decode::<T>(&table)?
        .into_iter()
        .map(Into::into)
        .filter(|entry: &DetailEntry| entry.solution_id() == id)
        .collect())
}

/// Fetch the rows of one list belonging to `id`.
pub fn fetch_entries(
    source: &dyn DataSource,
    kind: ListKind,
    id: &SolutionId,
) -> Result<Vec<DetailEntry>, DataError> {
    match kind {
        ListKind::Resources => matching::<Resource>(source, kind.dataset(), id),
        ListKind::Quotes => matching::<Quote>(source, kind.dataset(), id),
        ListKind::CaseStudies => matching::<CaseStudy>(source, kind.dataset(), id),
    }
}

/// Populate the detail view for a clicked solution.
///
/// Returns `false` without issuing anything when `id` is not in `dataset`.
/// A list whose fetch fails is logged and left as it was.
pub fn dispatch_detail(
    id: &SolutionId,
    dataset: &Dataset,
    source: &dyn DataSource,
    themes: &ThemeRegistry,
    sink: &mut dyn DetailSink,
) -> bool {
    let Some(solution) = dataset.find(id) else {
        crate::log::warn!(%id, "detail requested for unknown solution");
        return false;
    };
    let theme = themes.resolve(&solution.category);

    sink.show_group(id);
    sink.set_selected_nav(id);
    sink.set_nav_visible(true);

    for kind in ListKind::ALL {
        match fetch_entries(source, kind, id) {
            Ok(entries) => {
                let items: Vec<String> = entries.iter().map(|e| e.markup(&theme)).collect();
                crate::log::debug!(%id, %kind, items = items.len(), "render list");
                sink.render_list(kind, id, &items);
            }
            Err(_e) => {
                crate::log::warn!(%id, %kind, error = %_e, "detail fetch failed; list left unchanged");
            }
        }
    }
    true
}

/// Close the detail view.
pub fn clear_detail(sink: &mut dyn DetailSink) {
    sink.set_nav_visible(false);
}

/// One command received by a [`RecordingSink`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkCommand {
    ShowGroup(SolutionId),
    SetSelectedNav(SolutionId),
    RenderList {
        kind: ListKind,
        id: SolutionId,
        items: Vec<String>,
    },
    SetNavVisible(bool),
}

impl fmt::Display for SinkCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SinkCommand::ShowGroup(id) => write!(f, "show_group({id})"),
            SinkCommand::SetSelectedNav(id) => write!(f, "set_selected_nav({id})"),
            SinkCommand::RenderList { kind, id, items } => {
                write!(f, "render_list({kind}, {id}, {} items)", items.len())
            }
            SinkCommand::SetNavVisible(visible) => write!(f, "set_nav_visible({visible})"),
        }
    }
}

/// Sink that records every command, for tests and headless runs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingSink {
    commands: Vec<SinkCommand>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[SinkCommand] {
        &self.commands
    }

    /// One command per line.
    pub fn log(&self) -> String {
        self.commands
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Items of the most recent `render_list` for `kind`.
    pub fn last_list(&self, kind: ListKind) -> Option<&[String]> {
        self.commands.iter().rev().find_map(|c| match c {
            SinkCommand::RenderList { kind: k, items, .. } if *k == kind => Some(items.as_slice()),
            _ => None,
        })
    }
}

impl DetailSink for RecordingSink {
    fn show_group(&mut self, id: &SolutionId) {
        self.commands.push(SinkCommand::ShowGroup(id.clone()));
    }

    fn set_selected_nav(&mut self, id: &SolutionId) {
        self.commands.push(SinkCommand::SetSelectedNav(id.clone()));
    }

    fn render_list(&mut self, kind: ListKind, id: &SolutionId, items: &[String]) {
        self.commands.push(SinkCommand::RenderList {
            kind,
            id: id.clone(),
            items: items.to_vec(),
        });
    }

    fn set_nav_visible(&mut self, visible: bool) {
        self.commands.push(SinkCommand::SetNavVisible(visible));
    }
}
