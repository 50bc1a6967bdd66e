//! The controller: owns data and interaction state, re-runs layout on change

use crate::config::{LayoutConfig, RenderOptions};
use crate::data::{DataSource, Dataset, load_dataset};
use crate::detail::{DetailSink, clear_detail, dispatch_detail};
use crate::errors::{ConfigError, DataError, RenderError};
use crate::interaction::{InteractionState, PointerEvent};
use crate::render::{RenderModel, generate_svg, layout};
use crate::theme::ThemeRegistry;

/// A live visualization.
///
/// Starts empty and renders the default state until a dataset is loaded.
/// Every dataset or hover change recomputes the whole [`RenderModel`].
#[derive(Debug, Clone)]
pub struct Viz {
    config: LayoutConfig,
    options: RenderOptions,
    themes: ThemeRegistry,
    dataset: Dataset,
    interaction: InteractionState,
    in_view: bool,
    model: RenderModel,
}

impl Viz {
    pub fn new(config: LayoutConfig, options: RenderOptions) -> Result<Self, ConfigError> {
        config.validate()?;
        let dataset = Dataset::empty();
        let interaction = InteractionState::new();
        let model = layout(&dataset, &interaction, &config);
        Ok(Self {
            config,
            options,
            themes: ThemeRegistry::default(),
            dataset,
            interaction,
            in_view: false,
            model,
        })
    }

    pub fn with_themes(mut self, themes: ThemeRegistry) -> Self {
        self.themes = themes;
        self
    }

    /// Fetch the primary dataset. On failure the previous dataset stays.
    pub fn load(&mut self, source: &dyn DataSource) -> Result<(), DataError> {
        match load_dataset(source) {
            Ok(dataset) => {
                crate::log::info!(solutions = dataset.len(), "dataset loaded");
                self.set_dataset(dataset);
                Ok(())
            }
            Err(e) => {
                crate::log::warn!(error = %e, "dataset load failed; keeping previous data");
                Err(e)
            }
        }
    }

    pub fn set_dataset(&mut self, dataset: Dataset) {
        self.dataset = dataset;
        // Hover and selection may point at records that no longer exist
        self.interaction = InteractionState::new();
        self.relayout();
    }

    /// Apply a pointer event. Clicks also populate the detail view.
    ///
    /// Returns whether the rendered model changed.
    pub fn handle(&mut self, event: &PointerEvent, source: &dyn DataSource, sink: &mut dyn DetailSink) -> bool {
        let changed = self.interaction.apply(event, &self.dataset);
        if let PointerEvent::Click(id) = event {
            dispatch_detail(id, &self.dataset, source, &self.themes, sink);
        }
        if changed {
            self.relayout();
        }
        changed
    }

    /// Close the detail view.
    pub fn clear_selection(&mut self, sink: &mut dyn DetailSink) {
        if self.interaction.clear_selection() {
            clear_detail(sink);
        }
    }

    pub fn set_in_view(&mut self, in_view: bool) {
        self.in_view = in_view;
    }

    pub fn in_view(&self) -> bool {
        self.in_view
    }

    pub fn model(&self) -> &RenderModel {
        &self.model
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    pub fn render_svg(&self) -> Result<String, RenderError> {
        generate_svg(&self.model, &self.options, self.in_view)
    }

    fn relayout(&mut self) {
        self.model = layout(&self.dataset, &self.interaction, &self.config);
    }
}
