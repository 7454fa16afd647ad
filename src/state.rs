use crate::chart::{LineChartRenderer, ScatterChartRenderer};
use crate::config::AppConfig;
use crate::data::DataStore;
use crate::error::SelectionError;
use crate::render::{ElementKind, Scene, Surface};
use crate::ui::tooltip::Tooltip;

// ---------------------------------------------------------------------------
// Selection state machine
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// No line chart drawn yet.
    Initial,
    /// Line chart drawn for this country.
    Selected(String),
}

/// Owns the selected country and redraws the line chart on every transition.
#[derive(Debug, Clone)]
pub struct SelectionController {
    state: Selection,
}

impl Default for SelectionController {
    fn default() -> Self {
        Self {
            state: Selection::Initial,
        }
    }
}

impl SelectionController {
    pub fn current(&self) -> Option<&str> {
        match &self.state {
            Selection::Initial => None,
            Selection::Selected(country) => Some(country),
        }
    }

    /// Select the first country once the country list is known.
    ///
    /// Does nothing when a country is already selected or the list is empty.
    pub fn start(
        &mut self,
        store: &DataStore,
        renderer: &LineChartRenderer,
        surface: &mut impl Surface,
    ) {
        if self.state != Selection::Initial {
            return;
        }
        match store.countries().first() {
            Some(first) => self.apply(first.clone(), store, renderer, surface),
            None => log::warn!("Dataset has no countries; nothing to draw"),
        }
    }

    /// Switch to `country`, redrawing even when it is already selected.
    pub fn select(
        &mut self,
        country: &str,
        store: &DataStore,
        renderer: &LineChartRenderer,
        surface: &mut impl Surface,
    ) -> Result<(), SelectionError> {
        if !store.contains_country(country) {
            return Err(SelectionError::UnknownCountry(country.to_string()));
        }
        self.apply(country.to_string(), store, renderer, surface);
        Ok(())
    }

    fn apply(
        &mut self,
        country: String,
        store: &DataStore,
        renderer: &LineChartRenderer,
        surface: &mut impl Surface,
    ) {
        log::info!("Selected {country}");
        let records = store.filter_by_country(&country);
        renderer.redraw(&country, &records, surface);
        self.state = Selection::Selected(country);
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: AppConfig,

    /// Loaded data (None if loading failed).
    pub store: Option<DataStore>,

    pub selection: SelectionController,
    pub line_chart: LineChartRenderer,

    /// Per-country population chart.
    pub line_scene: Scene,

    /// All-countries reference panel shown inside the tooltip.
    pub scatter_scene: Scene,

    pub tooltip: Tooltip,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Empty state with no dataset.
    pub fn new(config: AppConfig) -> Self {
        Self {
            store: None,
            selection: SelectionController::default(),
            line_chart: LineChartRenderer::new(config.line.clone()),
            line_scene: Scene::new(config.line.width, config.line.height),
            scatter_scene: Scene::new(config.scatter.width, config.scatter.height),
            tooltip: Tooltip::new(&config.tooltip),
            status_message: None,
            config,
        }
    }

    /// Load the configured dataset and draw both charts.
    ///
    /// A failed load is logged and leaves both charts empty.
    pub fn load(config: AppConfig) -> Self {
        let mut state = Self::new(config);
        let path = state.config.dataset_path.clone();
        match DataStore::load(&path) {
            Ok(store) => state.set_store(store),
            Err(e) => {
                log::error!("Failed to load dataset: {e}");
                state.status_message = Some(format!("Error: {e}"));
            }
        }
        state
    }

    /// Ingest a dataset: draw the scatter panel once, then the default line chart.
    pub fn set_store(&mut self, store: DataStore) {
        log::info!(
            "Dataset ready: {} records, {} countries",
            store.records().len(),
            store.countries().len()
        );
        self.scatter_scene.clear();
        ScatterChartRenderer::new(self.config.scatter.clone())
            .render(store.records(), &mut self.scatter_scene);
        log::debug!(
            "Scatter panel holds {} points",
            self.scatter_scene.count(ElementKind::Circle)
        );
        self.selection
            .start(&store, &self.line_chart, &mut self.line_scene);
        self.store = Some(store);
        self.status_message = None;
    }

    /// Countries offered by the dropdown (empty until a dataset is loaded).
    pub fn countries(&self) -> &[String] {
        match &self.store {
            Some(store) => store.countries(),
            None => &[],
        }
    }

    pub fn selected_country(&self) -> Option<&str> {
        self.selection.current()
    }

    /// Dropdown change handler.
    pub fn select_country(&mut self, country: &str) -> Result<(), SelectionError> {
        let Some(store) = &self.store else {
            return Err(SelectionError::UnknownCountry(country.to_string()));
        };
        self.selection
            .select(country, store, &self.line_chart, &mut self.line_scene)
    }
}
