use crate::catalog::{BuildProgress, Song, Tab, visible_indices};

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub data: AppData,
    pub ui: UiState,
}

impl AppState {
    /// Catalog indices of the filtered view, in display order.
    pub fn visible_indices(&self) -> Vec<usize> {
        visible_indices(&self.data.catalog, self.ui.active_tab, &self.ui.search_term)
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppData {
    pub catalog: Vec<Song>,
    pub load: CatalogLoad,
}

impl AppData {
    pub fn song(&self, index: usize) -> Option<&Song> {
        self.catalog.get(index).filter(|song| song.index == index)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CatalogLoad {
    #[default]
    Fetching,
    Probing(BuildProgress),
    Ready,
}

impl CatalogLoad {
    pub fn is_loading(&self) -> bool {
        !matches!(self, CatalogLoad::Ready)
    }
}

#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub active_tab: Tab,
    pub search_term: String,
    /// Narrow terminals show the list instead of the detail pane while set.
    pub menu_open: bool,
}
