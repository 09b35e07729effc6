use serde::Serialize;
use tracing::{error, instrument};

use crate::debounce::Debouncer;
use crate::menu::assets::asset_path;
use crate::menu::services::{ensure_menu_loaded, filter_menu};
use crate::menu::MenuItem;
use crate::state::AppState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HomeStatus {
    Loading,
    Error(String),
    Ready,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuRow {
    pub key: String,
    pub name: String,
    pub description: String,
    pub price: String,
    pub category: String,
    pub image: Option<String>,
}

impl MenuRow {
    fn from_item(index: usize, item: &MenuItem) -> Self {
        Self {
            key: item.list_key(index),
            name: item.name.clone(),
            description: item.description.clone(),
            price: item.display_price(),
            category: item.display_category(),
            image: asset_path(&item.image),
        }
    }
}

pub struct HomeScreen {
    state: AppState,
    status: HomeStatus,
    items: Vec<MenuItem>,
    /// Last successfully loaded snapshot, shown again if a later load fails.
    last_good: Vec<MenuItem>,
    categories: Vec<String>,
    selected: Vec<String>,
    search_text: String,
    // Settled search text; the only text queries use.
    query_text: String,
    search: Debouncer<String>,
}

impl HomeScreen {
    pub fn new(state: AppState) -> Self {
        let search = Debouncer::new(state.config.search_debounce());
        Self {
            state,
            status: HomeStatus::Loading,
            items: Vec::new(),
            last_good: Vec::new(),
            categories: Vec::new(),
            selected: Vec::new(),
            search_text: String::new(),
            query_text: String::new(),
            search,
        }
    }

    #[instrument(skip(self))]
    pub async fn enter(&mut self) {
        self.status = HomeStatus::Loading;
        match ensure_menu_loaded(&self.state).await {
            Ok(snapshot) => {
                self.last_good = snapshot.items.clone();
                self.items = snapshot.items;
                self.categories = snapshot.categories;
                self.status = HomeStatus::Ready;
                if self.has_filters() {
                    self.apply_filters().await;
                }
            }
            Err(e) => {
                error!(error = %e, "error initializing menu");
                self.items = self.last_good.clone();
                self.status = HomeStatus::Error(e.user_message());
            }
        }
    }

    pub fn status(&self) -> &HomeStatus {
        &self.status
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn selected_categories(&self) -> &[String] {
        &self.selected
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn rows(&self) -> Vec<MenuRow> {
        self.items
            .iter()
            .enumerate()
            .map(|(i, item)| MenuRow::from_item(i, item))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Records a keystroke. The query runs once typing pauses, see
    /// [`HomeScreen::next_search`].
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
        self.search.push(self.search_text.clone());
    }

    pub async fn next_search(&mut self) {
        if let Some(text) = self.search.settled().await {
            self.query_text = text;
            self.apply_filters().await;
        }
    }

    pub fn search_pending(&self) -> bool {
        self.search.is_pending()
    }

    /// Chips filter straight away, with the last settled search text.
    pub async fn toggle_category(&mut self, category: &str) {
        if let Some(pos) = self.selected.iter().position(|c| c == category) {
            self.selected.remove(pos);
        } else {
            self.selected.push(category.to_string());
        }
        self.apply_filters().await;
    }

    pub async fn apply_filters(&mut self) {
        self.items = filter_menu(&self.state.db, &self.query_text, &self.selected).await;
    }

    fn has_filters(&self) -> bool {
        !self.query_text.trim().is_empty() || !self.selected.is_empty()
    }
}
