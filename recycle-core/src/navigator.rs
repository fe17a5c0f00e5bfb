//! Three-level guide navigation: category grid, item list, item detail.
//!
//! The navigator is pure state. Renderers ask it for [`CategoryGrid`],
//! [`ItemList`] and [`ItemDetail`] snapshots after each transition.

use log::debug;
use serde::Serialize;

use crate::guide::{Category, GuideData, Item};
use crate::messages;

/// Why the guide cannot be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuideFailure {
    /// Request failed or the server sent no guide.
    LoadFailed,
    /// Guide arrived without a usable categories list.
    Malformed,
}

impl GuideFailure {
    pub fn message(self) -> &'static str {
        match self {
            Self::LoadFailed => messages::GUIDE_LOAD_FAILED,
            Self::Malformed => messages::GUIDE_MALFORMED,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
enum GuideStatus {
    #[default]
    Pending,
    Failed(GuideFailure),
    Ready(GuideData),
}

/// Which main screen is visible. The detail modal overlays `Items`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Categories,
    Items,
}

/// One tile in the category grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTile {
    pub name: String,
    pub icon: String,
}

/// Contents of the category grid region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryGrid {
    Pending,
    Unavailable(GuideFailure),
    Tiles(Vec<CategoryTile>),
}

/// Contents of the item list region for the open category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemList {
    pub category: String,
    pub icon: String,
    pub items: Vec<String>,
}

/// Picture shown at the top of the detail modal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Visual {
    Image(String),
    Icon(String),
}

/// Contents of the item detail modal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemDetail {
    pub visual: Visual,
    pub name: String,
    pub description: String,
}

/// Guide view-state machine over cached [`GuideData`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuideNavigator {
    status: GuideStatus,
    open_category: Option<usize>,
    open_item: Option<usize>,
}

impl GuideNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the cached guide wholesale and return to the category grid.
    pub fn load(&mut self, guide: GuideData) {
        self.status = GuideStatus::Ready(guide);
        self.open_category = None;
        self.open_item = None;
    }

    /// Mark the guide unavailable. Transitions are disabled until the next
    /// successful [`load`](Self::load).
    pub fn fail(&mut self, failure: GuideFailure) {
        self.status = GuideStatus::Failed(failure);
        self.open_category = None;
        self.open_item = None;
    }

    pub fn guide(&self) -> Option<&GuideData> {
        match &self.status {
            GuideStatus::Ready(guide) => Some(guide),
            _ => None,
        }
    }

    pub fn screen(&self) -> Screen {
        if self.open_category.is_some() {
            Screen::Items
        } else {
            Screen::Categories
        }
    }

    fn current_category(&self) -> Option<&Category> {
        let guide = self.guide()?;
        guide.categories.get(self.open_category?)
    }

    fn current_item(&self) -> Option<(&Category, &Item)> {
        let category = self.current_category()?;
        let item = category.items.get(self.open_item?)?;
        Some((category, item))
    }

    /// Open the first category named `name`. Misses are no-ops.
    pub fn select_category(&mut self, name: &str) -> bool {
        let Some(guide) = self.guide() else {
            debug!("Category '{}' selected before guide was available", name);
            return false;
        };
        match guide.categories.iter().position(|c| c.name == name) {
            Some(index) => {
                self.open_category = Some(index);
                self.open_item = None;
                true
            }
            None => {
                debug!("Category '{}' not found in guide", name);
                false
            }
        }
    }

    /// Leave the item list and show the category grid again.
    pub fn back(&mut self) -> bool {
        if self.open_category.is_none() {
            return false;
        }
        self.open_category = None;
        self.open_item = None;
        true
    }

    /// Open the detail modal for an item of the open category.
    pub fn select_item(&mut self, name: &str) -> bool {
        let Some(category) = self.current_category() else {
            debug!("Item '{}' selected with no open category", name);
            return false;
        };
        match category.items.iter().position(|i| i.name == name) {
            Some(index) => {
                self.open_item = Some(index);
                true
            }
            None => {
                debug!("Item '{}' not found in category '{}'", name, category.name);
                false
            }
        }
    }

    /// Close the detail modal. The item list stays as it was.
    pub fn close_detail(&mut self) -> bool {
        self.open_item.take().is_some()
    }

    pub fn category_grid(&self) -> CategoryGrid {
        match &self.status {
            GuideStatus::Pending => CategoryGrid::Pending,
            GuideStatus::Failed(failure) => CategoryGrid::Unavailable(*failure),
            GuideStatus::Ready(guide) => CategoryGrid::Tiles(
                guide
                    .categories
                    .iter()
                    .map(|c| CategoryTile {
                        name: c.name.clone(),
                        icon: c.icon.clone(),
                    })
                    .collect(),
            ),
        }
    }

    pub fn item_list(&self) -> Option<ItemList> {
        let category = self.current_category()?;
        Some(ItemList {
            category: category.name.clone(),
            icon: category.icon.clone(),
            items: category.items.iter().map(|i| i.name.clone()).collect(),
        })
    }

    pub fn detail(&self) -> Option<ItemDetail> {
        let (category, item) = self.current_item()?;
        let visual = match item.image_path.as_deref().filter(|p| !p.is_empty()) {
            Some(path) => Visual::Image(path.to_string()),
            None => Visual::Icon(category.icon.clone()),
        };
        Some(ItemDetail {
            visual,
            name: item.name.clone(),
            description: item.description.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_guide() -> GuideData {
        GuideData::from_value(json!({
            "categories": [
                {"name": "플라스틱", "icon": "🧴", "items": [
                    {"name": "병", "description": "내용물을 비우고 라벨을 제거하세요.\n뚜껑은 따로."},
                    {"name": "용기", "description": "헹궈서 배출", "image_path": "/static/images/box.jpg"}
                ]},
                {"name": "유리", "icon": "🍾", "items": [
                    {"name": "병", "description": "유리병 수거함"}
                ]}
            ]
        }))
        .unwrap()
    }

    fn tile_names(grid: &CategoryGrid) -> Vec<String> {
        match grid {
            CategoryGrid::Tiles(tiles) => tiles.iter().map(|t| t.name.clone()).collect(),
            other => panic!("expected tiles, got {:?}", other),
        }
    }

    #[test]
    fn test_starts_pending_on_category_screen() {
        let nav = GuideNavigator::new();
        assert_eq!(nav.screen(), Screen::Categories);
        assert_eq!(nav.category_grid(), CategoryGrid::Pending);
        assert!(nav.item_list().is_none());
    }

    #[test]
    fn test_category_then_item_shows_description_verbatim() {
        let mut nav = GuideNavigator::new();
        nav.load(sample_guide());

        assert!(nav.select_category("플라스틱"));
        assert_eq!(nav.screen(), Screen::Items);
        let list = nav.item_list().unwrap();
        assert_eq!(list.category, "플라스틱");
        assert_eq!(list.items, vec!["병", "용기"]);

        assert!(nav.select_item("병"));
        let detail = nav.detail().unwrap();
        assert_eq!(detail.name, "병");
        assert_eq!(detail.description, "내용물을 비우고 라벨을 제거하세요.\n뚜껑은 따로.");
        assert_eq!(detail.visual, Visual::Icon("🧴".to_string()));
    }

    #[test]
    fn test_detail_prefers_image() {
        let mut nav = GuideNavigator::new();
        nav.load(sample_guide());
        nav.select_category("플라스틱");
        nav.select_item("용기");
        assert_eq!(
            nav.detail().unwrap().visual,
            Visual::Image("/static/images/box.jpg".to_string())
        );
    }

    #[test]
    fn test_item_lookup_is_scoped_to_open_category() {
        let mut nav = GuideNavigator::new();
        nav.load(sample_guide());
        nav.select_category("유리");
        assert!(nav.select_item("병"));
        assert_eq!(nav.detail().unwrap().description, "유리병 수거함");
        assert!(!nav.select_item("용기"));
    }

    #[test]
    fn test_close_detail_keeps_item_list() {
        let mut nav = GuideNavigator::new();
        nav.load(sample_guide());
        nav.select_category("플라스틱");
        nav.select_item("병");
        let before = nav.item_list();

        assert!(nav.close_detail());
        assert!(nav.detail().is_none());
        assert_eq!(nav.screen(), Screen::Items);
        assert_eq!(nav.item_list(), before);
        assert!(!nav.close_detail());
    }

    #[test]
    fn test_back_clears_item_list() {
        let mut nav = GuideNavigator::new();
        nav.load(sample_guide());
        nav.select_category("플라스틱");
        nav.select_item("병");

        assert!(nav.back());
        assert_eq!(nav.screen(), Screen::Categories);
        assert!(nav.item_list().is_none());
        assert!(nav.detail().is_none());
        assert!(!nav.back());
    }

    #[test]
    fn test_lookup_misses_are_noops() {
        let mut nav = GuideNavigator::new();
        nav.load(sample_guide());
        assert!(!nav.select_category("금속"));
        assert_eq!(nav.screen(), Screen::Categories);

        nav.select_category("플라스틱");
        assert!(!nav.select_item("캔"));
        assert!(nav.detail().is_none());
        assert_eq!(nav.item_list().unwrap().category, "플라스틱");
    }

    #[test]
    fn test_failed_guide_disables_transitions() {
        let mut nav = GuideNavigator::new();
        nav.fail(GuideFailure::LoadFailed);
        assert_eq!(nav.category_grid(), CategoryGrid::Unavailable(GuideFailure::LoadFailed));
        assert!(!nav.select_category("플라스틱"));
        assert!(!nav.select_item("병"));

        nav.load(sample_guide());
        assert!(nav.select_category("플라스틱"));
    }

    #[test]
    fn test_reload_resets_view_state() {
        let mut nav = GuideNavigator::new();
        nav.load(sample_guide());
        nav.select_category("유리");
        nav.load(sample_guide());
        assert_eq!(nav.screen(), Screen::Categories);
    }

    #[test]
    fn test_grid_render_is_idempotent() {
        let mut nav = GuideNavigator::new();
        nav.load(sample_guide());
        let first = nav.category_grid();
        let second = nav.category_grid();
        assert_eq!(first, second);
        assert_eq!(tile_names(&first), vec!["플라스틱", "유리"]);
    }
}
