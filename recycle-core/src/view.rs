//! Rendering capability implemented by each frontend.

use crate::chat::ChatMessage;
use crate::locality::LocalityPanel;
use crate::navigator::{CategoryGrid, GuideNavigator, ItemDetail, ItemList, Screen};

/// What a frontend must be able to draw.
///
/// The controller calls these after every state transition; implementors
/// only draw and never hold on to application state.
pub trait RecycleView {
    fn render_locality(&mut self, panel: &LocalityPanel);

    /// `visible` is false while an item list covers the grid.
    fn render_category_grid(&mut self, grid: &CategoryGrid, visible: bool);

    /// `None` hides and clears the item list.
    fn render_item_list(&mut self, list: Option<&ItemList>);

    /// `None` closes the detail modal.
    fn render_item_detail(&mut self, detail: Option<&ItemDetail>);

    fn append_message(&mut self, message: &ChatMessage);

    fn replace_message(&mut self, index: usize, message: &ChatMessage);

    fn set_chat_controls(&mut self, enabled: bool);

    fn render_image_preview(&mut self, data_url: Option<&str>);

    /// Short inline notice, e.g. a rejected attachment.
    fn show_notice(&mut self, notice: &str);
}

/// Push the full guide view state to `view`.
pub fn render_navigator<V: RecycleView + ?Sized>(view: &mut V, navigator: &GuideNavigator) {
    view.render_category_grid(
        &navigator.category_grid(),
        navigator.screen() == Screen::Categories,
    );
    view.render_item_list(navigator.item_list().as_ref());
    view.render_item_detail(navigator.detail().as_ref());
}
