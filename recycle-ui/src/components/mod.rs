//! Dioxus RSX components for the recycling guide page.

mod category_grid;
mod chat_panel;
mod error_display;
mod item_list;
mod item_modal;
mod loading_spinner;
mod location_panel;

pub use category_grid::CategoryGrid;
pub use chat_panel::ChatPanel;
pub use error_display::ErrorDisplay;
pub use item_list::ItemList;
pub use item_modal::ItemModal;
pub use loading_spinner::LoadingSpinner;
pub use location_panel::LocationPanel;
