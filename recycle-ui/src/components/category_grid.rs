//! Category tiles shown on the guide's first screen.

use crate::components::{ErrorDisplay, LoadingSpinner};
use crate::state::{ids, UiState};
use dioxus::prelude::*;
use recycle_core::messages;
use recycle_core::navigator::{self, Screen};

#[derive(Props, Clone, PartialEq)]
struct CategoryTileProps {
    name: String,
    icon: String,
}

#[component]
fn CategoryTile(props: CategoryTileProps) -> Element {
    let mut state = use_context::<UiState>();
    let name = props.name.clone();

    rsx! {
        button {
            style: "display: flex; flex-direction: column; align-items: center; gap: 6px; padding: 16px 8px; background: white; border: 1px solid #ddd; border-radius: 8px; cursor: pointer; font-size: 14px;",
            onclick: move |_| {
                state.app.write().navigator.select_category(&name);
            },
            span { style: "font-size: 32px;", "{props.icon}" }
            span { "{props.name}" }
        }
    }
}

/// Grid of guide categories, hidden while a category is open.
#[component]
pub fn CategoryGrid() -> Element {
    let state = use_context::<UiState>();
    let (grid, visible) = {
        let app = state.app.read();
        (
            app.navigator.category_grid(),
            app.navigator.screen() == Screen::Categories,
        )
    };
    let display = if visible { "grid" } else { "none" };

    let body = match grid {
        navigator::CategoryGrid::Pending => rsx! {
            LoadingSpinner { message: messages::GUIDE_PENDING.to_string() }
        },
        navigator::CategoryGrid::Unavailable(failure) => rsx! {
            ErrorDisplay { message: failure.message().to_string() }
        },
        navigator::CategoryGrid::Tiles(tiles) => rsx! {
            for tile in tiles {
                CategoryTile {
                    key: "{tile.name}",
                    name: tile.name.clone(),
                    icon: tile.icon.clone(),
                }
            }
        },
    };

    rsx! {
        div {
            id: ids::CATEGORY_GRID,
            style: "display: {display}; grid-template-columns: repeat(auto-fill, minmax(110px, 1fr)); gap: 12px;",
            {body}
        }
    }
}
