//! Item list for the open category.

use crate::state::{ids, UiState};
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
struct ItemButtonProps {
    name: String,
}

#[component]
fn ItemButton(props: ItemButtonProps) -> Element {
    let mut state = use_context::<UiState>();
    let name = props.name.clone();

    rsx! {
        li {
            button {
                style: "width: 100%; text-align: left; padding: 10px 12px; margin: 4px 0; background: white; border: 1px solid #ddd; border-radius: 6px; cursor: pointer;",
                onclick: move |_| {
                    state.app.write().navigator.select_item(&name);
                },
                "{props.name}"
            }
        }
    }
}

/// Back button, category heading and one button per item.
#[component]
pub fn ItemList() -> Element {
    let mut state = use_context::<UiState>();
    let list = state.app.read().navigator.item_list();

    let Some(list) = list else {
        return rsx! {
            div { id: ids::ITEM_LIST, style: "display: none;" }
        };
    };

    rsx! {
        div {
            id: ids::ITEM_LIST,
            button {
                style: "padding: 6px 12px; margin-bottom: 8px; cursor: pointer;",
                onclick: move |_| {
                    state.app.write().navigator.back();
                },
                "← 뒤로"
            }
            h3 { "{list.icon} {list.category}" }
            ul {
                style: "list-style: none; padding: 0; margin: 0;",
                for (i, name) in list.items.iter().enumerate() {
                    ItemButton { key: "{i}", name: name.clone() }
                }
            }
        }
    }
}
