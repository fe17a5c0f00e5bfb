//! Item detail modal.

use crate::state::{ids, UiState};
use dioxus::prelude::*;
use recycle_core::navigator::Visual;

/// Overlay with the item's picture, name and disposal description.
#[component]
pub fn ItemModal() -> Element {
    let mut state = use_context::<UiState>();
    let detail = state.app.read().navigator.detail();

    let Some(detail) = detail else {
        return rsx! {
            div { id: ids::ITEM_MODAL, style: "display: none;" }
        };
    };

    let visual = match &detail.visual {
        Visual::Image(src) => rsx! {
            img {
                src: "{src}",
                alt: "{detail.name}",
                style: "display: block; max-width: 100%; max-height: 200px; margin: 0 auto 12px auto;",
            }
        },
        Visual::Icon(icon) => rsx! {
            div { style: "font-size: 64px; text-align: center; margin-bottom: 12px;", "{icon}" }
        },
    };

    rsx! {
        div {
            id: ids::ITEM_MODAL,
            style: "position: fixed; inset: 0; background: rgba(0,0,0,0.45); display: flex; align-items: center; justify-content: center; z-index: 10;",
            onclick: move |_| {
                state.app.write().navigator.close_detail();
            },
            div {
                style: "background: white; border-radius: 10px; padding: 20px; max-width: 420px; width: 90%; position: relative;",
                onclick: move |evt| evt.stop_propagation(),
                button {
                    style: "position: absolute; top: 8px; right: 12px; border: none; background: none; font-size: 22px; cursor: pointer;",
                    onclick: move |_| {
                        state.app.write().navigator.close_detail();
                    },
                    "×"
                }
                {visual}
                h3 { id: ids::MODAL_TITLE, style: "margin: 0 0 8px 0;", "{detail.name}" }
                p {
                    id: ids::MODAL_DESCRIPTION,
                    style: "white-space: pre-wrap; margin: 0;",
                    "{detail.description}"
                }
            }
        }
    }
}
