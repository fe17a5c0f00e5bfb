//! Locality panel: resolved place, discharge time and rule tables.

use std::collections::BTreeMap;

use crate::state::{ids, UiState};
use dioxus::prelude::*;
use recycle_core::render::table_lines;

#[derive(Props, Clone, PartialEq)]
struct RuleTableProps {
    title: String,
    rows: BTreeMap<String, String>,
}

#[component]
fn RuleTable(props: RuleTableProps) -> Element {
    if props.rows.is_empty() {
        return rsx! {};
    }
    let lines = table_lines(&props.rows);
    rsx! {
        div {
            style: "margin-top: 8px;",
            strong { "{props.title}" }
            ul {
                style: "margin: 4px 0; padding-left: 20px;",
                for line in lines {
                    li { "{line}" }
                }
            }
        }
    }
}

/// Shows the locality headline and, when rules were found, their details.
#[component]
pub fn LocationPanel() -> Element {
    let state = use_context::<UiState>();
    let panel = state.app.read().locality.clone();
    let headline = panel.headline();

    rsx! {
        section {
            id: ids::LOCATION_PANEL,
            style: "padding: 12px 16px; margin-bottom: 16px; background: #F1F8E9; border: 1px solid #C5E1A5; border-radius: 8px;",
            h3 { style: "margin: 0 0 4px 0;", "{headline}" }
            if let Some(info) = panel.info() {
                p {
                    style: "margin: 4px 0;",
                    strong { "배출시간: " }
                    "{info.discharge_time}"
                }
                RuleTable { title: "재활용품".to_string(), rows: info.recyclables.clone() }
                RuleTable { title: "봉투색상".to_string(), rows: info.bag_colors.clone() }
            }
        }
    }
}
