//! Plain-text rendering of the view state for the CLI.

use std::io::Write;

use log::{debug, warn};
use recycle_core::chat::{ChatMessage, Sender};
use recycle_core::locality::LocalityPanel;
use recycle_core::messages;
use recycle_core::navigator::{CategoryGrid, ItemDetail, ItemList, Visual};
use recycle_core::render::table_lines;
use recycle_core::view::RecycleView;

/// Writes each rendered region to `out` as it changes.
///
/// Pending placeholders and loading bubbles are skipped; a terminal only
/// shows settled states.
pub struct TerminalView<W> {
    out: W,
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{}", text) {
            warn!("Write to terminal failed: {}", e);
        }
    }

    fn table(&mut self, title: &str, rows: &std::collections::BTreeMap<String, String>) {
        if rows.is_empty() {
            return;
        }
        self.line(&format!("{}:", title));
        for row in table_lines(rows) {
            self.line(&format!("  {}", row));
        }
    }

    fn message(&mut self, message: &ChatMessage) {
        if message.is_loading {
            return;
        }
        match message.sender {
            Sender::User => {
                if message.attached_image.is_some() {
                    self.line("🙋 [이미지 첨부]");
                }
                self.line(&format!("🙋 {}", message.text));
            }
            Sender::Bot => {
                self.line(&format!("🤖 {}", message.text));
                for source in &message.sources {
                    self.line(&format!("   - {} <{}>", source.title, source.url));
                }
            }
        }
    }
}

impl<W: Write> RecycleView for TerminalView<W> {
    fn render_locality(&mut self, panel: &LocalityPanel) {
        if *panel == LocalityPanel::Pending {
            return;
        }
        self.line(&panel.headline());
        if let Some(info) = panel.info() {
            self.line(&format!("배출시간: {}", info.discharge_time));
            self.table("재활용품", &info.recyclables);
            self.table("봉투색상", &info.bag_colors);
        }
    }

    fn render_category_grid(&mut self, grid: &CategoryGrid, visible: bool) {
        if !visible {
            return;
        }
        match grid {
            CategoryGrid::Pending => {}
            CategoryGrid::Unavailable(failure) => self.line(failure.message()),
            CategoryGrid::Tiles(tiles) => {
                self.line("품목별 분리배출 가이드");
                for tile in tiles {
                    self.line(&format!("  {} {}", tile.icon, tile.name));
                }
            }
        }
    }

    fn render_item_list(&mut self, list: Option<&ItemList>) {
        let Some(list) = list else {
            return;
        };
        self.line(&format!("{} {}", list.icon, list.category));
        for item in &list.items {
            self.line(&format!("  - {}", item));
        }
    }

    fn render_item_detail(&mut self, detail: Option<&ItemDetail>) {
        let Some(detail) = detail else {
            return;
        };
        match &detail.visual {
            Visual::Image(path) => self.line(&format!("[{}]", path)),
            Visual::Icon(icon) => self.line(icon),
        }
        self.line(&detail.name);
        self.line(&detail.description);
    }

    fn append_message(&mut self, message: &ChatMessage) {
        self.message(message);
    }

    fn replace_message(&mut self, _index: usize, message: &ChatMessage) {
        self.message(message);
    }

    fn set_chat_controls(&mut self, enabled: bool) {
        debug!("Chat controls enabled: {}", enabled);
    }

    fn render_image_preview(&mut self, data_url: Option<&str>) {
        debug!("Image staged: {}", data_url.is_some());
    }

    fn show_notice(&mut self, notice: &str) {
        self.line(&format!("⚠️ {}", notice));
    }
}

/// Text printed for a chat reply outside a session (legacy analyze).
pub fn reply_text(response: Option<&str>, error: Option<&str>) -> String {
    match (error, response) {
        (Some(error), _) => messages::chat_server_error(error),
        (None, Some(response)) => response.to_string(),
        (None, None) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recycle_core::locality::LocalityInfo;
    use recycle_core::location::ResolvedLocation;
    use recycle_core::navigator::{CategoryTile, GuideFailure};
    use recycle_core::render::SourceLink;

    fn output(view: TerminalView<Vec<u8>>) -> String {
        String::from_utf8(view.into_inner()).unwrap()
    }

    fn seocho() -> ResolvedLocation {
        ResolvedLocation {
            city: "서울특별시".to_string(),
            district_key: "서초구".to_string(),
            district_label: "서초구".to_string(),
        }
    }

    #[test]
    fn test_locality_with_tables() {
        let mut view = TerminalView::new(Vec::new());
        let info = LocalityInfo {
            discharge_time: "일~목 오후 8시 ~ 자정".to_string(),
            recyclables: [("캔".to_string(), "매일".to_string())].into_iter().collect(),
            bag_colors: Default::default(),
        };
        view.render_locality(&LocalityPanel::Info {
            location: seocho(),
            info,
        });
        let text = output(view);
        assert!(text.starts_with("📍 서울특별시 서초구\n"));
        assert!(text.contains("배출시간: 일~목 오후 8시 ~ 자정\n"));
        assert!(text.contains("재활용품:\n  캔: 매일\n"));
        assert!(!text.contains("봉투색상"));
    }

    #[test]
    fn test_pending_states_are_silent() {
        let mut view = TerminalView::new(Vec::new());
        view.render_locality(&LocalityPanel::Pending);
        view.render_category_grid(&CategoryGrid::Pending, true);
        view.append_message(&ChatMessage {
            is_loading: true,
            ..ChatMessage::bot(messages::CHAT_LOADING)
        });
        assert!(output(view).is_empty());
    }

    #[test]
    fn test_hidden_grid_and_failure() {
        let mut view = TerminalView::new(Vec::new());
        let tiles = CategoryGrid::Tiles(vec![CategoryTile {
            name: "종이".to_string(),
            icon: "📄".to_string(),
        }]);
        view.render_category_grid(&tiles, false);
        view.render_category_grid(&CategoryGrid::Unavailable(GuideFailure::Malformed), true);
        assert_eq!(output(view), format!("{}\n", messages::GUIDE_MALFORMED));
    }

    #[test]
    fn test_bot_message_with_sources() {
        let mut view = TerminalView::new(Vec::new());
        let reply = ChatMessage {
            sources: vec![SourceLink {
                title: "환경부".to_string(),
                url: "https://me.go.kr".to_string(),
            }],
            ..ChatMessage::bot("종이팩은 따로 모아 배출하세요.")
        };
        view.replace_message(1, &reply);
        assert_eq!(
            output(view),
            "🤖 종이팩은 따로 모아 배출하세요.\n   - 환경부 <https://me.go.kr>\n"
        );
    }

    #[test]
    fn test_reply_text_prefers_error() {
        assert_eq!(reply_text(Some("ok"), Some("boom")), "❌ 오류: boom");
        assert_eq!(reply_text(Some("ok"), None), "ok");
    }
}
