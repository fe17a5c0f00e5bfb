//! Chat log, input row and image attachment controls.

use crate::flows;
use crate::state::{ids, UiState};
use dioxus::prelude::*;
use recycle_core::chat::{ChatMessage, Sender};
use recycle_core::render::SourceLink;

#[derive(Props, Clone, PartialEq)]
struct SourceListProps {
    sources: Vec<SourceLink>,
}

#[component]
fn SourceList(props: SourceListProps) -> Element {
    if props.sources.is_empty() {
        return rsx! {};
    }
    rsx! {
        div {
            style: "margin-top: 6px; font-size: 12px;",
            strong { "출처" }
            ul {
                style: "margin: 2px 0; padding-left: 18px;",
                for source in props.sources {
                    li {
                        a {
                            href: "{source.url}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "{source.title}"
                        }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct ChatBubbleProps {
    message: ChatMessage,
}

#[component]
fn ChatBubble(props: ChatBubbleProps) -> Element {
    let message = props.message;
    let (align, background) = match message.sender {
        Sender::User => ("flex-end", "#C8E6C9"),
        Sender::Bot if message.is_error => ("flex-start", "#FFEBEE"),
        Sender::Bot => ("flex-start", "#F5F5F5"),
    };
    let opacity = if message.is_loading { "0.6" } else { "1" };

    rsx! {
        div {
            style: "display: flex; justify-content: {align}; margin: 6px 0;",
            div {
                style: "max-width: 80%; padding: 8px 12px; border-radius: 10px; background: {background}; opacity: {opacity}; white-space: pre-wrap;",
                if let Some(src) = message.attached_image.clone() {
                    img {
                        src: "{src}",
                        style: "display: block; max-width: 160px; max-height: 160px; border-radius: 6px; margin-bottom: 4px;",
                    }
                }
                "{message.text}"
                SourceList { sources: message.sources.clone() }
            }
        }
    }
}

/// Chat section: message log, text input, send button and image picker.
#[component]
pub fn ChatPanel() -> Element {
    let mut state = use_context::<UiState>();
    let (log, preview, enabled) = {
        let app = state.app.read();
        (
            app.chat.log().to_vec(),
            app.chat.pending_image().map(|image| image.as_str().to_string()),
            app.chat.controls_enabled(),
        )
    };
    let input = (state.chat_input)();
    let notice = (state.notice)();

    rsx! {
        section {
            style: "margin-top: 24px; border: 1px solid #ddd; border-radius: 8px; padding: 12px;",
            div {
                id: ids::CHAT_MESSAGES,
                style: "height: 320px; overflow-y: auto; padding: 4px;",
                for (i, message) in log.into_iter().enumerate() {
                    ChatBubble { key: "{i}", message: message }
                }
            }
            if let Some(src) = preview {
                div {
                    style: "display: flex; align-items: center; gap: 8px; margin-top: 8px;",
                    img {
                        id: ids::IMAGE_PREVIEW,
                        src: "{src}",
                        style: "max-width: 80px; max-height: 80px; border-radius: 6px;",
                    }
                    button {
                        id: ids::REMOVE_IMAGE,
                        disabled: !enabled,
                        style: "padding: 4px 8px; cursor: pointer;",
                        onclick: move |_| flows::remove_image(state),
                        "✕"
                    }
                }
            }
            if let Some(notice) = notice {
                p { style: "margin: 6px 0; color: #C62828; font-size: 13px;", "{notice}" }
            }
            div {
                style: "display: flex; gap: 8px; margin-top: 8px;",
                input {
                    id: ids::IMAGE_INPUT,
                    r#type: "file",
                    accept: "image/*",
                    style: "max-width: 180px;",
                    onchange: move |_| {
                        spawn(flows::attach_image(state));
                    },
                }
                input {
                    id: ids::CHAT_INPUT,
                    r#type: "text",
                    value: "{input}",
                    placeholder: "분리배출 방법을 물어보세요",
                    style: "flex: 1; padding: 8px;",
                    oninput: move |evt: Event<FormData>| {
                        state.chat_input.set(evt.value());
                    },
                    onkeydown: move |evt: Event<KeyboardData>| {
                        if evt.key() == Key::Enter {
                            spawn(flows::send_chat(state));
                        }
                    },
                }
                button {
                    id: ids::CHAT_SEND,
                    disabled: !enabled,
                    style: "padding: 8px 16px; cursor: pointer;",
                    onclick: move |_| {
                        spawn(flows::send_chat(state));
                    },
                    "전송"
                }
            }
        }
    }
}
