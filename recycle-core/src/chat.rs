//! Chat session: display log, pending image and one-turn-at-a-time sends.
//!
//! A send is split in two so that no state borrow is held while the
//! request is in flight:
//!
//! 1. [`ChatSession::begin_send`] appends the user and loading bubbles and
//!    returns a [`ChatTurn`] carrying the request body.
//! 2. [`ChatSession::finish_send`] replaces the loading bubble with the
//!    outcome and releases the controls.
//!
//! The server never sees the log; each request carries only the current
//! message, image and location label.

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::error::ClientError;
use crate::image::ImageDataUrl;
use crate::messages;
use crate::render::{source_links, Source, SourceLink};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Sender {
    User,
    Bot,
}

/// One bubble in the chat log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
    pub attached_image: Option<String>,
    pub is_loading: bool,
    pub is_error: bool,
    pub sources: Vec<SourceLink>,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>, attached_image: Option<String>) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
            attached_image,
            is_loading: false,
            is_error: false,
            sources: Vec::new(),
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Bot,
            text: text.into(),
            attached_image: None,
            is_loading: false,
            is_error: false,
            sources: Vec::new(),
        }
    }

    fn loading() -> Self {
        Self {
            is_loading: true,
            ..Self::bot(messages::CHAT_LOADING)
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Self {
            is_error: true,
            ..Self::bot(text)
        }
    }
}

/// Body of `POST /chatbot-unified-chat`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub image_data_url: Option<String>,
    pub location: String,
}

/// Response of the chat endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub sources: Vec<Source>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Why a send was refused. Refused sends leave the log untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendRejected {
    /// Neither text nor image.
    Empty,
    /// A previous turn has not resolved yet.
    InFlight,
}

/// A turn that has been started and awaits its reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatTurn {
    id: u64,
    loading_index: usize,
    pub request: ChatRequest,
}

impl ChatTurn {
    pub fn has_image(&self) -> bool {
        self.request.image_data_url.is_some()
    }

    /// Position of the loading bubble this turn will replace.
    pub fn loading_index(&self) -> usize {
        self.loading_index
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatSession {
    log: Vec<ChatMessage>,
    pending_image: Option<ImageDataUrl>,
    in_flight: Option<u64>,
    next_turn: u64,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&self) -> &[ChatMessage] {
        &self.log
    }

    pub fn pending_image(&self) -> Option<&ImageDataUrl> {
        self.pending_image.as_ref()
    }

    /// Send and remove-image controls are usable.
    pub fn controls_enabled(&self) -> bool {
        self.in_flight.is_none()
    }

    /// Stage an image for the next send, replacing any previous one.
    pub fn attach_image(&mut self, image: ImageDataUrl) {
        info!(
            "Staged {} image ({} bytes) for next chat turn",
            image.media_type(),
            image.byte_len()
        );
        self.pending_image = Some(image);
    }

    /// Drop the staged image. Refused while a turn is in flight.
    pub fn remove_image(&mut self) -> bool {
        if !self.controls_enabled() {
            return false;
        }
        self.pending_image.take().is_some()
    }

    /// Start a turn with `message` and the pending image.
    pub fn begin_send(&mut self, message: &str, location_label: &str) -> Result<ChatTurn, SendRejected> {
        if self.in_flight.is_some() {
            warn!("Chat send ignored: previous turn still in flight");
            return Err(SendRejected::InFlight);
        }
        let message = message.trim();
        let image = self.pending_image.as_ref().map(|img| img.as_str().to_string());
        if message.is_empty() && image.is_none() {
            return Err(SendRejected::Empty);
        }

        let bubble_text = if message.is_empty() {
            messages::IMAGE_ONLY_PLACEHOLDER
        } else {
            message
        };
        self.log.push(ChatMessage::user(bubble_text, image.clone()));
        self.log.push(ChatMessage::loading());

        let id = self.next_turn;
        self.next_turn += 1;
        self.in_flight = Some(id);

        Ok(ChatTurn {
            id,
            loading_index: self.log.len() - 1,
            request: ChatRequest {
                message: message.to_string(),
                image_data_url: image,
                location: location_label.to_string(),
            },
        })
    }

    /// Resolve a turn. Returns the index of the replaced bubble.
    pub fn finish_send(&mut self, turn: ChatTurn, outcome: Result<ChatReply, ClientError>) -> usize {
        let bubble = match outcome {
            Ok(ChatReply {
                error: Some(error), ..
            }) => {
                warn!("Chat endpoint reported an error: {}", error);
                ChatMessage::error(messages::chat_server_error(&error))
            }
            Ok(reply) => {
                let mut bubble = ChatMessage::bot(reply.response.unwrap_or_default());
                // No citations on image turns.
                if !turn.has_image() {
                    bubble.sources = source_links(&reply.sources);
                }
                bubble
            }
            Err(e) => {
                warn!("Chat request failed: {}", e);
                ChatMessage::error(messages::CHAT_NETWORK_ERROR)
            }
        };

        if let Some(slot) = self.log.get_mut(turn.loading_index) {
            *slot = bubble;
        }
        if self.in_flight == Some(turn.id) {
            self.in_flight = None;
        }
        if let Some(sent) = turn.request.image_data_url.as_deref() {
            if self.pending_image.as_ref().map(ImageDataUrl::as_str) == Some(sent) {
                self.pending_image = None;
            }
        }
        turn.loading_index
    }
}
