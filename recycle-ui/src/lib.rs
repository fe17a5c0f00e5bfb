//! Dioxus components and browser bridge for the recycling guide page.
//!
//! This crate provides:
//! - `js_bridge`: geolocation, file reading and scrolling via `js_sys::eval()`
//! - `state`: `UiState` signals wrapping the core `AppState`
//! - `flows`: async handlers for startup, chat send and image attach
//! - `components`: RSX components for the locality panel, guide and chat

pub mod components;
pub mod flows;
pub mod js_bridge;
pub mod state;
