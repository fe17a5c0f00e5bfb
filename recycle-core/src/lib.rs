//! Core types and state machines for the smart recycling guide client.
//!
//! This crate provides:
//! - `location`: reverse-geocoder records and the pure location resolver
//! - `guide`, `locality`, `recycle_info`: typed backend records
//! - `navigator`: category → item → detail view-state machine
//! - `chat`: chat log, pending image and one-turn-at-a-time sends
//! - `state`, `view`, `controller`: application state, the rendering
//!   capability trait and the async flow sequencing
//! - `client` (feature `api`): `reqwest` implementation of [`backend::Backend`]

pub mod backend;
pub mod chat;
pub mod config;
pub mod controller;
pub mod error;
pub mod guide;
pub mod image;
pub mod locality;
pub mod location;
pub mod messages;
pub mod navigator;
pub mod recycle_info;
pub mod render;
pub mod state;
pub mod view;

#[cfg(feature = "api")]
pub mod client;
