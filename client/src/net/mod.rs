//! Networking modules for the detection HTTP call.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the browser-side `POST /detect`, and `types` defines the
//! wire schema shared with the server relay.

pub mod api;
pub mod types;
