//! Routes incoming push-notification payloads to in-app actions:
//! decode the flat textual payload, classify it by its `type` field, and
//! drive the navigation, display, and account collaborators.

pub mod api;
pub mod clients;
pub mod codec;
pub mod config;
pub mod models;
pub mod router;
pub mod utils;
