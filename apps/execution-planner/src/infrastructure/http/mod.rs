//! HTTP/REST API adapter.
//!
//! Inbound adapter exposing the planner over JSON.

mod controller;
mod request;
mod response;

pub use controller::{AppState, create_router};
pub use request::*;
pub use response::*;
