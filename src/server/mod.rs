//! Local echo service standing in for the remote order endpoint
//!
//! Exposes:
//! - `POST /api/catcorner` echoing the JSON body
//! - `GET /health` and `GET /healthz`

pub mod builder;
pub mod exposure;

pub use builder::EchoServer;
pub use exposure::rest::{ECHO_PATH, RestExposure};
