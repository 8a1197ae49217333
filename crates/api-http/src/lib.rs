//! HTTP API Layer
//!
//! JSON over HTTP for the job resource: router, handlers and the mapping
//! from application errors to status codes.

pub mod error;
pub mod handler;
pub mod router;
pub mod server;
pub mod types;

pub use router::{build_router, AppState};
pub use server::{HttpServer, HttpServerConfig};
