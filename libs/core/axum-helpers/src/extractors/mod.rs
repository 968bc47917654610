//! Custom extractors for Axum handlers.

pub mod id_path;
pub mod json_body;

pub use id_path::IdPath;
pub use json_body::{INVALID_JSON_BODY, JsonBody};
