//! HTTP API handlers for ewa-api

pub mod buildinfo;
pub mod health;
pub mod stream;
pub mod submit;

pub use buildinfo::get_build_info;
pub use health::health_routes;
pub use stream::stream_explanation;
pub use submit::submit_image;
