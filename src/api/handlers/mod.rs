//! API HTTP handlers.

mod profile;
mod service;

pub use profile::{check_handler, image_handler, profile_handler};
pub use service::{health_handler, home_handler, status_handler};
