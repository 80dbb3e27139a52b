//! Marketing Coach: turns a short business description into a customer profile,
//! pain points, desires, an offer ladder and a 30-day content plan, plus a
//! markdown export of all of it.
//!
//! The core is two pure functions, [`generate`] and [`compose`]. The HTTP layer in
//! [`routes`] only validates forms and calls them.

pub mod config;
pub mod errors;
pub mod generation;
pub mod models;
pub mod render;
pub mod routes;
pub mod state;

pub use generation::generate;
pub use models::{GeneratedBundle, InputProfile, ProfileForm, ValidationError};
pub use render::compose;
