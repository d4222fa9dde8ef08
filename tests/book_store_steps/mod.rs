//! Step definitions for book store behaviour scenarios.

mod then;
mod when;
pub mod world;
