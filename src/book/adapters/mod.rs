//! Adapter implementations for book store ports.

pub mod memory;
