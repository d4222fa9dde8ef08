//! In-memory book record store.
//!
//! Books are listed, added, replaced and removed through a synchronous
//! service. Each operation validates its input before mutating the store and
//! reports its outcome through a status-coded response envelope. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]
//! - The envelope-returning facade in [`api`]

pub mod adapters;
pub mod api;
pub mod domain;
pub mod ports;
pub mod services;
