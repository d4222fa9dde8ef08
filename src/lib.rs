//! Bookstore: an in-memory book record store.
//!
//! This crate keeps an ordered collection of book records and exposes list,
//! add, update and delete operations that report their outcome through a
//! status-coded response envelope.
//!
//! # Architecture
//!
//! Bookstore follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`book`]: Book records, validation and the store service

pub mod book;
