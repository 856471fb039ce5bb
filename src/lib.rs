//! This crate provides the core of a personal day-planner.
//!
//! Free-text descriptions such as "Friday exercise" are turned into dated events by the [`parser`] module, \
//! categorized by an external classification service (see the [`client`] module), \
//! checked against same-day near-duplicates (see the [`similarity`] module), \
//! and stored in an in-memory per-day list (see the [`store`] module).
//!
//! These pieces are tied together by a [`Planner`](planner::Planner), the type a UI layer is expected to hold. \
//! It exposes the intake pipeline (`add_event`), the edit/complete/delete operations, and a category-filtered read view.

pub mod traits;

pub mod category;
pub use category::Category;
pub use category::CategoryFilter;
mod event;
pub use event::Event;
pub mod parser;
pub mod similarity;
pub mod store;
pub use store::EventStore;
pub mod planner;
pub use planner::Planner;
pub use planner::IntakeError;

pub mod client;

pub mod config;
pub mod utils;
