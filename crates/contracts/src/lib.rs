//! Shared contracts between the status-board backend and its consumers.
//!
//! Nothing in this crate performs I/O; it is the data model the probing
//! pipeline and the HTTP surface agree on.

pub mod dashboards;
pub mod domain;
pub mod enums;
pub mod usecases;
