#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # nvc-entities
//!
//! Reusable, agnostic domain entities for nvimcraft.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod id;
pub mod plugin;
pub mod resource;
pub mod tag;
pub mod time;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
