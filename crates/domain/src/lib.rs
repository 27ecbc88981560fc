//! Domain layer for giso
//!
//! Geographic value objects shared by the service integrations: latitude-first
//! coordinates, polygon rings and travel profiles. This layer performs no I/O.

pub mod errors;
pub mod value_objects;

pub use errors::DomainError;
pub use value_objects::*;
