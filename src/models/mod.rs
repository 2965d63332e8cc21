//! Data models matching the backend wire contract.
//!
//! Field names follow the backend JSON (camelCase) exactly; ids are the
//! backend's numeric identifiers.

mod auth;
mod block;
mod branch;
mod exam;
mod floor;
mod invigilator;
mod program;
mod room;
mod section;
mod student;
mod subject;
mod year;

pub use auth::*;
pub use block::*;
pub use branch::*;
pub use exam::*;
pub use floor::*;
pub use invigilator::*;
pub use program::*;
pub use room::*;
pub use section::*;
pub use student::*;
pub use subject::*;
pub use year::*;

/// Backend entity identifier.
pub type EntityId = i64;
