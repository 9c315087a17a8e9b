//! Command routing core - coercion, load modes, transport commands, router
//!
//! These modules hold all request semantics, independent of the CLI and HTTP
//! front ends and of the socket transport.

pub mod coerce;
pub mod control;
pub mod error;
pub mod load_mode;
pub mod router;

// Re-exports for convenience
pub use coerce::{PropertyValue, coerce};
pub use control::ControlCommand;
pub use error::CtlError;
pub use load_mode::{LoadKind, LoadMode};
pub use router::{Outcome, Reply, Router};
