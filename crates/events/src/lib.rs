//! Typed window/input events and per-kind dispatch.
//!
//! # Invariants
//! - Consumers see `Event` values, never raw windowing-library events.
//! - Dispatch is a plain match on the variant; handlers are keyed by
//!   event kind through the `EventHandler` trait methods.

mod event;

pub use event::{Event, EventHandler, EventKind, Key};
