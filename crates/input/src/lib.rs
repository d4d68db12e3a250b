//! Key-state tracking and input-to-intent mapping.
//!
//! # Invariants
//! - Each movement axis resolves to an intent in {-1, 0, +1}.
//! - Opposing keys held together cancel to 0.
//! - Intent is derived from the live key state every frame, never cached
//!   across frames.

mod intent;

pub use intent::{Bindings, KeyState, MoveIntent, axis_intent};
