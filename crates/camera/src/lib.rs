//! Free-fly camera: mouse look, Euler movement integration, matrices.
//!
//! # Invariants
//! - Pitch stays in [-π/2, π/2] after every look sample.
//! - The first look sample after creation changes no angle.
//! - The projection aspect ratio is exactly width/height.

mod fly;

pub use fly::{FAR_PLANE, FlyCamera, NEAR_PLANE};
