//! wgpu render backend for the cube-field demo.
//!
//! Renders a fixed lattice of lit cubes. Each cube is its own indexed draw
//! call with a per-cube position uniform bound at a dynamic offset; there is
//! no instancing or batching.
//!
//! # Invariants
//! - The renderer never mutates camera or input state.
//! - The grid layout is fixed at construction; only the frame globals
//!   change between frames.

mod gpu;
mod grid;
mod shaders;

pub use gpu::{CUBE_UNIFORM_STRIDE, CubeRenderer};
pub use grid::CubeGrid;
