//! **cellpath-core**: geometry and weight matrices.
//!
//! This crate provides the value types shared by the rest of the *cellpath*
//! workspace: cell coordinates, grid bounds and the immutable weight grid the
//! path search runs on.

pub mod geom;
pub mod grid;

pub use geom::{Bounds, Point, manhattan};
pub use grid::{Grid, Weight};
