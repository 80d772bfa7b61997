//! Building-shell construction from 2D floor plans.
//!
//! A [`FloorPlan`](geometry::FloorPlan) of room boundary loops and door and
//! window markers becomes wall, floor and ceiling solids through
//! [`BuildShell`](operations::BuildShell). Geometry primitives go through the
//! [`GeometryKernel`](kernel::GeometryKernel) seam; [`PrismKernel`](kernel::PrismKernel)
//! is the built-in implementation.

pub mod config;
pub mod error;
pub mod geometry;
pub mod kernel;
pub mod math;
pub mod operations;
pub mod plan;
pub mod tessellation;

pub use error::{Error, Result};
