//! Construction steps of the building-shell pipeline.
//!
//! Each step is a small value type configured with its parameters and run
//! with [`execute`](build::BuildShell::execute) against a
//! [`GeometryKernel`](crate::kernel::GeometryKernel). Steps that may
//! legitimately produce nothing return an [`Outcome`]; fatal failures are
//! errors.

pub mod boolean;
pub mod build;
pub mod offset;
pub mod opening;
pub mod orientation;
pub mod shaping;
pub mod slab;

pub use boolean::{Hollow, SubtractOpenings, UnionAll};
pub use build::{BuildShell, BuildingShell};
pub use offset::{OffsetProfile, OffsetSide};
pub use opening::OpeningCutter;
pub use orientation::CanonicalizeWinding;
pub use shaping::ExtrudeProfile;
pub use slab::{BuildSlabs, Slabs};

/// Result of a step that may legitimately produce nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome<T> {
    Value(T),
    /// The step produced nothing. Callers decide whether that is fatal.
    Empty,
}

impl<T> Outcome<T> {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    #[must_use]
    pub fn as_ref(&self) -> Outcome<&T> {
        match self {
            Self::Value(value) => Outcome::Value(value),
            Self::Empty => Outcome::Empty,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Self::Value(value) => Outcome::Value(f(value)),
            Self::Empty => Outcome::Empty,
        }
    }

    #[must_use]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Empty => None,
        }
    }
}

impl<T> From<Option<T>> for Outcome<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Empty, Self::Value)
    }
}
