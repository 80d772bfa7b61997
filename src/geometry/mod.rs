pub mod curves;
pub mod plane;
pub mod polyline;

pub use curves::{BoundaryCurve, FloorPlan, OpeningSegment, Profile, Room};
pub use plane::Plane;
pub use polyline::{CurveOrientation, Polyline};
