use super::Polyline;

/// Closed room-boundary loop.
///
/// Winding is mutable state: the canonicalizer may reverse it in place.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryCurve(Polyline);

impl BoundaryCurve {
    /// Wraps a polyline, returning `None` unless it is closed with at least
    /// three vertices.
    #[must_use]
    pub fn new(polyline: Polyline) -> Option<Self> {
        (polyline.closed && polyline.points.len() >= 3).then_some(Self(polyline))
    }

    #[must_use]
    pub fn polyline(&self) -> &Polyline {
        &self.0
    }

    /// Reverses the winding. Shape is unchanged.
    pub fn reverse(&mut self) {
        self.0.reverse();
    }
}

/// Open centerline marking a door or window cut.
#[derive(Debug, Clone, PartialEq)]
pub struct OpeningSegment(Polyline);

impl OpeningSegment {
    /// Wraps a polyline, returning `None` if it is closed or has fewer than
    /// two vertices.
    #[must_use]
    pub fn new(polyline: Polyline) -> Option<Self> {
        (!polyline.closed && polyline.points.len() >= 2).then_some(Self(polyline))
    }

    #[must_use]
    pub fn polyline(&self) -> &Polyline {
        &self.0
    }
}

/// Closed planar loop used as an extrusion cross-section.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile(Polyline);

impl Profile {
    /// Wraps a closed polyline. Returns `None` for open input.
    #[must_use]
    pub fn new(polyline: Polyline) -> Option<Self> {
        polyline.closed.then_some(Self(polyline))
    }

    #[must_use]
    pub fn polyline(&self) -> &Polyline {
        &self.0
    }

    /// Returns a copy moved vertically by `dz`.
    #[must_use]
    pub fn raised(&self, dz: f64) -> Self {
        Self(self.0.translated(crate::math::Vector3::new(0.0, 0.0, dz)))
    }
}

/// A named room footprint.
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    pub name: String,
    pub boundary: BoundaryCurve,
}

/// The three curve collections a building shell is built from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FloorPlan {
    pub rooms: Vec<Room>,
    pub doors: Vec<OpeningSegment>,
    pub windows: Vec<OpeningSegment>,
}
