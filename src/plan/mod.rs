//! Reading floor plans from their JSON description.
//!
//! ```json
//! {
//!   "rooms": [
//!     { "room_name": "living", "geom": "POLYGON ((0 0, 5000 0, 5000 4000, 0 4000, 0 0))" }
//!   ],
//!   "doors":   [{ "geom": "LINESTRING (2000 0, 2900 0)" }],
//!   "windows": [{ "geom": "LINESTRING (5000 1000, 5000 2500)" }]
//! }
//! ```
//!
//! Every list is optional. `POINT` entries carry no curve and are ignored.

pub mod wkt;

use serde::Deserialize;
use tracing::debug;

use crate::error::{PlanError, Result, Subject};
use crate::geometry::{BoundaryCurve, FloorPlan, OpeningSegment, Polyline, Room};

pub use wkt::Geometry;

#[derive(Debug, Deserialize)]
struct PlanDocument {
    #[serde(default)]
    rooms: Vec<RoomEntry>,
    #[serde(default)]
    doors: Vec<OpeningEntry>,
    #[serde(default)]
    windows: Vec<OpeningEntry>,
}

#[derive(Debug, Deserialize)]
struct RoomEntry {
    room_name: String,
    geom: String,
}

#[derive(Debug, Deserialize)]
struct OpeningEntry {
    geom: String,
}

/// Parses a plan document into a [`FloorPlan`].
///
/// Rooms keep their input order. A room name given twice replaces the
/// earlier boundary in place. Door and window subjects in errors use the
/// entry's position in its input list.
///
/// # Errors
///
/// Returns [`PlanError::Json`] for malformed JSON, [`PlanError::Wkt`] for
/// malformed geometry, and [`PlanError::InvalidCurve`] when a room is not a
/// polygon or an opening is not a linestring.
pub fn parse_plan_json(json: &str) -> Result<FloorPlan> {
    let document: PlanDocument = serde_json::from_str(json).map_err(PlanError::Json)?;

    let mut plan = FloorPlan::default();
    for entry in document.rooms {
        let subject = Subject::Room(entry.room_name.clone());
        let Some(polyline) = curve(&entry.geom)? else {
            debug!(%subject, "ignoring point geometry");
            continue;
        };
        let boundary = BoundaryCurve::new(polyline)
            .ok_or_else(|| invalid(subject, "room boundary must be a polygon"))?;
        match plan.rooms.iter_mut().find(|r| r.name == entry.room_name) {
            Some(existing) => existing.boundary = boundary,
            None => plan.rooms.push(Room {
                name: entry.room_name,
                boundary,
            }),
        }
    }
    plan.doors = openings(document.doors, Subject::Door)?;
    plan.windows = openings(document.windows, Subject::Window)?;

    debug!(
        rooms = plan.rooms.len(),
        doors = plan.doors.len(),
        windows = plan.windows.len(),
        "parsed plan"
    );
    Ok(plan)
}

fn openings(
    entries: Vec<OpeningEntry>,
    subject: fn(usize) -> Subject,
) -> Result<Vec<OpeningSegment>> {
    let mut segments = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        let Some(polyline) = curve(&entry.geom)? else {
            continue;
        };
        let segment = OpeningSegment::new(polyline)
            .ok_or_else(|| invalid(subject(index), "opening marker must be a linestring"))?;
        segments.push(segment);
    }
    Ok(segments)
}

/// The curve of a WKT geometry, or `None` for a point.
fn curve(wkt: &str) -> std::result::Result<Option<Polyline>, PlanError> {
    Ok(match wkt::parse(wkt)? {
        Geometry::Polygon(points) => Some(Polyline::new(points, true)),
        Geometry::LineString(points) => Some(Polyline::new(points, false)),
        Geometry::Point(_) => None,
    })
}

fn invalid(subject: Subject, reason: &str) -> PlanError {
    PlanError::InvalidCurve {
        subject,
        reason: reason.to_owned(),
    }
}
