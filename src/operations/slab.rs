use tracing::debug;

use crate::error::{Result, Stage, Subject};
use crate::geometry::Room;
use crate::kernel::GeometryKernel;
use crate::operations::{ExtrudeProfile, OffsetProfile, UnionAll};

/// Floor and ceiling bodies of a building shell.
#[derive(Debug, Clone)]
pub struct Slabs<S> {
    pub floor: Vec<S>,
    pub ceiling: Vec<S>,
}

/// Builds floor and ceiling slabs under and over every room.
///
/// Each room footprint is grown by half the slab thickness. The floor hangs
/// below elevation zero, the ceiling sits on top of the walls. Slabs of
/// separate room groups stay separate bodies.
#[derive(Debug, Clone, Copy)]
pub struct BuildSlabs {
    slab_thickness: f64,
    wall_height: f64,
    curve_tolerance: f64,
    union_tolerance: f64,
}

impl BuildSlabs {
    #[must_use]
    pub fn new(
        slab_thickness: f64,
        wall_height: f64,
        curve_tolerance: f64,
        union_tolerance: f64,
    ) -> Self {
        Self {
            slab_thickness,
            wall_height,
            curve_tolerance,
            union_tolerance,
        }
    }

    /// Executes slab construction for all rooms.
    ///
    /// # Errors
    ///
    /// Returns an error if a footprint offset fails or does not extrude, or
    /// if a slab union fails.
    pub fn execute<K: GeometryKernel>(
        &self,
        kernel: &K,
        rooms: &[Room],
    ) -> Result<Slabs<K::Solid>> {
        let footprint = OffsetProfile::outside(self.slab_thickness / 2.0, self.curve_tolerance);
        let below = ExtrudeProfile::new(-self.slab_thickness);
        let above = ExtrudeProfile::new(self.slab_thickness);

        let mut floors = Vec::with_capacity(rooms.len());
        let mut ceilings = Vec::with_capacity(rooms.len());
        for room in rooms {
            let subject = Subject::Room(room.name.clone());
            let profile = footprint.execute(kernel, room.boundary.polyline(), &subject)?;
            floors.push(below.execute(kernel, profile.as_ref(), &subject)?);

            let raised = profile.map(|p| p.raised(self.wall_height));
            ceilings.push(above.execute(kernel, raised.as_ref(), &subject)?);
            debug!(room = %room.name, "built slabs");
        }

        let floor = UnionAll::new(self.union_tolerance, Stage::SlabUnion, Subject::FloorSlab)
            .execute(kernel, floors)?;
        let ceiling = UnionAll::new(self.union_tolerance, Stage::SlabUnion, Subject::CeilingSlab)
            .execute(kernel, ceilings)?;
        Ok(Slabs { floor, ceiling })
    }
}
