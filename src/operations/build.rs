//! The building-shell pipeline.

use tracing::{debug, info};

use crate::config::BuildConfig;
use crate::error::{Result, Stage, Subject};
use crate::geometry::{FloorPlan, OpeningSegment, Plane, Room};
use crate::kernel::GeometryKernel;
use crate::operations::boolean::single_body;
use crate::operations::{
    BuildSlabs, CanonicalizeWinding, ExtrudeProfile, Hollow, OffsetProfile, OpeningCutter,
    Outcome, SubtractOpenings, UnionAll,
};

/// Walls with openings removed, plus floor and ceiling slabs.
#[derive(Debug, Clone)]
pub struct BuildingShell<S> {
    /// The wall network. Openings may split it into several bodies.
    pub walls: Vec<S>,
    pub floor: Vec<S>,
    pub ceiling: Vec<S>,
    /// Doors and windows whose markers did not yield a cutter.
    pub skipped_openings: Vec<Subject>,
}

/// Builds a [`BuildingShell`] from a floor plan.
///
/// Steps, in order: canonicalize room winding, build one hollow wall per
/// room, union them into a single wall network, build door and window
/// cutters, subtract the cutters, then build the slabs. Either a complete
/// shell is returned or the first fatal error.
#[derive(Debug, Clone, Default)]
pub struct BuildShell {
    config: BuildConfig,
}

impl BuildShell {
    #[must_use]
    pub fn new(config: BuildConfig) -> Self {
        Self { config }
    }

    /// Executes the pipeline.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`](crate::error::ConfigError) for invalid
    /// parameters and [`ConstructionError`](crate::error::ConstructionError)
    /// for the first fatal construction failure, including a wall network
    /// that is not a single connected body.
    pub fn execute<K: GeometryKernel>(
        &self,
        kernel: &K,
        plan: FloorPlan,
    ) -> Result<BuildingShell<K::Solid>> {
        self.config.validate()?;
        let tol = self.config.tolerances;
        let FloorPlan {
            mut rooms,
            doors,
            windows,
        } = plan;
        debug!(
            rooms = rooms.len(),
            doors = doors.len(),
            windows = windows.len(),
            "building shell"
        );

        CanonicalizeWinding::new(Plane::world_xy(), tol.curve).execute(&mut rooms)?;

        let hollow_walls = self.hollow_walls(kernel, &rooms)?;
        let bodies = UnionAll::new(tol.union, Stage::WallUnion, Subject::WallNetwork)
            .execute(kernel, hollow_walls)?;
        let network = single_body(bodies, Stage::WallUnion)?;

        let mut skipped_openings = Vec::new();
        let door = OpeningCutter::door(&self.config.door, tol.curve);
        let window = OpeningCutter::window(&self.config.window, tol.curve);
        let mut cutters = collect_cutters(
            kernel,
            &door,
            &doors,
            Subject::Door,
            &mut skipped_openings,
        )?;
        cutters.extend(collect_cutters(
            kernel,
            &window,
            &windows,
            Subject::Window,
            &mut skipped_openings,
        )?);
        let cutter_count = cutters.len();
        let walls = SubtractOpenings::new(tol.boolean).execute(kernel, &network, cutters)?;

        let slabs = BuildSlabs::new(
            self.config.slab_thickness,
            self.config.wall_height,
            tol.curve,
            tol.union,
        )
        .execute(kernel, &rooms)?;

        info!(
            rooms = rooms.len(),
            cutters = cutter_count,
            skipped = skipped_openings.len(),
            wall_bodies = walls.len(),
            floor_bodies = slabs.floor.len(),
            ceiling_bodies = slabs.ceiling.len(),
            "building shell complete"
        );
        Ok(BuildingShell {
            walls,
            floor: slabs.floor,
            ceiling: slabs.ceiling,
            skipped_openings,
        })
    }

    /// One hollow wall per room: the outer wythe minus the inner wythe.
    fn hollow_walls<K: GeometryKernel>(
        &self,
        kernel: &K,
        rooms: &[Room],
    ) -> Result<Vec<K::Solid>> {
        let tol = self.config.tolerances;
        let half = self.config.wall_thickness / 2.0;
        let outer_offset = OffsetProfile::outside(half, tol.curve);
        let inner_offset = OffsetProfile::inside(half, tol.curve);
        let extrude = ExtrudeProfile::new(self.config.wall_height);
        let hollow = Hollow::new(tol.boolean);

        let mut walls = Vec::with_capacity(rooms.len());
        for room in rooms {
            let subject = Subject::Room(room.name.clone());
            let boundary = room.boundary.polyline();
            let outer = outer_offset.execute(kernel, boundary, &subject)?;
            let inner = inner_offset.execute(kernel, boundary, &subject)?;
            let outer = extrude.execute(kernel, outer.as_ref(), &subject)?;
            let inner = extrude.execute(kernel, inner.as_ref(), &subject)?;
            match hollow.execute(kernel, &outer, inner, &subject)? {
                Outcome::Value(wall) => walls.push(wall),
                Outcome::Empty => debug!(room = %room.name, "hollowing left no wall"),
            }
        }
        Ok(walls)
    }
}

/// Builds cutters for every marker, recording the ones that were skipped.
fn collect_cutters<K: GeometryKernel>(
    kernel: &K,
    cutter: &OpeningCutter,
    markers: &[OpeningSegment],
    subject: fn(usize) -> Subject,
    skipped: &mut Vec<Subject>,
) -> Result<Vec<K::Solid>> {
    let mut solids = Vec::with_capacity(markers.len());
    for (index, marker) in markers.iter().enumerate() {
        let subject = subject(index);
        match cutter.execute(kernel, marker, &subject)? {
            Outcome::Value(solid) => solids.push(solid),
            Outcome::Empty => skipped.push(subject),
        }
    }
    Ok(solids)
}
