use tracing::debug;

use crate::error::{ConstructionError, Result, Stage, Subject};
use crate::kernel::GeometryKernel;

/// Unions a list of solids into one body per connected component.
#[derive(Debug, Clone)]
pub struct UnionAll {
    tolerance: f64,
    stage: Stage,
    subject: Subject,
}

impl UnionAll {
    /// Creates a union reported under `stage` and `subject` on failure.
    #[must_use]
    pub fn new(tolerance: f64, stage: Stage, subject: Subject) -> Self {
        Self {
            tolerance,
            stage,
            subject,
        }
    }

    /// Executes the union. An empty input yields no bodies.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::Kernel`] if the boolean union fails.
    pub fn execute<K: GeometryKernel>(
        &self,
        kernel: &K,
        solids: Vec<K::Solid>,
    ) -> Result<Vec<K::Solid>> {
        if solids.is_empty() {
            return Ok(Vec::new());
        }
        let inputs = solids.len();
        let bodies = kernel
            .boolean_union(solids, self.tolerance)
            .map_err(|source| ConstructionError::Kernel {
                stage: self.stage,
                subject: self.subject.clone(),
                source,
            })?;
        debug!(subject = %self.subject, inputs, bodies = bodies.len(), "union");
        Ok(bodies)
    }
}

/// Requires a wall union to have produced exactly one body.
///
/// # Errors
///
/// Returns [`ConstructionError::EmptyWallNetwork`] for no bodies and
/// [`ConstructionError::DisconnectedWalls`] for more than one.
pub fn single_body<S>(mut bodies: Vec<S>, stage: Stage) -> Result<S> {
    let components = bodies.len();
    match bodies.pop() {
        Some(body) if components == 1 => Ok(body),
        Some(_) => Err(ConstructionError::DisconnectedWalls { components }.into()),
        None => Err(ConstructionError::EmptyWallNetwork { stage }.into()),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::geometry::Polyline;
    use crate::kernel::{PrismKernel, PrismSolid};
    use crate::math::Point3;

    fn block(x0: f64, x1: f64) -> PrismSolid {
        let rect = Polyline::new(
            vec![
                Point3::new(x0, 0.0, 0.0),
                Point3::new(x1, 0.0, 0.0),
                Point3::new(x1, 1.0, 0.0),
                Point3::new(x0, 1.0, 0.0),
            ],
            true,
        );
        PrismKernel.extrude(&rect, 1.0, true).unwrap().unwrap()
    }

    fn wall_union() -> UnionAll {
        UnionAll::new(0.01, Stage::WallUnion, Subject::WallNetwork)
    }

    #[test]
    fn overlapping_solids_merge() {
        let bodies = wall_union()
            .execute(&PrismKernel, vec![block(0.0, 2.0), block(1.0, 3.0), block(2.5, 4.0)])
            .unwrap();
        assert_eq!(bodies.len(), 1);
        assert!(single_body(bodies, Stage::WallUnion).is_ok());
    }

    #[test]
    fn empty_input_is_not_an_error() {
        assert!(wall_union().execute(&PrismKernel, Vec::new()).unwrap().is_empty());
    }

    #[test]
    fn separate_bodies_are_disconnected_walls() {
        let bodies = wall_union()
            .execute(&PrismKernel, vec![block(0.0, 1.0), block(5.0, 6.0)])
            .unwrap();
        let err = single_body(bodies, Stage::WallUnion).unwrap_err();
        assert!(matches!(
            err,
            Error::Construction(ConstructionError::DisconnectedWalls { components: 2 })
        ));
    }

    #[test]
    fn no_bodies_is_an_empty_wall_network() {
        let err = single_body(Vec::<PrismSolid>::new(), Stage::WallUnion).unwrap_err();
        assert!(matches!(
            err,
            Error::Construction(ConstructionError::EmptyWallNetwork {
                stage: Stage::WallUnion
            })
        ));
    }
}
