use tracing::debug;

use crate::error::{ConstructionError, Result, Stage, Subject};
use crate::kernel::GeometryKernel;

/// Removes door and window cutters from the wall network in one difference.
#[derive(Debug, Clone, Copy)]
pub struct SubtractOpenings {
    tolerance: f64,
}

impl SubtractOpenings {
    #[must_use]
    pub fn new(tolerance: f64) -> Self {
        Self { tolerance }
    }

    /// Executes the subtraction. Without cutters the network is returned as
    /// is.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::Kernel`] if the difference fails and
    /// [`ConstructionError::EmptyWallNetwork`] if nothing of the walls is
    /// left.
    pub fn execute<K: GeometryKernel>(
        &self,
        kernel: &K,
        network: &K::Solid,
        cutters: Vec<K::Solid>,
    ) -> Result<Vec<K::Solid>> {
        if cutters.is_empty() {
            return Ok(vec![network.clone()]);
        }
        let count = cutters.len();
        let walls = kernel
            .boolean_difference(network, cutters, self.tolerance)
            .map_err(|source| ConstructionError::Kernel {
                stage: Stage::OpeningRemoval,
                subject: Subject::WallNetwork,
                source,
            })?;
        debug!(cutters = count, bodies = walls.len(), "removed openings");
        if walls.is_empty() {
            return Err(ConstructionError::EmptyWallNetwork {
                stage: Stage::OpeningRemoval,
            }
            .into());
        }
        Ok(walls)
    }
}
