use tracing::debug;

use crate::error::{ConstructionError, Result, Stage, Subject};
use crate::kernel::GeometryKernel;
use crate::operations::Outcome;

/// Subtracts an inner wythe from an outer one, leaving a hollow wall shell.
#[derive(Debug, Clone, Copy)]
pub struct Hollow {
    tolerance: f64,
}

impl Hollow {
    #[must_use]
    pub fn new(tolerance: f64) -> Self {
        Self { tolerance }
    }

    /// Executes the difference and keeps the first resulting body.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::Kernel`] if the boolean difference fails.
    pub fn execute<K: GeometryKernel>(
        &self,
        kernel: &K,
        outer: &K::Solid,
        inner: K::Solid,
        subject: &Subject,
    ) -> Result<Outcome<K::Solid>> {
        let bodies = kernel
            .boolean_difference(outer, vec![inner], self.tolerance)
            .map_err(|source| ConstructionError::Kernel {
                stage: Stage::Hollow,
                subject: subject.clone(),
                source,
            })?;
        if bodies.len() > 1 {
            debug!(%subject, bodies = bodies.len(), "hollow wall split, keeping first body");
        }
        Ok(bodies.into_iter().next().into())
    }
}
