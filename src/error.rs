use std::fmt;

use thiserror::Error;

/// Top-level error type for the planshell construction core.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Kernel(#[from] KernelError),

    #[error(transparent)]
    Construction(#[from] ConstructionError),

    #[error(transparent)]
    Plan(#[from] PlanError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Tessellation(#[from] TessellationError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Errors raised by geometry-kernel primitives.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum KernelError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("kernel operation failed: {0}")]
    Failed(String),
}

/// The piece of the plan a construction step was working on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Subject {
    Room(String),
    Door(usize),
    Window(usize),
    WallNetwork,
    FloorSlab,
    CeilingSlab,
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Room(name) => write!(f, "room '{name}'"),
            Self::Door(index) => write!(f, "door #{index}"),
            Self::Window(index) => write!(f, "window #{index}"),
            Self::WallNetwork => f.write_str("wall network"),
            Self::FloorSlab => f.write_str("floor slab"),
            Self::CeilingSlab => f.write_str("ceiling slab"),
        }
    }
}

/// Pipeline stage in which a fatal error was raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Canonicalize,
    Offset,
    Join,
    Extrude,
    Hollow,
    WallUnion,
    OpeningRemoval,
    SlabUnion,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Canonicalize => "winding canonicalization",
            Self::Offset => "offset",
            Self::Join => "join",
            Self::Extrude => "extrusion",
            Self::Hollow => "wall hollowing",
            Self::WallUnion => "wall union",
            Self::OpeningRemoval => "opening removal",
            Self::SlabUnion => "slab union",
        };
        f.write_str(name)
    }
}

/// Fatal errors that abort construction of a building shell.
#[derive(Debug, Error)]
pub enum ConstructionError {
    #[error(
        "winding of {subject} cannot be determined \
         (open, non-planar or self-intersecting boundary)"
    )]
    UndeterminedWinding { subject: Subject },

    #[error("{subject}: profile did not extrude into a solid")]
    ExtrusionFailed { subject: Subject },

    #[error("{subject}: offset joined into {loops} loops instead of one closed profile")]
    FragmentedOffset { subject: Subject, loops: usize },

    #[error("{stage} failed for {subject}: {source}")]
    Kernel {
        stage: Stage,
        subject: Subject,
        #[source]
        source: KernelError,
    },

    #[error(
        "walls are not connected: union produced {components} separate bodies \
         (gap in the plan)"
    )]
    DisconnectedWalls { components: usize },

    #[error("{stage} left no wall body")]
    EmptyWallNetwork { stage: Stage },
}

/// Errors raised while reading a plan description.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("malformed plan JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid WKT '{wkt}': {reason}")]
    Wkt { wkt: String, reason: String },

    #[error("{subject}: {reason}")]
    InvalidCurve { subject: Subject, reason: String },
}

/// Errors in construction parameters.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{name} must be finite and positive, got {value}")]
    NotPositive { name: &'static str, value: f64 },

    #[error("window top at {top} exceeds wall height {wall_height}")]
    WindowAboveWall { top: f64, wall_height: f64 },
}

/// Errors related to tessellation.
#[derive(Debug, Error)]
pub enum TessellationError {
    #[error("tessellation failed: {0}")]
    Failed(String),
}

/// Convenience type alias for results using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
