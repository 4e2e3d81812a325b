use thiserror::Error;

/// Defines the result type used throughout the crate
pub type Result<T> = std::result::Result<T, PnmError>;

/// Defines the errors reported by the network builders, models and algorithms
///
/// All errors are detected at the boundary of the component that first observes them.
/// Nothing is retried or clamped silently: a degenerate but valid result (e.g., a flat
/// saturation curve) is returned as `Ok`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PnmError {
    /// Invalid or missing structural parameter (bad division count, unknown method, empty inlet set)
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Non-positive derived size of a pore or throat
    #[error("geometry error at {element} {id}: {message}")]
    Geometry {
        element: Element,
        id: usize,
        message: String,
    },

    /// Non-positive physical input to a conductance or pressure formula
    #[error("physics error at {element} {id}: {message}")]
    Physics {
        element: Element,
        id: usize,
        message: String,
    },

    /// Network that cannot support an invasion (too few pores, isolated inlets, bad throats)
    #[error("topology error: {0}")]
    Topology(String),
}

/// Identifies the kind of network element carrying an error
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Element {
    Pore,
    Throat,
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Element::Pore => write!(f, "pore"),
            Element::Throat => write!(f, "throat"),
        }
    }
}

impl PnmError {
    /// Returns a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        PnmError::Configuration(message.into())
    }

    /// Returns a new topology error
    pub fn topology(message: impl Into<String>) -> Self {
        PnmError::Topology(message.into())
    }

    /// Returns a new geometry error for a pore
    pub fn pore_geometry(id: usize, message: impl Into<String>) -> Self {
        PnmError::Geometry {
            element: Element::Pore,
            id,
            message: message.into(),
        }
    }

    /// Returns a new geometry error for a throat
    pub fn throat_geometry(id: usize, message: impl Into<String>) -> Self {
        PnmError::Geometry {
            element: Element::Throat,
            id,
            message: message.into(),
        }
    }

    /// Returns a new physics error for a throat
    pub fn throat_physics(id: usize, message: impl Into<String>) -> Self {
        PnmError::Physics {
            element: Element::Throat,
            id,
            message: message.into(),
        }
    }

    /// Returns the id of the offending element, if any
    pub fn element_id(&self) -> Option<usize> {
        match self {
            PnmError::Geometry { id, .. } => Some(*id),
            PnmError::Physics { id, .. } => Some(*id),
            _ => None,
        }
    }

    /// Indicates a configuration error
    pub fn is_configuration(&self) -> bool {
        matches!(self, PnmError::Configuration(..))
    }

    /// Indicates a topology error
    pub fn is_topology(&self) -> bool {
        matches!(self, PnmError::Topology(..))
    }
}

impl From<serde_json::Error> for PnmError {
    fn from(err: serde_json::Error) -> Self {
        PnmError::Configuration(err.to_string())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
