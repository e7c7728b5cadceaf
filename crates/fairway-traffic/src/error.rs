//! Error types for population generation and kinematics.

/// Errors raised while validating a generation request.
///
/// Placement difficulty is never an error; the generator degrades through
/// its relaxation ladder instead. These variants only cover requests that
/// are wrong before any placement starts.
#[derive(Debug, thiserror::Error)]
pub enum TrafficError {
    /// The minimum-spacing threshold is negative or non-finite.
    #[error("minimum spacing {value} is not a usable distance")]
    InvalidSpacing {
        /// The rejected value in degrees.
        value: f64,
    },

    /// The per-slot placement attempt budget is zero.
    #[error("placement attempt budget must be at least 1")]
    ZeroAttemptBudget,

    /// More submarines were requested than the fixed roster can crew.
    #[error("requested {requested} submarines but the roster has {available}")]
    SubmarineRosterExceeded {
        /// Requested boat count.
        requested: u32,
        /// Boats available in the roster.
        available: u32,
    },

    /// A share parameter lies outside the closed unit interval.
    #[error("share {value} is outside [0, 1]")]
    ShareOutOfRange {
        /// The rejected value.
        value: f64,
    },
}

/// Errors raised by the kinematics step.
#[derive(Debug, thiserror::Error)]
pub enum StepError {
    /// The scaled elapsed time is negative or non-finite.
    #[error("elapsed seconds {value} is not a usable duration")]
    InvalidElapsed {
        /// The rejected value in seconds.
        value: f64,
    },
}
