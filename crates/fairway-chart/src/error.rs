//! Error types for chart construction.

/// Errors raised while validating chart tables.
///
/// Every variant is a static-data defect caught once at construction time;
/// chart queries are infallible after construction succeeds.
#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    /// A rectangle was declared with south >= north or west >= east.
    #[error("record '{record}' has inverted bounds")]
    InvertedBounds {
        /// Name of the offending record.
        record: String,
    },

    /// A probability lies outside the closed unit interval.
    #[error("record '{record}' has probability {value} outside [0, 1]")]
    ProbabilityOutOfRange {
        /// Name of the offending record.
        record: String,
        /// The rejected value.
        value: f64,
    },

    /// A land mass was declared with a negative or non-finite shoreline
    /// band width.
    #[error("land mass '{record}' has unusable edge band {value}")]
    UnusableEdgeBand {
        /// Name of the offending record.
        record: String,
        /// The rejected value.
        value: f64,
    },

    /// A narrow passage was declared with a non-positive or non-finite
    /// half-width.
    #[error("passage '{record}' has unusable half-width {value}")]
    UnusableHalfWidth {
        /// Name of the offending record.
        record: String,
        /// The rejected value.
        value: f64,
    },

    /// A narrow passage centerline falls outside its own bounds.
    #[error("passage '{record}' has centerline {value} outside its bounds")]
    CenterlineOutsideBounds {
        /// Name of the offending record.
        record: String,
        /// The rejected centerline coordinate.
        value: f64,
    },

    /// The weighted traffic lane table is empty.
    #[error("traffic lane table is empty")]
    EmptyLaneTable,

    /// A traffic lane carries zero weight and could never be selected.
    #[error("lane '{lane}' has zero weight")]
    ZeroLaneWeight {
        /// Name of the offending lane.
        lane: String,
    },

    /// The lane weights overflow the selection accumulator.
    #[error("traffic lane weights overflow u32")]
    LaneWeightOverflow,

    /// No safe zone was declared; fallback placement needs at least one.
    #[error("safe zone table is empty")]
    EmptySafeZones,

    /// The safe centroid lies outside the operating envelope.
    #[error("safe centroid ({lat}, {lon}) lies outside the operating envelope")]
    CentroidOutsideEnvelope {
        /// Centroid latitude in degrees.
        lat: f64,
        /// Centroid longitude in degrees.
        lon: f64,
    },
}
