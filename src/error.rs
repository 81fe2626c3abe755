/// Everything that can go wrong while turning a raw package into a report.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WorkoutError {
    #[error("Unknown workout type: {0:?} (expected one of SWM, RUN, WLK)")]
    UnknownWorkoutType(String),

    #[error("Cannot build {workout} record: {reason}")]
    ConstructionError {
        workout: &'static str,
        reason: String,
    },

    #[error("{operation} is not supported by {workout}")]
    UnsupportedOperation {
        workout: &'static str,
        operation: &'static str,
    },

    #[error("Invalid duration {0} h: must be a positive number of hours")]
    InvalidDuration(f64),
}

impl WorkoutError {
    pub(crate) fn construction(workout: &'static str, reason: impl Into<String>) -> Self {
        Self::ConstructionError {
            workout,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, WorkoutError>;
