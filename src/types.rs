use crate::error::{Result, WorkoutError};

/// Raw sensor data for one running session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Running {
    action: u32,
    duration: f64,
    weight: f64,
}

/// Raw sensor data for one sports-walking session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SportsWalking {
    action: u32,
    duration: f64,
    weight: f64,
    height: f64,
}

/// Raw sensor data for one pool swimming session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swimming {
    action: u32,
    duration: f64,
    weight: f64,
    length_pool: f64,
    count_pool: f64,
}

/// One of the supported workout kinds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Workout {
    Swimming(Swimming),
    Running(Running),
    SportsWalking(SportsWalking),
}

impl Running {
    pub const NAME: &'static str = "Running";

    /// `action` is the step count, `duration` is in hours, `weight` in kg.
    pub fn new(action: u32, duration: f64, weight: f64) -> Result<Self> {
        Ok(Self {
            action,
            duration: check_duration(duration)?,
            weight: check_finite(Self::NAME, "weight", weight)?,
        })
    }

    /// Build from `(action, duration, weight)`.
    pub fn from_fields(data: &[f64]) -> Result<Self> {
        let &[action, duration, weight] = data else {
            return Err(arity_error(Self::NAME, 3, data.len()));
        };
        Self::new(action_count(Self::NAME, action)?, duration, weight)
    }

    pub const fn action(&self) -> u32 {
        self.action
    }

    pub const fn duration(&self) -> f64 {
        self.duration
    }

    pub const fn weight(&self) -> f64 {
        self.weight
    }
}

impl SportsWalking {
    pub const NAME: &'static str = "SportsWalking";

    /// `height` is in centimeters and must be positive.
    pub fn new(action: u32, duration: f64, weight: f64, height: f64) -> Result<Self> {
        let height = check_finite(Self::NAME, "height", height)?;
        if height <= 0.0 {
            return Err(WorkoutError::construction(
                Self::NAME,
                format!("height must be positive, got {height}"),
            ));
        }

        Ok(Self {
            action,
            duration: check_duration(duration)?,
            weight: check_finite(Self::NAME, "weight", weight)?,
            height,
        })
    }

    /// Build from `(action, duration, weight, height)`.
    pub fn from_fields(data: &[f64]) -> Result<Self> {
        let &[action, duration, weight, height] = data else {
            return Err(arity_error(Self::NAME, 4, data.len()));
        };
        Self::new(action_count(Self::NAME, action)?, duration, weight, height)
    }

    pub const fn action(&self) -> u32 {
        self.action
    }

    pub const fn duration(&self) -> f64 {
        self.duration
    }

    pub const fn weight(&self) -> f64 {
        self.weight
    }

    pub const fn height(&self) -> f64 {
        self.height
    }
}

impl Swimming {
    pub const NAME: &'static str = "Swimming";

    /// `action` is the stroke count, `length_pool` is in meters and
    /// `count_pool` is the number of pool lengths swum.
    pub fn new(
        action: u32,
        duration: f64,
        weight: f64,
        length_pool: f64,
        count_pool: f64,
    ) -> Result<Self> {
        Ok(Self {
            action,
            duration: check_duration(duration)?,
            weight: check_finite(Self::NAME, "weight", weight)?,
            length_pool: check_finite(Self::NAME, "length_pool", length_pool)?,
            count_pool: check_finite(Self::NAME, "count_pool", count_pool)?,
        })
    }

    /// Build from `(action, duration, weight, length_pool, count_pool)`.
    pub fn from_fields(data: &[f64]) -> Result<Self> {
        let &[action, duration, weight, length_pool, count_pool] = data else {
            return Err(arity_error(Self::NAME, 5, data.len()));
        };
        Self::new(
            action_count(Self::NAME, action)?,
            duration,
            weight,
            length_pool,
            count_pool,
        )
    }

    pub const fn action(&self) -> u32 {
        self.action
    }

    pub const fn duration(&self) -> f64 {
        self.duration
    }

    pub const fn weight(&self) -> f64 {
        self.weight
    }

    pub const fn length_pool(&self) -> f64 {
        self.length_pool
    }

    pub const fn count_pool(&self) -> f64 {
        self.count_pool
    }
}

impl From<Swimming> for Workout {
    fn from(w: Swimming) -> Self {
        Self::Swimming(w)
    }
}

impl From<Running> for Workout {
    fn from(w: Running) -> Self {
        Self::Running(w)
    }
}

impl From<SportsWalking> for Workout {
    fn from(w: SportsWalking) -> Self {
        Self::SportsWalking(w)
    }
}

fn arity_error(workout: &'static str, expected: usize, got: usize) -> WorkoutError {
    WorkoutError::construction(workout, format!("expected {expected} values, got {got}"))
}

fn check_duration(duration: f64) -> Result<f64> {
    if duration.is_finite() && duration > 0.0 {
        Ok(duration)
    } else {
        Err(WorkoutError::InvalidDuration(duration))
    }
}

fn check_finite(workout: &'static str, field: &str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(WorkoutError::construction(
            workout,
            format!("{field} must be a finite number, got {value}"),
        ))
    }
}

/// Steps and strokes arrive as floats from the sensor package; only whole,
/// non-negative counts are accepted.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::float_cmp)]
fn action_count(workout: &'static str, value: f64) -> Result<u32> {
    if value.is_finite()
        && value >= 0.0
        && value.fract() == 0.0
        && value <= f64::from(u32::MAX)
    {
        Ok(value as u32)
    } else {
        Err(WorkoutError::construction(
            workout,
            format!("action must be a non-negative whole number, got {value}"),
        ))
    }
}
