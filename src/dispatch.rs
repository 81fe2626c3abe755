//! Maps sensor package codes to workout records.

use crate::error::{Result, WorkoutError};
use crate::types::{Running, SportsWalking, Swimming, Workout};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Packages processed when none are given on the command line.
pub const SAMPLE_PACKAGES: [(&str, &[f64]); 3] = [
    ("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
    ("RUN", &[15000.0, 1.0, 75.0]),
    ("WLK", &[9000.0, 1.0, 75.0, 180.0]),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkoutCode {
    Swimming,
    Running,
    SportsWalking,
}

static CODES: Lazy<HashMap<&'static str, WorkoutCode>> = Lazy::new(|| {
    HashMap::from([
        ("SWM", WorkoutCode::Swimming),
        ("RUN", WorkoutCode::Running),
        ("WLK", WorkoutCode::SportsWalking),
    ])
});

impl WorkoutCode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Swimming => "SWM",
            Self::Running => "RUN",
            Self::SportsWalking => "WLK",
        }
    }

    /// Display label of the record this code builds.
    pub const fn training_type(self) -> &'static str {
        match self {
            Self::Swimming => Swimming::NAME,
            Self::Running => Running::NAME,
            Self::SportsWalking => SportsWalking::NAME,
        }
    }

    pub fn build(self, data: &[f64]) -> Result<Workout> {
        Ok(match self {
            Self::Swimming => Swimming::from_fields(data)?.into(),
            Self::Running => Running::from_fields(data)?.into(),
            Self::SportsWalking => SportsWalking::from_fields(data)?.into(),
        })
    }
}

impl FromStr for WorkoutCode {
    type Err = WorkoutError;

    fn from_str(s: &str) -> Result<Self> {
        CODES
            .get(s)
            .copied()
            .ok_or_else(|| WorkoutError::UnknownWorkoutType(s.to_string()))
    }
}

impl fmt::Display for WorkoutCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build the record for `workout_type` from its positional sensor values.
pub fn read_package(workout_type: &str, data: &[f64]) -> Result<Workout> {
    workout_type.parse::<WorkoutCode>()?.build(data)
}

/// A code plus its raw values, written as `CODE:v1,v2,...`.
#[derive(Debug, Clone, PartialEq)]
pub struct Package {
    pub code: WorkoutCode,
    pub data: Vec<f64>,
}

impl Package {
    pub fn read(&self) -> Result<Workout> {
        self.code.build(&self.data)
    }

    pub fn samples() -> Vec<Self> {
        SAMPLE_PACKAGES
            .iter()
            .filter_map(|(code, data)| {
                let code = CODES.get(code).copied()?;
                Some(Self {
                    code,
                    data: data.to_vec(),
                })
            })
            .collect()
    }
}

impl FromStr for Package {
    type Err = WorkoutError;

    fn from_str(s: &str) -> Result<Self> {
        let Some((code, values)) = s.split_once(':') else {
            return Err(WorkoutError::construction(
                "workout",
                format!("expected CODE:v1,v2,... got {s:?}"),
            ));
        };

        let code: WorkoutCode = code.trim().parse()?;
        let values = values.trim();
        if values.is_empty() {
            return Ok(Self {
                code,
                data: Vec::new(),
            });
        }

        let data = values
            .split(',')
            .map(|v| {
                let v = v.trim();
                v.parse::<f64>().map_err(|_| {
                    WorkoutError::construction(
                        code.training_type(),
                        format!("{v:?} is not a number"),
                    )
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { code, data })
    }
}

impl fmt::Display for Package {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.code)?;
        for (i, v) in self.data.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}
