//! Distance, speed and calorie formulas for each workout kind.

use crate::error::{Result, WorkoutError};
use crate::message::InfoMessage;
use crate::types::{Running, SportsWalking, Swimming, Workout};
use crate::utils::floor_div;

/// Default step length in meters.
pub const LEN_STEP: f64 = 0.65;
/// Stroke length in meters used for swimming.
pub const SWIM_LEN_STEP: f64 = 1.38;
pub const M_IN_KM: f64 = 1000.0;
pub const MIN_IN_H: f64 = 60.0;

const RUN_CALORIE_SPEED_MULTIPLIER: f64 = 18.0;
const RUN_CALORIE_SPEED_SHIFT: f64 = 20.0;

const WALK_CALORIE_WEIGHT_MULTIPLIER: f64 = 0.035;
const WALK_CALORIE_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

const SWIM_CALORIE_SPEED_SHIFT: f64 = 1.1;
const SWIM_CALORIE_WEIGHT_MULTIPLIER: f64 = 2.0;

/// Metrics shared by every workout kind.
///
/// `distance_km` and `mean_speed_kmh` have step-based defaults. There is no
/// generic calorie formula: the default `calories_kcal` fails with
/// [`WorkoutError::UnsupportedOperation`], so every kind overrides it.
pub trait Training {
    /// Display label used in reports.
    fn training_type(&self) -> &'static str;

    /// Steps or strokes.
    fn action(&self) -> u32;

    /// Hours, always positive.
    fn duration(&self) -> f64;

    /// Kilograms.
    fn weight(&self) -> f64;

    /// Meters covered per action.
    fn len_step(&self) -> f64 {
        LEN_STEP
    }

    fn distance_km(&self) -> f64 {
        f64::from(self.action()) * self.len_step() / M_IN_KM
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.duration()
    }

    fn calories_kcal(&self) -> Result<f64> {
        Err(WorkoutError::UnsupportedOperation {
            workout: self.training_type(),
            operation: "calories_kcal",
        })
    }

    fn show_training_info(&self) -> Result<InfoMessage> {
        Ok(InfoMessage::new(
            self.training_type(),
            self.duration(),
            self.distance_km(),
            self.mean_speed_kmh(),
            self.calories_kcal()?,
        ))
    }
}

impl Training for Running {
    fn training_type(&self) -> &'static str {
        Self::NAME
    }

    fn action(&self) -> u32 {
        Self::action(self)
    }

    fn duration(&self) -> f64 {
        Self::duration(self)
    }

    fn weight(&self) -> f64 {
        Self::weight(self)
    }

    fn calories_kcal(&self) -> Result<f64> {
        Ok(
            (RUN_CALORIE_SPEED_MULTIPLIER * self.mean_speed_kmh() - RUN_CALORIE_SPEED_SHIFT)
                * Self::weight(self)
                / M_IN_KM
                * Self::duration(self)
                * MIN_IN_H,
        )
    }
}

impl Training for SportsWalking {
    fn training_type(&self) -> &'static str {
        Self::NAME
    }

    fn action(&self) -> u32 {
        Self::action(self)
    }

    fn duration(&self) -> f64 {
        Self::duration(self)
    }

    fn weight(&self) -> f64 {
        Self::weight(self)
    }

    /// The squared speed is floor-divided by height, so for everyday
    /// speeds the second term is zero.
    fn calories_kcal(&self) -> Result<f64> {
        let speed = self.mean_speed_kmh();
        let weight = Self::weight(self);
        Ok((WALK_CALORIE_WEIGHT_MULTIPLIER * weight
            + floor_div(speed * speed, self.height())
                * WALK_CALORIE_SPEED_HEIGHT_MULTIPLIER
                * weight)
            * Self::duration(self)
            * MIN_IN_H)
    }
}

impl Training for Swimming {
    fn training_type(&self) -> &'static str {
        Self::NAME
    }

    fn action(&self) -> u32 {
        Self::action(self)
    }

    fn duration(&self) -> f64 {
        Self::duration(self)
    }

    fn weight(&self) -> f64 {
        Self::weight(self)
    }

    fn len_step(&self) -> f64 {
        SWIM_LEN_STEP
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.length_pool() * self.count_pool() / M_IN_KM / Self::duration(self)
    }

    fn calories_kcal(&self) -> Result<f64> {
        Ok((self.mean_speed_kmh() + SWIM_CALORIE_SPEED_SHIFT)
            * SWIM_CALORIE_WEIGHT_MULTIPLIER
            * Self::weight(self))
    }
}

macro_rules! each_variant {
    ($workout:expr, $w:ident => $body:expr) => {
        match $workout {
            Workout::Swimming($w) => $body,
            Workout::Running($w) => $body,
            Workout::SportsWalking($w) => $body,
        }
    };
}

impl Training for Workout {
    fn training_type(&self) -> &'static str {
        each_variant!(self, w => w.training_type())
    }

    fn action(&self) -> u32 {
        each_variant!(self, w => Training::action(w))
    }

    fn duration(&self) -> f64 {
        each_variant!(self, w => Training::duration(w))
    }

    fn weight(&self) -> f64 {
        each_variant!(self, w => Training::weight(w))
    }

    fn len_step(&self) -> f64 {
        each_variant!(self, w => w.len_step())
    }

    fn distance_km(&self) -> f64 {
        each_variant!(self, w => w.distance_km())
    }

    fn mean_speed_kmh(&self) -> f64 {
        each_variant!(self, w => w.mean_speed_kmh())
    }

    fn calories_kcal(&self) -> Result<f64> {
        each_variant!(self, w => w.calories_kcal())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * b.abs().max(1.0)
    }

    struct Bare;

    impl Training for Bare {
        fn training_type(&self) -> &'static str {
            "Bare"
        }
        fn action(&self) -> u32 {
            1000
        }
        fn duration(&self) -> f64 {
            0.5
        }
        fn weight(&self) -> f64 {
            70.0
        }
    }

    #[test]
    fn base_defaults_and_missing_calories() {
        let bare = Bare;
        assert!(close(bare.distance_km(), 0.65));
        assert!(close(bare.mean_speed_kmh(), 1.3));
        assert_eq!(
            bare.calories_kcal(),
            Err(WorkoutError::UnsupportedOperation {
                workout: "Bare",
                operation: "calories_kcal",
            })
        );
        assert!(bare.show_training_info().is_err());
    }

    #[test]
    fn running_metrics() {
        let r = Running::new(15000, 1.0, 75.0).unwrap();
        assert!(close(r.distance_km(), 9.75));
        assert!(close(r.mean_speed_kmh(), 9.75));
        assert!(close(r.calories_kcal().unwrap(), 699.75));
    }

    #[test]
    fn running_calories_follow_formula() {
        for (action, duration, weight) in [(1000, 0.25, 60.0), (24000, 2.5, 90.5), (7, 0.1, 45.0)] {
            let r = Running::new(action, duration, weight).unwrap();
            let speed = r.mean_speed_kmh();
            let expected = (18.0 * speed - 20.0) * weight / 1000.0 * duration * 60.0;
            assert!(close(r.calories_kcal().unwrap(), expected));
        }
    }

    #[test]
    fn swimming_uses_pool_for_speed_and_stroke_for_distance() {
        let s = Swimming::new(720, 1.0, 80.0, 25.0, 40.0).unwrap();
        assert_eq!(s.len_step(), SWIM_LEN_STEP);
        assert!(close(s.distance_km(), 0.9936));
        assert!(close(s.mean_speed_kmh(), 1.0));
        assert!(close(s.calories_kcal().unwrap(), 336.0));

        let s = Swimming::new(1000, 2.0, 70.0, 50.0, 30.0).unwrap();
        assert!(close(s.mean_speed_kmh(), 50.0 * 30.0 / 1000.0 / 2.0));
    }

    #[test]
    fn walking_floor_divides_speed_by_height() {
        let w = SportsWalking::new(9000, 1.0, 75.0, 180.0).unwrap();
        assert!(close(w.mean_speed_kmh(), 5.85));
        // 5.85^2 / 180 < 1, so only the weight term remains
        assert!(close(w.calories_kcal().unwrap(), 157.5));

        // 2 h at 30 km/h: 900 // 100 == 9
        let w = SportsWalking::new(92_308, 2.0, 80.0, 100.0).unwrap();
        let speed = w.mean_speed_kmh();
        let expected = (0.035 * 80.0 + (speed * speed / 100.0).floor() * 0.029 * 80.0) * 2.0 * 60.0;
        assert!(close(w.calories_kcal().unwrap(), expected));
        assert!(w.calories_kcal().unwrap() > 0.035 * 80.0 * 2.0 * 60.0);
    }

    #[test]
    fn workout_enum_delegates() {
        let w = Workout::from(Swimming::new(720, 1.0, 80.0, 25.0, 40.0).unwrap());
        assert_eq!(w.training_type(), "Swimming");
        assert_eq!(w.len_step(), SWIM_LEN_STEP);
        assert!(close(w.mean_speed_kmh(), 1.0));

        let w = Workout::from(Running::new(15000, 1.0, 75.0).unwrap());
        assert_eq!(w.training_type(), "Running");
        assert_eq!(Training::action(&w), 15000);
    }
}
