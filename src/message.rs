use serde_json::{Value as JsonValue, json};
use std::fmt;

/// Summary of one finished workout, rendered once at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct InfoMessage {
    training_type: &'static str,
    duration: f64,
    distance: f64,
    speed: f64,
    calories: f64,
    message: String,
}

impl InfoMessage {
    pub fn new(
        training_type: &'static str,
        duration: f64,
        distance: f64,
        speed: f64,
        calories: f64,
    ) -> Self {
        let message = format!(
            "Тип тренировки: {training_type}; \
             Длительность: {duration:.3} ч.; \
             Дистанция: {distance:.3} км; \
             Ср. скорость: {speed:.3} км/ч; \
             Потрачено ккал: {calories:.3}."
        );

        Self {
            training_type,
            duration,
            distance,
            speed,
            calories,
            message,
        }
    }

    pub const fn training_type(&self) -> &'static str {
        self.training_type
    }

    pub const fn duration(&self) -> f64 {
        self.duration
    }

    pub const fn distance(&self) -> f64 {
        self.distance
    }

    pub const fn speed(&self) -> f64 {
        self.speed
    }

    pub const fn calories(&self) -> f64 {
        self.calories
    }

    pub fn get_message(&self) -> &str {
        &self.message
    }

    pub fn to_json(&self) -> JsonValue {
        json!({
            "training_type": self.training_type,
            "duration": self.duration,
            "distance": self.distance,
            "speed": self.speed,
            "calories": self.calories,
            "message": self.message,
        })
    }
}

impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
