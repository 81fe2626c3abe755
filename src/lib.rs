pub mod cli;
pub mod dispatch;
pub mod error;
pub mod message;
pub mod training;
pub mod types;
pub mod utils;

pub use dispatch::{Package, WorkoutCode, read_package};
pub use error::WorkoutError;
pub use message::InfoMessage;
pub use training::Training;
pub use types::{Running, SportsWalking, Swimming, Workout};
