//! Core module - sampling and process response models

pub mod process;
pub mod random;

pub use process::{defect_count, cycle_time, defect_probability, optimal_speed_range, SpeedRange};
pub use random::normal;
