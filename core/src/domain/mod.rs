pub mod analysis;
pub mod camera;
pub mod common;
pub mod food_input;
