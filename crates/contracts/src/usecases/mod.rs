pub mod common;
pub mod u101_add_box;
pub mod u102_add_can;
