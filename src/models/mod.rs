pub mod item;
pub mod look;
