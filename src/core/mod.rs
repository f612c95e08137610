// src/core/mod.rs

pub mod de;
pub mod num;
pub mod side;

pub use de::PlayerCode;
pub use side::{PerSide, Side};
