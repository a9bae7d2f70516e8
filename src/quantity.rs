#[macro_use]
pub mod macros;

pub mod carbon;
pub mod cost;
pub mod energy;
pub mod fuel;
pub mod length;
pub mod percent;
pub mod power;
pub mod time;
pub mod water;
