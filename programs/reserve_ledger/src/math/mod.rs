use super::*;

pub mod safe_math;
pub mod utils;
pub mod payload;


pub use safe_math::*;
pub use utils::*;
pub use payload::*;
