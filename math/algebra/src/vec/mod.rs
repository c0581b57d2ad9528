mod dimension;
mod normalized;
mod vec2;

pub use dimension::*;
pub use normalized::*;
pub use vec2::*;
