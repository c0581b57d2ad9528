//! Small dimension generic linear algebra used by the view cone geometry.
//!
//! Vector behaviors are split into traits (`Vector`, `VectorSpace`,
//! `InnerProductSpace`) so the concrete types only provide the component wise
//! primitives.

use serde::{Deserialize, Serialize};

mod error;
mod scalar;
mod vec;

pub use error::*;
pub use scalar::*;
pub use vec::*;

/// The plain 2d point type used across the toolkit.
pub type Point2d = Vec2<f64>;
