use facet::Facet;
use pinhole_algebra::*;
use serde::{Deserialize, Serialize};

mod half_plane;
mod view_cone;

pub use half_plane::*;
pub use view_cone::*;

pub trait ContainAble<T: Scalar, Target, const D: usize> {
  fn contains(&self, target: &Target) -> bool;
}
