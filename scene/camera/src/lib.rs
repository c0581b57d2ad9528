//! A pinhole camera seen from above: a focal point, a virtual image plane at
//! `-focal_length` and the view cone spanned by an object's projection on it.

use facet::Facet;
use pinhole_algebra::*;
use pinhole_geometry::*;
use serde::{Deserialize, Serialize};

mod camera;
mod config;
mod error;
mod unit;

pub use camera::*;
pub use config::*;
pub use error::*;
pub use unit::*;
