use crate::*;

pub const MILLIMETER_PER_INCH: f64 = 25.4;

/// A simple value wrapper that indicate the inner value is a physical length in
/// millimeter. Avoid possible miss conversion between millimeter and pixel.
///
/// The pixel size depends on the sensor's dpi, so there is no implicit conversion,
/// use [`Millimeter::to_pixels`].
#[derive(Serialize, Deserialize)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Facet)]
pub struct Millimeter {
  pub value: f64,
}

impl Millimeter {
  pub fn by(value: f64) -> Self {
    Millimeter { value }
  }
  pub fn to_pixels(&self, dpi: f64) -> f64 {
    (self.value * dpi) / MILLIMETER_PER_INCH
  }
}

#[test]
fn conversion() {
  assert_eq!(Millimeter::by(25.4).to_pixels(640.), 640.);
  assert_eq!(Millimeter::by(0.).to_pixels(640.), 0.);
  assert_eq!(Millimeter::by(12.7).to_pixels(640.), 320.);
}
