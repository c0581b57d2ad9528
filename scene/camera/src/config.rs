use crate::*;

/// The physical description a [`Camera`] is created from.
///
/// Lengths are in millimeter, `object_x_min` and `object_x_max` are the object's
/// horizontal pixel bounds in the image.
#[derive(Serialize, Deserialize)]
#[derive(Debug, Copy, Clone, PartialEq, Facet)]
pub struct CameraConfig {
  pub focal_length: Millimeter,
  pub dpi: f64,
  pub field_of_view: Millimeter,
  pub object_x_min: f64,
  pub object_x_max: f64,
  pub object_width: Millimeter,
  pub focal_point: Point2d,
}

impl CameraConfig {
  pub fn new(focal_length_mm: f64, dpi: f64, field_of_view_mm: f64) -> Self {
    Self {
      focal_length: Millimeter::by(focal_length_mm),
      dpi,
      field_of_view: Millimeter::by(field_of_view_mm),
      ..Default::default()
    }
  }

  pub fn with_object(mut self, (x_min, x_max): (f64, f64), width_mm: f64) -> Self {
    self.object_x_min = x_min;
    self.object_x_max = x_max;
    self.object_width = Millimeter::by(width_mm);
    self
  }

  pub fn with_focal_point(mut self, focal_point: Point2d) -> Self {
    self.focal_point = focal_point;
    self
  }

  pub fn with_dpi(mut self, dpi: f64) -> Self {
    self.dpi = dpi;
    self
  }
}

impl Default for CameraConfig {
  fn default() -> Self {
    Self {
      focal_length: Millimeter::by(3.97),
      dpi: 640.,
      field_of_view: Millimeter::by(95.),
      object_x_min: 120.,
      object_x_max: 400.,
      object_width: Millimeter::by(48.),
      focal_point: Point2d::zero(),
    }
  }
}

#[test]
fn reflected_like_other_data() {
  fn reflected<'a, T: Facet<'a>>() {}
  reflected::<CameraConfig>();
  reflected::<Millimeter>();
  reflected::<Point2d>();

  let config = CameraConfig::new(4., 320., 90.).with_object((10., 20.), 5.);
  assert_eq!((config.object_x_min, config.object_x_max), (10., 20.));
  assert_eq!(config.object_width, Millimeter::by(5.));
  assert_eq!(config.focal_point, CameraConfig::default().focal_point);
}
