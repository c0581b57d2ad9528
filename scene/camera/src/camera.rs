use crate::*;

/// A pinhole camera reduced to the horizontal plane.
///
/// All lengths are stored in pixel units, converted once from millimeter at
/// construction with the camera's dpi.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
  dpi: f64,
  focal_length: f64,
  field_of_view: f64,
  retina_width: f64,
  focal_point: Point2d,
  view_cone: Option<ViewCone2<f64>>,
}

impl Camera {
  /// Creates a camera from its physical description.
  ///
  /// `x_min` and `x_max` are accepted for signature compatibility and ignored, the
  /// object bounds are given to [`Camera::build_view_cone_2d`].
  pub fn new(
    focal_length_mm: f64,
    dpi: f64,
    field_of_view_mm: f64,
    _x_min: f64,
    _x_max: f64,
    object_width_mm: f64,
    focal_point: Point2d,
  ) -> Result<Self, CameraError> {
    if !(dpi > 0.) {
      return Err(CameraError::InvalidDpi(dpi));
    }
    if !(field_of_view_mm > 0.) {
      return Err(CameraError::InvalidFieldOfView(field_of_view_mm));
    }

    let focal_length = Millimeter::by(focal_length_mm).to_pixels(dpi);
    let field_of_view = Millimeter::by(field_of_view_mm).to_pixels(dpi);
    // kept as is: the object width enters in pixel while the usual pinhole relation
    // would divide the sensor width by the subject distance
    let retina_width =
      (focal_length * Millimeter::by(object_width_mm).to_pixels(dpi)) / field_of_view;

    Ok(Self {
      dpi,
      focal_length,
      field_of_view,
      retina_width,
      focal_point,
      view_cone: None,
    })
  }

  pub fn from_config(config: &CameraConfig) -> Result<Self, CameraError> {
    let (x_min, x_max) = (config.object_x_min, config.object_x_max);
    Self::new(
      config.focal_length.value,
      config.dpi,
      config.field_of_view.value,
      x_min,
      x_max,
      config.object_width.value,
      config.focal_point,
    )
  }

  /// Converts a millimeter length into pixel at this camera's dpi.
  pub fn convert_to_px(&self, value: f64) -> f64 {
    Millimeter::by(value).to_pixels(self.dpi)
  }

  pub fn dpi(&self) -> f64 {
    self.dpi
  }

  pub fn focal_length(&self) -> f64 {
    self.focal_length
  }

  pub fn field_of_view(&self) -> f64 {
    self.field_of_view
  }

  pub fn retina_width(&self) -> f64 {
    self.retina_width
  }

  pub fn focal_point(&self) -> Point2d {
    self.focal_point
  }

  pub fn view_cone(&self) -> Option<&ViewCone2<f64>> {
    self.view_cone.as_ref()
  }

  /// The left boundary ray of the view cone, zero before the cone is built.
  pub fn u_vector(&self) -> Point2d {
    self.view_cone.map_or(Point2d::zero(), |cone| cone.left)
  }

  /// The right boundary ray of the view cone, zero before the cone is built.
  pub fn v_vector(&self) -> Point2d {
    self.view_cone.map_or(Point2d::zero(), |cone| cone.right)
  }

  /// Builds the view cone of an object covering the pixel columns `x_min..x_max`
  /// of an image `image_width` pixels wide.
  ///
  /// The bounds are mapped onto the retina plane at `-focal_length`, the cone
  /// rays go from those two points through the focal point. Replaces any
  /// previously built cone.
  pub fn build_view_cone_2d(
    &mut self,
    x_min: f64,
    x_max: f64,
    image_width: f64,
  ) -> Result<&ViewCone2<f64>, CameraError> {
    if !(image_width > 0.) {
      return Err(CameraError::InvalidImageWidth(image_width));
    }

    let retina_point = |x: f64| {
      vec2(
        -self.retina_width / 2. + (x * self.retina_width) / image_width,
        -self.focal_length,
      )
    };
    let cone = ViewCone2::from_apex_and_image_points(
      self.focal_point,
      retina_point(x_min),
      retina_point(x_max),
    );

    log::debug!(
      "view cone for columns {x_min}..{x_max}: u = {}, v = {}",
      cone.left,
      cone.right
    );
    if !(x_min < x_max) {
      log::warn!("view cone columns {x_min}..{x_max} are reversed, containment is flipped");
    } else if cone.is_reversed() {
      log::warn!("view cone rays for columns {x_min}..{x_max} are parallel, nothing is in view");
    }

    Ok(&*self.view_cone.insert(cone))
  }

  /// Tests if `point` lies strictly inside the view cone.
  ///
  /// Only `dimensions == 2` is supported. The point is tested as given against the
  /// half planes of the two boundary rays, so the result only depends on its
  /// direction from the origin.
  pub fn is_within_view(&self, point: &Point2d, dimensions: usize) -> Result<bool, CameraError> {
    match dimensions {
      2 => self.is_within_view_2d(point),
      3 => Err(CameraError::UnsupportedDimension(dimensions)),
      _ => Err(CameraError::InvalidDimension(dimensions)),
    }
  }

  pub fn is_within_view_2d(&self, point: &Point2d) -> Result<bool, CameraError> {
    let cone = self.view_cone.as_ref().ok_or(CameraError::ViewConeNotBuilt)?;
    Ok(cone.contains(point))
  }
}

#[cfg(test)]
mod test {
  use super::*;

  fn reference_camera() -> Camera {
    Camera::new(3.97, 640., 95., 120., 400., 48., Point2d::zero()).unwrap()
  }

  fn built_camera() -> Camera {
    let mut camera = reference_camera();
    camera.build_view_cone_2d(120., 400., 640.).unwrap();
    camera
  }

  fn near(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
  }

  #[test]
  fn pixel_conversion() {
    let camera = reference_camera();
    assert_eq!(camera.dpi(), 640.);
    assert!(near(camera.focal_length(), 100.03149606299213));
    assert!(near(camera.field_of_view(), 2393.700787401575));
    assert!(near(camera.retina_width(), 50.54222958972234));
    assert_eq!(camera.convert_to_px(25.4), 640.);
    assert_eq!(camera.focal_length(), camera.convert_to_px(3.97));
  }

  #[test]
  fn ignores_object_bounds_at_construction() {
    let other = Camera::new(3.97, 640., 95., 0., 1., 48., Point2d::zero()).unwrap();
    assert_eq!(other, reference_camera());
  }

  #[test]
  fn from_config() {
    let camera = Camera::from_config(&CameraConfig::default()).unwrap();
    assert_eq!(camera, reference_camera());

    let config = CameraConfig::new(3.97, 640., 95.)
      .with_object((120., 400.), 48.)
      .with_focal_point(vec2(1., 2.));
    let camera = Camera::from_config(&config).unwrap();
    assert_eq!(camera.focal_point(), vec2(1., 2.));
    assert_eq!(camera.retina_width(), reference_camera().retina_width());
  }

  #[test]
  fn rejects_invalid_parameters() {
    let origin = Point2d::zero();
    assert_eq!(
      Camera::new(3.97, 0., 95., 120., 400., 48., origin),
      Err(CameraError::InvalidDpi(0.))
    );
    assert_eq!(
      Camera::new(3.97, -640., 95., 120., 400., 48., origin),
      Err(CameraError::InvalidDpi(-640.))
    );
    assert!(Camera::new(3.97, f64::NAN, 95., 120., 400., 48., origin).is_err());
    assert_eq!(
      Camera::new(3.97, 640., 0., 120., 400., 48., origin),
      Err(CameraError::InvalidFieldOfView(0.))
    );
    assert_eq!(
      Camera::from_config(&CameraConfig::default().with_dpi(0.)),
      Err(CameraError::InvalidDpi(0.))
    );

    let mut camera = reference_camera();
    assert_eq!(
      camera.build_view_cone_2d(120., 400., 0.),
      Err(CameraError::InvalidImageWidth(0.))
    );
    assert!(camera.view_cone().is_none());
  }

  #[test]
  fn cone_is_required_before_containment() {
    let camera = reference_camera();
    assert_eq!(camera.u_vector(), Point2d::zero());
    assert_eq!(camera.v_vector(), Point2d::zero());
    assert_eq!(
      camera.is_within_view(&vec2(0., 100.), 2),
      Err(CameraError::ViewConeNotBuilt)
    );
  }

  #[test]
  fn boundary_rays() {
    let camera = built_camera();
    let (u, v) = (camera.u_vector(), camera.v_vector());
    assert!(near(u.x, 15.79444674678823));
    assert!(near(u.y, 100.03149606299213));
    assert!(near(v.x, -6.317778698715291));
    assert!(near(v.y, 100.03149606299213));
    assert!(!camera.view_cone().unwrap().is_reversed());
  }

  #[test]
  fn boundary_rays_start_at_focal_point() {
    let focal_point = vec2(10., -5.);
    let mut shifted = Camera::new(3.97, 640., 95., 120., 400., 48., focal_point).unwrap();
    shifted.build_view_cone_2d(120., 400., 640.).unwrap();
    let camera = built_camera();
    assert_eq!(shifted.u_vector(), focal_point + camera.u_vector());
    assert_eq!(shifted.v_vector(), focal_point + camera.v_vector());
  }

  #[test]
  fn within_view() {
    let camera = built_camera();
    let middle = (camera.u_vector() + camera.v_vector()) * 0.5;
    assert_eq!(camera.is_within_view(&middle, 2), Ok(true));
    assert_eq!(camera.is_within_view(&-middle, 2), Ok(false));

    for (point, inside) in [
      (vec2(0., 100.), true),
      (vec2(10., 200.), true),
      (vec2(-10., 200.), true),
      (vec2(0., 1.), true),
      (vec2(0., -100.), false),
      (vec2(-20., 100.), false),
      (vec2(320., 240.), false),
      (Point2d::zero(), false),
    ] {
      assert_eq!(camera.is_within_view_2d(&point), Ok(inside), "{point}");
    }
  }

  #[test]
  fn boundary_is_excluded() {
    let camera = built_camera();
    assert_eq!(camera.is_within_view_2d(&camera.u_vector()), Ok(false));
    assert_eq!(camera.is_within_view_2d(&camera.v_vector()), Ok(false));
  }

  #[test]
  fn positive_scaling_keeps_containment() {
    let camera = built_camera();
    let points = [
      vec2(0., 100.),
      vec2(3., 50.),
      vec2(-20., 100.),
      vec2(320., 240.),
      vec2(0., -100.),
      vec2(-4., 130.),
    ];
    for point in points {
      let expected = camera.is_within_view_2d(&point).unwrap();
      for k in [0.01, 0.5, 2., 10., 1e4] {
        assert_eq!(camera.is_within_view_2d(&point.scale(k)), Ok(expected));
      }
    }
  }

  #[test]
  fn image_grid() {
    let camera = built_camera();
    let mut visible = Vec::new();
    for y in (0..=480).step_by(48) {
      for x in (0..=640).step_by(64) {
        let point = vec2(x as f64, y as f64);
        if camera.is_within_view_2d(&point).unwrap() {
          visible.push((x, y));
        }
      }
    }
    let mut expected: Vec<_> = (1..=10).map(|i| (0, i * 48)).collect();
    expected.insert(expected.len() - 1, (64, 432));
    expected.push((64, 480));
    assert_eq!(visible, expected);
  }

  #[test]
  fn reversed_bounds_flip_the_cone() {
    let mut camera = reference_camera();
    let cone = *camera.build_view_cone_2d(400., 120., 640.).unwrap();
    assert!(cone.is_reversed());
    assert_eq!(camera.is_within_view_2d(&vec2(0., 100.)), Ok(false));
    assert_eq!(camera.is_within_view_2d(&vec2(0., -100.)), Ok(true));

    // rebuilding replaces the previous cone
    camera.build_view_cone_2d(120., 400., 640.).unwrap();
    assert_eq!(camera, built_camera());
  }

  #[test]
  fn zero_width_object_sees_nothing() {
    let mut camera = Camera::new(3.97, 640., 95., 120., 400., 0., Point2d::zero()).unwrap();
    assert_eq!(camera.retina_width(), 0.);
    let cone = *camera.build_view_cone_2d(120., 400., 640.).unwrap();
    assert!(cone.is_reversed());
    assert_eq!(cone.left, cone.right);
    for point in [vec2(0., 100.), vec2(1., 100.), vec2(-1., 100.), vec2(0., -100.)] {
      assert_eq!(camera.is_within_view_2d(&point), Ok(false));
    }
  }

  #[test]
  fn dimensions() {
    let camera = built_camera();
    let point = vec2(0., 100.);
    assert_eq!(camera.is_within_view(&point, 2), Ok(true));
    assert_eq!(
      camera.is_within_view(&point, 3),
      Err(CameraError::UnsupportedDimension(3))
    );
    assert_eq!(
      camera.is_within_view(&point, 5),
      Err(CameraError::InvalidDimension(5))
    );
    assert_eq!(
      camera.is_within_view(&point, 0),
      Err(CameraError::InvalidDimension(0))
    );
  }
}
