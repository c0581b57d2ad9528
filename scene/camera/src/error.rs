#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum CameraError {
  #[error("dpi must be positive, got {0}")]
  InvalidDpi(f64),
  #[error("field of view must be positive, got {0} mm")]
  InvalidFieldOfView(f64),
  #[error("image width must be positive, got {0}")]
  InvalidImageWidth(f64),
  #[error("a {0}d plane does not exist, containment is only defined in 2d")]
  InvalidDimension(usize),
  #[error("{0}d containment is not implemented")]
  UnsupportedDimension(usize),
  #[error("the view cone has not been built, call build_view_cone_2d first")]
  ViewConeNotBuilt,
}
