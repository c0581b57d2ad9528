use crate::*;

/// The angular region between two boundary rays that both start at the origin.
///
/// A point is inside when it is strictly on the left of `left` and strictly on
/// the right of `right`. Swapping the rays selects the opposite wedge (or nothing
/// for parallel rays), see [`ViewCone2::is_reversed`].
#[derive(Serialize, Deserialize)]
#[derive(Debug, Copy, Clone, PartialEq, Facet)]
pub struct ViewCone2<T> {
  pub left: Vec2<T>,
  pub right: Vec2<T>,
}

impl<T: Scalar> ViewCone2<T> {
  pub fn new(left: Vec2<T>, right: Vec2<T>) -> Self {
    Self { left, right }
  }

  /// Rays going from two image plane points back through the apex.
  pub fn from_apex_and_image_points(
    apex: Vec2<T>,
    left_point: Vec2<T>,
    right_point: Vec2<T>,
  ) -> Self {
    Self::new(apex - left_point, apex - right_point)
  }

  pub fn half_planes(&self) -> [HalfPlane2<T>; 2] {
    [
      HalfPlane2::left_of_ray(Vec2::zero(), self.left),
      HalfPlane2::left_of_ray(Vec2::zero(), self.right).flipped(),
    ]
  }

  /// The right ray does not lie on the left of the left ray, the wedge is then
  /// empty or faces the other way.
  pub fn is_reversed(&self) -> bool {
    self.left.left_normal().dot(self.right) <= T::zero()
  }
}

impl<T: Scalar> ContainAble<T, Vec2<T>, 2> for ViewCone2<T> {
  fn contains(&self, target: &Vec2<T>) -> bool {
    for p in &self.half_planes() {
      if !p.contains(target) {
        return false;
      }
    }

    true
  }
}

#[cfg(test)]
mod test {
  use super::*;

  fn cone() -> ViewCone2<f64> {
    ViewCone2::new(vec2(1., 1.), vec2(-1., 1.))
  }

  #[test]
  fn contains() {
    let cone = cone();
    assert!(!cone.is_reversed());
    assert!(cone.contains(&vec2(0., 1.)));
    assert!(cone.contains(&vec2(0.5, 1.)));
    assert!(cone.contains(&vec2(-0.99, 1.)));
    assert!(!cone.contains(&vec2(0., -1.)));
    assert!(!cone.contains(&vec2(2., 1.)));
    assert!(!cone.contains(&vec2(-2., 1.)));
    assert!(!cone.contains(&Vec2::zero()));
  }

  #[test]
  fn boundary_is_excluded() {
    let cone = cone();
    assert!(!cone.contains(&vec2(1., 1.)));
    assert!(!cone.contains(&vec2(3., 3.)));
    assert!(!cone.contains(&vec2(-1., 1.)));
  }

  #[test]
  fn matches_raw_dot_products() {
    let cone = ViewCone2::new(vec2(15.8, 100.), vec2(-6.3, 100.));
    for x in -20..20 {
      for y in -20..20 {
        let p = vec2(x as f64 * 3.7, y as f64 * 11.);
        let expected =
          cone.left.left_normal().dot(p) > 0. && cone.right.left_normal().dot(p) < 0.;
        assert_eq!(cone.contains(&p), expected);
      }
    }
  }

  #[test]
  fn reversed() {
    let cone = ViewCone2::new(vec2(-1., 1.), vec2(1., 1.));
    assert!(cone.is_reversed());
    // the wedge now opens downwards
    assert!(!cone.contains(&vec2(0., 1.)));
    assert!(cone.contains(&vec2(0., -1.)));

    let parallel = ViewCone2::new(vec2(1., 1.), vec2(1., 1.));
    assert!(parallel.is_reversed());
    assert!(!parallel.contains(&vec2(0., 1.)));
    assert!(!parallel.contains(&vec2(0., -1.)));
  }

  #[test]
  fn from_apex() {
    let cone =
      ViewCone2::from_apex_and_image_points(Vec2::zero(), vec2(-1., -1.), vec2(1., -1.));
    assert_eq!(cone, ViewCone2::new(vec2(1., 1.), vec2(-1., 1.)));
  }
}
