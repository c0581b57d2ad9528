use crate::*;

/// An open half space `normal · p > constant`.
///
/// The normal is kept as given, not normalized, so the sign of
/// [`signed_distance`](Self::signed_distance) is exactly the sign of the raw dot
/// product when the plane passes the origin.
#[derive(Serialize, Deserialize)]
#[derive(Debug, Copy, Clone, PartialEq, Facet)]
pub struct HalfPlane<T, V> {
  /// face normal, points into the contained side
  pub normal: V,
  /// plane to the origin distance, scaled by the normal's length
  pub constant: T,
}

pub type HalfPlane2<T> = HalfPlane<T, Vec2<T>>;

impl<T: Scalar, V: InnerProductSpace<T>> HalfPlane<T, V> {
  pub fn new(normal: V, constant: T) -> Self {
    Self { normal, constant }
  }

  pub fn from_normal_and_plane_point(normal: V, point: V) -> Self {
    let constant = normal.dot(point);
    Self::new(normal, constant)
  }

  pub fn signed_distance(&self, point: &V) -> T {
    self.normal.dot(*point) - self.constant
  }

  pub fn flip(&mut self) {
    self.normal = -self.normal;
    self.constant = -self.constant;
  }

  #[must_use]
  pub fn flipped(mut self) -> Self {
    self.flip();
    self
  }
}

impl<T: Scalar> HalfPlane2<T> {
  /// The side on the left of a ray starting at `origin` going along `direction`.
  pub fn left_of_ray(origin: Vec2<T>, direction: Vec2<T>) -> Self {
    Self::from_normal_and_plane_point(direction.left_normal(), origin)
  }
}

// points on the boundary are not contained
impl<T: Scalar> ContainAble<T, Vec2<T>, 2> for HalfPlane2<T> {
  fn contains(&self, target: &Vec2<T>) -> bool {
    self.signed_distance(target) > T::zero()
  }
}

#[test]
fn left_of_ray() {
  let plane = HalfPlane2::left_of_ray(Vec2::zero(), vec2(1., 0.));
  assert_eq!(plane.normal, vec2(-0., 1.));
  assert_eq!(plane.constant, 0.);

  assert!(plane.contains(&vec2(5., 1.)));
  assert!(plane.contains(&vec2(-5., 0.1)));
  assert!(!plane.contains(&vec2(5., -1.)));
  assert!(!plane.contains(&vec2(5., 0.)));

  let right = plane.flipped();
  assert!(right.contains(&vec2(5., -1.)));
  assert!(!right.contains(&vec2(5., 1.)));
  assert!(!right.contains(&vec2(5., 0.)));
}

#[test]
fn offset_origin() {
  let plane = HalfPlane2::left_of_ray(vec2(0., 2.), vec2(1., 0.));
  assert_eq!(plane.signed_distance(&vec2(3., 2.)), 0.);
  assert_eq!(plane.signed_distance(&vec2(3., 5.)), 3.);
  assert_eq!(plane.signed_distance(&vec2(3., 0.)), -2.);
}
