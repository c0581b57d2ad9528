use std::fmt;
use std::fmt::Debug;
use std::ops::*;

use facet::Facet;

use crate::*;

#[repr(C)]
#[derive(Serialize, Deserialize)]
#[derive(Debug, Copy, Clone, Default, Hash, Eq, PartialEq, Facet)]
pub struct Vec2<T> {
  pub x: T,
  pub y: T,
}

pub fn vec2<T>(x: T, y: T) -> Vec2<T> {
  Vec2::new(x, y)
}

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Vec2<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Vec2<T> {}

impl<T> Vec2<T> {
  #[inline]
  pub const fn new(x: T, y: T) -> Self {
    Self { x, y }
  }
}

impl<T: Scalar> VectorSpace<T> for Vec2<T> {}
impl<T: Scalar> InnerProductSpace<T> for Vec2<T> {
  /// Falls back to `hypot` when the squared length leaves the normal range, so
  /// huge or tiny components keep a finite nonzero length.
  #[inline]
  fn length(&self) -> T {
    let length2 = self.length2();
    if length2.is_normal() {
      length2.sqrt()
    } else {
      self.x.hypot(self.y)
    }
  }

  #[inline]
  fn dot_impl(&self, b: Self) -> T {
    self.x * b.x + self.y * b.y
  }
}
impl<T: Scalar> Vector<T> for Vec2<T> {
  #[inline]
  fn create<F>(f: F) -> Self
  where
    F: Fn() -> T,
  {
    Self { x: f(), y: f() }
  }

  #[inline]
  fn map<F>(self, f: F) -> Self
  where
    F: Fn(T) -> T,
  {
    Self {
      x: f(self.x),
      y: f(self.y),
    }
  }

  #[inline]
  fn zip<F>(self, v2: Self, f: F) -> Self
  where
    F: Fn(T, T) -> T,
  {
    Self {
      x: f(self.x, v2.x),
      y: f(self.y, v2.y),
    }
  }
}

impl<T> Vec2<T>
where
  T: Scalar,
{
  /// Component by index, 0 is x and 1 is y.
  #[inline]
  pub fn component(&self, index: usize) -> Result<T, AlgebraError> {
    match index {
      0 => Ok(self.x),
      1 => Ok(self.y),
      _ => Err(AlgebraError::InvalidIndex {
        index,
        dimension: 2,
      }),
    }
  }

  #[inline]
  pub fn set_component(&mut self, index: usize, value: T) -> Result<(), AlgebraError> {
    match index {
      0 => self.x = value,
      1 => self.y = value,
      _ => {
        return Err(AlgebraError::InvalidIndex {
          index,
          dimension: 2,
        })
      }
    }
    Ok(())
  }

  #[inline]
  #[must_use]
  pub fn scale(&self, scalar: T) -> Self {
    self.map(|c| scalar * c)
  }

  /// The vector rotated by 90 degree counterclockwise, same length as self.
  #[inline]
  #[must_use]
  pub fn left_normal(&self) -> Self {
    Self {
      x: -self.y,
      y: self.x,
    }
  }

  /// Polar angle in radians, in range (-PI, PI].
  #[inline]
  pub fn angle(&self) -> Result<T, AlgebraError> {
    if self.length() == T::zero() {
      return Err(AlgebraError::ZeroLength);
    }
    let theta = self.y.atan2(self.x);
    // atan2 reports -PI for a negative zero y on the negative x axis
    if theta == -T::pi() {
      Ok(T::pi())
    } else {
      Ok(theta)
    }
  }
}

impl<T: Scalar> Neg for Vec2<T> {
  type Output = Self;
  #[inline]
  fn neg(self) -> Self {
    self.map(|c| -c)
  }
}

impl<T: Scalar> Add for Vec2<T> {
  type Output = Self;
  #[inline]
  fn add(self, b: Self) -> Self {
    self.zip(b, |a, b| a + b)
  }
}

impl<T: Scalar> Sub for Vec2<T> {
  type Output = Self;
  #[inline]
  fn sub(self, b: Self) -> Self {
    self.zip(b, |a, b| a - b)
  }
}

impl<T: Scalar> Mul<T> for Vec2<T> {
  type Output = Self;
  #[inline]
  fn mul(self, s: T) -> Self {
    self.scale(s)
  }
}

impl<T: Scalar> Div<T> for Vec2<T> {
  type Output = Self;
  #[inline]
  fn div(self, s: T) -> Self {
    self.map(|c| c / s)
  }
}

impl<T: Scalar> AddAssign for Vec2<T> {
  #[inline]
  fn add_assign(&mut self, b: Self) {
    *self = *self + b;
  }
}

impl<T: Scalar> SubAssign for Vec2<T> {
  #[inline]
  fn sub_assign(&mut self, b: Self) {
    *self = *self - b;
  }
}

impl<T: Scalar> MulAssign<T> for Vec2<T> {
  #[inline]
  fn mul_assign(&mut self, s: T) {
    *self = *self * s;
  }
}

impl<T> From<[T; 2]> for Vec2<T> {
  fn from([x, y]: [T; 2]) -> Self {
    Self { x, y }
  }
}

impl<T> From<(T, T)> for Vec2<T> {
  fn from((x, y): (T, T)) -> Self {
    Self { x, y }
  }
}

impl<T> From<Vec2<T>> for [T; 2] {
  fn from(v: Vec2<T>) -> Self {
    [v.x, v.y]
  }
}

impl<T> fmt::Display for Vec2<T>
where
  T: Debug,
{
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "({:?}, {:?})", self.x, self.y)
  }
}

#[cfg(test)]
fn assert_near(a: Vec2<f64>, b: Vec2<f64>) {
  assert!((a - b).length() < 1e-6, "{a} is not near {b}");
}

#[cfg(test)]
fn samples() -> Vec<Vec2<f64>> {
  vec![
    vec2(1., -2.),
    vec2(3., 5.),
    vec2(-0.25, 0.5),
    vec2(1e3, -7.5),
    vec2(-4., -3.),
    vec2(0., 2.),
  ]
}

#[test]
fn arithmetic() {
  let a = vec2(1., -2.);
  let b = vec2(3., 5.);
  assert_eq!(-a, vec2(-1., 2.));
  assert_eq!(a + b, vec2(4., 3.));
  assert_eq!(a - b, vec2(-2., -7.));
  assert_eq!(a.dot(b), -7.0);
  assert_eq!(a.scale(-2.), vec2(-2., 4.));
  assert_eq!(a * -2., a.scale(-2.));
  assert_eq!(a.length2(), 5.0);
  assert_eq!(a.length(), 5.0_f64.sqrt());
  assert_eq!(a.left_normal(), vec2(2., 1.));
  assert_eq!(Vec2::<f64>::default(), Vec2::zero());

  let mut c = a;
  c += b;
  c -= a;
  c *= 2.;
  assert_eq!(c, vec2(6., 10.));

  let cg_a = cgmath::vec2(1., -2.);
  let cg_b = cgmath::vec2(3., 5.);
  use cgmath::InnerSpace;
  assert_eq!(cg_a.dot(cg_b), a.dot(b));
  assert_eq!(cg_a.magnitude(), a.length());
}

#[test]
fn arithmetic_properties() {
  for a in samples() {
    assert_eq!(-(-a), a);
    assert_eq!(a.left_normal().length2(), a.length2());
    assert_eq!(a.left_normal().dot(a), 0.);
    for b in samples() {
      assert_near(a + b - b, a);
    }
  }
}

#[test]
fn components() {
  let mut a = vec2(1., -2.);
  assert_eq!(a.component(0), Ok(1.));
  assert_eq!(a.component(1), Ok(-2.));
  assert_eq!(
    a.component(2),
    Err(AlgebraError::InvalidIndex {
      index: 2,
      dimension: 2
    })
  );

  a.set_component(0, 3.).unwrap();
  a.set_component(1, 5.).unwrap();
  assert_eq!(a, vec2(3., 5.));
  assert!(a.set_component(7, 0.).is_err());
  assert_eq!(a, vec2(3., 5.));

  let arr: [f64; 2] = a.into();
  assert_eq!(arr, [3., 5.]);
  assert_eq!(Vec2::from((3., 5.)), a);
}

#[test]
fn unit_and_normalize() {
  let a = vec2(1., -2.);
  assert_near(*a.unit().unwrap(), vec2(0.447214, -0.894427));

  let mut b = a;
  b.normalize().unwrap();
  assert_eq!(b, *a.unit().unwrap());

  let cg = cgmath::InnerSpace::normalize(cgmath::vec2(1., -2.));
  assert_near(b, vec2(cg.x, cg.y));

  for v in samples() {
    assert!((v.unit().unwrap().into_inner().length() - 1.0_f64).abs() < 1e-12);
  }
}

#[test]
fn zero_length_is_rejected() {
  let mut zero = Vec2::<f64>::zero();
  assert_eq!(zero.unit(), Err(AlgebraError::ZeroLength));
  assert_eq!(zero.normalize(), Err(AlgebraError::ZeroLength));
  assert_eq!(zero, Vec2::zero());
  assert_eq!(zero.angle(), Err(AlgebraError::ZeroLength));

  let a = vec2(1., -2.);
  assert_eq!(a.projection_length(zero), Err(AlgebraError::ZeroLength));
  assert_eq!(a.project_onto(zero), Err(AlgebraError::ZeroLength));
  assert_eq!(a.resolve(zero), Err(AlgebraError::ZeroLength));

  // projecting the zero vector onto a valid direction is fine
  assert_eq!(zero.project_onto(a), Ok(Vec2::zero()));
}

#[test]
fn nan_propagates() {
  let a = vec2(f64::NAN, 1.);
  assert!(a.length().is_nan());
  let unit = a.unit().unwrap();
  assert!(unit.x.is_nan() && unit.y.is_nan());
  assert!((a + vec2(1., 1.)).x.is_nan());
}

#[test]
fn truncate() {
  let mut a = vec2(1., -2.);
  let direction = *a.unit().unwrap();
  assert!(a.truncate(1.0));
  assert!((a.length() - 1.0_f64).abs() < 1e-12);
  assert_near(a, direction);

  let mut b = vec2(-1., 2.);
  assert!(!b.truncate(5.0));
  assert_eq!(b, vec2(-1., 2.));
  assert!(b.truncate(1.0));
  assert_near(b, vec2(-0.447214, 0.894427));

  // exactly on the limit is left alone
  let mut c = vec2(3., 4.);
  assert!(!c.truncate(5.0));
  assert_eq!(c, vec2(3., 4.));
}

#[test]
fn extreme_magnitudes() {
  let huge = vec2(1e200_f64, 1e200);
  assert!(huge.length2().is_infinite());
  assert!((huge.length() / 1.4142135623730951e200 - 1.0).abs() < 1e-15);

  let unit = huge.unit().unwrap();
  assert!((unit.into_inner().length() - 1.0).abs() < 1e-12);
  assert_near(*unit, vec2(0.707107, 0.707107));

  let mut normalized = huge;
  normalized.normalize().unwrap();
  assert_eq!(normalized, *unit);

  let mut truncated = huge;
  assert!(truncated.truncate(1.0));
  assert!((truncated.length() - 1.0).abs() < 1e-12);
  assert_near(truncated, vec2(0.707107, 0.707107));

  // both squares overflow, the lengths are still compared
  let mut wide = vec2(2e200_f64, 0.);
  assert!(wide.truncate(1e200));
  assert!((wide.x / 1e200 - 1.0).abs() < 1e-15);
  let mut within = vec2(1e200_f64, 0.);
  assert!(!within.truncate(2e200));
  assert_eq!(within, vec2(1e200, 0.));

  let tiny = vec2(1e-200_f64, 0.);
  assert_eq!(tiny.length2(), 0.);
  assert_eq!(tiny.length(), 1e-200);
  assert_near(*tiny.unit().unwrap(), vec2(1., 0.));
  assert_eq!(tiny.angle(), Ok(0.));
  assert_eq!(Vec2::<f64>::zero().unit(), Err(AlgebraError::ZeroLength));
}

#[test]
fn angle() {
  let pi = std::f64::consts::PI;
  assert!((vec2(1., -2.).angle().unwrap() - -1.1071487177940904_f64).abs() < 1e-15);
  assert_eq!(vec2(1., 0.).angle(), Ok(0.));
  assert_eq!(vec2(0., 1.).angle(), Ok(pi / 2.));
  assert_eq!(vec2(-1., 0.).angle(), Ok(pi));
  assert_eq!(vec2(-1., -0.).angle(), Ok(pi));

  // norm and angle rebuild the vector
  for v in samples() {
    let (r, theta) = (v.length(), v.angle().unwrap());
    assert!(theta > -pi && theta <= pi);
    assert_near(vec2(r * theta.cos(), r * theta.sin()), v);
  }
}

#[test]
fn projection() {
  let a = vec2(2., 2.);
  let b = vec2(3., 0.);
  assert_eq!(a.projection_length(b), Ok(2.0));
  assert!((b.projection_length(a).unwrap() - 2.1213203435596424_f64).abs() < 1e-15);

  let a = vec2(2., 4.);
  let b = vec2(3., -2.);
  assert_near(a.project_onto(b).unwrap(), vec2(-0.461538, 0.307692));
  assert_near(b.project_onto(a).unwrap(), vec2(-0.2, -0.4));

  let cg = cgmath::InnerSpace::project_on(cgmath::vec2(2., 4.), cgmath::vec2(3., -2.));
  assert_near(a.project_onto(b).unwrap(), vec2(cg.x, cg.y));

  let (parallel, perpendicular) = a.resolve(b).unwrap();
  assert_near(parallel, vec2(-0.461538, 0.307692));
  assert_near(perpendicular, vec2(2.461538, 3.692308));
  assert_near(parallel + perpendicular, a);
}

#[test]
fn resolve_decomposes() {
  for a in samples() {
    for direction in samples() {
      let (parallel, perpendicular) = a.resolve(direction).unwrap();
      assert_near(parallel + perpendicular, a);
      assert!(parallel.dot(perpendicular).abs() < 1e-6);
      assert!(direction.dot(perpendicular).abs() < 1e-6);
    }
  }
}
