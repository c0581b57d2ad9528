use std::{marker::PhantomData, ops::*};

use crate::*;

pub type NormalizedVec2<T> = NormalizedVector<T, Vec2<T>>;

/// A vector known to have unit length, produced by [`InnerProductSpace::unit`].
///
/// Arithmetic on it yields the plain vector type, as the result may no longer be
/// normalized.
#[derive(Debug, Copy, Clone, PartialEq)]
#[repr(transparent)]
pub struct NormalizedVector<T, V> {
  value: V,
  phantom: PhantomData<T>,
}

impl<T, V> NormalizedVector<T, V> {
  /// caller guarantees `v` has unit length
  #[inline(always)]
  pub(crate) fn wrap(v: V) -> Self {
    Self {
      value: v,
      phantom: PhantomData,
    }
  }

  #[inline(always)]
  pub fn into_inner(self) -> V {
    self.value
  }
}

impl<T: Scalar, V: InnerProductSpace<T>> NormalizedVector<T, V> {
  #[inline]
  pub fn length(&self) -> T {
    T::one()
  }

  #[inline]
  pub fn length2(&self) -> T {
    T::one()
  }

  #[inline]
  #[must_use]
  pub fn reverse(&self) -> Self {
    Self::wrap(-self.value)
  }
}

pub trait InnerData<T> {
  fn get_inner(self) -> T;
}

impl<T, V> InnerData<V> for NormalizedVector<T, V> {
  #[inline(always)]
  fn get_inner(self) -> V {
    self.value
  }
}
impl<V> InnerData<V> for V {
  #[inline(always)]
  fn get_inner(self) -> V {
    self
  }
}

// after add / sub / mul scalar, the vector may not be normalized
impl<T, V: VectorSpace<T>, Rhs: InnerData<V>> Add<Rhs> for NormalizedVector<T, V> {
  type Output = V;
  #[inline(always)]
  fn add(self, rhs: Rhs) -> Self::Output {
    self.value + rhs.get_inner()
  }
}
impl<T, V: VectorSpace<T>, Rhs: InnerData<V>> Sub<Rhs> for NormalizedVector<T, V> {
  type Output = V;
  #[inline(always)]
  fn sub(self, rhs: Rhs) -> Self::Output {
    self.value - rhs.get_inner()
  }
}
impl<T, V: VectorSpace<T>> Mul<T> for NormalizedVector<T, V> {
  type Output = V;
  #[inline(always)]
  fn mul(self, rhs: T) -> Self::Output {
    self.value * rhs
  }
}
impl<T, V: VectorSpace<T>> Div<T> for NormalizedVector<T, V> {
  type Output = V;
  #[inline(always)]
  fn div(self, rhs: T) -> Self::Output {
    self.value / rhs
  }
}

impl<T, V> Deref for NormalizedVector<T, V> {
  type Target = V;
  #[inline(always)]
  fn deref(&self) -> &Self::Target {
    &self.value
  }
}

#[test]
fn test() {
  let a = Vec2::new(1., -2.).unit().unwrap();
  assert_eq!(a.length(), 1.);
  assert!((a.value.length() - 1.0_f64).abs() < 1e-15);

  let b = Vec2::new(3., 5.);
  assert_eq!(a + b, *a + b);
  assert_eq!(a * 2., Vec2::new(a.x * 2., a.y * 2.));
  assert_eq!(a.reverse().into_inner(), -*a);

  // dot accepts both the wrapper and the plain vector
  assert_eq!(b.dot(a), b.dot(*a));
}
