use std::ops::*;

use crate::*;

// this trait abstract for ops on vector
pub trait Vector<T: Scalar>: Copy {
  fn create<F>(f: F) -> Self
  where
    F: Fn() -> T;

  /// Perform the given operation on each field in the vector, returning a new point
  /// constructed from the operations.
  #[must_use]
  fn map<F>(self, f: F) -> Self
  where
    F: Fn(T) -> T;

  /// Construct a new vector where each component is the result of
  /// applying the given operation to each pair of components of the
  /// given vectors.
  #[must_use]
  fn zip<F>(self, v2: Self, f: F) -> Self
  where
    F: Fn(T, T) -> T;

  #[inline]
  #[must_use]
  fn one() -> Self {
    Self::create(|| T::one())
  }
  #[inline]
  #[must_use]
  fn zero() -> Self {
    Self::create(|| T::zero())
  }
  #[inline]
  #[must_use]
  fn splat(v: T) -> Self {
    Self::create(|| v)
  }
}

/// https://en.wikipedia.org/wiki/Vector_space
pub trait VectorSpace<T>:
  Add<Self, Output = Self>
  + Sub<Self, Output = Self>
  + Neg<Output = Self>
  + Mul<T, Output = Self>
  + Div<T, Output = Self>
  + Sized
  + Copy
{
}

/// https://en.wikipedia.org/wiki/Inner_product
///
/// inner space define the length, angle and projection based on vector space.
///
/// Every operation that divides by a length reports [`AlgebraError::ZeroLength`]
/// when that length is exactly zero. NaN components are not checked and
/// propagate through the arithmetic.
pub trait InnerProductSpace<T: Scalar>: VectorSpace<T> {
  #[inline]
  fn length(&self) -> T {
    self.length2().sqrt()
  }

  /// Squared length, prefer this over [`length`](Self::length) for comparisons.
  #[inline]
  fn length2(&self) -> T {
    self.dot(*self)
  }

  #[inline]
  fn dot<Rhs: InnerData<Self>>(&self, b: Rhs) -> T {
    self.dot_impl(b.get_inner())
  }
  fn dot_impl(&self, b: Self) -> T;

  /// Returns a unit length copy of this vector.
  #[inline]
  fn unit(&self) -> Result<NormalizedVector<T, Self>, AlgebraError> {
    let length = non_zero_length(self.length())?;
    Ok(NormalizedVector::wrap(*self * (T::one() / length)))
  }

  /// Rescale this vector to length one. The vector is left untouched on error.
  #[inline]
  fn normalize(&mut self) -> Result<(), AlgebraError> {
    *self = *self.unit()?;
    Ok(())
  }

  /// Rescale this vector if its length exceeds `max_length`, returns if the
  /// rescale happened.
  ///
  /// `max_length` is expected to be non-negative, a negative limit compares by its
  /// square and rescales to a reversed vector.
  #[inline]
  fn truncate(&mut self, max_length: T) -> bool {
    let (length2, limit2) = (self.length2(), max_length * max_length);
    let exceeds = if length2.is_finite() && limit2.is_finite() {
      length2 > limit2
    } else {
      self.length() > max_length.abs()
    };
    if exceeds {
      let ratio = max_length / self.length();
      *self = *self * ratio;
      true
    } else {
      false
    }
  }

  /// Signed length of the orthogonal projection of this vector onto `direction`.
  ///
  /// Not symmetric, `a.projection_length(b)` and `b.projection_length(a)` differ
  /// unless both have the same length.
  #[inline]
  fn projection_length(&self, direction: Self) -> Result<T, AlgebraError> {
    let length = non_zero_length(direction.length())?;
    Ok(self.dot(direction) / length)
  }

  /// The component of this vector that lies in the span of `direction`.
  #[inline]
  fn project_onto(&self, direction: Self) -> Result<Self, AlgebraError> {
    let length2 = non_zero_length(direction.length2())?;
    Ok(direction * (self.dot(direction) / length2))
  }

  /// Orthogonal decomposition into `(parallel, perpendicular)` relative to
  /// `direction`, the two parts sum back to `self`.
  #[inline]
  fn resolve(&self, direction: Self) -> Result<(Self, Self), AlgebraError> {
    let parallel = self.project_onto(direction)?;
    Ok((parallel, *self - parallel))
  }
}

#[inline(always)]
fn non_zero_length<T: Scalar>(length: T) -> Result<T, AlgebraError> {
  if length == T::zero() {
    Err(AlgebraError::ZeroLength)
  } else {
    Ok(length)
  }
}
