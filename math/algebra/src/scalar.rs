use std::fmt::{Debug, Display};

use num_traits::Float;

/// The real number type vectors are built on.
pub trait Scalar: Float + Default + Debug + Display + Send + Sync + 'static {
  #[inline(always)]
  fn two() -> Self {
    Self::one() + Self::one()
  }

  #[inline(always)]
  fn half() -> Self {
    Self::one() / Self::two()
  }

  fn pi() -> Self;
}

impl Scalar for f32 {
  #[inline(always)]
  fn pi() -> Self {
    std::f32::consts::PI
  }
}

impl Scalar for f64 {
  #[inline(always)]
  fn pi() -> Self {
    std::f64::consts::PI
  }
}

#[test]
fn constants() {
  fn half_turn<T: Scalar>() -> T {
    T::pi() * T::half() * T::two()
  }
  assert_eq!(half_turn::<f32>(), std::f32::consts::PI);
  assert_eq!(half_turn::<f64>(), std::f64::consts::PI);
}
