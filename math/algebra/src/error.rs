#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgebraError {
  #[error("vector component {index} does not exist, a {dimension}d vector has components 0..{dimension}")]
  InvalidIndex { index: usize, dimension: usize },
  /// The reference vector of a normalization, angle or projection has length zero.
  #[error("operation is undefined for a zero length vector")]
  ZeroLength,
}
