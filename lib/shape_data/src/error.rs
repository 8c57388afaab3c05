use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
  /// A size parameter is out of its valid range. No coordinates are produced.
  #[error("{0}")]
  InvalidParameter(&'static str),
}

pub const RADIUS_NOT_POSITIVE: &str = "Radius must be a positive value.";
pub const SIDE_LENGTH_NOT_POSITIVE: &str =
  "Side length must be a positive value.";
pub const TORUS_RADII_NOT_POSITIVE: &str =
  "Major and minor radius must be positive values.";
pub const TORUS_RADII_INVERTED: &str =
  "Minor radius (r) must be less than major radius (R) to form a proper donut.";

/// Finite and greater than zero. NaN and infinity both fail.
pub(crate) fn is_valid_size(value: f32) -> bool {
  value.is_finite() && value > 0.
}

pub(crate) fn require_positive(
  value: f32,
  message: &'static str,
) -> Result<(), ShapeError> {
  if !is_valid_size(value) {
    return Err(ShapeError::InvalidParameter(message));
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn nan_is_not_positive() {
    assert!(require_positive(f32::NAN, RADIUS_NOT_POSITIVE).is_err());
    assert!(require_positive(0., RADIUS_NOT_POSITIVE).is_err());
    assert!(require_positive(1e-6, RADIUS_NOT_POSITIVE).is_ok());
  }

  #[test]
  fn infinity_is_not_a_size() {
    assert!(require_positive(f32::INFINITY, RADIUS_NOT_POSITIVE).is_err());
    assert!(require_positive(f32::NEG_INFINITY, RADIUS_NOT_POSITIVE).is_err());
    assert!(require_positive(f32::MAX, RADIUS_NOT_POSITIVE).is_ok());
  }

  #[test]
  fn message_is_the_display_text() {
    let err = ShapeError::InvalidParameter(SIDE_LENGTH_NOT_POSITIVE);
    assert_eq!(err.to_string(), "Side length must be a positive value.");
  }
}
