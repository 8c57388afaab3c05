use std::num::ParseFloatError;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

use crate::error::{
  require_positive, ShapeError, RADIUS_NOT_POSITIVE, SIDE_LENGTH_NOT_POSITIVE,
};
use crate::torus::validate_radii;

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("invalid {parameter} {value:?}: {source}")]
  Number {
    parameter: &'static str,
    value: String,
    source: ParseFloatError,
  },
  #[error("invalid shape config json: {0}")]
  Json(#[from] serde_json::Error),
}

/// Parameters of one shape program, positional or as one inline JSON object.
pub trait ShapeConfig: Default + DeserializeOwned {
  /// Parameter names in positional order.
  const PARAMETERS: &'static [&'static str];

  /// Values beyond `values.len()` keep their defaults.
  fn with_values(values: &[f32]) -> Self;

  fn validate(&self) -> Result<(), ShapeError>;

  /// Returns the config and the arguments left after it.
  fn parse(args: &[String]) -> Result<(Self, &[String]), ConfigError> {
    let Some(first) = args.first() else {
      return Ok((Self::default(), args));
    };

    if first.trim_start().starts_with('{') {
      let config = serde_json::from_str(first)?;
      return Ok((config, &args[1..]));
    }

    let count = args
      .iter()
      .take(Self::PARAMETERS.len())
      .take_while(|s| s.parse::<f32>().is_ok())
      .count()
      .max(1);
    let values = Self::PARAMETERS
      .iter()
      .zip(&args[..count])
      .map(|(&parameter, s)| {
        s.parse::<f32>().map_err(|source| ConfigError::Number {
          parameter,
          value: s.clone(),
          source,
        })
      })
      .collect::<Result<Vec<_>, _>>()?;

    Ok((Self::with_values(&values), &args[count..]))
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SphereConfig {
  pub radius: f32,
}

impl Default for SphereConfig {
  fn default() -> Self {
    Self { radius: 1. }
  }
}

impl ShapeConfig for SphereConfig {
  const PARAMETERS: &'static [&'static str] = &["radius"];

  fn with_values(values: &[f32]) -> Self {
    let mut config = Self::default();
    if let Some(&radius) = values.first() {
      config.radius = radius;
    }
    config
  }

  fn validate(&self) -> Result<(), ShapeError> {
    require_positive(self.radius, RADIUS_NOT_POSITIVE)
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CubeConfig {
  pub side_length: f32,
}

impl Default for CubeConfig {
  fn default() -> Self {
    Self { side_length: 2. }
  }
}

impl ShapeConfig for CubeConfig {
  const PARAMETERS: &'static [&'static str] = &["side_length"];

  fn with_values(values: &[f32]) -> Self {
    let mut config = Self::default();
    if let Some(&side_length) = values.first() {
      config.side_length = side_length;
    }
    config
  }

  fn validate(&self) -> Result<(), ShapeError> {
    require_positive(self.side_length, SIDE_LENGTH_NOT_POSITIVE)
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TorusConfig {
  pub major_radius: f32,
  pub minor_radius: f32,
}

impl Default for TorusConfig {
  fn default() -> Self {
    Self {
      major_radius: 2.,
      minor_radius: 1.,
    }
  }
}

impl ShapeConfig for TorusConfig {
  const PARAMETERS: &'static [&'static str] = &["major_radius", "minor_radius"];

  fn with_values(values: &[f32]) -> Self {
    let mut config = Self::default();
    if let Some(&major_radius) = values.first() {
      config.major_radius = major_radius;
    }
    if let Some(&minor_radius) = values.get(1) {
      config.minor_radius = minor_radius;
    }
    config
  }

  fn validate(&self) -> Result<(), ShapeError> {
    validate_radii(self.major_radius, self.minor_radius)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
  }

  #[test]
  fn no_arguments_means_defaults() {
    let (config, rest) = TorusConfig::parse(&[]).unwrap();
    assert_eq!(config, TorusConfig::default());
    assert!(rest.is_empty());
  }

  #[test]
  fn positional_values_stop_at_the_parameter_count() {
    let input = args(&["3", "0.8", "4"]);
    let (config, rest) = TorusConfig::parse(&input).unwrap();
    assert_eq!(config.major_radius, 3.);
    assert_eq!(config.minor_radius, 0.8);
    assert_eq!(rest, &input[2..]);

    let input = args(&["2.5", "4"]);
    let (config, rest) = SphereConfig::parse(&input).unwrap();
    assert_eq!(config.radius, 2.5);
    assert_eq!(rest, &input[1..]);
  }

  #[test]
  fn json_object_fills_missing_fields_with_defaults() {
    let input = args(&[r#"{"minor_radius": 0.5}"#, "4"]);
    let (config, rest) = TorusConfig::parse(&input).unwrap();
    assert_eq!(config.major_radius, 2.);
    assert_eq!(config.minor_radius, 0.5);
    assert_eq!(rest.len(), 1);
  }

  #[test]
  fn unknown_json_fields_are_an_error() {
    let input = args(&[r#"{"radius": 1, "colour": "red"}"#]);
    assert!(matches!(
      SphereConfig::parse(&input),
      Err(ConfigError::Json(_))
    ));
  }

  #[test]
  fn garbage_number_is_an_error() {
    let input = args(&["big"]);
    let err = CubeConfig::parse(&input).unwrap_err();
    assert!(matches!(
      err,
      ConfigError::Number {
        parameter: "side_length",
        ..
      }
    ));
    assert!(err.to_string().starts_with("invalid side_length \"big\""));
  }

  #[test]
  fn overflowing_number_fails_validation() {
    let input = args(&["1e39"]);
    let (config, _) = SphereConfig::parse(&input).unwrap();
    assert_eq!(config.radius, f32::INFINITY);
    assert!(config.validate().is_err());

    let input = args(&["2", "1e39"]);
    let (config, _) = TorusConfig::parse(&input).unwrap();
    assert!(config.validate().is_err());
  }

  #[test]
  fn validate_applies_shape_rules() {
    assert!(SphereConfig { radius: -1. }.validate().is_err());
    assert!(CubeConfig::default().validate().is_ok());
    assert!(TorusConfig::with_values(&[1., 1.]).validate().is_err());
    assert!(TorusConfig::with_values(&[3.]).validate().is_ok());
  }
}
