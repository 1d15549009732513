//! Map control declarations.

use serde::{
  Deserialize,
  Serialize,
};
use serde_json::Value;

/// The control classes the engine's control namespace provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControlType {
  #[serde(rename = "AttributionControl")]
  Attribution,
  #[serde(rename = "FullscreenControl")]
  Fullscreen,
  #[serde(rename = "GeolocateControl")]
  Geolocate,
  #[serde(rename = "NavigationControl")]
  Navigation,
  #[serde(rename = "ScaleControl")]
  Scale,
}

impl ControlType {
  /// The class name used to resolve the control in the engine.
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Attribution => "AttributionControl",
      Self::Fullscreen => "FullscreenControl",
      Self::Geolocate => "GeolocateControl",
      Self::Navigation => "NavigationControl",
      Self::Scale => "ScaleControl",
    }
  }
}

/// A control to instantiate and attach, with its constructor options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Control {
  #[serde(rename = "type")]
  pub control_type: ControlType,
  #[serde(default)]
  pub options:      Value,
}

impl Control {
  pub fn new(control_type: ControlType) -> Self {
    Self {
      control_type,
      options: Value::Null,
    }
  }

  pub fn with_options(control_type: ControlType, options: Value) -> Self {
    Self {
      control_type,
      options,
    }
  }
}
