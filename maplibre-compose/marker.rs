//! Marker declarations.

use serde_json::Value;

use maplibre_bridge::{
  LngLat,
  MarkerDescriptor,
  MarkerPopup,
};

/// A marker, optionally carrying a text popup.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
  lng_lat:    LngLat,
  popup_text: Option<String>,
  options:    Option<Value>,
}

impl Marker {
  pub fn new(lng_lat: LngLat) -> Self {
    Self {
      lng_lat,
      popup_text: None,
      options: None,
    }
  }

  /// Attach a text popup that opens when the marker is clicked.
  pub fn popup(mut self, text: impl Into<String>) -> Self {
    self.popup_text = Some(text.into());
    self
  }

  /// Engine-defined marker constructor options (color, draggable, …).
  pub fn options(mut self, options: Value) -> Self {
    self.options = Some(options);
    self
  }

  /// The wire descriptor the bridge consumes.
  pub fn descriptor(&self) -> MarkerDescriptor {
    MarkerDescriptor {
      lng_lat: self.lng_lat,
      popup:   self.popup_text.clone().map(|text| MarkerPopup {
        options: None,
        text,
      }),
      options: self.options.clone(),
    }
  }
}
