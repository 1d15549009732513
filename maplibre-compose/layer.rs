//! Style layer definitions, serialized to engine layer objects.

use serde::{
  Deserialize,
  Serialize,
};
use serde_json::{
  Value,
  json,
};

use crate::source::Source;

/// The engine's layer kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayerType {
  Background,
  Circle,
  Fill,
  FillExtrusion,
  Heatmap,
  Hillshade,
  Line,
  Raster,
  Symbol,
}

/// A style layer. `source` is either the id of a registered source or an
/// inline source object the engine registers together with the layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Layer {
  pub id:           String,
  #[serde(rename = "type")]
  pub layer_type:   LayerType,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub source:       Option<Value>,
  #[serde(rename = "source-layer", default, skip_serializing_if = "Option::is_none")]
  pub source_layer: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub paint:        Option<Value>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub layout:       Option<Value>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub filter:       Option<Value>,
  #[serde(rename = "minzoom", default, skip_serializing_if = "Option::is_none")]
  pub min_zoom:     Option<f64>,
  #[serde(rename = "maxzoom", default, skip_serializing_if = "Option::is_none")]
  pub max_zoom:     Option<f64>,
}

impl Layer {
  pub fn new(layer_type: LayerType, id: impl Into<String>) -> Self {
    Self {
      id: id.into(),
      layer_type,
      source: None,
      source_layer: None,
      paint: None,
      layout: None,
      filter: None,
      min_zoom: None,
      max_zoom: None,
    }
  }

  /// Reference a source registered separately under `id`.
  pub fn source_id(mut self, id: impl Into<String>) -> Self {
    self.source = Some(Value::String(id.into()));
    self
  }

  /// Embed a source definition in the layer itself.
  pub fn inline_source(mut self, source: &Source) -> Self {
    self.source = Some(json!(source));
    self
  }

  pub fn source_layer(mut self, name: impl Into<String>) -> Self {
    self.source_layer = Some(name.into());
    self
  }

  pub fn paint(mut self, paint: Value) -> Self {
    self.paint = Some(paint);
    self
  }

  pub fn layout(mut self, layout: Value) -> Self {
    self.layout = Some(layout);
    self
  }

  pub fn filter(mut self, filter: Value) -> Self {
    self.filter = Some(filter);
    self
  }

  pub fn zoom_range(mut self, min: f64, max: f64) -> Self {
    self.min_zoom = Some(min);
    self.max_zoom = Some(max);
    self
  }
}
