//! Data source definitions, serialized to engine source objects.

use serde::{
  Deserialize,
  Serialize,
};
use serde_json::Value;

/// A data source definition. The variant tag becomes the engine's source
/// `type` field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum Source {
  #[serde(rename = "geojson")]
  GeoJson { data: Value },
  #[serde(rename = "vector")]
  Vector { url: String },
  #[serde(rename = "raster")]
  Raster {
    tiles:     Vec<String>,
    #[serde(rename = "tileSize", default, skip_serializing_if = "Option::is_none")]
    tile_size: Option<u32>,
  },
}

impl Source {
  /// A GeoJSON source over inline data (a feature collection, feature, or
  /// geometry) or a data URL.
  pub fn geojson(data: Value) -> Self {
    Self::GeoJson { data }
  }

  pub fn vector(url: impl Into<String>) -> Self {
    Self::Vector { url: url.into() }
  }

  pub fn raster(tiles: Vec<String>) -> Self {
    Self::Raster {
      tiles,
      tile_size: None,
    }
  }
}
