//! Typed map constructor options.
//!
//! Field names serialize to the engine's camelCase spelling; unset fields
//! are omitted from the wire so engine defaults apply.

use serde::{
  Deserialize,
  Serialize,
};
use serde_json::Value;

use maplibre_bridge::LngLat;

/// A bounding box as `[west, south, east, north]`.
pub type Bounds = [f64; 4];

/// The engine-defined option set a map is constructed with.
///
/// The `container` id is not part of the options here: the bridge injects
/// it when the payload is rendered into a concrete container.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MapOptions {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub antialias:           Option<bool>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub attribution_control: Option<bool>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub bearing:             Option<f64>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub bearing_snap:        Option<f64>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub bounds:              Option<Bounds>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub box_zoom:            Option<bool>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub center:              Option<LngLat>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub click_tolerance:     Option<u32>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub custom_attribution:  Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub double_click_zoom:   Option<bool>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub fade_duration:       Option<u32>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub fit_bounds_options:  Option<Value>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub hash:                Option<bool>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub interactive:         Option<bool>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub max_bounds:          Option<Bounds>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub max_pitch:           Option<f64>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub max_zoom:            Option<f64>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub min_pitch:           Option<f64>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub min_zoom:            Option<f64>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub pitch:               Option<f64>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub scroll_zoom:         Option<bool>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub style:               Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub zoom:                Option<f64>,
}
