//! # maplibre-compose
//!
//! The declarative, server-side half of the map bridge: typed map options,
//! layers, sources, markers and controls, and a [`Map`] builder that
//! accumulates them into the ordered command batch `maplibre-bridge`
//! applies on the widget side.
//!
//! Nothing here touches an engine. The output of this crate is data — a
//! `{mapOptions, calls}` render payload for a fresh widget, or an
//! `{id, calls}` [`MapUpdate`] message for one already on screen.
//!
//! ## Example
//!
//! ```rust
//! use maplibre_compose::{Carto, Layer, LayerType, Map, MapOptions, Source};
//! use serde_json::json;
//!
//! let mut map = Map::new(MapOptions {
//!   style: Some(Carto::Positron.style_url()),
//!   zoom: Some(9.0),
//!   ..Default::default()
//! });
//!
//! map.add_source(
//!   "collisions",
//!   &Source::geojson(json!({ "type": "FeatureCollection", "features": [] })),
//! );
//! map.add_layer(
//!   &Layer::new(LayerType::Circle, "collision-points")
//!     .source_id("collisions")
//!     .paint(json!({ "circle-color": "darkred" })),
//! );
//! map.add_popup("collision-points", "injured");
//!
//! let payload = map.to_payload();
//! assert_eq!(payload["calls"][0]["name"], "addSource");
//! assert_eq!(payload["calls"][2]["data"]["layerId"], "collision-points");
//! ```

mod basemap;
mod control;
mod layer;
mod map;
mod marker;
mod options;
mod source;

pub use basemap::Carto;
pub use control::{
  Control,
  ControlType,
};
pub use layer::{
  Layer,
  LayerType,
};
pub use map::{
  Map,
  MapUpdate,
};
pub use marker::Marker;
pub use options::{
  Bounds,
  MapOptions,
};
pub use source::Source;

// The wire types shared with the widget side.
pub use maplibre_bridge::{
  Command,
  ControlPosition,
  LngLat,
  MarkerDescriptor,
  MarkerPopup,
};
