//! The declarative map builder.
//!
//! A [`Map`] accumulates an ordered command batch while the server-side
//! code declares sources, layers, markers and controls, then serializes to
//! the `{mapOptions, calls}` payload an output binding hands to the bridge.
//! Declaration order is preserved: a layer may reference any source declared
//! before it, and the bridge applies the batch strictly in that order.

use serde_json::{
  Value,
  json,
};

use maplibre_bridge::{
  Command,
  ControlPosition,
};

use crate::{
  basemap::Carto,
  control::Control,
  layer::Layer,
  marker::Marker,
  options::MapOptions,
  source::Source,
};

/// Server-side builder for one map widget.
#[derive(Debug, Clone, PartialEq)]
pub struct Map {
  options: MapOptions,
  calls:   Vec<Command>,
}

impl Map {
  /// Start a map from the given options. A map without an explicit style
  /// gets the Carto dark-matter basemap.
  pub fn new(options: MapOptions) -> Self {
    let mut options = options;
    if options.style.is_none() {
      options.style = Some(Carto::DarkMatter.style_url());
    }
    Self {
      options,
      calls: Vec::new(),
    }
  }

  pub fn options(&self) -> &MapOptions {
    &self.options
  }

  /// The accumulated command batch, in declaration order.
  pub fn calls(&self) -> &[Command] {
    &self.calls
  }

  /// Consume the builder, keeping only its command batch. Pairs with
  /// [`MapUpdate`] for updating an already-rendered widget.
  pub fn into_calls(self) -> Vec<Command> {
    self.calls
  }

  fn push(&mut self, name: &str, data: Value) {
    self.calls.push(Command::new(name, data));
  }

  /// Queue a raw engine method invocation — the escape hatch for any engine
  /// capability without a named wrapper here.
  pub fn add_call(&mut self, func_name: impl Into<String>, params: Vec<Value>) {
    let func_name: String = func_name.into();
    self.push("applyFunc", json!({ "funcName": func_name, "params": params }));
  }

  pub fn add_control(&mut self, control: &Control, position: ControlPosition) {
    self.push(
      "addControl",
      json!({
        "type": control.control_type.as_str(),
        "options": control.options,
        "position": position,
      }),
    );
  }

  pub fn add_source(&mut self, id: impl Into<String>, source: &Source) {
    let id: String = id.into();
    self.push("addSource", json!({ "id": id, "source": source }));
  }

  pub fn add_layer(&mut self, layer: &Layer) {
    self.push("addLayer", json!(layer));
  }

  pub fn add_marker(&mut self, marker: &Marker) {
    self.push("addMarker", json!(marker.descriptor()));
  }

  /// Show `property` of the hovered feature in a popup over `layer_id`.
  pub fn add_popup(&mut self, layer_id: impl Into<String>, property: impl Into<String>) {
    let layer_id: String = layer_id.into();
    let property: String = property.into();
    self.push("addPopup", json!({ "layerId": layer_id, "property": property }));
  }

  pub fn set_filter(&mut self, layer_id: &str, filter: Value) {
    self.add_call("setFilter", vec![json!(layer_id), filter]);
  }

  pub fn set_paint_property(&mut self, layer_id: &str, property: &str, value: Value) {
    self.add_call("setPaintProperty", vec![json!(layer_id), json!(property), value]);
  }

  pub fn set_layout_property(&mut self, layer_id: &str, property: &str, value: Value) {
    self.add_call("setLayoutProperty", vec![json!(layer_id), json!(property), value]);
  }

  /// The source definitions declared so far.
  pub fn sources(&self) -> Vec<&Value> {
    self.datas_of("addSource")
  }

  /// The layer definitions declared so far.
  pub fn layers(&self) -> Vec<&Value> {
    self.datas_of("addLayer")
  }

  fn datas_of(&self, name: &str) -> Vec<&Value> {
    self
      .calls
      .iter()
      .filter(|call| call.name == name)
      .map(|call| &call.data)
      .collect()
  }

  /// Serialize to the `{mapOptions, calls}` render payload the bridge's
  /// output-binding path consumes.
  pub fn to_payload(&self) -> Value {
    json!({ "mapOptions": self.options, "calls": self.calls })
  }
}

/// An incremental update for an already-rendered widget: the container id
/// and a command batch, serialized to the `{id, calls}` message the bridge's
/// dispatch path consumes.
#[derive(Debug, Clone, PartialEq)]
pub struct MapUpdate {
  id:    String,
  calls: Vec<Command>,
}

impl MapUpdate {
  pub fn new(id: impl Into<String>, calls: Vec<Command>) -> Self {
    Self {
      id: id.into(),
      calls,
    }
  }

  pub fn id(&self) -> &str {
    &self.id
  }

  pub fn calls(&self) -> &[Command] {
    &self.calls
  }

  /// The host's custom-message channel for this widget.
  pub fn channel(&self) -> String {
    format!("maplibre-{}", self.id)
  }

  pub fn to_message(&self) -> Value {
    json!({ "id": self.id, "calls": self.calls })
  }
}
