//! Explicit registry mapping container ids to live widgets.
//!
//! Widget discovery is an external concern: whatever windowing/UI layer
//! locates output containers calls in here with the ids it found. The core
//! never searches for its own container.

use std::{
  collections::HashMap,
  rc::Rc,
};

use serde::{
  Deserialize,
  Serialize,
};
use serde_json::Value;

use crate::{
  command::Command,
  engine::{
    MapEngine,
    MarkerDescriptor,
  },
  error::{
    BridgeError,
    Result,
  },
  host::HostBridge,
  widget::MapWidget,
};

/// The payload an output binding delivers when (re)rendering a widget:
/// engine map options, initial markers, and an initial command batch.
///
/// All fields are optional on the wire; which ones a host fills depends on
/// its entry point.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RenderPayload {
  #[serde(rename = "mapOptions", default)]
  pub map_options: serde_json::Map<String, Value>,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub markers:     Vec<MarkerDescriptor>,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub calls:       Vec<Command>,
}

/// Container id → widget instance, plus the optional host capability handed
/// to every widget constructed through the registry.
pub struct WidgetRegistry<E: MapEngine> {
  host:    Option<Rc<dyn HostBridge>>,
  widgets: HashMap<String, MapWidget<E>>,
}

impl<E: MapEngine> WidgetRegistry<E> {
  pub fn new(host: Option<Rc<dyn HostBridge>>) -> Self {
    Self {
      host,
      widgets: HashMap::new(),
    }
  }

  /// Render a widget into a container: construct its map instance, apply the
  /// payload's initial markers, then apply its command batch.
  ///
  /// The container id is injected into the map options, overriding any id
  /// the payload carried. Rendering into a container that already has a
  /// widget replaces that widget wholesale — the old map instance is dropped
  /// and a fresh one constructed; a live widget never gets a second map.
  pub fn render_value(&mut self, container: &str, payload: &RenderPayload) -> Result<()> {
    let mut options = payload.map_options.clone();
    options.insert(
      "container".to_string(),
      Value::String(container.to_string()),
    );
    let widget = MapWidget::new(&Value::Object(options), self.host.clone())?;

    if self.widgets.remove(container).is_some() {
      log::debug!("replacing widget for container `{container}`");
    }
    let widget = self
      .widgets
      .entry(container.to_string())
      .or_insert(widget);

    for marker in &payload.markers {
      widget.map_mut().add_marker(marker)?;
    }
    widget.render(&payload.calls)
  }

  /// Apply a command batch to an already-rendered widget (the
  /// incremental-update path).
  pub fn dispatch(&mut self, container: &str, batch: &[Command]) -> Result<()> {
    let widget = self
      .widgets
      .get_mut(container)
      .ok_or_else(|| BridgeError::UnknownWidget(container.to_string()))?;
    widget.render(batch)
  }

  pub fn get(&self, container: &str) -> Option<&MapWidget<E>> {
    self.widgets.get(container)
  }

  pub fn get_mut(&mut self, container: &str) -> Option<&mut MapWidget<E>> {
    self.widgets.get_mut(container)
  }

  /// Drop a widget (and its map instance) when the external layer tears the
  /// container down.
  pub fn remove(&mut self, container: &str) -> Option<MapWidget<E>> {
    self.widgets.remove(container)
  }

  pub fn contains(&self, container: &str) -> bool {
    self.widgets.contains_key(container)
  }

  pub fn len(&self) -> usize {
    self.widgets.len()
  }

  pub fn is_empty(&self) -> bool {
    self.widgets.is_empty()
  }
}
