//! Test support for the map bridge: a recording fake engine, an observable
//! popup handle, and a recording host.
//!
//! [`FakeMap`] implements [`MapEngine`] by recording every operation instead
//! of rendering anything. It enforces the same failures a real engine
//! defines — duplicate source ids, layers referencing unknown sources,
//! unknown method and control names — against closed, known namespaces, so
//! every error path of the bridge is exercisable without a browser or GPU.
//! Tests drive interactions by [firing](FakeMap::fire) synthetic
//! layer-scoped events at the handlers the bridge registered.

use std::{
  cell::RefCell,
  collections::HashMap,
  rc::Rc,
};

use maplibre_bridge::{
  ControlDescriptor,
  EngineError,
  Feature,
  FeatureInput,
  HostBridge,
  LayerEvent,
  LayerEventKind,
  LayerHandler,
  LngLat,
  MapEngine,
  MarkerDescriptor,
  PopupHandle,
  PopupOptions,
};
use serde_json::Value;

/// Map methods the fake engine pretends to implement. Closed on purpose:
/// `applyFunc` misses must be observable.
const KNOWN_METHODS: &[&str] = &[
  "easeTo",
  "fitBounds",
  "flyTo",
  "jumpTo",
  "panTo",
  "resize",
  "setCenter",
  "setFilter",
  "setLayoutProperty",
  "setPaintProperty",
  "setStyle",
  "setZoom",
];

/// Control classes the fake engine's control namespace resolves.
const KNOWN_CONTROLS: &[&str] = &[
  "AttributionControl",
  "FullscreenControl",
  "GeolocateControl",
  "NavigationControl",
  "ScaleControl",
];

#[derive(Debug, Default)]
struct PopupState {
  open:    bool,
  content: String,
  at:      LngLat,
  opened:  u32,
}

/// A popup handle whose open/closed state and content tests can observe.
///
/// Clones share state, like handles to one engine-owned popup object.
#[derive(Debug, Clone)]
pub struct FakePopup {
  options: PopupOptions,
  state:   Rc<RefCell<PopupState>>,
}

impl FakePopup {
  fn new(options: PopupOptions) -> Self {
    Self {
      options,
      state: Rc::new(RefCell::new(PopupState::default())),
    }
  }

  pub fn is_open(&self) -> bool {
    self.state.borrow().open
  }

  pub fn content(&self) -> String {
    self.state.borrow().content.clone()
  }

  pub fn position(&self) -> LngLat {
    self.state.borrow().at
  }

  /// How many times `open` was called over this popup's lifetime, counting
  /// repositions of an already-open popup.
  pub fn times_opened(&self) -> u32 {
    self.state.borrow().opened
  }

  pub fn options(&self) -> PopupOptions {
    self.options
  }
}

impl PopupHandle for FakePopup {
  fn open(&self, at: LngLat, html: &str) {
    let mut state = self.state.borrow_mut();
    state.open = true;
    state.at = at;
    state.content = html.to_string();
    state.opened += 1;
  }

  fn remove(&self) {
    self.state.borrow_mut().open = false;
  }
}

/// A map engine that records everything it is asked to do.
#[derive(Default)]
pub struct FakeMap {
  options:  Value,
  controls: Vec<ControlDescriptor>,
  sources:  Vec<(String, Value)>,
  layers:   Vec<Value>,
  markers:  Vec<MarkerDescriptor>,
  calls:    Vec<(String, Vec<Value>)>,
  popups:   Vec<FakePopup>,
  handlers: HashMap<(LayerEventKind, String), Vec<LayerHandler>>,
}

impl MapEngine for FakeMap {
  type Popup = FakePopup;

  fn create(options: &Value) -> Result<Self, EngineError> {
    if !options.is_object() {
      return Err(EngineError::Create("map options must be an object".to_string()));
    }
    Ok(Self {
      options: options.clone(),
      ..Self::default()
    })
  }

  fn call(&mut self, method: &str, params: &[Value]) -> Result<(), EngineError> {
    if !KNOWN_METHODS.contains(&method) {
      return Err(EngineError::UnknownMethod(method.to_string()));
    }
    self.calls.push((method.to_string(), params.to_vec()));
    Ok(())
  }

  fn add_control(&mut self, control: &ControlDescriptor) -> Result<(), EngineError> {
    if !KNOWN_CONTROLS.contains(&control.control_type.as_str()) {
      return Err(EngineError::UnknownControlType(control.control_type.clone()));
    }
    self.controls.push(control.clone());
    Ok(())
  }

  fn add_source(&mut self, id: &str, source: &Value) -> Result<(), EngineError> {
    if self.sources.iter().any(|(existing, _)| existing == id) {
      return Err(EngineError::DuplicateSource(id.to_string()));
    }
    self.sources.push((id.to_string(), source.clone()));
    Ok(())
  }

  fn add_layer(&mut self, layer: &Value) -> Result<(), EngineError> {
    let Some(id) = layer.get("id").and_then(Value::as_str) else {
      return Err(EngineError::InvalidLayer("missing `id`".to_string()));
    };
    // A string `source` must name a registered source; an inline source
    // object is registered by the engine together with the layer.
    if let Some(source) = layer.get("source").and_then(Value::as_str) {
      if !self.sources.iter().any(|(existing, _)| existing == source) {
        return Err(EngineError::UnknownSource {
          layer:     id.to_string(),
          source_id: source.to_string(),
        });
      }
    }
    self.layers.push(layer.clone());
    Ok(())
  }

  fn add_marker(&mut self, marker: &MarkerDescriptor) -> Result<(), EngineError> {
    self.markers.push(marker.clone());
    Ok(())
  }

  fn popup(&mut self, options: &PopupOptions) -> Self::Popup {
    let popup = FakePopup::new(*options);
    self.popups.push(popup.clone());
    popup
  }

  fn on(&mut self, kind: LayerEventKind, layer_id: &str, handler: LayerHandler) {
    self
      .handlers
      .entry((kind, layer_id.to_string()))
      .or_default()
      .push(handler);
  }
}

impl FakeMap {
  /// Fire a synthetic event at every handler registered for `(kind,
  /// layer_id)`, in registration order. Returns how many handlers ran.
  pub fn fire(&mut self, kind: LayerEventKind, layer_id: &str, event: &LayerEvent) -> usize {
    let key = (kind, layer_id.to_string());
    let Some(mut handlers) = self.handlers.remove(&key) else {
      return 0;
    };
    for handler in handlers.iter_mut() {
      handler(event);
    }
    let count = handlers.len();
    // Handlers registered from inside a callback land first; the taken ones
    // are put back after them.
    self.handlers.entry(key).or_default().extend(handlers);
    count
  }

  pub fn click(&mut self, layer_id: &str, event: &LayerEvent) -> usize {
    self.fire(LayerEventKind::Click, layer_id, event)
  }

  pub fn mouse_enter(&mut self, layer_id: &str, event: &LayerEvent) -> usize {
    self.fire(LayerEventKind::MouseEnter, layer_id, event)
  }

  pub fn mouse_leave(&mut self, layer_id: &str, event: &LayerEvent) -> usize {
    self.fire(LayerEventKind::MouseLeave, layer_id, event)
  }

  /// The options the map was created with.
  pub fn options(&self) -> &Value {
    &self.options
  }

  pub fn controls(&self) -> &[ControlDescriptor] {
    &self.controls
  }

  pub fn control_types(&self) -> Vec<&str> {
    self
      .controls
      .iter()
      .map(|control| control.control_type.as_str())
      .collect()
  }

  pub fn source_ids(&self) -> Vec<&str> {
    self.sources.iter().map(|(id, _)| id.as_str()).collect()
  }

  pub fn source(&self, id: &str) -> Option<&Value> {
    self
      .sources
      .iter()
      .find(|(existing, _)| existing == id)
      .map(|(_, source)| source)
  }

  pub fn layers(&self) -> &[Value] {
    &self.layers
  }

  pub fn layer_ids(&self) -> Vec<&str> {
    self
      .layers
      .iter()
      .filter_map(|layer| layer.get("id").and_then(Value::as_str))
      .collect()
  }

  pub fn markers(&self) -> &[MarkerDescriptor] {
    &self.markers
  }

  pub fn calls(&self) -> &[(String, Vec<Value>)] {
    &self.calls
  }

  /// Every popup the engine ever created, live or removed.
  pub fn popups(&self) -> &[FakePopup] {
    &self.popups
  }

  pub fn open_popup_count(&self) -> usize {
    self.popups.iter().filter(|popup| popup.is_open()).count()
  }

  pub fn listener_count(&self, kind: LayerEventKind, layer_id: &str) -> usize {
    self
      .handlers
      .get(&(kind, layer_id.to_string()))
      .map_or(0, Vec::len)
  }
}

/// A host that records every input change it is handed.
#[derive(Debug, Default)]
pub struct RecordingHost {
  inputs: RefCell<Vec<(String, FeatureInput)>>,
}

impl RecordingHost {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn inputs(&self) -> Vec<(String, FeatureInput)> {
    self.inputs.borrow().clone()
  }

  pub fn last(&self) -> Option<(String, FeatureInput)> {
    self.inputs.borrow().last().cloned()
  }

  pub fn len(&self) -> usize {
    self.inputs.borrow().len()
  }

  pub fn is_empty(&self) -> bool {
    self.inputs.borrow().is_empty()
  }
}

impl HostBridge for RecordingHost {
  fn on_input_change(&self, name: &str, value: FeatureInput) {
    self.inputs.borrow_mut().push((name.to_string(), value));
  }
}

/// Build a layer event carrying a single feature with the given properties.
///
/// Non-object `props` yield a feature with no properties.
pub fn feature_event(lng_lat: LngLat, props: Value) -> LayerEvent {
  let properties = match props {
    Value::Object(map) => map,
    _ => serde_json::Map::new(),
  };
  LayerEvent {
    lng_lat,
    features: vec![Feature { properties }],
  }
}

/// Build a layer event with no features under the pointer.
pub fn empty_event(lng_lat: LngLat) -> LayerEvent {
  LayerEvent {
    lng_lat,
    features: Vec::new(),
  }
}
