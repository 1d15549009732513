//! The capability surface of the underlying mapping engine.
//!
//! The bridge drives a live, stateful map object through a fixed set of
//! operations and never implements any of them itself: rendering, projection
//! math and tile fetching are owned entirely by the engine behind the
//! [`MapEngine`] trait. One implementor exists per engine binding; the
//! workspace ships a recording fake in `maplibre-test`.

use serde::{
  Deserialize,
  Serialize,
};
use serde_json::Value;
use thiserror::Error;

/// A geographic coordinate as `[longitude, latitude]`.
pub type LngLat = [f64; 2];

/// Errors raised by the mapping engine itself.
///
/// These are passed through to the caller unchanged; the bridge never
/// reinterprets or retries an engine failure.
#[derive(Debug, Error)]
pub enum EngineError {
  #[error("map engine failed to start: {0}")]
  Create(String),
  #[error("map has no method named `{0}`")]
  UnknownMethod(String),
  #[error("unknown control type `{0}`")]
  UnknownControlType(String),
  #[error("source `{0}` is already registered")]
  DuplicateSource(String),
  #[error("layer `{layer}` references unknown source `{source_id}`")]
  UnknownSource { layer: String, source_id: String },
  #[error("malformed layer: {0}")]
  InvalidLayer(String),
  #[error("{0}")]
  Other(String),
}

/// User-interaction events the bridge listens for, always scoped to a layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerEventKind {
  Click,
  MouseEnter,
  MouseLeave,
}

/// A geometry-plus-properties record returned from a hit-test against a
/// rendered layer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Feature {
  pub properties: serde_json::Map<String, Value>,
}

/// A layer-scoped interaction event.
///
/// `features` is in the engine's hit-test order: the first entry is the
/// topmost feature under the pointer. The bridge imposes no ordering of its
/// own.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerEvent {
  pub lng_lat:  LngLat,
  pub features: Vec<Feature>,
}

impl LayerEvent {
  /// The topmost feature under the pointer, if any.
  pub fn first_feature(&self) -> Option<&Feature> {
    self.features.first()
  }
}

/// A listener attached to a layer-scoped event.
///
/// All engine callbacks run on the host UI thread's event loop, so handlers
/// need neither `Send` nor `Sync`.
pub type LayerHandler = Box<dyn FnMut(&LayerEvent)>;

/// Text popup attached to a marker.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MarkerPopup {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub options: Option<Value>,
  pub text:    String,
}

/// An ephemeral decoration added to the map; the engine owns its lifecycle
/// once attached.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MarkerDescriptor {
  #[serde(rename = "lngLat")]
  pub lng_lat: LngLat,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub popup:   Option<MarkerPopup>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub options: Option<Value>,
}

impl MarkerDescriptor {
  pub fn new(lng_lat: LngLat) -> Self {
    Self {
      lng_lat,
      popup: None,
      options: None,
    }
  }
}

/// Corner of the map a control is attached to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ControlPosition {
  TopLeft,
  #[default]
  TopRight,
  BottomLeft,
  BottomRight,
}

impl ControlPosition {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::TopLeft => "top-left",
      Self::TopRight => "top-right",
      Self::BottomLeft => "bottom-left",
      Self::BottomRight => "bottom-right",
    }
  }
}

/// Names a control class in the engine's control namespace, plus its
/// constructor options and attachment position.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ControlDescriptor {
  #[serde(rename = "type")]
  pub control_type: String,
  #[serde(default)]
  pub options:      Value,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub position:     Option<ControlPosition>,
}

impl ControlDescriptor {
  /// The engine's standard navigation control with default options.
  pub fn navigation() -> Self {
    Self {
      control_type: "NavigationControl".to_string(),
      options:      Value::Null,
      position:     None,
    }
  }
}

/// Constructor options for a popup instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PopupOptions {
  pub close_button:   bool,
  pub close_on_click: bool,
}

impl PopupOptions {
  /// Options for a hover-driven popup: not closable by the user, not
  /// dismissed by clicks. Its lifetime is managed by enter/leave events
  /// alone.
  pub const fn hover() -> Self {
    Self {
      close_button:   false,
      close_on_click: false,
    }
  }
}

impl Default for PopupOptions {
  fn default() -> Self {
    Self {
      close_button:   true,
      close_on_click: true,
    }
  }
}

/// A reusable handle to one popup instance owned by the engine.
///
/// Handles are cheap to clone and all clones refer to the same popup.
/// Calling [`open`](PopupHandle::open) on an already-open popup repositions
/// and re-fills that popup instead of creating a second one.
pub trait PopupHandle: Clone {
  /// Show the popup at a coordinate with the given HTML content, or move and
  /// re-fill it if it is already shown.
  fn open(&self, at: LngLat, html: &str);

  /// Remove the popup from the map. Opening again later is allowed.
  fn remove(&self);
}

/// The live map object and the fixed operation set the bridge drives.
///
/// Implementations translate each call onto the real engine API and raise
/// [`EngineError`] values for the failures the engine defines (duplicate
/// source ids, malformed layers, unknown methods or control types). The
/// bridge surfaces those errors without modification.
pub trait MapEngine: Sized {
  type Popup: PopupHandle + 'static;

  /// Construct the map from an engine-defined option object. The bridge
  /// guarantees the options carry a `container` id before calling this.
  fn create(options: &Value) -> Result<Self, EngineError>;

  /// Invoke an arbitrary engine method by name with an ordered argument
  /// list. Fails with [`EngineError::UnknownMethod`] when `method` does not
  /// name a real capability.
  fn call(&mut self, method: &str, params: &[Value]) -> Result<(), EngineError>;

  /// Instantiate and attach a control. Fails with
  /// [`EngineError::UnknownControlType`] when the named class does not exist
  /// in the engine's control namespace.
  fn add_control(&mut self, control: &ControlDescriptor) -> Result<(), EngineError>;

  /// Register a named data source. The source object is engine-defined and
  /// handed over opaquely.
  fn add_source(&mut self, id: &str, source: &Value) -> Result<(), EngineError>;

  /// Register a style layer. The layer object is engine-defined; ownership
  /// passes to the engine on success.
  fn add_layer(&mut self, layer: &Value) -> Result<(), EngineError>;

  /// Add a marker, with its optional text popup already described.
  fn add_marker(&mut self, marker: &MarkerDescriptor) -> Result<(), EngineError>;

  /// Create a popup instance and return a reusable handle to it.
  fn popup(&mut self, options: &PopupOptions) -> Self::Popup;

  /// Register a listener for a layer-scoped event. Listeners registered
  /// during command application are guaranteed to observe events processed
  /// afterwards: command application is synchronous and completes before the
  /// event loop runs.
  fn on(&mut self, kind: LayerEventKind, layer_id: &str, handler: LayerHandler);
}
