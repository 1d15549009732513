//! # maplibre-bridge
//!
//! A thin adapter that lets a server-driven UI framework declaratively
//! control an interactive map widget, and reflects map interactions back to
//! the host as named input changes.
//!
//! The bridge owns the small but real protocol between declarative intent —
//! an ordered batch of `{name, data}` commands produced server-side — and
//! the imperative, mutable map object graph of the underlying mapping
//! engine. It drives the engine exclusively through the [`MapEngine`] trait
//! and never implements rendering, projections or tile fetching itself.
//!
//! ## Core Concepts
//!
//! - **Widget**: one [`MapWidget`] per container element id, owning exactly
//!   one engine map instance created at construction
//! - **Command table**: a closed [`CommandRegistry`] mapping wire command
//!   names (`applyFunc`, `addControl`, `addMarker`, `addSource`, `addLayer`,
//!   `addPopup`, `render`) to handlers; unknown names fail loudly instead of
//!   falling into reflective dispatch
//! - **Event bridge**: `addLayer` wires layer-scoped clicks into the host's
//!   reactive-input channel (when a [`HostBridge`] is injected), `addPopup`
//!   wires hover enter/leave to a single reusable popup instance
//! - **Registry**: an explicit [`WidgetRegistry`] keyed by container id,
//!   fed by whatever external layer performs widget discovery
//!
//! ## Batch Semantics
//!
//! Batches apply synchronously, strictly in order, and fail fast: the first
//! failing command aborts the rest of its batch, previously applied commands
//! stay applied, and the error propagates to the caller untouched. There is
//! no rollback and no structured error channel back into the host's reactive
//! layer.
//!
//! ## Example
//!
//! ```rust
//! use maplibre_bridge::{Command, RenderPayload, WidgetRegistry};
//! use maplibre_test::FakeMap;
//! use serde_json::json;
//!
//! let mut registry = WidgetRegistry::<FakeMap>::new(None);
//!
//! let payload: RenderPayload = serde_json::from_value(json!({
//!   "mapOptions": { "zoom": 3 },
//!   "markers": [{ "lngLat": [13.4, 52.5] }],
//! }))
//! .unwrap();
//! registry.render_value("map1", &payload).unwrap();
//!
//! let batch = vec![
//!   Command::new(
//!     "addSource",
//!     json!({ "id": "s1", "source": { "type": "geojson", "data": {} } }),
//!   ),
//!   Command::new("addLayer", json!({ "id": "l1", "type": "circle", "source": "s1" })),
//! ];
//! registry.dispatch("map1", &batch).unwrap();
//!
//! let map = registry.get("map1").unwrap().map();
//! assert_eq!(map.layer_ids(), vec!["l1"]);
//! assert_eq!(map.markers().len(), 1);
//! ```

mod command;
mod engine;
mod error;
mod events;
mod host;
mod registry;
mod widget;

pub use command::{
  Command,
  CommandBatch,
  CommandFn,
  CommandRegistry,
  MapCommand,
  SourceDescriptor,
};
pub use engine::{
  ControlDescriptor,
  ControlPosition,
  EngineError,
  Feature,
  LayerEvent,
  LayerEventKind,
  LayerHandler,
  LngLat,
  MapEngine,
  MarkerDescriptor,
  MarkerPopup,
  PopupHandle,
  PopupOptions,
};
pub use error::{
  BridgeError,
  Result,
};
pub use events::{
  FeatureInput,
  input_name,
};
pub use host::HostBridge;
pub use registry::{
  RenderPayload,
  WidgetRegistry,
};
pub use widget::MapWidget;
