//! The widget registry: render/replace lifecycle and the incremental-update
//! dispatch path.

use std::rc::Rc;

use maplibre_bridge::{
  BridgeError,
  Command,
  HostBridge,
  RenderPayload,
  WidgetRegistry,
};
use maplibre_test::{
  FakeMap,
  RecordingHost,
  feature_event,
};
use serde_json::json;

fn payload(value: serde_json::Value) -> RenderPayload {
  serde_json::from_value(value).expect("payload should deserialize")
}

#[test]
fn test_render_value_injects_container_id() {
  let mut registry = WidgetRegistry::<FakeMap>::new(None);
  registry
    .render_value("map1", &payload(json!({ "mapOptions": { "zoom": 2 } })))
    .expect("render should succeed");

  let widget = registry.get("map1").expect("widget should be registered");
  assert_eq!(widget.container(), "map1");
  let options = widget.map().options();
  assert_eq!(options.get("container"), Some(&json!("map1")));
  assert_eq!(options.get("zoom"), Some(&json!(2)));
}

#[test]
fn test_render_value_applies_markers_and_calls() {
  let mut registry = WidgetRegistry::<FakeMap>::new(None);
  registry
    .render_value(
      "map1",
      &payload(json!({
        "mapOptions": {},
        "markers": [
          { "lngLat": [13.4, 52.5], "popup": { "text": "Berlin" } },
          { "lngLat": [2.35, 48.86] },
        ],
        "calls": [
          {
            "name": "addSource",
            "data": { "id": "s1", "source": { "type": "geojson", "data": {} } },
          },
          {
            "name": "addLayer",
            "data": { "id": "l1", "type": "circle", "source": "s1" },
          },
        ],
      })),
    )
    .expect("render should succeed");

  let map = registry.get("map1").expect("widget should exist").map();
  assert_eq!(map.markers().len(), 2);
  assert_eq!(
    map.markers()[0].popup.as_ref().map(|p| p.text.as_str()),
    Some("Berlin")
  );
  assert_eq!(map.layer_ids(), vec!["l1"]);
}

#[test]
fn test_render_value_replaces_existing_widget() {
  let mut registry = WidgetRegistry::<FakeMap>::new(None);
  registry
    .render_value(
      "map1",
      &payload(json!({ "markers": [{ "lngLat": [0.0, 0.0] }] })),
    )
    .expect("first render should succeed");
  registry
    .render_value("map1", &payload(json!({ "mapOptions": { "zoom": 9 } })))
    .expect("second render should succeed");

  assert_eq!(registry.len(), 1);
  let map = registry.get("map1").expect("widget should exist").map();
  // A fresh map instance: the first render's marker is gone.
  assert!(map.markers().is_empty());
  assert_eq!(map.options().get("zoom"), Some(&json!(9)));
}

#[test]
fn test_dispatch_applies_batch_to_rendered_widget() {
  let mut registry = WidgetRegistry::<FakeMap>::new(None);
  registry
    .render_value("map1", &payload(json!({})))
    .expect("render should succeed");

  registry
    .dispatch("map1", &[Command::new(
      "applyFunc",
      json!({ "funcName": "setZoom", "params": [5] }),
    )])
    .expect("dispatch should succeed");

  let map = registry.get("map1").expect("widget should exist").map();
  assert_eq!(map.calls(), &[("setZoom".to_string(), vec![json!(5)])]);
}

#[test]
fn test_dispatch_to_unknown_container_fails() {
  let mut registry = WidgetRegistry::<FakeMap>::new(None);
  let err = registry
    .dispatch("nowhere", &[])
    .expect_err("dispatch should fail");
  assert!(matches!(err, BridgeError::UnknownWidget(id) if id == "nowhere"));
}

#[test]
fn test_remove_drops_the_widget() {
  let mut registry = WidgetRegistry::<FakeMap>::new(None);
  registry
    .render_value("map1", &payload(json!({})))
    .expect("render should succeed");

  assert!(registry.remove("map1").is_some());
  assert!(!registry.contains("map1"));
  assert!(matches!(
    registry.dispatch("map1", &[]),
    Err(BridgeError::UnknownWidget(_))
  ));
}

#[test]
fn test_registry_host_reaches_widget_click_wiring() {
  let host = Rc::new(RecordingHost::new());
  let bridge: Rc<dyn HostBridge> = host.clone();
  let mut registry = WidgetRegistry::<FakeMap>::new(Some(bridge));

  registry
    .render_value(
      "map1",
      &payload(json!({
        "calls": [{
          "name": "addLayer",
          "data": {
            "id": "poi-layer",
            "type": "circle",
            "source": { "type": "geojson", "data": {} },
          },
        }],
      })),
    )
    .expect("render should succeed");

  let widget = registry.get_mut("map1").expect("widget should exist");
  widget
    .map_mut()
    .click("poi-layer", &feature_event([0.0, 0.0], json!({ "name": "A" })));

  let (name, input) = host.last().expect("input should be delivered");
  assert_eq!(name, "map1_layer_poi_layer");
  assert_eq!(input.layer_id, "poi-layer");
}

#[test]
fn test_widgets_are_independent() {
  let mut registry = WidgetRegistry::<FakeMap>::new(None);
  registry
    .render_value("map1", &payload(json!({})))
    .expect("render should succeed");
  registry
    .render_value("map2", &payload(json!({})))
    .expect("render should succeed");

  registry
    .dispatch("map1", &[Command::new(
      "addSource",
      json!({ "id": "s1", "source": { "type": "geojson", "data": {} } }),
    )])
    .expect("dispatch should succeed");

  assert_eq!(
    registry.get("map1").expect("widget should exist").map().source_ids(),
    vec!["s1"]
  );
  assert!(
    registry
      .get("map2")
      .expect("widget should exist")
      .map()
      .source_ids()
      .is_empty()
  );
}
