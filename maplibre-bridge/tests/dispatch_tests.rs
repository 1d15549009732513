//! Command dispatch: table lookup, ordering, and fail-fast batch semantics.

use maplibre_bridge::{
  BridgeError,
  Command,
  EngineError,
  MapWidget,
};
use maplibre_test::FakeMap;
use serde_json::json;

fn widget() -> MapWidget<FakeMap> {
  MapWidget::new(&json!({ "container": "map1", "zoom": 3 }), None)
    .expect("widget should construct")
}

fn geojson_source() -> serde_json::Value {
  json!({ "type": "geojson", "data": { "type": "FeatureCollection", "features": [] } })
}

#[test]
fn test_construct_attaches_navigation_control() {
  let widget = widget();
  assert_eq!(widget.container(), "map1");
  assert_eq!(widget.map().control_types(), vec!["NavigationControl"]);
}

#[test]
fn test_construct_requires_container() {
  let result = MapWidget::<FakeMap>::new(&json!({ "zoom": 3 }), None);
  assert!(matches!(result, Err(BridgeError::MissingContainer)));
}

#[test]
fn test_render_applies_commands_in_order() {
  let mut widget = widget();
  let batch = vec![
    Command::new("addSource", json!({ "id": "s1", "source": geojson_source() })),
    Command::new("addLayer", json!({ "id": "l1", "type": "circle", "source": "s1" })),
    Command::new(
      "applyFunc",
      json!({ "funcName": "setZoom", "params": [8] }),
    ),
  ];
  widget.render(&batch).expect("batch should apply");

  let map = widget.map();
  assert_eq!(map.source_ids(), vec!["s1"]);
  assert_eq!(map.layer_ids(), vec!["l1"]);
  assert_eq!(map.calls(), &[("setZoom".to_string(), vec![json!(8)])]);
}

#[test]
fn test_unknown_command_aborts_rest_of_batch() {
  let mut widget = widget();
  let batch = vec![
    Command::new("addSource", json!({ "id": "s1", "source": geojson_source() })),
    Command::new("bogusCommand", json!({})),
    Command::new("addSource", json!({ "id": "s2", "source": geojson_source() })),
  ];

  let err = widget.render(&batch).expect_err("batch should fail");
  assert!(matches!(err, BridgeError::UnknownCommand(name) if name == "bogusCommand"));

  // Exactly the commands before the failing one have observable effects.
  assert_eq!(widget.map().source_ids(), vec!["s1"]);
}

#[test]
fn test_failing_engine_command_keeps_earlier_effects() {
  let mut widget = widget();
  let batch = vec![
    Command::new("addSource", json!({ "id": "s1", "source": geojson_source() })),
    Command::new(
      "addLayer",
      json!({ "id": "l1", "type": "circle", "source": "missing" }),
    ),
    Command::new("addSource", json!({ "id": "s2", "source": geojson_source() })),
  ];

  let err = widget.render(&batch).expect_err("batch should fail");
  assert!(matches!(
    err,
    BridgeError::Engine(EngineError::UnknownSource { .. })
  ));

  // No rollback of the first command, no execution of the third.
  assert_eq!(widget.map().source_ids(), vec!["s1"]);
  assert!(widget.map().layer_ids().is_empty());
}

#[test]
fn test_apply_func_invokes_named_method() {
  let mut widget = widget();
  widget
    .apply(&Command::new(
      "applyFunc",
      json!({
        "funcName": "setPaintProperty",
        "params": ["l1", "circle-radius", 4],
      }),
    ))
    .expect("known method should apply");

  assert_eq!(widget.map().calls(), &[(
    "setPaintProperty".to_string(),
    vec![json!("l1"), json!("circle-radius"), json!(4)],
  )]);
}

#[test]
fn test_apply_func_unknown_method_passes_through() {
  let mut widget = widget();
  let err = widget
    .apply(&Command::new(
      "applyFunc",
      json!({ "funcName": "launchRockets", "params": [] }),
    ))
    .expect_err("unknown method should fail");

  assert!(matches!(
    err,
    BridgeError::Engine(EngineError::UnknownMethod(name)) if name == "launchRockets"
  ));
}

#[test]
fn test_add_control_unknown_type_passes_through() {
  let mut widget = widget();
  let err = widget
    .apply(&Command::new(
      "addControl",
      json!({ "type": "WarpControl", "options": {}, "position": "top-left" }),
    ))
    .expect_err("unknown control type should fail");

  assert!(matches!(
    err,
    BridgeError::Engine(EngineError::UnknownControlType(name)) if name == "WarpControl"
  ));
}

#[test]
fn test_add_control_attaches_at_position() {
  let mut widget = widget();
  widget
    .apply(&Command::new(
      "addControl",
      json!({ "type": "ScaleControl", "options": { "unit": "metric" }, "position": "bottom-left" }),
    ))
    .expect("control should attach");

  // Index 0 is the default navigation control.
  let control = &widget.map().controls()[1];
  assert_eq!(control.control_type, "ScaleControl");
  assert_eq!(control.position.map(|p| p.as_str()), Some("bottom-left"));
}

#[test]
fn test_add_source_duplicate_id_passes_through() {
  let mut widget = widget();
  let add = Command::new("addSource", json!({ "id": "s1", "source": geojson_source() }));
  widget.apply(&add).expect("first registration should apply");

  let err = widget.apply(&add).expect_err("duplicate id should fail");
  assert!(matches!(
    err,
    BridgeError::Engine(EngineError::DuplicateSource(id)) if id == "s1"
  ));
}

#[test]
fn test_source_then_layer_round_trip() {
  let mut widget = widget();
  widget
    .render(&[
      Command::new("addSource", json!({ "id": "s1", "source": geojson_source() })),
      Command::new("addLayer", json!({ "id": "l1", "type": "circle", "source": "s1" })),
    ])
    .expect("round trip should apply");

  assert_eq!(widget.map().layer_ids(), vec!["l1"]);
}

#[test]
fn test_add_marker_without_popup() {
  let mut widget = widget();
  widget
    .apply(&Command::new("addMarker", json!({ "lngLat": [13.4, 52.5] })))
    .expect("marker should apply");

  let markers = widget.map().markers();
  assert_eq!(markers.len(), 1);
  assert_eq!(markers[0].lng_lat, [13.4, 52.5]);
  assert!(markers[0].popup.is_none());
}

#[test]
fn test_add_marker_with_popup() {
  let mut widget = widget();
  widget
    .apply(&Command::new(
      "addMarker",
      json!({
        "lngLat": [13.4, 52.5],
        "popup": { "options": {}, "text": "Berlin" },
        "options": { "color": "red" },
      }),
    ))
    .expect("marker should apply");

  let marker = &widget.map().markers()[0];
  let popup = marker.popup.as_ref().expect("popup should be attached");
  assert_eq!(popup.text, "Berlin");
}

#[test]
fn test_nested_render_batch() {
  let mut widget = widget();
  widget
    .apply(&Command::new(
      "render",
      json!([
        { "name": "addSource", "data": { "id": "s1", "source": geojson_source() } },
        { "name": "addLayer", "data": { "id": "l1", "type": "circle", "source": "s1" } },
      ]),
    ))
    .expect("nested batch should apply");

  assert_eq!(widget.map().layer_ids(), vec!["l1"]);
}

#[test]
fn test_invalid_data_names_the_command() {
  let mut widget = widget();
  let err = widget
    .apply(&Command::new("addSource", json!(5)))
    .expect_err("malformed data should fail");

  assert!(matches!(err, BridgeError::InvalidData { command: "addSource", .. }));
  assert!(widget.map().source_ids().is_empty());
}

#[test]
fn test_layer_without_id_is_invalid_data() {
  let mut widget = widget();
  let err = widget
    .apply(&Command::new("addLayer", json!({ "type": "circle" })))
    .expect_err("layer without id should fail");

  assert!(matches!(err, BridgeError::InvalidData { command: "addLayer", .. }));
}

#[test]
fn test_command_table_is_closed_and_known() {
  let widget = widget();
  assert_eq!(widget.commands().command_names(), vec![
    "addControl",
    "addLayer",
    "addMarker",
    "addPopup",
    "addSource",
    "applyFunc",
    "render",
  ]);
  assert!(widget.commands().get("getCanvas").is_none());
}
