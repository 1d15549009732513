//! End-to-end flow: compose a map server-side, render it through the bridge
//! into a fake engine, then click a feature and watch the input come back.
//!
//! Run with `cargo run -p maplibre-test --example server_flow`.

use std::rc::Rc;

use anyhow::{
  Context,
  Result,
};
use maplibre_bridge::{
  HostBridge,
  RenderPayload,
  WidgetRegistry,
};
use maplibre_compose::{
  Carto,
  Layer,
  LayerType,
  Map,
  MapOptions,
  Source,
};
use maplibre_test::{
  FakeMap,
  RecordingHost,
  feature_event,
};
use serde_json::json;

fn main() -> Result<()> {
  fern::Dispatch::new()
    .format(|out, message, record| {
      out.finish(format_args!("[{}] {}", record.level(), message));
    })
    .level(log::LevelFilter::Debug)
    .chain(std::io::stderr())
    .apply()?;

  // Server side: declare the map.
  let mut map = Map::new(MapOptions {
    style: Some(Carto::Positron.style_url()),
    zoom: Some(11.0),
    center: Some([13.4, 52.5]),
    ..Default::default()
  });
  map.add_source(
    "collisions",
    &Source::geojson(json!({ "type": "FeatureCollection", "features": [] })),
  );
  map.add_layer(
    &Layer::new(LayerType::Circle, "collision-points")
      .source_id("collisions")
      .paint(json!({ "circle-color": "darkred" })),
  );
  map.add_popup("collision-points", "injured");

  // Widget side: render the payload into a widget bound to a container.
  let host = Rc::new(RecordingHost::new());
  let bridge: Rc<dyn HostBridge> = host.clone();
  let mut registry = WidgetRegistry::<FakeMap>::new(Some(bridge));
  let payload: RenderPayload = serde_json::from_value(map.to_payload())?;
  registry.render_value("demo", &payload)?;

  // A user clicks a feature on the layer.
  let widget = registry.get_mut("demo").context("widget should be registered")?;
  widget.map_mut().click(
    "collision-points",
    &feature_event([13.4, 52.5], json!({ "injured": 2 })),
  );

  for (name, input) in host.inputs() {
    println!("input `{name}` changed: layer `{}`, props {:?}", input.layer_id, input.props);
  }
  Ok(())
}
