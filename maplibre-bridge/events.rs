//! Translation of engine interaction events into host input signals and
//! transient popups.
//!
//! Listeners are installed by commands (`addLayer`, `addPopup`) and fire on
//! the host UI thread's event loop. Because command application completes
//! synchronously before the event loop runs, a listener is always registered
//! before any event that could trigger it.

use std::rc::Rc;

use serde::Serialize;
use serde_json::Value;

use crate::{
  engine::{
    LayerEvent,
    LayerEventKind,
    MapEngine,
    PopupHandle,
    PopupOptions,
  },
  host::HostBridge,
};

/// Payload delivered to the host when a feature is clicked: the feature's
/// properties and the id of the layer it was hit on.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FeatureInput {
  pub props:    serde_json::Map<String, Value>,
  pub layer_id: String,
}

/// Derive the host input name for a layer of a given widget.
///
/// Hyphens are not valid in host input names, so the layer id has them
/// folded to underscores; the container id is used verbatim.
pub fn input_name(container: &str, layer_id: &str) -> String {
  format!("{}_layer_{}", container, layer_id.replace('-', "_"))
}

/// Forward clicks on a layer to the host's reactive-input channel.
///
/// Only the topmost feature under the pointer is reported, once per click.
pub(crate) fn forward_layer_clicks<E: MapEngine>(
  map: &mut E,
  host: Rc<dyn HostBridge>,
  container: &str,
  layer_id: &str,
) {
  let name = input_name(container, layer_id);
  let layer_id_ = layer_id.to_string();
  log::debug!("forwarding clicks on layer `{layer_id}` as input `{name}`");
  map.on(
    LayerEventKind::Click,
    layer_id,
    Box::new(move |event: &LayerEvent| {
      let Some(feature) = event.first_feature() else {
        return;
      };
      host.on_input_change(&name, FeatureInput {
        props:    feature.properties.clone(),
        layer_id: layer_id_.clone(),
      });
    }),
  );
}

/// Show a feature property in a popup while the pointer hovers a layer.
///
/// One popup instance is created per registration and reused for every
/// enter: repeated enters before a leave reposition and re-fill the same
/// popup rather than stacking new ones.
pub(crate) fn install_hover_popup<E: MapEngine>(map: &mut E, layer_id: &str, property: &str) {
  let popup = map.popup(&PopupOptions::hover());
  let on_leave = popup.clone();
  let property = property.to_string();

  map.on(
    LayerEventKind::MouseEnter,
    layer_id,
    Box::new(move |event: &LayerEvent| {
      let Some(feature) = event.first_feature() else {
        return;
      };
      popup.open(event.lng_lat, &property_html(&feature.properties, &property));
    }),
  );
  map.on(
    LayerEventKind::MouseLeave,
    layer_id,
    Box::new(move |_event: &LayerEvent| on_leave.remove()),
  );
}

/// Render a feature property as popup HTML text.
///
/// An absent property renders as the literal `undefined`, matching what the
/// engine displays for a missing field; it is not an error.
fn property_html(properties: &serde_json::Map<String, Value>, property: &str) -> String {
  match properties.get(property) {
    Some(Value::String(text)) => text.clone(),
    Some(value) => value.to_string(),
    None => "undefined".to_string(),
  }
}

#[cfg(test)]
mod tests {
  use quickcheck::quickcheck;
  use serde_json::json;

  use super::*;

  #[test]
  fn test_input_name_folds_hyphens_in_layer_id() {
    assert_eq!(input_name("map1", "poi-layer"), "map1_layer_poi_layer");
  }

  #[test]
  fn test_input_name_keeps_container_verbatim() {
    assert_eq!(input_name("my-map", "poi"), "my-map_layer_poi");
  }

  #[test]
  fn test_property_html_stringifies_values() {
    let props = match json!({ "name": "X", "injured": 2, "flag": null }) {
      Value::Object(map) => map,
      _ => unreachable!(),
    };
    assert_eq!(property_html(&props, "name"), "X");
    assert_eq!(property_html(&props, "injured"), "2");
    assert_eq!(property_html(&props, "flag"), "null");
  }

  #[test]
  fn test_property_html_absent_property_renders_undefined() {
    let props = serde_json::Map::new();
    assert_eq!(property_html(&props, "name"), "undefined");
  }

  quickcheck! {
    fn prop_layer_segment_never_contains_hyphens(container: String, layer_id: String) -> bool {
      let name = input_name(&container, &layer_id);
      name.starts_with(&container) && !name[container.len()..].contains('-')
    }
  }
}
