//! The command protocol: wire types and the closed table of named commands a
//! widget can apply.
//!
//! Dispatch is an explicit registered-command table, not reflection: every
//! command the protocol knows is registered under its wire name, a lookup
//! miss is [`BridgeError::UnknownCommand`](crate::BridgeError::UnknownCommand),
//! and each handler deserializes its data into a typed parameter struct at
//! the edge before driving the engine.

use std::collections::HashMap;

use serde::{
  Deserialize,
  Serialize,
  de::DeserializeOwned,
};
use serde_json::Value;

use crate::{
  engine::{
    ControlDescriptor,
    MapEngine,
    MarkerDescriptor,
  },
  error::{
    BridgeError,
    Result,
  },
  events,
  widget::MapWidget,
};

/// A named operation and its parameters, one entry of a command batch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Command {
  pub name: String,
  #[serde(default)]
  pub data: Value,
}

impl Command {
  pub fn new(name: impl Into<String>, data: Value) -> Self {
    Self {
      name: name.into(),
      data,
    }
  }
}

/// An ordered sequence of commands delivered together as one payload.
pub type CommandBatch = Vec<Command>;

/// A named data source definition, handed opaquely to the engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SourceDescriptor {
  pub id:     String,
  pub source: Value,
}

/// Parameters of the generic `applyFunc` escape hatch.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FuncCall {
  func_name: String,
  #[serde(default)]
  params:    Vec<Value>,
}

/// Parameters of `addPopup`: which layer to watch and which feature property
/// to display.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HoverPopupSpec {
  layer_id: String,
  property: String,
}

/// The one field of a layer object the bridge itself needs.
#[derive(Debug, Deserialize)]
struct LayerId {
  id: String,
}

/// Type alias for a command handler: receives the widget and the command's
/// raw data.
pub type CommandFn<E> = fn(&mut MapWidget<E>, &Value) -> Result<()>;

/// A registered command: wire name, short doc, handler.
pub struct MapCommand<E: MapEngine> {
  pub name: &'static str,
  pub doc:  &'static str,
  fun:      CommandFn<E>,
}

impl<E: MapEngine> MapCommand<E> {
  pub const fn new(name: &'static str, doc: &'static str, fun: CommandFn<E>) -> Self {
    Self { name, doc, fun }
  }
}

/// The closed mapping from wire command names to handlers.
pub struct CommandRegistry<E: MapEngine> {
  commands: HashMap<&'static str, MapCommand<E>>,
}

impl<E: MapEngine> CommandRegistry<E> {
  /// Create a registry holding the builtin command set.
  pub fn new() -> Self {
    let mut registry = Self {
      commands: HashMap::new(),
    };
    registry.register_builtin_commands();
    registry
  }

  fn register(&mut self, command: MapCommand<E>) {
    self.commands.insert(command.name, command);
  }

  fn register_builtin_commands(&mut self) {
    self.register(MapCommand::new(
      "applyFunc",
      "invoke an arbitrary map method with an ordered argument list",
      apply_func,
    ));
    self.register(MapCommand::new(
      "addControl",
      "instantiate a named control and attach it to the map",
      add_control,
    ));
    self.register(MapCommand::new(
      "addMarker",
      "add a marker, optionally with a text popup",
      add_marker,
    ));
    self.register(MapCommand::new(
      "addSource",
      "register a named data source",
      add_source,
    ));
    self.register(MapCommand::new(
      "addLayer",
      "register a style layer and wire up click forwarding",
      add_layer,
    ));
    self.register(MapCommand::new(
      "addPopup",
      "show a feature property in a popup while hovering a layer",
      add_popup,
    ));
    self.register(MapCommand::new(
      "render",
      "apply a nested command batch in order",
      render,
    ));
  }

  /// Get a registered command by wire name.
  pub fn get(&self, name: &str) -> Option<&MapCommand<E>> {
    self.commands.get(name)
  }

  /// Look up just the handler for a wire name.
  pub(crate) fn lookup(&self, name: &str) -> Option<CommandFn<E>> {
    self.commands.get(name).map(|command| command.fun)
  }

  /// All registered wire names, sorted.
  pub fn command_names(&self) -> Vec<&'static str> {
    let mut names: Vec<_> = self.commands.keys().copied().collect();
    names.sort_unstable();
    names
  }
}

impl<E: MapEngine> Default for CommandRegistry<E> {
  fn default() -> Self {
    Self::new()
  }
}

/// Deserialize a command's data into its typed parameter struct.
fn parse<T: DeserializeOwned>(command: &'static str, data: &Value) -> Result<T> {
  serde_json::from_value(data.clone()).map_err(|source| BridgeError::InvalidData {
    command,
    source,
  })
}

fn apply_func<E: MapEngine>(widget: &mut MapWidget<E>, data: &Value) -> Result<()> {
  let call: FuncCall = parse("applyFunc", data)?;
  log::debug!(
    "map `{}`: calling `{}` with {} params",
    widget.container(),
    call.func_name,
    call.params.len()
  );
  widget.map_mut().call(&call.func_name, &call.params)?;
  Ok(())
}

fn add_control<E: MapEngine>(widget: &mut MapWidget<E>, data: &Value) -> Result<()> {
  let control: ControlDescriptor = parse("addControl", data)?;
  log::debug!(
    "map `{}`: adding control `{}`",
    widget.container(),
    control.control_type
  );
  widget.map_mut().add_control(&control)?;
  Ok(())
}

fn add_marker<E: MapEngine>(widget: &mut MapWidget<E>, data: &Value) -> Result<()> {
  let marker: MarkerDescriptor = parse("addMarker", data)?;
  widget.map_mut().add_marker(&marker)?;
  Ok(())
}

fn add_source<E: MapEngine>(widget: &mut MapWidget<E>, data: &Value) -> Result<()> {
  let SourceDescriptor { id, source } = parse("addSource", data)?;
  widget.map_mut().add_source(&id, &source)?;
  Ok(())
}

fn add_layer<E: MapEngine>(widget: &mut MapWidget<E>, data: &Value) -> Result<()> {
  let LayerId { id } = parse("addLayer", data)?;
  widget.map_mut().add_layer(data)?;
  // Wired only after the engine accepted the layer, and only when a host is
  // listening.
  widget.wire_layer_clicks(&id);
  Ok(())
}

fn add_popup<E: MapEngine>(widget: &mut MapWidget<E>, data: &Value) -> Result<()> {
  let spec: HoverPopupSpec = parse("addPopup", data)?;
  log::debug!(
    "map `{}`: hover popup on layer `{}` shows `{}`",
    widget.container(),
    spec.layer_id,
    spec.property
  );
  events::install_hover_popup(widget.map_mut(), &spec.layer_id, &spec.property);
  Ok(())
}

fn render<E: MapEngine>(widget: &mut MapWidget<E>, data: &Value) -> Result<()> {
  let batch: CommandBatch = parse("render", data)?;
  widget.render(&batch)
}
