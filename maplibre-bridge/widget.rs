//! One widget instance: a container id bound to exactly one map instance,
//! mutated only through applied commands.

use std::rc::Rc;

use serde_json::Value;

use crate::{
  command::{
    Command,
    CommandRegistry,
  },
  engine::{
    ControlDescriptor,
    MapEngine,
  },
  error::{
    BridgeError,
    Result,
  },
  events,
  host::HostBridge,
};

/// A map widget: owns one engine-created map instance for the lifetime of
/// its container element.
///
/// The map instance is created exactly once, in [`MapWidget::new`]; every
/// later command operates on that same instance. Teardown is the concern of
/// whatever external layer owns the container's lifecycle — dropping the
/// widget drops the map.
pub struct MapWidget<E: MapEngine> {
  container: String,
  map:       E,
  host:      Option<Rc<dyn HostBridge>>,
  commands:  CommandRegistry<E>,
}

impl<E: MapEngine> MapWidget<E> {
  /// Construct the widget and its map instance from engine-defined map
  /// options, which must include a `container` id.
  ///
  /// A navigation control is attached unconditionally.
  // TODO: make the default navigation control opt-out.
  pub fn new(options: &Value, host: Option<Rc<dyn HostBridge>>) -> Result<Self> {
    let container = options
      .get("container")
      .and_then(Value::as_str)
      .ok_or(BridgeError::MissingContainer)?
      .to_string();
    let mut map = E::create(options)?;
    map.add_control(&ControlDescriptor::navigation())?;
    log::debug!("map `{container}` ready");
    Ok(Self {
      container,
      map,
      host,
      commands: CommandRegistry::new(),
    })
  }

  /// The container element id this widget is bound to.
  pub fn container(&self) -> &str {
    &self.container
  }

  /// The map instance.
  pub fn map(&self) -> &E {
    &self.map
  }

  /// The map instance, mutably.
  pub fn map_mut(&mut self) -> &mut E {
    &mut self.map
  }

  /// The widget's command table.
  pub fn commands(&self) -> &CommandRegistry<E> {
    &self.commands
  }

  /// Apply a single command.
  ///
  /// Looks the command's name up in the table and runs its handler; a miss
  /// is [`BridgeError::UnknownCommand`]. Engine failures pass through
  /// unchanged.
  pub fn apply(&mut self, command: &Command) -> Result<()> {
    let Some(fun) = self.commands.lookup(&command.name) else {
      return Err(BridgeError::UnknownCommand(command.name.clone()));
    };
    log::debug!("map `{}`: applying `{}`", self.container, command.name);
    fun(self, &command.data)
  }

  /// Apply a command batch strictly in order.
  ///
  /// Synchronous and fail-fast: the first failing command aborts the rest of
  /// the batch, and commands applied before it stay applied. There is no
  /// rollback.
  pub fn render(&mut self, batch: &[Command]) -> Result<()> {
    log::debug!(
      "map `{}`: rendering {} commands",
      self.container,
      batch.len()
    );
    for command in batch {
      self.apply(command)?;
    }
    Ok(())
  }

  /// Forward clicks on a layer to the host, if a host is present.
  pub(crate) fn wire_layer_clicks(&mut self, layer_id: &str) {
    let Some(host) = &self.host else {
      return;
    };
    events::forward_layer_clicks(&mut self.map, Rc::clone(host), &self.container, layer_id);
  }
}
