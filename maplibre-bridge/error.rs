use thiserror::Error;

use crate::engine::EngineError;

/// Failures surfaced while applying commands to a widget.
///
/// Nothing here is caught or retried inside the bridge: a failing command
/// aborts the remainder of its batch and the error propagates to the caller.
/// Commands applied before the failure stay applied.
#[derive(Debug, Error)]
pub enum BridgeError {
  /// A batch entry's name misses the command table.
  #[error("unknown command `{0}`")]
  UnknownCommand(String),

  /// A command's data did not deserialize into the handler's parameter type.
  #[error("invalid data for `{command}`: {source}")]
  InvalidData {
    command: &'static str,
    #[source]
    source:  serde_json::Error,
  },

  /// Map options without a `container` id cannot be bound to a widget.
  #[error("map options are missing a `container` id")]
  MissingContainer,

  /// A registry dispatch named a container no widget was rendered for.
  #[error("no widget registered for container `{0}`")]
  UnknownWidget(String),

  /// An engine-raised failure, passed through unchanged.
  #[error(transparent)]
  Engine(#[from] EngineError),
}

pub type Result<T> = std::result::Result<T, BridgeError>;
