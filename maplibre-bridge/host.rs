use crate::events::FeatureInput;

/// The reactive-input channel exposed by the host framework.
///
/// The capability is injected where a widget or registry is constructed; the
/// bridge never looks the host up in any ambient scope. Passing `None`
/// silently disables click-to-input forwarding and nothing else.
pub trait HostBridge {
  /// Deliver a named input change derived from a map interaction.
  fn on_input_change(&self, name: &str, value: FeatureInput);
}
