//! Ready-to-use basemap styles.

use serde::{
  Deserialize,
  Serialize,
};

/// Basemap styles served from the public Carto CDN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Carto {
  DarkMatter,
  DarkMatterNolabels,
  Positron,
  PositronNolabels,
  Voyager,
  VoyagerNolabels,
}

impl Carto {
  pub fn style_name(self) -> &'static str {
    match self {
      Self::DarkMatter => "dark-matter",
      Self::DarkMatterNolabels => "dark-matter-nolabels",
      Self::Positron => "positron",
      Self::PositronNolabels => "positron-nolabels",
      Self::Voyager => "voyager",
      Self::VoyagerNolabels => "voyager-nolabels",
    }
  }

  /// The full style URL the engine loads.
  pub fn style_url(self) -> String {
    format!(
      "https://basemaps.cartocdn.com/gl/{}-gl-style/style.json",
      self.style_name()
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_style_url() {
    assert_eq!(
      Carto::DarkMatter.style_url(),
      "https://basemaps.cartocdn.com/gl/dark-matter-gl-style/style.json"
    );
  }
}
