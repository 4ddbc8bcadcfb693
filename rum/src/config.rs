use serde::{Deserialize, Serialize};

use crate::renderer::texture::TextureConfig;

/// Everything needed to open a [`crate::Context`].
///
/// The window size is fixed for the lifetime of the context.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ContextConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    /// Sampling of the framebuffer texture
    #[serde(default)]
    pub texture: TextureConfig,
}

fn default_title() -> String {
    "rum".to_string()
}

fn default_width() -> u32 {
    640
}

fn default_height() -> u32 {
    480
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            width: default_width(),
            height: default_height(),
            texture: TextureConfig::default(),
        }
    }
}

impl ContextConfig {
    pub fn new(title: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            title: title.into(),
            width,
            height,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::texture::{Filter, Wrap};

    #[test]
    fn missing_fields_take_defaults() {
        let config: ContextConfig = serde_yaml::from_str("title: hello").unwrap();
        assert_eq!(config.title, "hello");
        assert_eq!((config.width, config.height), (640, 480));
        assert_eq!(config.texture.mag_filter, Filter::Linear);
    }

    #[test]
    fn texture_settings_parse() {
        let yaml = "
width: 320
height: 200
texture:
  mag_filter: nearest
  v_wrap: clamp_to_edge
";
        let config: ContextConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!((config.width, config.height), (320, 200));
        assert_eq!(config.texture.mag_filter, Filter::Nearest);
        assert_eq!(config.texture.min_filter, Filter::Linear);
        assert_eq!(config.texture.u_wrap, Wrap::Repeat);
        assert_eq!(config.texture.v_wrap, Wrap::ClampToEdge);
    }

    #[test]
    fn yaml_round_trip() {
        let config = ContextConfig::new("demo", 800, 600);
        let text = serde_yaml::to_string(&config).unwrap();
        let back: ContextConfig = serde_yaml::from_str(&text).unwrap();
        assert_eq!(back, config);
    }
}
