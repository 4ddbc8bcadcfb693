use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Filter {
    Nearest,
    Linear,
    NearestMipmapNearest,
    LinearMipmapNearest,
    NearestMipmapLinear,
    LinearMipmapLinear,
}

impl Filter {
    /// Filter used within a single mip level.
    pub fn texel_filter(self) -> wgpu::FilterMode {
        match self {
            Filter::Nearest | Filter::NearestMipmapNearest | Filter::NearestMipmapLinear => {
                wgpu::FilterMode::Nearest
            }
            Filter::Linear | Filter::LinearMipmapNearest | Filter::LinearMipmapLinear => {
                wgpu::FilterMode::Linear
            }
        }
    }

    /// Filter used between mip levels.
    pub fn mipmap_filter(self) -> wgpu::FilterMode {
        match self {
            Filter::NearestMipmapLinear | Filter::LinearMipmapLinear => wgpu::FilterMode::Linear,
            _ => wgpu::FilterMode::Nearest,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Wrap {
    MirroredRepeat,
    ClampToEdge,
    Repeat,
}

impl Wrap {
    pub fn address_mode(self) -> wgpu::AddressMode {
        match self {
            Wrap::MirroredRepeat => wgpu::AddressMode::MirrorRepeat,
            Wrap::ClampToEdge => wgpu::AddressMode::ClampToEdge,
            Wrap::Repeat => wgpu::AddressMode::Repeat,
        }
    }
}

/// Sampler settings of the framebuffer texture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextureConfig {
    #[serde(default = "default_filter")]
    pub mag_filter: Filter,
    #[serde(default = "default_filter")]
    pub min_filter: Filter,
    #[serde(default = "default_wrap")]
    pub u_wrap: Wrap,
    #[serde(default = "default_wrap")]
    pub v_wrap: Wrap,
}

fn default_filter() -> Filter {
    Filter::Linear
}

fn default_wrap() -> Wrap {
    Wrap::Repeat
}

impl Default for TextureConfig {
    fn default() -> Self {
        Self {
            mag_filter: default_filter(),
            min_filter: default_filter(),
            u_wrap: default_wrap(),
            v_wrap: default_wrap(),
        }
    }
}
