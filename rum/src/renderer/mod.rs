use crate::{config::ContextConfig, error::Result, event::InputState};

pub mod backend;

pub mod texture;
pub use texture::{Filter, TextureConfig, Wrap};

/// Presentation target driven by a [`crate::Context`].
///
/// A renderer owns everything native: the window (if any), its event queue and the GPU
/// copy of the framebuffer.
pub trait Renderer: Sized {
    /// Create the window and rendering resources. Nothing stays alive on failure.
    fn create(config: &ContextConfig) -> Result<Self>;

    /// Drain pending native events into `input`.
    fn pump_events(&mut self, input: &mut InputState);

    /// Replace the whole texture with `pixels` (RGBA8, top row first).
    ///
    /// `pixels` must hold exactly `width * height * 4` bytes; any other length is logged and
    /// the texture is left as it was.
    fn upload(&mut self, pixels: &[u8]);

    /// Draw the texture over the whole window and show it.
    fn render(&mut self) -> Result<()>;
}
