use std::collections::VecDeque;

use crate::{
    config::ContextConfig,
    error::{Error, Result},
    event::{InputState, Key},
    framebuffer::BYTES_PER_PIXEL,
    renderer::Renderer,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputEvent {
    Key { key: Key, pressed: bool },
    CloseRequested,
    FocusLost,
}

/// Renderer without a window. The "texture" lives in memory and can be read back.
///
/// Input is injected by the caller and only becomes visible on the next event pump, the
/// same way native events do.
#[derive(Debug)]
pub struct HeadlessRenderer {
    width: u32,
    height: u32,
    texels: Vec<u8>,
    uploads: usize,
    frames: usize,
    pending: VecDeque<InputEvent>,
}

impl HeadlessRenderer {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Texel of the uploaded texture as `[r, g, b, a]`.
    pub fn texel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let idx = (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL;
        let mut px = [0; 4];
        px.copy_from_slice(&self.texels[idx..idx + BYTES_PER_PIXEL]);
        Some(px)
    }

    pub fn texels(&self) -> &[u8] {
        &self.texels
    }

    /// Number of texture uploads so far.
    pub fn upload_count(&self) -> usize {
        self.uploads
    }

    /// Number of rendered frames so far.
    pub fn frame_count(&self) -> usize {
        self.frames
    }

    pub fn push_key(&mut self, key: Key, pressed: bool) {
        self.pending.push_back(InputEvent::Key { key, pressed });
    }

    pub fn request_close(&mut self) {
        self.pending.push_back(InputEvent::CloseRequested);
    }

    pub fn lose_focus(&mut self) {
        self.pending.push_back(InputEvent::FocusLost);
    }
}

impl Renderer for HeadlessRenderer {
    fn create(config: &ContextConfig) -> Result<Self> {
        if config.width == 0 || config.height == 0 {
            return Err(Error::ContextCreationFailed(format!(
                "invalid size {}x{}",
                config.width, config.height
            )));
        }

        log::debug!(
            "Headless renderer \"{}\" {}x{}",
            config.title,
            config.width,
            config.height
        );

        Ok(Self {
            width: config.width,
            height: config.height,
            texels: vec![0; config.width as usize * config.height as usize * BYTES_PER_PIXEL],
            uploads: 0,
            frames: 0,
            pending: VecDeque::new(),
        })
    }

    fn pump_events(&mut self, input: &mut InputState) {
        for event in self.pending.drain(..) {
            match event {
                InputEvent::Key { key, pressed } => input.set_key(key, pressed),
                InputEvent::CloseRequested => input.request_close(),
                InputEvent::FocusLost => input.release_all(),
            }
        }
    }

    fn upload(&mut self, pixels: &[u8]) {
        if pixels.len() != self.texels.len() {
            log::warn!(
                "Ignoring upload of {} bytes into a {} byte texture",
                pixels.len(),
                self.texels.len()
            );
            return;
        }
        self.texels.copy_from_slice(pixels);
        self.uploads += 1;
    }

    fn render(&mut self) -> Result<()> {
        self.frames += 1;
        Ok(())
    }
}
