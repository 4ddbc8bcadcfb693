use crate::{
    config::ContextConfig,
    error::{Error, Result},
    event::{Event, InputState},
    framebuffer::{Framebuffer, ImageFormat},
    renderer::{backend::hardware::HardwareRenderer, Renderer},
};

struct Active<R> {
    renderer: R,
    framebuffer: Framebuffer,
    input: InputState,
}

/// One window with a CPU framebuffer that is blitted to the screen on [`Context::present`].
///
/// A context starts out uninitialized. [`Context::initialize`] opens the window and
/// [`Context::terminate`] (or dropping the context) closes it again.
pub struct Context<R: Renderer = HardwareRenderer> {
    active: Option<Active<R>>,
}

impl<R: Renderer> Default for Context<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Renderer> Context<R> {
    pub fn new() -> Self {
        Self { active: None }
    }

    /// Create a context and initialize it right away.
    pub fn open(config: &ContextConfig) -> Result<Self> {
        let mut context = Self::new();
        context.initialize(config)?;
        Ok(context)
    }

    pub fn initialize(&mut self, config: &ContextConfig) -> Result<()> {
        if self.active.is_some() {
            return Err(Error::AlreadyInitialized);
        }

        let renderer = R::create(config)?;
        self.active = Some(Active {
            renderer,
            framebuffer: Framebuffer::new(config.width, config.height),
            input: InputState::new(),
        });

        Ok(())
    }

    /// Release the window and all resources. Does nothing if not initialized.
    pub fn terminate(&mut self) {
        if let Some(active) = self.active.take() {
            log::info!(
                "Terminating {}x{} context",
                active.framebuffer.width(),
                active.framebuffer.height()
            );
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.active.is_some()
    }

    /// Blit an image into the framebuffer, see [`Framebuffer::copy_image`].
    pub fn copy_image(
        &mut self,
        format: ImageFormat,
        pixels: &[u8],
        src_width: u64,
        src_height: u64,
        dst_x: i32,
        dst_y: i32,
    ) -> Result<()> {
        self.active_mut()?
            .framebuffer
            .copy_image(format, pixels, src_width, src_height, dst_x, dst_y);
        Ok(())
    }

    /// Upload the framebuffer if it changed since the last frame, then draw it.
    pub fn present(&mut self) -> Result<()> {
        let active = self.active_mut()?;

        if active.framebuffer.take_dirty() {
            active.renderer.upload(active.framebuffer.as_bytes());
        }

        active.renderer.render()
    }

    /// Pump native events, then report whether `event` is currently active.
    pub fn check_event(&mut self, event: Event) -> Result<bool> {
        let active = self.active_mut()?;
        active.renderer.pump_events(&mut active.input);
        Ok(active.input.is_active(event))
    }

    /// Like [`Context::check_event`], with the event given by its numeric id.
    ///
    /// Ids that name no event are answered with `false`, after pumping events all the same.
    pub fn poll_event(&mut self, event_id: i32) -> Result<bool> {
        match Event::from_id(event_id) {
            Some(event) => self.check_event(event),
            None => {
                let active = self.active_mut()?;
                active.renderer.pump_events(&mut active.input);
                Ok(false)
            }
        }
    }

    pub fn framebuffer(&self) -> Result<&Framebuffer> {
        self.active
            .as_ref()
            .map(|active| &active.framebuffer)
            .ok_or(Error::NotInitialized)
    }

    pub fn framebuffer_mut(&mut self) -> Result<&mut Framebuffer> {
        Ok(&mut self.active_mut()?.framebuffer)
    }

    pub fn renderer(&self) -> Result<&R> {
        self.active
            .as_ref()
            .map(|active| &active.renderer)
            .ok_or(Error::NotInitialized)
    }

    pub fn renderer_mut(&mut self) -> Result<&mut R> {
        Ok(&mut self.active_mut()?.renderer)
    }

    fn active_mut(&mut self) -> Result<&mut Active<R>> {
        self.active.as_mut().ok_or(Error::NotInitialized)
    }
}

impl<R: Renderer> Drop for Context<R> {
    fn drop(&mut self) {
        self.terminate();
    }
}
