//! # rum
//!
//! Opens a window and shows a CPU-side RGBA framebuffer in it. Images are blitted into
//! the framebuffer at arbitrary offsets (clipped to the window), and the whole buffer is
//! uploaded to a GPU texture and drawn as one full-screen quad per frame.
//!
//! ```no_run
//! use rum::{Context, ContextConfig, Event, ImageFormat, Key};
//!
//! # fn main() -> rum::Result<()> {
//! let mut ctx: Context = Context::open(&ContextConfig::new("Rum Example", 640, 480))?;
//! ctx.copy_image(ImageFormat::Rgb, &[255, 0, 0], 1, 1, 10, 10)?;
//!
//! while !ctx.check_event(Event::Quit)? && !ctx.check_event(Key::Escape.into())? {
//!     ctx.present()?;
//! }
//! # Ok(())
//! # }
//! ```

/// Context owning the window, framebuffer and renderer
pub mod context;
pub use context::Context;

pub mod config;
pub use config::ContextConfig;

pub mod error;
pub use error::{Error, Result};

/// Keyboard and window events
pub mod event;
pub use event::{Event, InputState, Key, QUIT_EVENT_ID};

pub mod framebuffer;
pub use framebuffer::{Framebuffer, ImageFormat};

/// Vector and matrix helpers
pub mod math;

pub mod renderer;
pub use renderer::{
    backend::{hardware::HardwareRenderer, headless::HeadlessRenderer},
    Filter, Renderer, TextureConfig, Wrap,
};

pub mod vertex;
