use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    /// The window, the graphics adapter/device or the surface could not be created.
    #[error("failed to create window or rendering context: {0}")]
    ContextCreationFailed(String),

    #[error("context is already initialized")]
    AlreadyInitialized,

    #[error("context is not initialized")]
    NotInitialized,

    /// Presentation failed in a way that cannot be recovered by reconfiguring the surface.
    #[error("surface error: {0}")]
    Surface(#[from] wgpu::SurfaceError),

    #[error("unsupported image format: {0} bytes per pixel")]
    UnsupportedFormat(u32),
}
