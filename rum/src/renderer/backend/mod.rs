pub mod hardware;
pub mod headless;
