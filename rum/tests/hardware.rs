// Runs in its own test binary: it edits the process environment.
#![cfg(target_os = "linux")]

use rum::{Context, ContextConfig, Error, HardwareRenderer};

#[test]
fn missing_display_fails_initialize() {
    std::env::remove_var("DISPLAY");
    std::env::remove_var("WAYLAND_DISPLAY");

    let mut ctx = Context::<HardwareRenderer>::new();
    let err = ctx
        .initialize(&ContextConfig::new("no display", 64, 64))
        .unwrap_err();

    assert!(matches!(err, Error::ContextCreationFailed(_)));
    assert!(!ctx.is_initialized());
    assert!(matches!(ctx.present(), Err(Error::NotInitialized)));
}
