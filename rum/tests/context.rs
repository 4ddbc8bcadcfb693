use rum::{Context, ContextConfig, Error, Event, HeadlessRenderer, ImageFormat, Key, QUIT_EVENT_ID};

type Headless = Context<HeadlessRenderer>;

fn open(width: u32, height: u32) -> Headless {
    Context::open(&ContextConfig::new("test", width, height)).unwrap()
}

#[test]
fn terminate_is_idempotent() {
    let mut ctx = Headless::new();
    ctx.terminate();
    ctx.terminate();
    assert!(!ctx.is_initialized());

    ctx.initialize(&ContextConfig::new("test", 4, 4)).unwrap();
    assert!(ctx.is_initialized());
    ctx.terminate();
    ctx.terminate();
    assert!(!ctx.is_initialized());
}

#[test]
fn second_initialize_is_rejected_and_keeps_state() {
    let mut ctx = open(4, 4);
    ctx.copy_image(ImageFormat::Rgba, &[9, 8, 7, 6], 1, 1, 2, 2)
        .unwrap();

    let err = ctx
        .initialize(&ContextConfig::new("other", 16, 16))
        .unwrap_err();
    assert!(matches!(err, Error::AlreadyInitialized));

    let fb = ctx.framebuffer().unwrap();
    assert_eq!((fb.width(), fb.height()), (4, 4));
    assert_eq!(fb.pixel(2, 2), Some([9, 8, 7, 6]));
}

#[test]
fn reinitialize_after_terminate() {
    let mut ctx = open(4, 4);
    ctx.terminate();
    ctx.initialize(&ContextConfig::new("again", 2, 3)).unwrap();
    let fb = ctx.framebuffer().unwrap();
    assert_eq!((fb.width(), fb.height()), (2, 3));
    assert!(fb.as_bytes().iter().all(|b| *b == 0));
}

#[test]
fn zero_sized_window_fails_cleanly() {
    let mut ctx = Headless::new();
    let err = ctx
        .initialize(&ContextConfig::new("empty", 0, 10))
        .unwrap_err();
    assert!(matches!(err, Error::ContextCreationFailed(_)));
    assert!(!ctx.is_initialized());
}

#[test]
fn uninitialized_operations_report_it() {
    let mut ctx = Headless::new();
    assert!(matches!(
        ctx.copy_image(ImageFormat::Rgb, &[0, 0, 0], 1, 1, 0, 0),
        Err(Error::NotInitialized)
    ));
    assert!(matches!(ctx.present(), Err(Error::NotInitialized)));
    assert!(matches!(ctx.poll_event(QUIT_EVENT_ID), Err(Error::NotInitialized)));
    assert!(matches!(ctx.check_event(Event::Quit), Err(Error::NotInitialized)));
    assert!(ctx.framebuffer().is_err());
}

#[test]
fn white_pixel_round_trips_through_the_texture() {
    let mut ctx = open(8, 8);
    ctx.copy_image(ImageFormat::Rgba, &[255, 255, 255, 255], 1, 1, 0, 0)
        .unwrap();
    ctx.present().unwrap();

    let renderer = ctx.renderer().unwrap();
    assert_eq!(renderer.texel(0, 0), Some([255, 255, 255, 255]));
    assert_eq!(renderer.texel(1, 0), Some([0, 0, 0, 0]));
}

#[test]
fn clean_frames_skip_the_upload() {
    let (w, h) = (5u32, 4u32);
    let mut ctx = open(w, h);

    let image: Vec<u8> = (0..w * h).flat_map(|i| [i as u8, 1, 2]).collect();
    ctx.copy_image(ImageFormat::Rgb, &image, w as u64, h as u64, 0, 0)
        .unwrap();

    ctx.present().unwrap();
    assert!(!ctx.framebuffer().unwrap().is_dirty());
    ctx.present().unwrap();

    let renderer = ctx.renderer().unwrap();
    assert_eq!(renderer.upload_count(), 1);
    assert_eq!(renderer.frame_count(), 2);
    assert_eq!(renderer.texel(4, 3), Some([19, 1, 2, 255]));
    assert_eq!(renderer.texels(), ctx.framebuffer().unwrap().as_bytes());
}

#[test]
fn fully_clipped_copy_still_uploads() {
    let mut ctx = open(4, 4);
    ctx.present().unwrap();
    assert_eq!(ctx.renderer().unwrap().upload_count(), 0);

    ctx.copy_image(ImageFormat::Rgb, &[1, 2, 3], 1, 1, -5, -5)
        .unwrap();
    ctx.present().unwrap();
    assert_eq!(ctx.renderer().unwrap().upload_count(), 1);
}

#[test]
fn edge_straddling_blit_reaches_the_texture() {
    let mut ctx = open(4, 4);
    let image = [50u8; 3 * 3 * 4];
    ctx.copy_image(ImageFormat::Rgba, &image, 3, 3, 2, -1).unwrap();
    ctx.present().unwrap();

    let renderer = ctx.renderer().unwrap();
    let mut touched = vec![];
    for y in 0..4 {
        for x in 0..4 {
            if renderer.texel(x, y) != Some([0, 0, 0, 0]) {
                touched.push((x, y));
            }
        }
    }
    assert_eq!(touched, vec![(2, 0), (3, 0), (2, 1), (3, 1)]);
}

#[test]
fn keys_are_level_triggered() {
    let mut ctx = open(2, 2);
    assert!(!ctx.check_event(Key::Space.into()).unwrap());

    ctx.renderer_mut().unwrap().push_key(Key::Space, true);
    assert!(ctx.check_event(Key::Space.into()).unwrap());
    // Held keys stay down across polls.
    assert!(ctx.poll_event(Key::Space.code()).unwrap());

    ctx.renderer_mut().unwrap().push_key(Key::Space, false);
    assert!(!ctx.poll_event(32).unwrap());
}

#[test]
fn quit_is_reported_once_requested() {
    let mut ctx = open(2, 2);
    assert!(!ctx.poll_event(QUIT_EVENT_ID).unwrap());

    ctx.renderer_mut().unwrap().request_close();
    assert!(ctx.poll_event(QUIT_EVENT_ID).unwrap());
    assert!(ctx.check_event(Event::Quit).unwrap());
}

#[test]
fn unknown_event_ids_still_pump() {
    let mut ctx = open(2, 2);
    ctx.renderer_mut().unwrap().push_key(Key::Escape, true);

    assert!(!ctx.poll_event(-1).unwrap());
    assert!(!ctx.poll_event(349).unwrap());
    assert!(!ctx.poll_event(33).unwrap());

    // The pending key press was consumed by the pumps above.
    assert!(ctx.check_event(Key::Escape.into()).unwrap());
}

#[test]
fn focus_loss_releases_keys() {
    let mut ctx = open(2, 2);
    let renderer = ctx.renderer_mut().unwrap();
    renderer.push_key(Key::Up, true);
    renderer.lose_focus();

    assert!(!ctx.check_event(Key::Up.into()).unwrap());
}
