use std::path::PathBuf;

use anyhow::Result;
use rum::{Context, Event, Key};

mod config;
mod utils;

use config::Config;
use utils::Sprite;

const MOVES: [(Key, i32, i32); 4] = [
    (Key::Left, -1, 0),
    (Key::Right, 1, 0),
    (Key::Up, 0, -1),
    (Key::Down, 0, 1),
];

struct State {
    ctx: Context,
    sprite: Sprite,
    x: i32,
    y: i32,
    needs_redraw: bool,
}

impl State {
    fn new(config: &Config) -> Result<Self> {
        let ctx = Context::open(&config.context)?;

        let sprite = match &config.image {
            Some(path) => utils::load_image(path)?,
            None => utils::gradient(128, 128),
        };

        let x = (config.context.width as i32 - sprite.width as i32) / 2;
        let y = (config.context.height as i32 - sprite.height as i32) / 2;

        Ok(Self {
            ctx,
            sprite,
            x,
            y,
            needs_redraw: true,
        })
    }

    /// Returns `false` once the demo should exit.
    fn input(&mut self, config: &Config) -> Result<bool> {
        if self.ctx.check_event(Event::Quit)? || self.ctx.check_event(config.quit_key.into())? {
            return Ok(false);
        }

        for (key, dx, dy) in MOVES {
            if self.ctx.check_event(key.into())? {
                self.x += dx * config.step;
                self.y += dy * config.step;
                self.needs_redraw = true;
            }
        }

        Ok(true)
    }

    fn render(&mut self, config: &Config) -> Result<()> {
        if self.needs_redraw {
            self.ctx.framebuffer_mut()?.fill(config.background);
            self.ctx.copy_image(
                self.sprite.format,
                &self.sprite.pixels,
                self.sprite.width as u64,
                self.sprite.height as u64,
                self.x,
                self.y,
            )?;
            self.needs_redraw = false;
        }

        self.ctx.present()?;
        Ok(())
    }
}

fn init_logging() {
    use fern::colors::ColoredLevelConfig;

    let colors = ColoredLevelConfig::new();
    let result = fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{}[{}][{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.target(),
                colors.color(record.level()),
                message
            ))
        })
        .level(log::LevelFilter::Info)
        .chain(std::io::stdout())
        .apply();

    if let Err(e) = result {
        eprintln!("Failed to set up logging: {}", e);
    }
}

fn run() -> Result<()> {
    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("config.yml"));
    let config = config::load_or_create(&config_path)?;

    let mut state = State::new(&config)?;

    while state.input(&config)? {
        state.render(&config)?;
    }

    state.ctx.terminate();

    Ok(())
}

fn main() {
    init_logging();

    log::info!(
        "rum-demo {} {} built {}",
        env!("CARGO_PKG_VERSION"),
        env!("VERGEN_CARGO_PROFILE"),
        env!("VERGEN_BUILD_TIMESTAMP")
    );
    log::info!(
        "Toolchain: {}@{} target {}",
        env!("VERGEN_RUSTC_CHANNEL"),
        env!("VERGEN_RUSTC_SEMVER"),
        env!("VERGEN_CARGO_TARGET_TRIPLE")
    );

    if let Err(e) = run() {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}
