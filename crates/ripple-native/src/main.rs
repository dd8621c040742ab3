mod config;
mod input;
mod overlay;
mod render;

use anyhow::Context;
use clap::Parser;
use ripple_core::{FrameInfo, Renderer, SensorDataset, BUNDLED_DATA_JSON};
use std::time::Instant;
use winit::{
    event::*,
    event_loop::EventLoop,
    keyboard::{Key, NamedKey},
    window::WindowBuilder,
};

fn load_dataset(args: &config::Args) -> anyhow::Result<SensorDataset> {
    match &args.data {
        Some(path) => {
            let raw = std::fs::read(path)
                .with_context(|| format!("reading sensor data from {}", path.display()))?;
            SensorDataset::load(&raw)
                .with_context(|| format!("parsing sensor data from {}", path.display()))
        }
        None => {
            SensorDataset::from_json_str(BUNDLED_DATA_JSON).context("parsing bundled sensor data")
        }
    }
}

fn key_name(key: &Key) -> Option<&str> {
    match key {
        Key::Named(NamedKey::ArrowUp) => Some("ArrowUp"),
        Key::Named(NamedKey::ArrowDown) => Some("ArrowDown"),
        Key::Character(c) => Some(c.as_str()),
        _ => None,
    }
}

fn run(args: config::Args) -> anyhow::Result<()> {
    let dataset = load_dataset(&args)?;
    let mut renderer = Renderer::with_resolution(dataset, args.resolution)?;
    log::info!("quadrants: {}", overlay::describe_labels());

    let event_loop = EventLoop::new().context("creating event loop")?;
    let window = WindowBuilder::new()
        .with_title(overlay::APP_TITLE)
        .build(&event_loop)
        .context("creating window")?;

    let mut gpu = pollster::block_on(render::GpuState::new(&window))?;
    let start = Instant::now();
    let mut last_timestamp = None;

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent {
            event: WindowEvent::Resized(size),
            ..
        } => gpu.resize(size),
        Event::WindowEvent {
            event: WindowEvent::CloseRequested,
            ..
        } => elwt.exit(),
        Event::WindowEvent {
            event:
                WindowEvent::KeyboardInput {
                    event:
                        KeyEvent {
                            logical_key,
                            state: ElementState::Pressed,
                            ..
                        },
                    ..
                },
            ..
        } => {
            let delta = key_name(&logical_key).and_then(input::resolution_delta_for_key);
            if let Some(delta) = delta {
                let next = input::stepped_resolution(renderer.resolution(), delta);
                if let Err(e) = renderer.set_resolution(next) {
                    log::warn!("{e}");
                }
            }
        }
        Event::AboutToWait => {
            let time = start.elapsed().as_secs_f32();
            match renderer.tick(time, &mut gpu) {
                Ok(FrameInfo { timestamp, .. }) => {
                    if last_timestamp != Some(timestamp) {
                        last_timestamp = Some(timestamp);
                        let title = overlay::window_title(&overlay::format_timestamp(timestamp));
                        gpu.window.set_title(&title);
                    }
                }
                Err(e) => {
                    log::error!("frame update failed: {e}");
                    elwt.exit();
                    return;
                }
            }
            match gpu.render() {
                Ok(_) => gpu.window.request_redraw(),
                Err(wgpu::SurfaceError::Lost) => gpu.resize(gpu.window.inner_size()),
                Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                Err(_) => {}
            }
        }
        _ => {}
    })?;
    Ok(())
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = config::Args::parse();
    if let Err(e) = run(args) {
        log::error!("{e:#}");
        std::process::exit(1);
    }
}
