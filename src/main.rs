// src/main.rs
use nannou::prelude::*;
use std::time::Instant;

use crystalvis::{
    config::Config,
    draw::NannouSurface,
    models::SurfaceSize,
    render::{Palette, PendingFrame, ShapeParams, ShapeRenderer, TickOutcome},
    services::{ResizeDebouncer, VisibilityTracker},
    utilities::init_tracing,
    views::Theme,
};

struct Model {
    // Core components:
    renderer: ShapeRenderer,
    frames: PendingFrame,

    // Host state:
    resize: ResizeDebouncer,
    visibility: VisibilityTracker,
    theme: Theme,

    // Rendering components:
    draw: nannou::Draw,
}

fn main() {
    init_tracing();
    nannou::app(model).update(update).run();
}

fn model(app: &App) -> Model {
    // Load config
    let config = match Config::load() {
        Ok((config, path)) => {
            tracing::info!("Loaded config from {}", path.display());
            config
        }
        Err(e) => {
            tracing::warn!("Using default config: {}", e);
            Config::default()
        }
    };

    // Create window
    let window_id = app
        .new_window()
        .title(&config.window.title)
        .size(config.window.width, config.window.height)
        .view(view)
        .key_pressed(key_pressed)
        .resized(resized)
        .focused(focused)
        .unfocused(unfocused)
        .raw_event(raw_window_event)
        .build()
        .expect("Failed to create window");
    let window = app.window(window_id).expect("Window closed during setup");
    let (width, height) = window.inner_size_points();
    let size = SurfaceSize::from_points(width, height);

    let mut frames = PendingFrame::new();
    let renderer = ShapeRenderer::new(
        size,
        ShapeParams::from_config(&config),
        Palette::from_config(&config.palette, &config.edges, &config.glow),
        &mut frames,
    );

    tracing::info!(
        "crystalvis started: {}x{} surface, {} theme",
        size.width,
        size.height,
        config.theme.name()
    );

    Model {
        renderer,
        frames,
        resize: ResizeDebouncer::from_millis(config.resize.debounce_ms),
        visibility: VisibilityTracker::new(config.visibility.pause_when_unfocused),
        theme: config.theme,
        draw: nannou::Draw::new(),
    }
}

fn key_pressed(app: &App, model: &mut Model, key: Key) {
    match key {
        Key::T => {
            model.theme = model.theme.toggled();
            tracing::info!("Theme switched to {}", model.theme.name());
        }
        Key::Q | Key::Escape => {
            model.renderer.loop_handle().stop();
            tracing::info!("Frame loop stopped");
            app.quit();
        }
        _ => (),
    }
}

fn resized(_app: &App, model: &mut Model, dim: Vec2) {
    let size = SurfaceSize::from_points(dim.x, dim.y);
    if model.visibility.set_minimized(size.is_empty()) {
        tracing::debug!("Window visible: {}", model.visibility.is_visible());
    }
    model.resize.notify(size, Instant::now());
}

fn focused(_app: &App, model: &mut Model) {
    if model.visibility.set_focused(true) {
        tracing::debug!("Window visible: {}", model.visibility.is_visible());
    }
}

fn unfocused(_app: &App, model: &mut Model) {
    if model.visibility.set_focused(false) {
        tracing::debug!("Window visible: {}", model.visibility.is_visible());
    }
}

// nannou has no occlusion event of its own; read it from winit
fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    if let nannou::winit::event::WindowEvent::Occluded(occluded) = event {
        if model.visibility.set_occluded(*occluded) {
            tracing::debug!("Window visible: {}", model.visibility.is_visible());
        }
    }
}

fn update(_app: &App, model: &mut Model, _update: Update) {
    if let Some(size) = model.resize.poll(Instant::now()) {
        tracing::debug!("Resizing surface to {}x{}", size.width, size.height);
        model.renderer.resize(size);
    }

    // Only run a frame the renderer asked for
    if !model.frames.take() {
        return;
    }

    let mut surface = NannouSurface::new(
        &model.draw,
        model.renderer.state().size,
        model.theme.background(),
    );
    let outcome = model.renderer.tick(
        model.visibility.is_visible(),
        &mut surface,
        &mut model.frames,
    );
    if outcome == TickOutcome::Stopped {
        tracing::debug!("Frame loop no longer scheduling");
    }
}

// Present the last drawn frame
fn view(app: &App, model: &Model, frame: Frame) {
    if let Err(e) = model.draw.to_frame(app, &frame) {
        tracing::warn!("Failed to render frame: {:?}", e);
    }
}
