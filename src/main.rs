//! Headless simulator for the timer view.
//!
//! Runs a scripted session against in-memory collaborators on a manual
//! clock and logs every layout state and the settled attribute values.
//! Pass a TOML options file as the first argument to try a preset;
//! `RUST_LOG=debug` shows individual transitions.

use std::path::Path;

use cubeview::animation::AttributeKey;
use cubeview::error::ViewError;
use cubeview::headless::{HeadlessRig, FRAME};
use cubeview::layout::WindowSize;
use cubeview::options::Options;
use cubeview::view::{
    AppView, InitialContent, LatestSolve, TimerInput, ViewEvent,
};

fn load_options() -> Options {
    let Some(path) = std::env::args().nth(1) else {
        return Options::default();
    };
    match Options::load(Path::new(&path)) {
        Ok(options) => {
            log::info!("loaded options from {path}");
            options
        }
        Err(e) => {
            log::warn!("{e}; using defaults");
            Options::default()
        }
    }
}

fn report(step: &str, view: &AppView) {
    let state = serde_json::to_string(&view.state())
        .unwrap_or_else(|e| format!("<{e}>"));
    log::info!("[{step}] state {state}");
    let attributes: Vec<String> = view
        .attributes()
        .iter()
        .map(|(key, value)| format!("{}={value:.1}", key.name()))
        .collect();
    log::info!("[{step}] {}", attributes.join(" "));
}

fn settle(rig: &HeadlessRig, view: &mut AppView, step: &str) {
    let frames = rig.settle(view);
    log::debug!("[{step}] settled after {frames} frames");
    report(step, view);
}

fn run() -> Result<(), ViewError> {
    let rig = HeadlessRig::new(WindowSize::new(1280.0, 900.0));
    let initial = InitialContent {
        latest_solve: Some(LatestSolve {
            time_ms: 12_340,
            memo_ms: Some(4_100),
            ..LatestSolve::default()
        }),
        timer_input: TimerInput::Keyboard,
        touch_device: false,
    };
    let mut view = rig.build(load_options(), initial)?;
    view.events_mut().subscribe(|event: &ViewEvent| {
        log::info!("event {}", event.name());
    });
    report("initial", &view);

    view.fonts_loaded();
    for entry in rig.stage.record().played {
        let _ = rig.clock.advance(entry.delay + entry.duration);
        view.entry_animation_finished(entry.token);
    }

    view.set_scramble(Some("R U R' U' F2 D L2 B' R2 U2"))?;
    view.set_pb(Some("PB 9.87"))?;
    settle(&rig, &mut view, "content");

    view.toggle_footer()?;
    settle(&rig, &mut view, "footer closed");
    view.toggle_footer()?;
    settle(&rig, &mut view, "footer open");

    view.resize_footer(360.0)?;
    report("footer dragged", &view);

    for height in [700.0, 560.0, 420.0, 900.0] {
        rig.window.set_size(WindowSize::new(1280.0, height));
        view.handle_window_resize()?;
        settle(&rig, &mut view, &format!("window {height}"));
    }

    view.set_theater_mode(true)?;
    let _ = rig.advance(&mut view, FRAME * 10);
    report("theater mid-flight", &view);
    settle(&rig, &mut view, "theater");
    view.set_theater_mode(false)?;
    settle(&rig, &mut view, "theater off");
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    if let Err(e) = run() {
        log::error!("simulation failed: {e}");
        std::process::exit(1);
    }
}
