//! Headless rig simulation.
//!
//! Drives a [`CameraRig`] through a scripted session (switching through every
//! slot, zooming the mid-shot, looking around in first person) and logs what
//! the rig does. Run with `RUST_LOG=debug` to see every switch.

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::thread;

use camrig::camera::{CameraRig, RenderTargetSet, SlotId};
use camrig::input::{InputEvent, InputProcessor};
use camrig::options::Options;
use camrig::util::FrameTiming;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "camrig", about = "Run a scripted camera rig session")]
struct Args {
    /// TOML options preset (defaults are used when omitted).
    #[arg(long)]
    options: Option<PathBuf>,

    /// Number of frames to simulate.
    #[arg(long, default_value_t = 600)]
    frames: u32,

    /// Target frame rate.
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Pace frames in real time instead of stepping a fixed 1/fps.
    #[arg(long)]
    realtime: bool,
}

/// One scripted input for a given frame.
enum Cue {
    Key(&'static str, bool),
    Pointer(f32, f32),
}

/// Input script keyed by frame number, assuming 60 fps.
fn cues(frame: u32) -> Vec<Cue> {
    match frame {
        60 => vec![Cue::Key("Digit2", true), Cue::Key("Digit2", false)],
        120 => vec![Cue::Key("KeyZ", true)],
        180 => vec![Cue::Key("KeyZ", false)],
        240 => vec![Cue::Key("Digit3", true), Cue::Key("Digit3", false)],
        // Select again mid-blend; the rig drops it.
        245 => vec![Cue::Key("Digit4", true), Cue::Key("Digit4", false)],
        280..=330 => vec![Cue::Pointer(3.0, -1.0)],
        360 => vec![Cue::Key("Digit4", true), Cue::Key("Digit4", false)],
        540 => vec![Cue::Key("Digit1", true), Cue::Key("Digit1", false)],
        _ => Vec::new(),
    }
}

fn load_options(path: Option<&Path>) -> Result<Options, camrig::RigError> {
    match path {
        Some(path) => Options::load(path),
        None => Ok(Options::default()),
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let options = match load_options(args.options.as_deref()) {
        Ok(options) => options,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let mut targets = RenderTargetSet::default();
    let mut rig = CameraRig::new(&options.scene, options.rig.clone(), &mut targets);
    let mut input = InputProcessor::with_key_bindings(options.keybindings);
    let mut timing = FrameTiming::new(args.fps);
    let fixed_dt = 1.0 / args.fps.max(1) as f32;
    let mut last_active = rig.active_slot();

    for frame in 0..args.frames {
        for cue in cues(frame) {
            match cue {
                Cue::Key(key, pressed) => {
                    let _ = input.handle_key(key, pressed);
                }
                Cue::Pointer(dx, dy) => {
                    input.handle_event(InputEvent::PointerMotion { dx, dy });
                }
            }
        }

        let dt = if args.realtime {
            if !timing.should_render() {
                thread::sleep(timing.time_until_next_frame());
            }
            timing.end_frame()
        } else {
            fixed_dt
        };

        let frame_input = input.take_frame();
        rig.update(dt, &frame_input, &mut targets);

        if rig.active_slot() != last_active {
            last_active = rig.active_slot();
            log::info!(
                "frame {frame}: now showing the {} camera",
                last_active.name()
            );
        }
        if frame % 60 == 0 {
            log_rig(frame, &rig);
        }
    }

    log_rig(args.frames, &rig);
    if args.realtime {
        log::info!(
            "average {:.1} fps, last frame {:.1} ms",
            timing.fps(),
            timing.dt() * 1000.0
        );
    }
    ExitCode::SUCCESS
}

fn log_rig(frame: u32, rig: &CameraRig) {
    let camera = rig.active_camera();
    log::info!(
        "frame {frame}: {} at {:.2} facing {:.2}, fov {:.1}{}",
        camera.id.name(),
        camera.pose.position,
        camera.forward(),
        camera.fovy,
        if rig.state().is_transitioning() {
            format!(
                ", blending ({:.0}%)",
                rig.state().transition_progress().min(1.0) * 100.0
            )
        } else {
            String::new()
        }
    );
    let path = rig.path();
    if rig.active_slot() == SlotId::PathFollower {
        log::debug!(
            "frame {frame}: heading to waypoint {} of {}",
            path.index(),
            path.points().len()
        );
    }
}
