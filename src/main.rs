//! Headless orbit rig demo.
//!
//! Loads rig options from the TOML file given as the first argument (or uses
//! defaults), then swings the camera toward a target orbit and logs every
//! placement until it arrives. Run with `RUST_LOG=info` to see the output.

use std::path::PathBuf;
use std::process::ExitCode;

use glam::Vec3;
use log::{error, info};
use orbitech::options::Options;
use orbitech::orbit::Orbit;
use orbitech::OrbitError;

/// Simulated frame time in seconds.
const FRAME_TIME: f32 = 1.0 / 60.0;
/// Angular speed of the swing, in degrees per second.
const SWING_SPEED: f32 = 90.0;
/// Give up after this many frames.
const MAX_FRAMES: u32 = 600;

fn run(options_path: Option<PathBuf>) -> Result<(), OrbitError> {
    let options = match options_path {
        Some(path) => {
            info!("loading rig options from {}", path.display());
            Options::load(&path)?
        }
        None => Options::default(),
    };

    let mut camera = options.build_camera(Vec3::ZERO)?;
    let start = *camera.orbit();
    let target = Orbit::new(
        start.yaw() + 135.0,
        start.pitch() - 45.0,
        start.roll(),
        start.constraint(),
    );
    info!(
        "swinging from ({:.1}, {:.1}) to ({:.1}, {:.1})",
        start.yaw(),
        start.pitch(),
        target.yaw(),
        target.pitch()
    );

    for frame in 0..MAX_FRAMES {
        let next = Orbit::rotate_towards(
            camera.orbit(),
            &target,
            SWING_SPEED * FRAME_TIME,
        );
        camera.satellite_mut().replace_orbit(next);

        let placement = match camera.tick(FRAME_TIME) {
            Some(placement) => placement,
            None => camera.update_manually(FRAME_TIME)?,
        };
        info!(
            "frame {frame:>3}: yaw {:6.1} pitch {:6.1} position {:?}",
            next.yaw(),
            next.pitch(),
            placement.position
        );

        if Orbit::angular_delta(&next, &target) == Vec3::ZERO {
            info!("arrived after {} frames", frame + 1);
            return Ok(());
        }
    }

    info!("stopped after {MAX_FRAMES} frames");
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    match run(std::env::args_os().nth(1).map(PathBuf::from)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
