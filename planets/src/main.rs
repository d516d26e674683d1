//! Headless planets sandbox
//!
//! Runs a preset through the interaction controller at a fixed frame rate
//! and logs the bodies once per simulated second. Set `RUST_LOG=debug` for
//! per-event output.
//!
//! Usage: `planets [single|binary|ring] [seconds]`

use planets::scenario::Preset;
use planets::{Intent, Key, Sandbox, SandboxConfig, World};
use rand::SeedableRng;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let preset = args
        .next()
        .map(|name| {
            Preset::from_name(&name).unwrap_or_else(|| {
                log::warn!("Unknown preset {:?}, using binary", name);
                Preset::Binary
            })
        })
        .unwrap_or(Preset::Binary);
    let seconds: u32 = args.next().and_then(|s| s.parse().ok()).unwrap_or(10);

    let config = SandboxConfig::default();
    let mut rng = rand::rngs::StdRng::seed_from_u64(0);
    let world = World::new(&config).and_then(|mut world| {
        preset.build(&mut world, &mut rng)?;
        Ok(world)
    });
    let mut sandbox = match world {
        Ok(world) => Sandbox::from_world(&config, world),
        Err(err) => {
            log::error!("Failed to build {:?}: {}", preset, err);
            return;
        }
    };

    // follow the first body and start the clock, as a user would
    let scripted = [
        Intent::RightClick {
            screen: config.screen_size / 2.0,
        },
        Intent::Key(Key::Space),
    ];
    for intent in scripted {
        if let Err(err) = sandbox.handle(intent) {
            log::warn!("{}", err);
        }
    }

    let dt = config.frame_dt();
    let frames = seconds.saturating_mul(config.fps);
    log::info!("Running {:?} for {} frames at {} Hz", preset, frames, config.fps);

    for frame in 1..=frames {
        sandbox.tick(dt);
        if frame % config.fps == 0 {
            report(&sandbox, frame / config.fps);
        }
    }
}

fn report(sandbox: &Sandbox, second: u32) {
    let world = sandbox.world();
    let p = world.total_momentum();
    log::info!(
        "t={}s bodies={} momentum=({:.6}, {:.6}) kinetic={:.3}",
        second,
        world.len(),
        p.x,
        p.y,
        world.kinetic_energy()
    );
    for body in world.snapshot() {
        let screen = sandbox.real_to_screen(body.position);
        log::debug!(
            "  body {} at ({:.3}, {:.3}) screen ({:.1}, {:.1}) v=({:.3}, {:.3})",
            body.id,
            body.position.x,
            body.position.y,
            screen.x,
            screen.y,
            body.velocity.x,
            body.velocity.y
        );
    }
}
