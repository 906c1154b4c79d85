//! Demo driver: fires one item-use event at the tunnel trigger and reports
//! what was built into an in-memory world.

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use shieldbore_core::Vec3;
use shieldbore_tunnel::{
    ItemUseEvent, MountQuery, PositionSource, TunnelTrigger, DEFAULT_TRIGGER_ITEM,
};
use shieldbore_world::GridWorld;

/// Simulation parameters (from CLI or defaults).
#[derive(Debug, Clone)]
struct Params {
    item: String,
    position: Vec3,
    facing: Vec3,
    mounted: bool,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            item: DEFAULT_TRIGGER_ITEM.to_string(),
            position: Vec3::new(0.0, 64.0, 0.0),
            facing: Vec3::new(1.0, 0.0, 0.0),
            mounted: false,
        }
    }
}

impl Params {
    /// Parse simulation parameters from command line arguments.
    fn from_args() -> Self {
        let mut params = Self::default();
        let args: Vec<String> = std::env::args().collect();

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--item" => {
                    if i + 1 < args.len() {
                        params.item = args[i + 1].clone();
                        i += 1;
                    }
                }
                "--pos" => {
                    if i + 1 < args.len() {
                        if let Some(v) = parse_vec3(&args[i + 1]) {
                            params.position = v;
                            i += 1;
                        }
                    }
                }
                "--facing" => {
                    if i + 1 < args.len() {
                        if let Some(v) = parse_vec3(&args[i + 1]) {
                            params.facing = v;
                            i += 1;
                        }
                    }
                }
                "--mounted" => params.mounted = true,
                _ => {}
            }
            i += 1;
        }

        params
    }
}

/// Parse `"x,y,z"` into a vector.
fn parse_vec3(s: &str) -> Option<Vec3> {
    let mut parts = s.split(',').map(str::trim).map(str::parse::<f64>);
    let x = parts.next()?.ok()?;
    let y = parts.next()?.ok()?;
    let z = parts.next()?.ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Vec3::new(x, y, z))
}

/// The simulated actor driving the trigger.
struct SimPlayer {
    position: Vec3,
    facing: Vec3,
    mounted: bool,
}

impl PositionSource for SimPlayer {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn facing(&self) -> Vec3 {
        self.facing
    }
}

impl MountQuery for SimPlayer {
    fn is_mounted(&self) -> bool {
        self.mounted
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let params = Params::from_args();
    info!(?params, "simulating item use");

    let player = SimPlayer {
        position: params.position,
        facing: params.facing,
        mounted: params.mounted,
    };
    let mut world = GridWorld::default();
    let trigger = TunnelTrigger::default();

    let applied = trigger.handle(
        &ItemUseEvent {
            item_id: &params.item,
            source: &player,
        },
        &mut world,
    )?;

    if applied == 0 {
        info!(item = params.item, "item did not match the trigger; nothing built");
    } else {
        info!(
            fills = applied,
            blocks = world.len(),
            walls = world.count_of("glass"),
            floor = world.count_of("redstone_block"),
            rails = world.count_of("golden_rail"),
            lanterns = world.count_of("lantern"),
            "tunnel complete"
        );
    }

    Ok(())
}
