//! berlin — headless drive through central Berlin.
//!
//! Stands in for a map host: a fake map that tracks its centre and zoom,
//! a ~60 fps frame loop with jittered timestamps, and a scripted user who
//! toggles camera-follow, drags the map, stops, reverses, and finally starts
//! a second route.  The first route arrives from a loader thread, as it
//! would from a routing service.
//!
//! Usage: `berlin [config.json]` (any subset of `DriveConfig` fields).
//! Set `RUST_LOG=debug` to see every event and recenter.

mod route;

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use glam::{DMat4, DVec3};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use gd_core::{DriveConfig, GeoBounds, GeoPoint, Projection, WebMercator};
use gd_motion::TraversalPhase;
use gd_output::{CsvWriter, TrajectoryObserver};
use gd_sim::{MapHost, SimBuilder, UserEvent};
use gd_view::{CameraFrame, Gesture};

// ── Constants ─────────────────────────────────────────────────────────────────

const BERLIN:          GeoPoint = GeoPoint { lon: 13.405, lat: 52.52 };
const SEED:            u64      = 7;
const FRAME_MS:        f64      = 1000.0 / 60.0;
const JITTER_MS:       f64      = 2.0;
const MAX_FRAMES:      u64      = 60 * 60 * 5; // five minutes of driving
const OUTPUT_INTERVAL: u64      = 30;          // two rows per second
const OUTPUT_DIR:      &str     = "output/berlin";

/// Frame at which each scripted action happens.
enum Script {
    ModelLoaded,
    Event(UserEvent),
}

fn script(frame: u64) -> Option<Script> {
    let action = match frame {
        45    => Script::ModelLoaded,
        60    => Script::Event(UserEvent::ToggleFollow),
        600   => Script::Event(UserEvent::InteractionStart(Gesture::Drag)),
        660   => Script::Event(UserEvent::InteractionEnd(Gesture::Drag)),
        1200  => Script::Event(UserEvent::StopResume),
        1500  => Script::Event(UserEvent::StopResume),
        4200  => Script::Event(UserEvent::Reverse),
        6000  => Script::Event(UserEvent::StartNewRoute(
            route::parse_line_string(route::TIERGARTEN).ok()?,
        )),
        _ => return None,
    };
    Some(action)
}

// ── Headless map ──────────────────────────────────────────────────────────────

/// A map that only remembers where it is looking.
struct HeadlessMap {
    center:    GeoPoint,
    zoom:      f64,
    recenters: u64,
    fits:      u64,
}

impl HeadlessMap {
    fn new(center: GeoPoint, zoom: f64) -> Self {
        Self { center, zoom, recenters: 0, fits: 0 }
    }

    /// World → pixel matrix for the current view (no perspective).
    fn camera(&self) -> CameraFrame {
        let world_size = 512.0 * self.zoom.exp2();
        let center = WebMercator.project(self.center, 0.0).world;
        CameraFrame::new(
            DMat4::from_scale(DVec3::splat(world_size)) * DMat4::from_translation(-center),
        )
    }
}

impl MapHost for HeadlessMap {
    fn recenter(&mut self, center: GeoPoint) {
        log::trace!("map centre → {center}");
        self.center = center;
        self.recenters += 1;
    }

    fn fit_bounds(&mut self, bounds: GeoBounds, padding_px: f64) {
        let span_m = bounds.south_west.distance_m(bounds.north_east).max(1.0);
        // Fit the diagonal into ~800 px minus padding at the equator scale.
        let px = (800.0 - 2.0 * padding_px).max(1.0);
        self.zoom = (px * 40_075_016.7 / (512.0 * span_m)).log2().clamp(0.0, 20.0);
        self.center = bounds.center();
        self.fits += 1;
        log::info!("map fit to route around {} at zoom {:.1}", self.center, self.zoom);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn load_config() -> Result<DriveConfig> {
    let Some(path) = std::env::args().nth(1) else {
        return Ok(DriveConfig::default());
    };
    let text = std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
    let config = serde_json::from_str(&text).with_context(|| format!("parsing {path}"))?;
    Ok(config)
}

fn main() -> Result<()> {
    env_logger::init();

    println!("=== berlin — geodrive headless demo ===");
    let config = load_config()?;
    println!(
        "Speed: {} m/s  |  Heading offset: {:.3} rad  |  Follow: {}",
        config.default_speed_mps, config.heading_offset_rad, config.follow_camera
    );
    println!();

    // 1. Sim anchored on Berlin; the car model is still "loading".
    let mut sim = SimBuilder::new(config, WebMercator)
        .initial_anchor(BERLIN)
        .build()?;
    let mut map = HeadlessMap::new(BERLIN, 12.0);

    // 2. Deliver the first route from a loader thread.
    let sender = sim.route_sender();
    let loader = std::thread::spawn(move || -> Result<usize> {
        let coords = route::parse_line_string(route::FRIEDRICHSTRASSE)?;
        let n = coords.len();
        sender.send(coords);
        Ok(n)
    });
    let points = loader
        .join()
        .map_err(|_| anyhow::anyhow!("route loader panicked"))??;
    println!("Route delivered: {points} points");

    // 3. Output.
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut obs = TrajectoryObserver::new(writer, OUTPUT_INTERVAL);

    // 4. Frame loop.
    let mut rng = SmallRng::seed_from_u64(SEED);
    let mut now_ms = 0.0;
    let mut second_route = false;
    let t0 = Instant::now();

    for frame in 0..MAX_FRAMES {
        match script(frame) {
            Some(Script::ModelLoaded) => {
                if let Some(pose) = sim.agent_ready() {
                    log::info!("model loaded, placed at {:?}", pose.position);
                }
            }
            Some(Script::Event(event)) => {
                second_route |= matches!(event, UserEvent::StartNewRoute(_));
                if let Err(e) = sim.handle(event) {
                    log::warn!("event rejected: {e}");
                }
            }
            None => {}
        }

        now_ms += FRAME_MS + rng.gen_range(-JITTER_MS..JITTER_MS);
        let out = sim.frame(now_ms, &map.camera(), &mut map, &mut obs);

        if second_route && out.phase == TraversalPhase::Arrived {
            break;
        }
    }
    sim.finish(&mut obs);
    let elapsed = t0.elapsed();

    if let Some(e) = obs.take_error() {
        eprintln!("output error: {e}");
    }

    // 5. Summary.
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  frames              : {}", sim.current_frame().0);
    println!("  simulated time      : {:.1} s", now_ms / 1000.0);
    println!("  trajectory.csv      : {} rows", obs.rows_written());
    println!("  map recenters / fits: {} / {}", map.recenters, map.fits);
    println!();
    println!("{:<14} {}", "Phase", sim.phase());
    println!("{:<14} {}", "Position", sim.agent_geo());
    println!("{:<14} {:.1} m", "Along route", sim.engine().distance_traveled());

    Ok(())
}
