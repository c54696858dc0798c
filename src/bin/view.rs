use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::Parser;
use raylib::prelude::*;
use trasse_gen::{GenParams, generate, to_transport};

/// Road map viewer: draws a generated face list over a ground grid.
#[derive(Parser, Debug)]
#[command(name = "trasse-view", version, about)]
struct Args {
    /// JSON face list to display; generates a fresh map when omitted.
    #[arg(long)]
    map: Option<PathBuf>,
    /// Lattice side for in-process generation.
    #[arg(long, default_value_t = 24)]
    size: usize,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let faces: Vec<Vec<[i32; 3]>> = match &args.map {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => {
            let params = GenParams::default();
            let mut rng = rand::rng();
            let road = loop {
                if let Some(road) = generate(args.size, &params, &mut rng) {
                    break road;
                }
            };
            to_transport(&road)
        }
    };
    log::info!("drawing {} faces", faces.len());

    let extent = faces
        .iter()
        .flatten()
        .flat_map(|v| v.iter().copied())
        .max()
        .unwrap_or(1) as f32;
    // lattice y grows downward; flip it so the road renders upright
    let to_world = |v: [i32; 3]| Vector3::new(v[0] as f32, extent - v[1] as f32, v[2] as f32);
    let center = Vector3::new(extent * 0.5, extent * 0.5, extent * 0.5);

    let (mut rl, thread) = raylib::init().size(1024, 640).title("trasse viewer").build();
    rl.set_target_fps(60);

    while !rl.window_should_close() {
        // slow orbit around the map center
        let angle = rl.get_time() as f32 * 0.3;
        let dist = extent * 1.6 + 6.0;
        let camera = Camera3D::perspective(
            Vector3::new(
                center.x + dist * angle.cos(),
                extent * 1.1 + 2.0,
                center.z + dist * angle.sin(),
            ),
            center,
            Vector3::new(0.0, 1.0, 0.0),
            45.0,
        );

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::RAYWHITE);

        {
            let mut d3 = d.begin_mode3D(camera);
            d3.draw_grid(extent as i32 + 2, 1.0);
            for face in &faces {
                let pts: Vec<Vector3> = face.iter().map(|v| to_world(*v)).collect();
                if pts.len() < 3 {
                    continue;
                }
                // fan-triangulate; draw both windings so the ribbon is
                // visible from either side
                for i in 1..pts.len() - 1 {
                    d3.draw_triangle3D(pts[0], pts[i], pts[i + 1], Color::SKYBLUE);
                    d3.draw_triangle3D(pts[0], pts[i + 1], pts[i], Color::SKYBLUE);
                }
                for i in 0..pts.len() {
                    d3.draw_line3D(pts[i], pts[(i + 1) % pts.len()], Color::DARKBLUE);
                }
            }
        }

        d.draw_text("trasse road map", 12, 12, 20, Color::DARKGRAY);
        d.draw_fps(12, 40);
    }
    Ok(())
}
