//! Print a coarse ASCII raster of a random star polygon via ray casting.
//!
//! Usage:
//!   cargo run -p planar --example ray_cast -- [seed]

use planar::prelude::*;

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(2025u64);
    let cfg = StarCfg {
        sides: Sides::Between(5, 12),
        radius_jitter: 0.45,
        ..StarCfg::default()
    };
    let shape = draw_star_polygon(cfg, DrawKey { seed, index: 0 });
    println!("seed {seed}: {} vertices", shape.vertex_count());
    for row in 0..24 {
        let y = 1.5 - (row as f64) * 0.125 - 0.0625;
        let line: String = (0..48)
            .map(|col| {
                let x = -1.5 + (col as f64) * 0.0625 + 0.03125;
                match Point::new(x, y).in_shape(&shape) {
                    Ok(true) => '#',
                    Ok(false) => '.',
                    Err(_) => '?',
                }
            })
            .collect();
        println!("{line}");
    }
}
