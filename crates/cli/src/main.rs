mod io;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use planar::{Intersection, Point, RayCfg};
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "planar")]
#[command(about = "Planar polygon predicates over JSON shape files")]
struct Cmd {
    /// Stop ray casting with an error after this many vertex nudges (default: unbounded)
    #[arg(long, global = true)]
    max_nudges: Option<u32>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Ray-cast a point against a shape file
    Contains {
        #[arg(long)]
        shape: String,
        #[arg(long, allow_hyphen_values = true)]
        x: f64,
        #[arg(long, allow_hyphen_values = true)]
        y: f64,
    },
    /// Test two shape files for boundary contact
    Intersects {
        #[arg(long)]
        a: String,
        #[arg(long)]
        b: String,
    },
    /// Classify two segments given as `x0,y0,x1,y1`
    Segments {
        #[arg(long, allow_hyphen_values = true)]
        s1: String,
        #[arg(long, allow_hyphen_values = true)]
        s2: String,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let ray = RayCfg {
        max_nudges: cmd.max_nudges,
        ..RayCfg::default()
    };
    let out = match cmd.action {
        Action::Contains { shape, x, y } => contains(&shape, Point::new(x, y), ray)?,
        Action::Intersects { a, b } => intersects(&a, &b)?,
        Action::Segments { s1, s2 } => segments(&s1, &s2)?,
    };
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn contains(shape: &str, p: Point, ray: RayCfg) -> Result<serde_json::Value> {
    tracing::info!(shape, x = p.x, y = p.y, "contains");
    let s = io::read_shape(shape)?;
    let inside = p
        .in_shape_with(&s, ray)
        .with_context(|| format!("ray casting against {shape}"))?;
    Ok(serde_json::json!({ "x": p.x, "y": p.y, "inside": inside }))
}

fn intersects(a: &str, b: &str) -> Result<serde_json::Value> {
    tracing::info!(a, b, "intersects");
    let sa = io::read_shape(a)?;
    let sb = io::read_shape(b)?;
    let hit = sa
        .intersects(&sb)
        .with_context(|| format!("intersecting {a} with {b}"))?;
    Ok(serde_json::json!({ "intersects": hit }))
}

fn segments(s1: &str, s2: &str) -> Result<serde_json::Value> {
    tracing::info!(s1, s2, "segments");
    let seg1 = io::parse_segment(s1)?;
    let seg2 = io::parse_segment(s2)?;
    let i = Intersection::of(&seg1, &seg2).context("classifying segments")?;
    Ok(serde_json::to_value(io::IntersectionReport::from(i))?)
}
