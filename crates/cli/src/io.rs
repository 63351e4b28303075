use anyhow::{bail, Context, Result};
use planar::{Intersection, Point, Segment, Shape};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// On-disk polygon: `{"points": [[x, y], ...]}` in boundary order.
#[derive(Debug, Serialize, Deserialize)]
pub struct ShapeFile {
    pub points: Vec<[f64; 2]>,
}

impl From<ShapeFile> for Shape {
    fn from(file: ShapeFile) -> Self {
        file.points
            .into_iter()
            .map(|[x, y]| Point::new(x, y))
            .collect()
    }
}

pub fn read_shape<P: AsRef<Path>>(path: P) -> Result<Shape> {
    let path = path.as_ref();
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let file: ShapeFile = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing shape file {}", path.display()))?;
    Ok(file.into())
}

/// Parse `x0,y0,x1,y1`.
pub fn parse_segment(s: &str) -> Result<Segment> {
    let coords = s
        .split(',')
        .map(|c| {
            c.trim()
                .parse::<f64>()
                .with_context(|| format!("bad coordinate {c:?} in segment {s:?}"))
        })
        .collect::<Result<Vec<_>>>()?;
    let &[x0, y0, x1, y1] = &coords[..] else {
        bail!("segment {s:?} needs exactly 4 coordinates, got {}", coords.len());
    };
    Ok(Segment::new(Point::new(x0, y0), Point::new(x1, y1)))
}

/// JSON view of an [`Intersection`].
#[derive(Debug, PartialEq, Serialize)]
pub struct IntersectionReport {
    pub did_intersect: bool,
    pub tangent: bool,
    pub x: Option<f64>,
    pub y: Option<f64>,
}

impl From<Intersection> for IntersectionReport {
    fn from(i: Intersection) -> Self {
        Self {
            did_intersect: i.did_intersect(),
            tangent: i.is_tangent(),
            x: i.x(),
            y: i.y(),
        }
    }
}
