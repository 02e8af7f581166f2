use crate::color::Color;
use crate::error::Result;
use crate::geometry::{AxisIntervals, SquareRegion};
use crate::shapes::{AnyShape, Circle, Ellipse, Polygon, Rectangle, Square};
use crate::types::{Mode, ShapeKind};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, Deserialize)]
pub struct DatasetConfig {
    /// Number of images to render.
    #[serde(default = "default_count")]
    pub count: usize,
    /// Base seed; image `i` is rendered from `seed + i`. Drawn at random when absent.
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub canvas: CanvasConfig,
    #[serde(default)]
    pub shape: ShapeConfig,
    /// Shape color.
    #[serde(default)]
    pub foreground: Color,
    pub output: OutputConfig,
}

impl DatasetConfig {
    /// Defaults everywhere, writing into `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            count: default_count(),
            seed: None,
            canvas: CanvasConfig::default(),
            shape: ShapeConfig::default(),
            foreground: Color::RandomUniform,
            output: OutputConfig::new(dir),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
    pub mode: Mode,
    pub background: Color,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 64,
            height: 64,
            mode: Mode::Rgb,
            background: Color::RandomUniform,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ShapeConfig {
    pub kind: ShapeKind,
    /// Minimum box width as a fraction of the canvas width (ellipse, rectangle, polygon).
    pub min_width: f64,
    /// Minimum box height as a fraction of the canvas height (ellipse, rectangle, polygon).
    pub min_height: f64,
    /// Minimum side as a fraction of the shorter canvas side (circle, square).
    pub min_size: f64,
    /// Vertex count for polygons.
    pub vertices: usize,
}

impl Default for ShapeConfig {
    fn default() -> Self {
        let intervals = AxisIntervals::default();
        Self {
            kind: ShapeKind::Ellipse,
            min_width: intervals.min_width,
            min_height: intervals.min_height,
            min_size: SquareRegion::default().min_size,
            vertices: 5,
        }
    }
}

impl ShapeConfig {
    pub fn build(&self) -> Result<AnyShape> {
        Ok(match self.kind {
            ShapeKind::Ellipse => {
                AnyShape::Ellipse(Ellipse::with_min_extent(self.min_width, self.min_height)?)
            }
            ShapeKind::Circle => AnyShape::Circle(Circle::with_min_size(self.min_size)?),
            ShapeKind::Rectangle => {
                AnyShape::Rectangle(Rectangle::with_min_extent(self.min_width, self.min_height)?)
            }
            ShapeKind::Square => AnyShape::Square(Square::with_min_size(self.min_size)?),
            ShapeKind::Polygon => AnyShape::Polygon(Polygon::with_min_extent(
                self.vertices,
                self.min_width,
                self.min_height,
            )?),
        })
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct OutputConfig {
    pub dir: PathBuf,
    #[serde(default = "default_prefix")]
    pub file_prefix: String,
    /// Encoder name such as `png`, `jpeg` or `bmp`.
    #[serde(default = "default_format")]
    pub format: String,
    /// Manifest file name, relative to `dir`.
    #[serde(default = "default_manifest")]
    pub manifest: PathBuf,
}

impl OutputConfig {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            file_prefix: default_prefix(),
            format: default_format(),
            manifest: default_manifest(),
        }
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.dir.join(&self.manifest)
    }
}

fn default_count() -> usize {
    16
}

fn default_prefix() -> String {
    "shape".to_string()
}

fn default_format() -> String {
    "png".to_string()
}

fn default_manifest() -> PathBuf {
    PathBuf::from("manifest.json")
}

pub fn load_config(path: &Path) -> std::result::Result<DatasetConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_takes_defaults() {
        let cfg: DatasetConfig = serde_json::from_str(r#"{ "output": { "dir": "out" } }"#).unwrap();
        assert_eq!(cfg.count, 16);
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.canvas.width, 64);
        assert_eq!(cfg.canvas.mode, Mode::Rgb);
        assert_eq!(cfg.shape.kind, ShapeKind::Ellipse);
        assert_eq!(cfg.shape.vertices, 5);
        assert!(cfg.foreground.is_random());
        assert_eq!(cfg.output.manifest_path(), Path::new("out").join("manifest.json"));
    }

    #[test]
    fn full_config_parses() {
        let json = r##"{
            "count": 3,
            "seed": 99,
            "canvas": { "width": 32, "height": 24, "mode": "L", "background": 0 },
            "shape": { "kind": "polygon", "vertices": 6, "min_width": 0.2 },
            "foreground": "#c8",
            "output": { "dir": "out", "file_prefix": "poly", "format": "bmp" }
        }"##;
        let cfg: DatasetConfig = serde_json::from_str(json).unwrap();
        assert_eq!(cfg.canvas.mode, Mode::Gray);
        assert_eq!(cfg.canvas.background, Color::Scalar(0));
        assert_eq!(cfg.foreground, Color::Scalar(200));
        assert_eq!(cfg.shape.min_width, 0.2);
        assert_eq!(cfg.shape.min_height, 0.1);
        let shape = cfg.shape.build().unwrap();
        assert_eq!(shape.kind(), ShapeKind::Polygon);
        assert_eq!(cfg.output.file_prefix, "poly");
    }

    #[test]
    fn load_config_reads_file_and_reports_failures() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.json");
        fs::write(
            &good,
            r#"{ "count": 4, "shape": { "kind": "circle" }, "output": { "dir": "out" } }"#,
        )
        .unwrap();
        let cfg = load_config(&good).unwrap();
        assert_eq!(cfg.count, 4);
        assert_eq!(cfg.shape.kind, ShapeKind::Circle);

        let bad = dir.path().join("bad.json");
        fs::write(&bad, r#"{ "count": "four" }"#).unwrap();
        let err = load_config(&bad).unwrap_err();
        assert!(err.starts_with("Failed to parse config"), "{err}");
        assert!(err.contains("bad.json"), "{err}");

        let err = load_config(&dir.path().join("missing.json")).unwrap_err();
        assert!(err.starts_with("Failed to read config"), "{err}");
    }

    #[test]
    fn binary_mode_alias_and_bad_vertex_count() {
        let cfg: DatasetConfig = serde_json::from_str(
            r#"{ "canvas": { "mode": "1" }, "shape": { "kind": "polygon", "vertices": 2 },
                 "output": { "dir": "o" } }"#,
        )
        .unwrap();
        assert_eq!(cfg.canvas.mode, Mode::Binary);
        assert!(cfg.shape.build().is_err());
    }
}
