pub mod dataset;

pub use dataset::{load_config, CanvasConfig, DatasetConfig, OutputConfig, ShapeConfig};
