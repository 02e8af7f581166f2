use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use random_shapes::image::write_json_file;
use random_shapes::{AnyShape, Canvas, Color, Mode, ShapeKind};
use std::env;
use std::path::PathBuf;

const SIZE: u32 = 128;
const POLYGON_VERTICES: usize = 6;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let mut args = env::args().skip(1);
    let out_dir = PathBuf::from(args.next().ok_or_else(usage)?);
    let seed = match args.next() {
        Some(s) => s
            .parse::<u64>()
            .map_err(|e| format!("Invalid seed '{s}': {e}"))?,
        None => rand::thread_rng().gen(),
    };
    let mut rng = StdRng::seed_from_u64(seed);

    let mut annotations = Vec::with_capacity(ShapeKind::ALL.len());
    for kind in ShapeKind::ALL {
        let mut canvas = Canvas::new(SIZE, SIZE, Mode::Rgb).map_err(|e| e.to_string())?;
        canvas
            .create(&Color::RandomUniform, &mut rng)
            .map_err(|e| e.to_string())?;
        let mut shape =
            AnyShape::with_defaults(kind, POLYGON_VERTICES).map_err(|e| e.to_string())?;
        let annotation = shape
            .draw(&mut canvas, None, &Color::RandomUniform, &mut rng)
            .map_err(|e| e.to_string())?;
        let path = out_dir.join(format!("{}.png", kind.name()));
        canvas.save(&path).map_err(|e| e.to_string())?;
        println!("{:<10} {:?} -> {}", kind.name(), annotation.bbox, path.display());
        annotations.push(annotation);
    }

    let index = out_dir.join("gallery.json");
    write_json_file(&index, &annotations).map_err(|e| e.to_string())?;
    println!("Seed {seed}; annotations written to {}", index.display());
    Ok(())
}

fn usage() -> String {
    "Usage: shape_gallery <out_dir> [seed]".to_string()
}
