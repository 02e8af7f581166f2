use random_shapes::config::load_config;
use random_shapes::dataset::generate_dataset;
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let manifest =
        generate_dataset(&config).map_err(|e| format!("Dataset generation failed: {e}"))?;

    println!(
        "Wrote {} {}x{} {} image(s) to {} (seed {})",
        manifest.entries.len(),
        manifest.width,
        manifest.height,
        manifest.mode,
        config.output.dir.display(),
        manifest.seed
    );
    println!(
        "Manifest written to {}",
        config.output.manifest_path().display()
    );
    Ok(())
}

fn usage() -> String {
    "Usage: random_shapes <config.json>".to_string()
}
