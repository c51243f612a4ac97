//! Recognizes a stroke stored as RON.
//!
//! ```text
//! cargo run --example recognize --features serde -- demos/stroke.ron [demos/catalog.ron]
//! ```
//!
//! The stroke file holds a list of points, `[(x: 1.0, y: 2.0), ...]`; the
//! optional catalog file holds `[(name: "...", points: [...]), ...]`. Without a
//! catalog the standard one is used.

use std::{env, fs, process};

use dollar_recognizer::{
    catalog, recognizer::MIN_STROKE_POINTS, CatalogEntry, Point, Recognizer, RecognizerConfig,
};

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    let stroke_path = args
        .next()
        .ok_or("usage: recognize <stroke.ron> [catalog.ron]")?;

    let catalog: Vec<CatalogEntry> = match args.next() {
        Some(path) => ron::from_str(&fs::read_to_string(path)?)?,
        None => catalog::standard(),
    };
    let recognizer = Recognizer::new(catalog, RecognizerConfig::default())?;

    let stroke: Vec<Point> = ron::from_str(&fs::read_to_string(stroke_path)?)?;
    if stroke.len() < MIN_STROKE_POINTS {
        println!("Not enough points");
        return Ok(());
    }
    println!("{}", recognizer.recognize(&stroke)?);
    Ok(())
}
