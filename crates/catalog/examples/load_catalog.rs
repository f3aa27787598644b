use catalog::Catalog;
use std::path::Path;
use std::time::Instant;

fn main() {
    let data_dir = Path::new("data");

    println!("Loading highlight catalog...\n");

    let start = Instant::now();
    let catalog = Catalog::load_from_dir(data_dir).expect("Failed to load catalog");
    let elapsed = start.elapsed();

    let (players, highlights) = catalog.counts();

    println!("=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Players: {}", players);
    println!("Highlights: {}", highlights);
    println!("Dangling references: {}", catalog.dangling_highlights().len());
}
