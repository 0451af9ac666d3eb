//! Minimal example: encode a point, query a box, list the key ranges.

use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // 2D Hilbert index over an 8x8 region, 3 levels deep (64 tiles)
    let range = spaceindex::Envelope::new(&[0.0, 0.0], &[8.0, 8.0])?;
    let index = spaceindex::index_from_name("hilbert", range, 3)?;
    println!(
        "{} index: {} tiles across {} cells per axis",
        index.curve_name(),
        index.value_width(),
        index.width()
    );

    let key = index.derived_value_for(&[3.5, 3.5]);
    println!("Key for (3.5, 3.5): {key}");

    let center = index.center_point_for(key);
    println!("Tile center for key {key}: {center:?}");

    let query = spaceindex::Envelope::new(&[2.0, 2.0], &[6.0, 6.0])?;
    for range in index.tiles_intersecting(&query) {
        println!("  scan keys {}..={}", range.min(), range.max());
    }

    Ok(())
}
