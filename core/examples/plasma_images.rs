// Generates and saves grayscale plasma images:
// One per grid size with the classic range
// One per initial range at 257×257, same seed

use plasma_core::utils::to_gray_image;
use plasma_core::{DiamondSquare, Grid, RngSampler};
use std::path::Path;

fn save(grid: &Grid, filename: &str) {
    to_gray_image(grid).save(Path::new(filename)).unwrap();
    println!("Saved {}", filename);
}

fn main() {
    let seed = 42;

    // 1) Grid sizes
    for exp in [6, 8, 9] {
        let mut grid = Grid::with_exponent(exp).unwrap();
        DiamondSquare::new(196).generate(&mut grid, &mut RngSampler::seeded(seed));
        save(&grid, &format!("plasma_{}.png", grid.size()));
    }

    // 2) Roughness: larger initial ranges give rougher images
    for range in [32, 96, 196, 384] {
        let mut grid = Grid::new(257).unwrap();
        DiamondSquare::new(range).generate(&mut grid, &mut RngSampler::seeded(seed));
        save(&grid, &format!("plasma_257_range{range}.png"));
    }
}
