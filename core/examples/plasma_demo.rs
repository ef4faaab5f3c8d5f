use plasma_core::{DiamondSquare, Grid, RngSampler};

fn main() {
    // Generate a 129×129 plasma fractal with seed 2025 and the classic range of 196
    let mut grid = Grid::new(129).expect("129 = 2^7 + 1");
    let mut engine = DiamondSquare::new(196);
    engine.generate(&mut grid, &mut RngSampler::seeded(2025));

    // Print the top-left 16×16 corner of the map
    for row in grid.rows().take(16) {
        for v in &row[..16] {
            print!("{v:>4}");
        }
        println!();
    }

    let (min, max) = grid.min_max();
    println!("min {min}, max {max}, mean {:.2}", grid.mean());
}
