use plasma_core::{DiamondSquare, Grid, RngSampler};
use plasma_storage::{RasterStore, StorageError};

fn main() -> Result<(), StorageError> {
    // Generate a 257×257 plasma fractal
    let mut grid = Grid::new(257)?;
    DiamondSquare::new(196).generate(&mut grid, &mut RngSampler::seeded(2025));

    // Init storage in ./rasters
    let store = RasterStore::init("rasters")?;

    // Insert & read back
    let path = store.create("plasma_2025", &grid)?;
    if let Some(found) = store.read_by_name("plasma_2025")? {
        println!(
            "Round-trip success ({}): sample [128,128] = {}",
            path.display(),
            found.get(128, 128)
        );
    } else {
        println!("Raster not found!");
    }
    println!("Stored rasters: {:?}", store.list_names()?);

    // Clean up
    store.delete_by_name("plasma_2025")?;

    Ok(())
}
