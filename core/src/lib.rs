// core holds the heightmap grid and the diamond-square pipeline
pub mod clamp;
pub mod config;
pub mod diamond_square;
pub mod error;
pub mod grid;
pub mod sampler;
pub mod utils;

pub use clamp::clamp_map;
pub use config::{PlasmaConfig, ValueRange};
pub use diamond_square::DiamondSquare;
pub use error::PlasmaError;
pub use grid::Grid;
pub use sampler::{RngSampler, Sampler, SequenceSampler};

// Allocate a grid from `config` and run the whole pipeline once.
// Uses the seeded generator when the config carries a seed.
pub fn generate(config: &PlasmaConfig) -> Result<Grid, PlasmaError> {
    config.validate()?;
    let mut grid = Grid::new(config.size)?;
    regenerate(config, &mut grid)?;
    Ok(grid)
}

// Re-run the pipeline into an existing grid.
// The grid keeps its own size; only the ranges and seed come from `config`.
pub fn regenerate(config: &PlasmaConfig, grid: &mut Grid) -> Result<(), PlasmaError> {
    config.validate()?;
    let mut engine = DiamondSquare::from_config(config);
    match config.seed {
        Some(seed) => engine.generate(grid, &mut RngSampler::seeded(seed)),
        None => engine.generate(grid, &mut RngSampler::thread()),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{Grid, PlasmaConfig, PlasmaError, ValueRange, generate, regenerate};

    #[test]
    fn generate_from_config() {
        let config = PlasmaConfig {
            size: 65,
            ..PlasmaConfig::default()
        };
        let grid = generate(&config).unwrap();
        assert_eq!(grid.size(), 65);
        assert!(grid.cells().iter().all(|&v| ValueRange::default().contains(v)));
    }

    #[test]
    fn generate_seeded_is_repeatable() {
        let config = PlasmaConfig {
            size: 33,
            seed: Some(2025),
            ..PlasmaConfig::default()
        };
        assert_eq!(generate(&config).unwrap(), generate(&config).unwrap());
    }

    #[test]
    fn generate_rejects_invalid_size() {
        let config = PlasmaConfig {
            size: 64,
            ..PlasmaConfig::default()
        };
        assert!(matches!(
            generate(&config),
            Err(PlasmaError::InvalidSize { size: 64 })
        ));
    }

    #[test]
    fn regenerate_rejects_negative_range() {
        let mut grid = Grid::new(9).unwrap();
        grid.fill(77);
        let config = PlasmaConfig {
            size: 9,
            initial_range: -5,
            ..PlasmaConfig::default()
        };
        assert!(matches!(
            regenerate(&config, &mut grid),
            Err(PlasmaError::InvalidConfig(_))
        ));
        // nothing was generated
        assert!(grid.cells().iter().all(|&v| v == 77));
    }

    #[test]
    fn regenerate_overwrites_existing_grid() {
        let mut grid = Grid::new(17).unwrap();
        grid.fill(-1_000);
        let config = PlasmaConfig {
            size: 17,
            seed: Some(4),
            ..PlasmaConfig::default()
        };
        regenerate(&config, &mut grid).unwrap();
        assert!(grid.cells().iter().all(|&v| ValueRange::default().contains(v)));
    }
}
