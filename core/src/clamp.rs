use crate::config::ValueRange;
use crate::grid::Grid;

// Clamp every cell into `range` in place.
// Returns how many cells were out of range.
pub fn clamp_map(grid: &mut Grid, range: ValueRange) -> usize {
    let mut changed = 0;
    for v in grid.cells_mut() {
        let clamped = (*v).clamp(range.min, range.max);
        if clamped != *v {
            *v = clamped;
            changed += 1;
        }
    }
    changed
}

#[cfg(test)]
mod tests {
    use super::clamp_map;
    use crate::{Grid, ValueRange};

    #[test]
    fn clamp_pulls_values_into_range() {
        let mut g = Grid::new(3).unwrap();
        g.set(0, 0, -40);
        g.set(1, 1, 300);
        g.set(2, 2, 128);
        let changed = clamp_map(&mut g, ValueRange::default());
        assert_eq!(changed, 2);
        assert_eq!(g.get(0, 0), 0);
        assert_eq!(g.get(1, 1), 255);
        assert_eq!(g.get(2, 2), 128);
    }

    #[test]
    fn clamp_is_idempotent() {
        let mut g = Grid::new(5).unwrap();
        for (i, v) in g.cells_mut().iter_mut().enumerate() {
            *v = i as i32 * 37 - 200;
        }
        clamp_map(&mut g, ValueRange::default());
        let once = g.clone();
        assert_eq!(clamp_map(&mut g, ValueRange::default()), 0);
        assert_eq!(g, once);
    }
}
