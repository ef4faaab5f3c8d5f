use crate::PlasmaError;

// Square N×N buffer of integer heights, N = 2^k + 1.
// Row-major: cell (x, y) is column x of row y.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<i32>,
}

// True when `size` is 2^k + 1 for some k >= 1 (3, 5, 9, 17, ...)
pub fn is_valid_size(size: usize) -> bool {
    size >= 3 && (size - 1).is_power_of_two()
}

impl Grid {
    // Allocate a zeroed grid, rejecting sizes the midpoint arithmetic can't handle
    pub fn new(size: usize) -> Result<Self, PlasmaError> {
        if !is_valid_size(size) {
            return Err(PlasmaError::InvalidSize { size });
        }
        Ok(Self {
            size,
            cells: vec![0; size * size],
        })
    }

    // Grid of size 2^exp + 1
    pub fn with_exponent(exp: u32) -> Result<Self, PlasmaError> {
        let size = 1usize
            .checked_shl(exp)
            .and_then(|n| n.checked_add(1))
            .ok_or(PlasmaError::InvalidSize { size: 0 })?;
        Self::new(size)
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.size && y < self.size,
            "cell ({x}, {y}) outside {0}×{0} grid",
            self.size
        );
        y * self.size + x
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> i32 {
        self.cells[self.index(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: i32) {
        let idx = self.index(x, y);
        self.cells[idx] = value;
    }

    pub fn fill(&mut self, value: i32) {
        self.cells.fill(value);
    }

    // Flat row-major view
    pub fn cells(&self) -> &[i32] {
        &self.cells
    }

    pub fn cells_mut(&mut self) -> &mut [i32] {
        &mut self.cells
    }

    pub fn rows(&self) -> impl Iterator<Item = &[i32]> {
        self.cells.chunks_exact(self.size)
    }

    // Corner coordinates in initialization order:
    // top-left, top-right, bottom-left, bottom-right
    pub fn corner_coords(&self) -> [(usize, usize); 4] {
        let last = self.size - 1;
        [(0, 0), (last, 0), (0, last), (last, last)]
    }

    pub fn corners(&self) -> [i32; 4] {
        self.corner_coords().map(|(x, y)| self.get(x, y))
    }

    pub fn min_max(&self) -> (i32, i32) {
        self.cells
            .iter()
            .fold((i32::MAX, i32::MIN), |(lo, hi), &v| (lo.min(v), hi.max(v)))
    }

    pub fn mean(&self) -> f64 {
        let sum: i64 = self.cells.iter().map(|&v| i64::from(v)).sum();
        sum as f64 / self.cells.len() as f64
    }
}
