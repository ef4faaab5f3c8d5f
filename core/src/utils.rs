use image::{GrayImage, Luma};

use crate::grid::Grid;

// Saturating conversion of a cell value to an 8-bit gray level
#[inline]
pub fn gray_level(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}

// Row-major 8-bit luminance buffer, one byte per cell.
// For feeding image encoders and GPU textures.
pub fn to_gray_bytes(grid: &Grid) -> Vec<u8> {
    grid.cells().iter().map(|&v| gray_level(v)).collect()
}

pub fn to_gray_image(grid: &Grid) -> GrayImage {
    let size = grid.size() as u32;
    GrayImage::from_fn(size, size, |x, y| {
        Luma([gray_level(grid.get(x as usize, y as usize))])
    })
}
