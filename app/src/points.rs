// Point-cloud projection of a grid.
// Cells live in a 100×100 world square; the shorter viewport side spans
// the whole square so the cloud keeps its aspect ratio on resize.

use egui::{Color32, Mesh, Pos2, Rect, Vec2, pos2};
use plasma_core::Grid;
use plasma_core::utils::gray_level;

pub const WORLD_EXTENT: f32 = 100.0;

// World position of cell (i, j): column i, row j
#[inline]
pub fn world_position(i: usize, j: usize, size: usize) -> Pos2 {
    let step = WORLD_EXTENT / size as f32;
    pos2(i as f32 * step, j as f32 * step)
}

// Pixels per world unit. Degenerate viewports count as 1 pixel.
#[inline]
pub fn world_scale(viewport: Vec2) -> f32 {
    viewport.x.min(viewport.y).max(1.0) / WORLD_EXTENT
}

#[inline]
pub fn to_screen(world: Pos2, viewport: Rect) -> Pos2 {
    viewport.min + world.to_vec2() * world_scale(viewport.size())
}

// One square of `point_size` pixels per cell, colored R = G = B = value
pub fn build_point_mesh(grid: &Grid, viewport: Rect, point_size: f32) -> Mesh {
    let size = grid.size();
    let mut mesh = Mesh::default();
    mesh.reserve_vertices(size * size * 4);
    mesh.reserve_triangles(size * size * 2);

    let half = Vec2::splat(point_size * 0.5);
    for (j, row) in grid.rows().enumerate() {
        for (i, &v) in row.iter().enumerate() {
            let center = to_screen(world_position(i, j, size), viewport);
            mesh.add_colored_rect(
                Rect::from_min_max(center - half, center + half),
                Color32::from_gray(gray_level(v)),
            );
        }
    }
    mesh
}
