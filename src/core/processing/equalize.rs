//! CLAHE core: tiled histogram computation, contrast-limited redistribution,
//! per-tile mapping functions, and bilinear blending of mappings across tile
//! boundaries so no seams appear at tile edges.
use ndarray::{Array2, s};

use crate::types::WindowSize;

const BINS: usize = 256;
/// Redistribution can push bins back over the limit; a few passes settle it.
const MAX_CLIP_PASSES: usize = 8;

/// Tile partition of an image. Near-equal division of each axis; the last
/// row/column absorbs the remainder, so every pixel belongs to exactly one
/// tile. The grid is clamped to the image dimensions to keep tiles non-empty.
#[derive(Debug, Clone, Copy)]
struct TileGrid {
    rows: usize,
    cols: usize,
    tile_h: usize,
    tile_w: usize,
    height: usize,
    width: usize,
}

impl TileGrid {
    fn new(height: usize, width: usize, window: WindowSize) -> Self {
        let rows = window.rows.clamp(1, height);
        let cols = window.cols.clamp(1, width);
        Self {
            rows,
            cols,
            tile_h: height / rows,
            tile_w: width / cols,
            height,
            width,
        }
    }

    /// Half-open pixel bounds of tile `(ty, tx)`.
    fn bounds(&self, ty: usize, tx: usize) -> (std::ops::Range<usize>, std::ops::Range<usize>) {
        let r0 = ty * self.tile_h;
        let r1 = if ty + 1 == self.rows {
            self.height
        } else {
            r0 + self.tile_h
        };
        let c0 = tx * self.tile_w;
        let c1 = if tx + 1 == self.cols {
            self.width
        } else {
            c0 + self.tile_w
        };
        (r0..r1, c0..c1)
    }
}

/// Clip bins at `limit` and spread the excess uniformly over all bins,
/// iterating while the spread itself pushes bins back over the limit.
/// Total bin mass is conserved exactly on every pass.
fn clip_histogram(hist: &mut [u32; BINS], limit: u32) {
    for _ in 0..MAX_CLIP_PASSES {
        let mut excess: u32 = 0;
        for bin in hist.iter_mut() {
            if *bin > limit {
                excess += *bin - limit;
                *bin = limit;
            }
        }
        if excess == 0 {
            return;
        }
        let per_bin = excess / BINS as u32;
        let remainder = (excess % BINS as u32) as usize;
        for (i, bin) in hist.iter_mut().enumerate() {
            *bin += per_bin;
            if i < remainder {
                *bin += 1;
            }
        }
        // Once the spread is down to single counts there is nothing left to
        // push back over the limit in any meaningful amount.
        if per_bin == 0 {
            return;
        }
    }
}

/// Mapping function of one tile: the clipped histogram's CDF scaled onto
/// [0, 255]. Monotonically non-decreasing by construction.
fn mapping_from_histogram(hist: &[u32; BINS], tile_pixels: u32) -> [u8; BINS] {
    let mut mapping = [0u8; BINS];
    let mut cum = 0u64;
    for (v, m) in mapping.iter_mut().enumerate() {
        cum += hist[v] as u64;
        *m = (255.0 * cum as f64 / tile_pixels as f64).round() as u8;
    }
    mapping
}

/// Blended mapping lookup for one pixel: bilinear weights from the pixel's
/// fractional position between the centers of the up-to-four nearest tiles.
/// Border pixels clamp to the existing neighbor set, which renormalizes the
/// weights by duplication. Pure in (position, grid, mappings).
fn blend_mapped(grid: &TileGrid, mappings: &[[u8; BINS]], row: usize, col: usize, value: u8) -> u8 {
    let fy = (row as f64 / grid.tile_h as f64 - 0.5).clamp(0.0, (grid.rows - 1) as f64);
    let fx = (col as f64 / grid.tile_w as f64 - 0.5).clamp(0.0, (grid.cols - 1) as f64);

    let ty0 = fy.floor() as usize;
    let tx0 = fx.floor() as usize;
    let ty1 = (ty0 + 1).min(grid.rows - 1);
    let tx1 = (tx0 + 1).min(grid.cols - 1);
    let wy = fy - ty0 as f64;
    let wx = fx - tx0 as f64;

    let v = value as usize;
    let m00 = mappings[ty0 * grid.cols + tx0][v] as f64;
    let m01 = mappings[ty0 * grid.cols + tx1][v] as f64;
    let m10 = mappings[ty1 * grid.cols + tx0][v] as f64;
    let m11 = mappings[ty1 * grid.cols + tx1][v] as f64;

    let top = m00 * (1.0 - wx) + m01 * wx;
    let bottom = m10 * (1.0 - wx) + m11 * wx;
    (top * (1.0 - wy) + bottom * wy).round().clamp(0.0, 255.0) as u8
}

/// Contrast-limited adaptive histogram equalization of a single 8-bit plane.
///
/// Partitions the plane into `window` tiles, builds one clipped 256-bin
/// histogram per tile, derives a mapping function from each tile's CDF, and
/// applies the mappings with bilinear interpolation between tile centers.
/// The clip threshold is `clip_limit * tile_pixels / 256`; `clip_limit <= 0`
/// disables limiting. A `(1, 1)` window degenerates to global equalization.
/// Output dimensions match the input; an empty plane is returned unchanged.
pub fn equalize_plane(plane: &Array2<u8>, clip_limit: f64, window: WindowSize) -> Array2<u8> {
    let (height, width) = plane.dim();
    if height == 0 || width == 0 {
        return plane.clone();
    }
    let grid = TileGrid::new(height, width, window);

    let mut mappings = Vec::with_capacity(grid.rows * grid.cols);
    for ty in 0..grid.rows {
        for tx in 0..grid.cols {
            let (rs, cs) = grid.bounds(ty, tx);
            let tile_pixels = (rs.len() * cs.len()) as u32;

            let mut hist = [0u32; BINS];
            for &v in plane.slice(s![rs, cs]).iter() {
                hist[v as usize] += 1;
            }

            if clip_limit > 0.0 {
                let limit = ((clip_limit * tile_pixels as f64) / BINS as f64).max(1.0) as u32;
                clip_histogram(&mut hist, limit);
            }
            mappings.push(mapping_from_histogram(&hist, tile_pixels));
        }
    }

    Array2::from_shape_fn((height, width), |(r, c)| {
        blend_mapped(&grid, &mappings, r, c, plane[(r, c)])
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hist_sum(hist: &[u32; BINS]) -> u64 {
        hist.iter().map(|&b| b as u64).sum()
    }

    #[test]
    fn tiles_partition_every_pixel_exactly_once() {
        let grid = TileGrid::new(101, 67, WindowSize::square(8));
        let mut covered = Array2::<u32>::zeros((101, 67));
        for ty in 0..grid.rows {
            for tx in 0..grid.cols {
                let (rs, cs) = grid.bounds(ty, tx);
                for r in rs {
                    for c in cs.clone() {
                        covered[(r, c)] += 1;
                    }
                }
            }
        }
        assert!(covered.iter().all(|&n| n == 1));
    }

    #[test]
    fn clipping_conserves_pixel_count() {
        let mut hist = [0u32; BINS];
        hist[0] = 5000;
        hist[17] = 1200;
        hist[255] = 300;
        for (v, bin) in hist.iter_mut().enumerate().skip(32).take(64) {
            *bin = (v % 7) as u32;
        }
        let total = hist_sum(&hist);

        for limit in [1, 2, 10, 100, 10_000] {
            let mut clipped = hist;
            clip_histogram(&mut clipped, limit);
            assert_eq!(hist_sum(&clipped), total, "limit={limit}");
        }
    }

    #[test]
    fn mapping_is_monotone_non_decreasing() {
        let mut impulse = [0u32; BINS];
        impulse[100] = 4096;
        let mut ramp = [0u32; BINS];
        for (v, bin) in ramp.iter_mut().enumerate() {
            *bin = v as u32;
        }

        for hist in [impulse, ramp] {
            let total = hist_sum(&hist) as u32;
            let mapping = mapping_from_histogram(&hist, total);
            for v in 1..BINS {
                assert!(mapping[v] >= mapping[v - 1], "dip at {v}");
            }
            assert_eq!(mapping[255], 255);
        }
    }

    #[test]
    fn flat_image_stays_flat_and_close_to_input() {
        let plane = Array2::from_elem((64, 64), 100u8);
        let out = equalize_plane(&plane, 2.0, WindowSize::square(4));

        assert_eq!(out.dim(), (64, 64));
        let first = out[(0, 0)];
        assert!(out.iter().all(|&v| v == first));
        // Redistribution flattens the impulse histogram toward uniform, so the
        // mapping is near-identity but not exact.
        assert!((first as i32 - 100).abs() <= 4, "got {first}");
    }

    #[test]
    fn zero_clip_limit_equalizes_without_limiting() {
        // Two-level image: 3/4 dark, 1/4 bright. Unlimited equalization must
        // push the dark level to ~191 (its CDF mass), far from its input.
        let mut plane = Array2::from_elem((32, 32), 10u8);
        for r in 0..32 {
            for c in 24..32 {
                plane[(r, c)] = 200;
            }
        }
        let out = equalize_plane(&plane, 0.0, WindowSize::square(1));
        assert_eq!(out[(0, 0)], 191);
        assert_eq!(out[(0, 31)], 255);
    }

    #[test]
    fn single_tile_grid_maps_equal_inputs_equally() {
        let plane = Array2::from_shape_fn((40, 40), |(r, c)| ((r * 13 + c * 7) % 256) as u8);
        let out = equalize_plane(&plane, 3.0, WindowSize::square(1));

        let mut seen: [Option<u8>; 256] = [None; 256];
        for ((r, c), &v) in plane.indexed_iter() {
            match seen[v as usize] {
                None => seen[v as usize] = Some(out[(r, c)]),
                Some(mapped) => assert_eq!(out[(r, c)], mapped),
            }
        }
    }

    #[test]
    fn gradient_has_no_seams_at_tile_boundaries() {
        // Left-to-right gradient, one intensity per column. With bilinear
        // blending the output must stay smooth across every 32-pixel tile
        // boundary and monotone at coarse scale.
        let plane = Array2::from_shape_fn((256, 256), |(_, c)| c as u8);
        let out = equalize_plane(&plane, 2.0, WindowSize::square(8));

        assert_eq!(out.dim(), (256, 256));
        for r in 0..256 {
            for c in 0..255 {
                let step = (out[(r, c + 1)] as i32 - out[(r, c)] as i32).abs();
                assert!(step <= 8, "jump of {step} at ({r}, {c})");
            }
            for c in (0..240).step_by(16) {
                assert!(out[(r, c + 16)] >= out[(r, c)]);
            }
        }
    }

    #[test]
    fn window_larger_than_image_is_clamped() {
        let plane = Array2::from_shape_fn((5, 7), |(r, c)| (r * 30 + c) as u8);
        let out = equalize_plane(&plane, 2.0, WindowSize::square(64));
        assert_eq!(out.dim(), (5, 7));
    }

    #[test]
    fn empty_plane_is_a_no_op() {
        let plane = Array2::<u8>::zeros((0, 0));
        let out = equalize_plane(&plane, 2.0, WindowSize::square(8));
        assert_eq!(out.dim(), (0, 0));
    }
}
