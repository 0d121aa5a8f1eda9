use bitvec::prelude::*;
use chumsky::prelude::*;
use glam::I64Vec2;
use miette::*;
use rayon::prelude::*;

use crate::part1::parser;

/// The tile loop mapped onto a compressed grid: one cell per distinct tile
/// coordinate on each axis. A cell is valid when it lies on the loop
/// boundary or is enclosed by it.
struct CompressedLoop {
    width: usize,
    height: usize,
    xs: Vec<i64>,
    ys: Vec<i64>,
    valid: BitVec<u64, Lsb0>,
}

impl CompressedLoop {
    fn build(tiles: &[I64Vec2]) -> Result<Self> {
        let mut xs: Vec<i64> = tiles.iter().map(|t| t.x).collect();
        let mut ys: Vec<i64> = tiles.iter().map(|t| t.y).collect();
        xs.sort_unstable();
        xs.dedup();
        ys.sort_unstable();
        ys.dedup();

        let width = xs.len();
        let height = ys.len();

        let lookup = |axis: &[i64], val: i64| {
            axis.binary_search(&val)
                .map_err(|_| miette!("Tile coordinate {} missing from axis map", val))
        };

        // Walk the loop and mark every boundary cell, including the closing
        // edge from the last tile back to the first.
        let mut boundary = bitvec![u64, Lsb0; 0; width * height];
        for (i, tile) in tiles.iter().enumerate() {
            let next = &tiles[(i + 1) % tiles.len()];
            let (x1, y1) = (lookup(&xs, tile.x)?, lookup(&ys, tile.y)?);
            let (x2, y2) = (lookup(&xs, next.x)?, lookup(&ys, next.y)?);

            if x1 != x2 && y1 != y2 {
                return Err(miette!(
                    "Tiles {:?} and {:?} do not connect in a straight line",
                    tile,
                    next
                ));
            }
            for y in y1.min(y2)..=y1.max(y2) {
                for x in x1.min(x2)..=x1.max(x2) {
                    boundary.set(y * width + x, true);
                }
            }
        }

        // Flood fill inward from every grid edge; whatever the fill cannot
        // reach without crossing the boundary is enclosed.
        let mut outside = bitvec![u64, Lsb0; 0; width * height];
        let mut stack: Vec<(usize, usize)> = Vec::new();
        let mut seed = |x: usize, y: usize, stack: &mut Vec<(usize, usize)>| {
            let idx = y * width + x;
            if !outside[idx] && !boundary[idx] {
                outside.set(idx, true);
                stack.push((x, y));
            }
        };
        for x in 0..width {
            seed(x, 0, &mut stack);
            seed(x, height - 1, &mut stack);
        }
        for y in 0..height {
            seed(0, y, &mut stack);
            seed(width - 1, y, &mut stack);
        }
        while let Some((x, y)) = stack.pop() {
            for (dx, dy) in [(-1i64, 0i64), (1, 0), (0, -1), (0, 1)] {
                let (nx, ny) = (x as i64 + dx, y as i64 + dy);
                if nx < 0 || ny < 0 || nx as usize >= width || ny as usize >= height {
                    continue;
                }
                seed(nx as usize, ny as usize, &mut stack);
            }
        }

        let mut valid = !outside;
        valid |= &boundary[..];

        Ok(Self {
            width,
            height,
            xs,
            ys,
            valid,
        })
    }

    fn index_of(&self, tile: I64Vec2) -> (usize, usize) {
        // Both axes were built from the tile list, so the lookups cannot miss.
        let x = self.xs.binary_search(&tile.x).unwrap_or(0);
        let y = self.ys.binary_search(&tile.y).unwrap_or(0);
        (x, y)
    }

    /// Whether every compressed cell in the inclusive index rectangle is
    /// boundary or interior.
    fn rectangle_is_valid(&self, x1: usize, x2: usize, y1: usize, y2: usize) -> bool {
        (y1.min(y2)..=y1.max(y2)).all(|y| {
            (x1.min(x2)..=x1.max(x2)).all(|x| self.valid[y * self.width + x])
        })
    }
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let tiles = parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))?;

    if tiles.len() < 2 {
        return Ok("0".to_string());
    }

    let compressed = CompressedLoop::build(&tiles)?;
    let indexed: Vec<(I64Vec2, (usize, usize))> = tiles
        .iter()
        .map(|&t| (t, compressed.index_of(t)))
        .collect();

    let max_area = indexed
        .par_iter()
        .enumerate()
        .map(|(i, &(a, (ax, ay)))| {
            let mut local_max = 0u64;
            for &(b, (bx, by)) in indexed.iter().skip(i + 1) {
                let area = ((a.x - b.x).unsigned_abs() + 1) * ((a.y - b.y).unsigned_abs() + 1);
                if area > local_max && compressed.rectangle_is_valid(ax, bx, ay, by) {
                    local_max = area;
                }
            }
            local_max
        })
        .max()
        .unwrap_or(0);

    Ok(max_area.to_string())
}
