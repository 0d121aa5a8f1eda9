use chumsky::prelude::*;
use miette::*;

use crate::part1::parser;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let mut grid = parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))?;

    let mut total_removed = 0;

    // Each sweep removes every currently accessible roll at once; removals
    // open up neighbours for the next sweep, so repeat until stable.
    loop {
        let mut to_remove = Vec::new();

        for y in 0..grid.height {
            for x in 0..grid.width {
                let idx = y * grid.width + x;
                if grid.cells[idx] && grid.neighbouring_rolls(x, y) < 4 {
                    to_remove.push(idx);
                }
            }
        }

        if to_remove.is_empty() {
            break;
        }
        total_removed += to_remove.len();
        for idx in to_remove {
            grid.cells[idx] = false;
        }
    }

    Ok(total_removed.to_string())
}
