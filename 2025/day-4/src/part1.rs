use chumsky::prelude::*;
use miette::*;

pub(crate) struct Grid {
    pub(crate) width: usize,
    pub(crate) height: usize,
    // true = paper roll '@', false = empty floor '.'
    pub(crate) cells: Vec<bool>,
}

impl Grid {
    pub(crate) fn roll_at(&self, x: isize, y: isize) -> bool {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return false;
        }
        self.cells[y as usize * self.width + x as usize]
    }

    /// Number of the 8 surrounding cells holding a roll.
    pub(crate) fn neighbouring_rolls(&self, x: usize, y: usize) -> usize {
        let (x, y) = (x as isize, y as isize);
        let mut count = 0;
        for dy in -1..=1 {
            for dx in -1..=1 {
                if (dx, dy) != (0, 0) && self.roll_at(x + dx, y + dy) {
                    count += 1;
                }
            }
        }
        count
    }
}

pub(crate) fn parser<'a>() -> impl Parser<'a, &'a str, Grid, extra::Err<Rich<'a, char>>> {
    let cell = one_of("@.").map(|c| c == '@');

    cell.repeated()
        .at_least(1)
        .collect::<Vec<_>>()
        .separated_by(text::newline())
        .allow_trailing()
        .collect::<Vec<_>>()
        .map(|rows| {
            let height = rows.len();
            let width = rows.first().map(|r| r.len()).unwrap_or(0);
            Grid {
                width,
                height,
                cells: rows.into_iter().flatten().collect(),
            }
        })
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let grid = parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))?;

    let mut accessible = 0;
    for y in 0..grid.height {
        for x in 0..grid.width {
            // A roll is reachable by forklift when fewer than 4 rolls
            // surround it.
            if grid.cells[y * grid.width + x] && grid.neighbouring_rolls(x, y) < 4 {
                accessible += 1;
            }
        }
    }

    Ok(accessible.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() -> Result<()> {
        let input = "..@@.@@@@.
@@@.@.@.@@
@@@@@.@.@@
@.@@@@..@.
@@.@@@@.@@
.@@@@@@@.@
.@.@.@.@@@
@.@@@.@@@@
.@@@@@@@@.
@.@.@@@.@.";
        assert_eq!("13", process(input)?);
        Ok(())
    }
}
