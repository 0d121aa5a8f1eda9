use miette::*;

use crate::part1::Manifold;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let manifold = Manifold::from_str(input)?;
    let (sx, sy) = manifold.start;

    // Timelines per column at the current row. Unlike part 1 these do not
    // collapse when they converge; splitters double them, so the totals grow
    // exponentially and need u128.
    let mut timelines = vec![0u128; manifold.width];
    timelines[sx] = 1;

    for y in sy..manifold.height.saturating_sub(1) {
        let mut next = vec![0u128; manifold.width];
        for x in 0..manifold.width {
            let count = timelines[x];
            if count == 0 {
                continue;
            }
            if manifold.splitter(x, y) {
                // Branches leaving the grid sideways are lost.
                if x > 0 {
                    next[x - 1] += count;
                }
                if x + 1 < manifold.width {
                    next[x + 1] += count;
                }
            } else {
                next[x] += count;
            }
        }
        timelines = next;
    }

    let total: u128 = timelines.iter().sum();

    Ok(total.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() -> Result<()> {
        let input = ".......S.......
...............
.......^.......
...............
......^.^......
...............
.....^.^.^.....
...............
....^.^...^....
...............
...^.^...^.^...
...............
..^...^.....^..
...............
.^.^.^.^.^...^.
...............";
        assert_eq!("40", process(input)?);
        Ok(())
    }
}
