use chumsky::prelude::*;
use glam::I64Vec2;
use itertools::Itertools;
use miette::*;

pub(crate) fn parser<'a>() -> impl Parser<'a, &'a str, Vec<I64Vec2>, extra::Err<Rich<'a, char>>> {
    let coord = text::int(10).from_str::<i64>().unwrapped();

    coord
        .then_ignore(just(','))
        .then(coord)
        .map(|(x, y)| I64Vec2::new(x, y))
        .separated_by(text::newline())
        .allow_trailing()
        .collect()
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let tiles = parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))?;

    // Rectangles are inclusive of both corner tiles, hence the +1 on each
    // side length.
    let max_area = tiles
        .iter()
        .tuple_combinations()
        .map(|(a, b)| ((a.x - b.x).unsigned_abs() + 1) * ((a.y - b.y).unsigned_abs() + 1))
        .max()
        .unwrap_or(0);

    Ok(max_area.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() -> Result<()> {
        let input = "7,1
11,1
11,7
9,7
9,5
2,5
2,3
7,3";
        assert_eq!("50", process(input)?);
        Ok(())
    }
}
