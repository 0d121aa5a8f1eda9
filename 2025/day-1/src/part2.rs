use chumsky::prelude::*;
use miette::*;

const STARTING_POSITION: i64 = 50;
const DIAL_SIZE: i64 = 100;

/// Parses `L<n>`/`R<n>` rotations into signed offsets (left is negative).
fn parser<'a>() -> impl Parser<'a, &'a str, Vec<i64>, extra::Err<Rich<'a, char>>> {
    let rotation = one_of("LR")
        .then(text::int(10).from_str::<i64>().unwrapped())
        .map(|(dir, amount)| if dir == 'L' { -amount } else { amount });

    rotation
        .separated_by(text::newline())
        .allow_trailing()
        .collect()
}

/// How many times a rotation from `position` (normalized to `0..DIAL_SIZE`)
/// by `delta` clicks past or onto zero. Counts multiples of the dial size in
/// the swept interval instead of stepping click by click.
fn zero_crossings(position: i64, delta: i64) -> i64 {
    if delta >= 0 {
        // Sweeps (position, position + delta].
        (position + delta).div_euclid(DIAL_SIZE)
    } else {
        // Sweeps [position + delta, position).
        (position - 1).div_euclid(DIAL_SIZE) - (position + delta - 1).div_euclid(DIAL_SIZE)
    }
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let rotations = parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))?;

    let mut position = STARTING_POSITION;
    let mut zero_hits = 0i64;

    for delta in rotations {
        zero_hits += zero_crossings(position, delta);
        position = (position + delta).rem_euclid(DIAL_SIZE);
    }

    Ok(zero_hits.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case(50, 50, 1)] // lands exactly on zero
    #[case(50, -50, 1)] // lands on zero from the other side
    #[case(0, -1, 0)] // leaving zero is not a hit
    #[case(50, -150, 2)] // full extra turn passes zero twice
    #[case(14, 30, 0)]
    fn counts_crossings(#[case] position: i64, #[case] delta: i64, #[case] expected: i64) {
        assert_eq!(zero_crossings(position, delta), expected);
    }

    #[test]
    fn it_works() -> Result<()> {
        let input = "L68
L30
R48
L5
R60
L55
L1
L99
R14
L82";
        assert_eq!("6", process(input)?);
        Ok(())
    }
}
