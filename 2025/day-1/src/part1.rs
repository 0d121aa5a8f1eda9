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

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let rotations = parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))?;

    let mut position = STARTING_POSITION;
    let mut zero_stops = 0u64;

    for delta in rotations {
        position = (position + delta).rem_euclid(DIAL_SIZE);
        if position == 0 {
            zero_stops += 1;
        }
    }

    Ok(zero_stops.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

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
        assert_eq!("3", process(input)?);
        Ok(())
    }
}
