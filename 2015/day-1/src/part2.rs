use chumsky::prelude::*;
use miette::*;

fn parser<'a>() -> impl Parser<'a, &'a str, Vec<i64>, extra::Err<Rich<'a, char>>> {
    let step = just('(').to(1).or(just(')').to(-1));

    step.repeated().collect().padded()
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let steps = parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))?;

    let mut floor: i64 = 0;
    for (idx, step) in steps.iter().enumerate() {
        floor += step;
        if floor < 0 {
            // Positions are 1-based in the puzzle statement.
            return Ok((idx + 1).to_string());
        }
    }

    Err(miette!("The directions never enter the basement"))
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case(")", "1")]
    #[case("()())", "5")]
    fn finds_the_basement_position(#[case] input: &str, #[case] expected: &str) -> Result<()> {
        assert_eq!(expected, process(input)?);
        Ok(())
    }

    #[test]
    fn staying_above_ground_is_an_error() {
        assert!(process("((((").is_err());
    }
}
