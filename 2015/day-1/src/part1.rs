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

    let final_floor: i64 = steps.iter().sum();

    Ok(final_floor.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case("(())", "0")]
    #[case("(((", "3")]
    #[case("))(((((", "3")]
    #[case("())", "-1")]
    #[case(")())())", "-3")]
    fn reaches_the_expected_floor(#[case] input: &str, #[case] expected: &str) -> Result<()> {
        assert_eq!(expected, process(input)?);
        Ok(())
    }
}
