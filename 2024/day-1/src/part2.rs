use chumsky::prelude::*;
use itertools::Itertools;
use miette::*;

/// Parses two whitespace-separated location IDs per line.
fn parser<'a>() -> impl Parser<'a, &'a str, Vec<(u64, u64)>, extra::Err<Rich<'a, char>>> {
    let id = text::int(10).from_str::<u64>().unwrapped();

    id.then_ignore(text::inline_whitespace().at_least(1))
        .then(id)
        .separated_by(text::newline())
        .allow_trailing()
        .collect()
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let rows = parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))?;

    let (left, right): (Vec<u64>, Vec<u64>) = rows.into_iter().unzip();

    let right_counts = right.into_iter().counts();

    // Each left-hand ID scores itself once per appearance in the right list.
    let similarity: u64 = left
        .into_iter()
        .map(|id| id * right_counts.get(&id).copied().unwrap_or(0) as u64)
        .sum();

    Ok(similarity.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() -> Result<()> {
        let input = "3   4
4   3
2   5
1   3
3   9
3   3";
        assert_eq!("31", process(input)?);
        Ok(())
    }
}
