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

    // Pair up the lists smallest-to-smallest and total the gaps.
    let total_distance: u64 = left
        .into_iter()
        .sorted_unstable()
        .zip(right.into_iter().sorted_unstable())
        .map(|(a, b)| a.abs_diff(b))
        .sum();

    Ok(total_distance.to_string())
}
