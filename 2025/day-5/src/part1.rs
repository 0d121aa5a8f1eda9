use chumsky::prelude::*;
use miette::*;
use std::ops::RangeInclusive;

/// Parses the two blank-line separated blocks: fresh ID ranges, then the
/// available ingredient IDs.
pub(crate) fn parser<'a>()
-> impl Parser<'a, &'a str, (Vec<RangeInclusive<u64>>, Vec<u64>), extra::Err<Rich<'a, char>>> {
    let newline = just('\r').or_not().ignore_then(just('\n'));
    let number = text::int(10).from_str::<u64>().unwrapped();

    let range = number
        .then_ignore(just('-'))
        .then(number)
        .map(|(start, end)| start..=end);

    let ranges = range.separated_by(newline).allow_trailing().collect();
    let ids = number.separated_by(newline).allow_trailing().collect();

    ranges.then_ignore(newline).then(ids).padded()
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let (ranges, ids) = parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))?;

    // An ingredient is fresh if any range covers it; overlapping ranges must
    // not count it twice.
    let fresh_count = ids
        .iter()
        .filter(|id| ranges.iter().any(|range| range.contains(id)))
        .count();

    Ok(fresh_count.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() -> Result<()> {
        let input = "3-5
10-14
16-20
12-18

1
5
8
11
17
32";
        assert_eq!("3", process(input)?);
        Ok(())
    }
}
