use chumsky::prelude::*;
use miette::*;

/// A report is safe when its levels are strictly monotone and every adjacent
/// pair differs by 1 to 3.
pub(crate) fn is_safe(levels: &[i64]) -> bool {
    if levels.len() < 2 {
        return true;
    }

    let ascending = levels[1] > levels[0];
    levels.windows(2).all(|pair| {
        let diff = pair[1] - pair[0];
        (1..=3).contains(&diff.abs()) && (diff > 0) == ascending
    })
}

pub(crate) fn parser<'a>() -> impl Parser<'a, &'a str, Vec<Vec<i64>>, extra::Err<Rich<'a, char>>> {
    let level = text::int(10).from_str::<i64>().unwrapped();

    level
        .separated_by(text::inline_whitespace().at_least(1))
        .at_least(1)
        .collect()
        .separated_by(text::newline())
        .allow_trailing()
        .collect()
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let reports = parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))?;

    let safe_count = reports.iter().filter(|r| is_safe(r)).count();

    Ok(safe_count.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case(&[7, 6, 4, 2, 1], true)]
    #[case(&[1, 2, 7, 8, 9], false)]
    #[case(&[9, 7, 6, 2, 1], false)]
    #[case(&[1, 3, 2, 4, 5], false)]
    #[case(&[8, 6, 4, 4, 1], false)]
    #[case(&[1, 3, 6, 7, 9], true)]
    fn classifies_reports(#[case] levels: &[i64], #[case] expected: bool) {
        assert_eq!(is_safe(levels), expected);
    }

    #[test]
    fn it_works() -> Result<()> {
        let input = "7 6 4 2 1
1 2 7 8 9
9 7 6 2 1
1 3 2 4 5
8 6 4 4 1
1 3 6 7 9";
        assert_eq!("2", process(input)?);
        Ok(())
    }
}
