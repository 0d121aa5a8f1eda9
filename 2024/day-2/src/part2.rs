use chumsky::prelude::*;
use miette::*;

use crate::part1::{is_safe, parser};

/// The problem dampener tolerates one bad level: a report also counts as
/// safe when removing any single level makes it safe.
fn is_safe_dampened(levels: &[i64]) -> bool {
    if is_safe(levels) {
        return true;
    }

    (0..levels.len()).any(|skip| {
        let mut shortened = levels.to_vec();
        shortened.remove(skip);
        is_safe(&shortened)
    })
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let reports = parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))?;

    let safe_count = reports.iter().filter(|r| is_safe_dampened(r)).count();

    Ok(safe_count.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case(&[1, 2, 7, 8, 9], false)]
    #[case(&[9, 7, 6, 2, 1], false)]
    #[case(&[1, 3, 2, 4, 5], true)]
    #[case(&[8, 6, 4, 4, 1], true)]
    fn dampener_rescues_single_bad_levels(#[case] levels: &[i64], #[case] expected: bool) {
        assert_eq!(is_safe_dampened(levels), expected);
    }

    #[test]
    fn it_works() -> Result<()> {
        let input = "7 6 4 2 1
1 2 7 8 9
9 7 6 2 1
1 3 2 4 5
8 6 4 4 1
1 3 6 7 9";
        assert_eq!("4", process(input)?);
        Ok(())
    }
}
