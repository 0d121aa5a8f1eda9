use chumsky::prelude::*;
use miette::*;

/// Largest number formed by keeping exactly `k` digits of `bank` in their
/// original order.
///
/// Greedy scan: for each output position pick the highest digit that still
/// leaves enough digits behind it to fill the remaining positions. Ties take
/// the earliest occurrence, which keeps the widest window for later picks.
pub(crate) fn best_joltage(bank: &str, k: usize) -> u64 {
    let digits = bank.as_bytes();
    if digits.len() < k {
        return 0;
    }

    let mut value = 0u64;
    let mut start = 0;

    for remaining in (0..k).rev() {
        let end = digits.len() - remaining;
        let mut best = start;
        for idx in start + 1..end {
            if digits[idx] > digits[best] {
                best = idx;
            }
        }
        value = value * 10 + (digits[best] - b'0') as u64;
        start = best + 1;
    }
    value
}

pub(crate) fn parser<'a>() -> impl Parser<'a, &'a str, Vec<&'a str>, extra::Err<Rich<'a, char>>> {
    text::digits(10)
        .to_slice()
        .separated_by(text::newline())
        .allow_trailing()
        .collect()
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let banks = parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))?;

    let total: u64 = banks.into_iter().map(|bank| best_joltage(bank, 2)).sum();

    Ok(total.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case("987654321111111", 98)]
    #[case("811111111111119", 89)]
    #[case("234234234234278", 78)]
    #[case("818181911112111", 92)]
    fn picks_two_batteries(#[case] bank: &str, #[case] expected: u64) {
        assert_eq!(best_joltage(bank, 2), expected);
    }

    #[test]
    fn it_works() -> Result<()> {
        let input = "987654321111111
811111111111119
234234234234278
818181911112111";
        assert_eq!("357", process(input)?);
        Ok(())
    }
}
