use miette::*;

use crate::part1::{operator, problem_spans};

/// Numbers read vertically: each column of the span spells one number,
/// digits top to bottom, ignoring the operator row.
fn numbers(lines: &[&str], start: usize, end: usize) -> Vec<u64> {
    (start..end)
        .filter_map(|col| {
            let digits: String = lines[..lines.len() - 1]
                .iter()
                .filter_map(|line| {
                    let c = *line.as_bytes().get(col)?;
                    c.is_ascii_digit().then(|| c as char)
                })
                .collect();
            digits.parse().ok()
        })
        .collect()
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let lines: Vec<&str> = input.lines().collect();
    if lines.is_empty() {
        return Ok("0".to_string());
    }
    let width = lines.iter().map(|line| line.len()).max().unwrap_or(0);

    let grand_total: u64 = problem_spans(&lines, width)
        .into_iter()
        .filter_map(|(start, end)| {
            let op = operator(&lines, start, end)?;
            let numbers = numbers(&lines, start, end);
            (!numbers.is_empty()).then(|| op.apply(&numbers))
        })
        .sum();

    Ok(grand_total.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() -> Result<()> {
        let input = "123 328  51 64
 45 64  387 23
  6 98  215 314
*   +   *   +  ";
        assert_eq!("3263827", process(input)?);
        Ok(())
    }
}
