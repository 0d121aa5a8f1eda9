use itertools::Itertools;
use miette::*;

#[derive(Debug, Clone, Copy)]
pub(crate) enum Op {
    Add,
    Mul,
}

impl Op {
    pub(crate) fn apply(self, numbers: &[u64]) -> u64 {
        match self {
            Op::Add => numbers.iter().sum(),
            Op::Mul => numbers.iter().product(),
        }
    }
}

fn byte_at(line: &str, col: usize) -> u8 {
    line.as_bytes().get(col).copied().unwrap_or(b' ')
}

/// Column spans `[start, end)` holding one worksheet problem each.
/// Problems are separated by columns that are blank on every row.
pub(crate) fn problem_spans(lines: &[&str], width: usize) -> Vec<(usize, usize)> {
    let blank = |col: &usize| lines.iter().all(|line| byte_at(line, *col) == b' ');

    let mut spans = Vec::new();
    for (is_blank, cols) in &(0..width).chunk_by(blank) {
        if !is_blank {
            let cols: Vec<usize> = cols.collect();
            spans.push((cols[0], cols[cols.len() - 1] + 1));
        }
    }
    spans
}

/// The `+`/`*` on the bottom row of the span, if present.
pub(crate) fn operator(lines: &[&str], start: usize, end: usize) -> Option<Op> {
    let last = lines.last()?;
    let slice = &last[start.min(last.len())..end.min(last.len())];
    match slice.trim() {
        "+" => Some(Op::Add),
        "*" => Some(Op::Mul),
        _ => None,
    }
}

/// Numbers read horizontally: every row above the operator row contributes
/// its whitespace-separated values inside the span.
fn numbers(lines: &[&str], start: usize, end: usize) -> Vec<u64> {
    lines[..lines.len() - 1]
        .iter()
        .flat_map(|line| {
            let slice = &line[start.min(line.len())..end.min(line.len())];
            slice.split_whitespace().filter_map(|n| n.parse().ok())
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
        assert_eq!("4277556", process(input)?);
        Ok(())
    }
}
