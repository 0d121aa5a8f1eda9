use chumsky::prelude::*;
use miette::*;

use crate::part1::parser;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let (mut ranges, _ids) = parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))?;

    ranges.sort_by_key(|range| *range.start());

    // Sweep the sorted ranges, merging overlaps, and total the integers
    // covered by each merged run.
    let mut total_ids: u64 = 0;
    let mut current: Option<(u64, u64)> = None;

    for range in ranges {
        let (start, end) = (*range.start(), *range.end());
        match current {
            Some((run_start, run_end)) if start <= run_end => {
                current = Some((run_start, run_end.max(end)));
            }
            Some((run_start, run_end)) => {
                total_ids += run_end - run_start + 1;
                current = Some((start, end));
            }
            None => current = Some((start, end)),
        }
    }
    if let Some((run_start, run_end)) = current {
        total_ids += run_end - run_start + 1;
    }

    Ok(total_ids.to_string())
}
