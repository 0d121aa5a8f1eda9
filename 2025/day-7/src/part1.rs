use miette::*;

pub(crate) struct Manifold {
    pub(crate) width: usize,
    pub(crate) height: usize,
    splitters: Vec<bool>,
    pub(crate) start: (usize, usize),
}

impl Manifold {
    pub(crate) fn from_str(input: &str) -> Result<Self> {
        let mut splitters = Vec::new();
        let mut start = None;
        let mut width = 0;
        let mut height = 0;

        for (y, line) in input.lines().enumerate() {
            width = line.len();
            height += 1;
            for (x, c) in line.chars().enumerate() {
                if c == 'S' {
                    start = Some((x, y));
                }
                splitters.push(c == '^');
            }
        }

        let start = start.ok_or(miette!("No start position 'S' found in diagram"))?;

        Ok(Self {
            width,
            height,
            splitters,
            start,
        })
    }

    pub(crate) fn splitter(&self, x: usize, y: usize) -> bool {
        self.splitters[y * self.width + x]
    }
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let manifold = Manifold::from_str(input)?;
    let (sx, sy) = manifold.start;

    // Which columns carry a beam into the current row. Converging beams
    // collapse into one, so a splitter is counted at most once.
    let mut active = vec![false; manifold.width];
    active[sx] = true;
    let mut splits = 0u64;

    for y in sy + 1..manifold.height {
        let mut next = vec![false; manifold.width];
        for x in 0..manifold.width {
            if !active[x] {
                continue;
            }
            if manifold.splitter(x, y) {
                splits += 1;
                if x > 0 {
                    next[x - 1] = true;
                }
                if x + 1 < manifold.width {
                    next[x + 1] = true;
                }
            } else {
                next[x] = true;
            }
        }
        active = next;
    }

    Ok(splits.to_string())
}
