use chumsky::prelude::*;
use miette::*;

use crate::circuit::{self, PAIRS_TO_PROCESS};

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let boxes = circuit::parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))?;

    let mut forest = circuit::connect_closest_circuits(&boxes, PAIRS_TO_PROCESS);
    let product = circuit::three_largest_circuit_product(&mut forest)?;

    Ok(product.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "162,817,812
57,618,57
906,360,560
592,479,940
352,342,300
466,668,158
542,29,236
431,825,988
739,650,466
52,470,668
216,146,977
819,987,18
117,168,530
805,96,715
346,949,466
970,615,88
941,993,340
862,61,35
984,92,344
425,690,689";

    #[test]
    fn example_with_ten_pairs() -> Result<()> {
        // The puzzle example wires only the 10 shortest connections.
        let boxes = circuit::parser()
            .parse(EXAMPLE)
            .into_result()
            .map_err(|e| miette!("Parse failed: {:?}", e))?;

        let mut forest = circuit::connect_closest_circuits(&boxes, 10);
        assert_eq!(circuit::three_largest_circuit_product(&mut forest)?, 40);
        Ok(())
    }

    #[test]
    fn it_works() -> Result<()> {
        // With the full 1000-pair budget all 190 candidate pairs of the
        // example are processed, leaving a single circuit of 20 boxes.
        assert_eq!("20", process(EXAMPLE)?);
        Ok(())
    }
}
