pub mod circuit;
pub mod part1;
pub mod part2;
