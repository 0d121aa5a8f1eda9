use divan::black_box;

use aoc2025_day_5::{part1, part2};

fn main() {
    divan::main();
}

#[divan::bench]
fn part1() {
    part1::process(black_box(include_str!("../input1.txt"))).unwrap();
}

#[divan::bench]
fn part2() {
    part2::process(black_box(include_str!("../input2.txt"))).unwrap();
}
