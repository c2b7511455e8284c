// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command line: `queens-count [threads [parts [part]]]`.

use std::time::Instant;

fn main() {
    let mut args = std::env::args().skip(1);
    let threads = parse_or(args.next(), 4);
    let parts = parse_or(args.next(), 1);
    let part = parse_or(args.next(), 0);

    let start_clock = Instant::now();
    let res = queens_count::count_solutions(threads as usize, part, parts);
    let elapsed = start_clock.elapsed();

    println!("Result: {res}");
    println!("Elapsed time: {} s", elapsed.as_secs_f64());
}

// atoi semantics: a malformed argument counts as 0, not as an error.
fn parse_or(arg: Option<String>, default: u32) -> u32 {
    match arg {
        Some(s) => s.parse().unwrap_or(0),
        None => default,
    }
}
