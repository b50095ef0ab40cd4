//! Measures filter throughput.
//!
//! Usage: `filter_speed [n_cycles] [n_signals]`
extern crate iir_rs;

use iir_rs::prelude::*;
use std::env;
use std::time::Instant;

const DEFAULT_CYCLES: usize = 2_000_000;
const DEFAULT_SIGNALS: usize = 300;

const A: [f64; 9] = [
    1.0000, 4.7845, 10.4450, 13.4577, 11.1293, 6.0253, 2.0793, 0.4172, 0.0372,
];
const B: [f64; 9] = [
    0.1929, 1.5430, 5.4005, 10.8009, 13.5011, 10.8009, 5.4005, 1.5430, 0.1929,
];

fn report(name: &str, samples: usize, start: Instant) {
    let secs = start.elapsed().as_secs_f64();
    println!(
        "{}: {} samples in {:.3} s, {:.1} Msamples/s",
        name,
        samples,
        secs,
        samples as f64 / secs / 1e6
    );
}

fn main() {
    let args: Vec<usize> = env::args().skip(1).filter_map(|a| a.parse().ok()).collect();
    let n_cycles = args.first().cloned().unwrap_or(DEFAULT_CYCLES);
    let n_signals = args.get(1).cloned().unwrap_or(DEFAULT_SIGNALS);

    let a: Vec<Signal> = A.iter().map(|x| *x as Signal).collect();
    let b: Vec<Signal> = B.iter().map(|x| *x as Signal).collect();
    println!("Using sample type {}", <Signal as Sample>::TYPE_NAME);

    let mut single = SingleFilter::new(9, &b, &a).unwrap();
    let start = Instant::now();
    for _ in 0..n_cycles {
        single.add_input(1.5);
    }
    report("single", n_cycles, start);
    println!("last output {}", single.last_output());

    let input = vec![1.5 as Signal; n_signals];
    let mut shared = SharedFilter::new(9, n_signals as isize, Some(&b[..]), Some(&a[..]))
        .unwrap();
    let cycles = n_cycles / n_signals.max(1) * 10;
    let start = Instant::now();
    for _ in 0..cycles {
        shared.add_input(&input).unwrap();
    }
    report("shared", cycles * n_signals, start);

    shared.reset();
    let start = Instant::now();
    for _ in 0..cycles {
        shared.add_input_par(&input).unwrap();
    }
    report("shared (parallel)", cycles * n_signals, start);
    println!("last output {}", shared.last_output()[0]);
}
