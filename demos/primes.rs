//! Example: bounded sieve versus the unbounded prime stream.
//!
//! Run with:
//! `cargo run --example primes`

use algo_drills::problems::sieve::{sieve, sieve_with_steps, Primes};

fn main() {
    println!("Primes below 50: {:?}", sieve(50));

    let trace = sieve_with_steps(50);
    for step in &trace.steps {
        println!("  {} crosses out {:?}", step.prime, step.marked);
    }

    let mut stream = Primes::new();
    let first: Vec<u64> = stream.by_ref().take(15).collect();
    println!("First 15 from the stream: {first:?}");
    println!("Next one: {:?}", stream.next());
}
