//! Example: edit distance with a reconstructed edit script.
//!
//! Run with:
//! `cargo run --example edit_distance`

use algo_drills::problems::edit_distance::{edit_distance, edit_matrix, EditOp};

fn main() {
    let a = b"intention";
    let b = b"execution";

    println!("Distance (rolling rows): {}", edit_distance(a, b));

    let matrix = edit_matrix(a, b);
    println!("Distance (full table):   {}", matrix.distance());

    // Print one minimal script.
    for op in matrix.script() {
        match op {
            EditOp::Keep(c) => println!("  keep       {}", char::from(c)),
            EditOp::Substitute { from, to } => {
                println!("  substitute {} -> {}", char::from(from), char::from(to))
            }
            EditOp::Insert(c) => println!("  insert     {}", char::from(c)),
            EditOp::Delete(c) => println!("  delete     {}", char::from(c)),
        }
    }
}
