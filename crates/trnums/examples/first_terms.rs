//! Prints the first ten elements of the four classic sequences:
//! inverse triangular, inverse tetrahedral, and their gap numbers.
//!
//! Run: `cargo run -p trnums --example first_terms`

use trnums::prelude::*;

const N: usize = 10;

fn print_block<I>(label: &str, seq: I)
where
    I: Iterator<Item = Result<BigRational, SequenceError>>,
{
    println!("--- {label}");
    let cfg = RenderCfg::default();
    for term in seq.take(N) {
        match term {
            Ok(t) => println!("{}", render(&t, cfg)),
            Err(err) => {
                println!("error: {err}");
                break;
            }
        }
    }
}

fn main() {
    let one = || BigRational::from_integer(1.into());
    let dim = |d: i64| BigRational::from_integer(d.into());

    print_block("1/T(n, 2)", inverse_simplex_numbers(one(), dim(2)));
    print_block("1/T(n, 3)", inverse_simplex_numbers(one(), dim(3)));
    print_block("gap, d = 2", gap_numbers(one()));
    print_block("summed gap, d = 3", summed_gap_numbers(one(), dim(3)));
}
