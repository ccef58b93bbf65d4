//! Print the number of decimal digits in the Mersenne prime 2^57885161 - 1

use mersenne_digits::prime_candidate_digit_count;

/// Exponent of the 48th known Mersenne prime
const EXPONENT: u64 = 57885161;

fn main() {
    println!("{}", prime_candidate_digit_count(EXPONENT));
}
