// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Arbitrary precision unsigned integers with fast decimal conversion
//!
//! `BigNum` stores a non-negative integer as a vector of fixed-width
//! "limbs", least significant first. The crate provides just enough
//! arithmetic (schoolbook multiplication and Knuth long division) to
//! turn very large numbers into decimal strings quickly.
//!
//! Converting by repeatedly dividing by a small power of ten is
//! quadratic in the number of limbs. Instead, the number is split
//! against a table of powers of ten built by repeated squaring
//! (10<sup>1024</sup>, 10<sup>2048</sup>, ...), and each piece is
//! converted recursively, only falling back to the quadratic method
//! for pieces small enough that it is cheap.
//!
//! Limbs are 64 bits wide unless the crate is built with
//! `RUST_MERSENNE_DIGITS_LIMB_BITS=32`.
//!
//! # Example
//!
//! ```
//! use mersenne_digits::{make_mersenne_candidate, to_decimal_string};
//!
//! let m13 = make_mersenne_candidate(13);
//! assert_eq!(to_decimal_string(&m13), "8191");
//! assert_eq!(m13.to_string(), "8191");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![allow(clippy::style)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::needless_return)]


extern crate num_integer;

#[cfg(feature = "serde")]
extern crate serde;

#[cfg(feature = "std")]
include!("./with_std.rs");

#[cfg(not(feature = "std"))]
include!("./without_std.rs");

// make available some standard items
use self::stdlib::fmt;
use self::stdlib::string::String;
use self::stdlib::vec::Vec;

// const POWER_TABLE_THRESHOLD: usize = ${RUST_MERSENNE_DIGITS_POWER_TABLE_THRESHOLD} or 1000;
include!(concat!(env!("OUT_DIR"), "/power_table_threshold.rs"));

/// The "base type" of the number: one limb (fragment)
#[cfg(not(limb_bits_32))]
pub type Limb = u64;

/// Integer double the size of Limb
///
/// Must be able to hold the product of two Limb objects plus two carries
#[cfg(not(limb_bits_32))]
pub type DoubleLimb = u128;

/// The "base type" of the number: one limb (fragment)
#[cfg(limb_bits_32)]
pub type Limb = u32;

/// Integer double the size of Limb
#[cfg(limb_bits_32)]
pub type DoubleLimb = u64;

/// Number of bits in one Limb
pub const LIMB_BITS: u32 = Limb::BITS;

#[macro_use]
mod macros;

pub mod arithmetic;
pub use arithmetic::{bit_length, leading_zero_bits, normalize};
pub use arithmetic::multiplication::multiply;
pub use arithmetic::division::divide;

pub mod power_table;
pub use power_table::{build_power_table, build_power_table_above, PowerOfTen, PowerTable};

pub mod decimal;
pub use decimal::{to_decimal_string, to_decimal_string_direct, to_decimal_string_with_threshold};

mod mersenne;
pub use mersenne::{make_mersenne_candidate, prime_candidate_digit_count};

// Display, Debug
mod impl_fmt;

// From<T> impls
mod impl_convert;

// Mul<T>, MulAssign<T>
mod impl_ops_mul;

#[cfg(feature = "serde")]
mod impl_serde;


/// Reasons a long division could not be carried out
///
/// These are precondition violations by the caller; the division is
/// not attempted.
///
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DivisionError {
    #[error("divisor has no limbs")]
    EmptyDivisor,
    #[error("division by zero")]
    ZeroDivisor,
    #[error("divisor has a zero most-significant limb")]
    UnnormalizedDivisor,
    #[error("dividend has {dividend} limbs, fewer than the divisor's {divisor}")]
    DividendTooShort { dividend: usize, divisor: usize },
}


/// An arbitrary precision unsigned integer
///
/// Limbs are stored least significant first, and are always normalized:
/// there is at least one limb, and the most significant limb is nonzero
/// unless the value is zero (which is stored as a single zero limb).
///
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BigNum {
    limbs: Vec<Limb>,
}

impl BigNum {
    /// Create number from little-endian limbs, normalizing them
    #[inline]
    pub fn from_limbs(limbs: Vec<Limb>) -> BigNum {
        BigNum {
            limbs: normalize(limbs),
        }
    }

    /// The value zero
    #[inline]
    pub fn zero() -> BigNum {
        BigNum { limbs: vec![0] }
    }

    /// The value one
    #[inline]
    pub fn one() -> BigNum {
        BigNum { limbs: vec![1] }
    }

    /// Borrow the normalized little-endian limbs
    #[inline]
    pub fn limbs(&self) -> &[Limb] {
        &self.limbs
    }

    /// Convert into the normalized little-endian limbs
    #[inline]
    pub fn into_limbs(self) -> Vec<Limb> {
        self.limbs
    }

    /// Number of limbs (always at least one)
    #[inline]
    pub fn len(&self) -> usize {
        self.limbs.len()
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.limbs == [0]
    }

    /// Number of significant bits (zero has none)
    #[inline]
    pub fn bit_length(&self) -> u64 {
        bit_length(&self.limbs)
    }

    /// Return self * self
    pub fn square(&self) -> BigNum {
        BigNum {
            limbs: multiply(&self.limbs, &self.limbs),
        }
    }

    /// Return (self / divisor, self % divisor)
    ///
    /// Fails if the divisor is zero, or has more limbs than self.
    ///
    pub fn div_rem(&self, divisor: &BigNum) -> Result<(BigNum, BigNum), DivisionError> {
        let (quotient, remainder) = divide(&self.limbs, &divisor.limbs)?;
        Ok((BigNum { limbs: quotient }, BigNum { limbs: remainder }))
    }

    /// Return the decimal representation of the number
    ///
    /// This is the same as the `Display` output.
    ///
    pub fn to_decimal_string(&self) -> String {
        to_decimal_string(self)
    }

    /// Wrap limbs already known to be normalized
    #[inline]
    pub(crate) fn from_normalized_limbs(limbs: Vec<Limb>) -> BigNum {
        debug_assert!(arithmetic::is_normalized(&limbs));
        BigNum { limbs }
    }
}

impl Default for BigNum {
    #[inline]
    fn default() -> BigNum {
        BigNum::zero()
    }
}


#[cfg(test)]
mod bignum_tests {
    use super::*;
    include!("lib.tests.rs");
}


#[cfg(test)]
extern crate proptest;
