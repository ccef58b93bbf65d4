//! Table of powers of ten used to split numbers during decimal conversion
//!
//! Each entry is the square of the one before it: 10<sup>1024</sup>,
//! 10<sup>2048</sup>, 10<sup>4096</sup>, ... The table only needs to
//! reach about half the bit length of the number being converted, as
//! the largest entry is used to cut the number into two halves.
//!

use crate::*;
use crate::stdlib::ops::Index;


/// A power of ten, along with its exponent and bit length
///
/// Entries are only created by [`build_power_table`] and
/// [`build_power_table_above`], so `value` is always 10^power:
///
/// ```compile_fail
/// use mersenne_digits::{BigNum, PowerOfTen};
///
/// let bogus = PowerOfTen { value: BigNum::zero(), power: 1, bit_count: 0 };
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PowerOfTen {
    value: BigNum,
    power: usize,
    bit_count: u64,
}

impl PowerOfTen {
    fn new(value: BigNum, power: usize) -> Self {
        let bit_count = value.bit_length();
        Self { value, power, bit_count }
    }

    /// 10^power
    #[inline]
    pub fn value(&self) -> &BigNum {
        &self.value
    }

    /// Exponent of ten (the number of decimal digits in a remainder
    /// after dividing by `value`, once zero padded)
    #[inline]
    pub fn power(&self) -> usize {
        self.power
    }

    /// Number of bits in value
    #[inline]
    pub fn bit_count(&self) -> u64 {
        self.bit_count
    }
}


/// Powers of ten in order of increasing power
#[derive(Clone, Debug, Default)]
pub struct PowerTable {
    entries: Vec<PowerOfTen>,
}

impl PowerTable {
    /// All entries, smallest power first
    #[inline]
    pub fn entries(&self) -> &[PowerOfTen] {
        &self.entries
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entry with the highest power
    #[inline]
    pub fn largest(&self) -> Option<&PowerOfTen> {
        self.entries.last()
    }
}

impl Index<usize> for PowerTable {
    type Output = PowerOfTen;

    fn index(&self, idx: usize) -> &PowerOfTen {
        &self.entries[idx]
    }
}


/// Build the table of powers of ten for numbers of about 2 * target_bits bits
///
/// Only powers above the crate's default threshold (1000, unless
/// configured at build time) are kept.
///
pub fn build_power_table(target_bits: u64) -> PowerTable {
    build_power_table_above(target_bits, POWER_TABLE_THRESHOLD)
}

/// Build the table of powers of ten, keeping only powers greater than min_power
///
/// Starting from ten, the value is squared until it has at least
/// target_bits bits.
///
pub fn build_power_table_above(target_bits: u64, min_power: usize) -> PowerTable {
    let mut entries = Vec::new();
    let mut value = BigNum::from(10u8);
    let mut power = 1;

    while value.bit_length() < target_bits {
        value = value.square();
        power *= 2;
        if power > min_power {
            entries.push(PowerOfTen::new(value.clone(), power));
        }
    }

    tracing::debug!(
        target_bits,
        min_power,
        levels = entries.len(),
        largest_power = entries.last().map_or(0, PowerOfTen::power),
        "built power-of-ten table"
    );

    PowerTable { entries }
}


#[cfg(test)]
mod test {
    use super::*;

    /// Bit length of 10^512 (the last power squared before 10^1024)
    const BITS_OF_TEN_TO_512: u64 = 1701;

    #[test]
    fn empty_for_small_targets() {
        assert!(build_power_table(0).is_empty());
        assert!(build_power_table(1).is_empty());
        assert!(build_power_table(100).is_empty());
        assert!(build_power_table(BITS_OF_TEN_TO_512).is_empty());
    }

    #[test]
    fn first_entry_is_ten_to_1024() {
        let table = build_power_table(BITS_OF_TEN_TO_512 + 1);
        assert_eq!(table.len(), 1);
        assert_eq!(table[0].power(), 1024);
        // log2(10^1024) = 3401.6...
        assert_eq!(table[0].bit_count(), 3402);
    }

    #[test]
    fn reaches_target() {
        let target = 100_000;
        let table = build_power_table(target);
        let largest = table.largest().unwrap();
        assert!(largest.bit_count() >= target);
        assert_eq!(largest.power(), 32768);
        assert_eq!(table.len(), 6);
    }

    #[test]
    fn entries_strictly_increase() {
        let table = build_power_table(50_000);
        for pair in table.entries().windows(2) {
            assert!(pair[0].power() < pair[1].power());
            assert!(pair[0].bit_count() < pair[1].bit_count());
            assert_eq!(pair[1].power(), 2 * pair[0].power());
        }
    }

    #[test]
    fn bit_counts_match_values() {
        let table = build_power_table_above(400, 4);
        let powers: Vec<usize> = table.entries().iter().map(|e| e.power()).collect();
        assert_eq!(powers, vec![8, 16, 32, 64, 128]);
        for entry in table.entries() {
            assert_eq!(entry.bit_count(), entry.value().bit_length());
        }
        assert_eq!(table[0].value(), &BigNum::from(100000000u32));
    }

    #[test]
    fn small_threshold_keeps_more_entries() {
        let table = build_power_table_above(10, 0);
        let powers: Vec<usize> = table.entries().iter().map(|e| e.power()).collect();
        assert_eq!(powers, vec![2, 4]);
        assert_eq!(table[1].value(), &BigNum::from(10000u32));
    }

    #[test]
    fn entries_are_exact_powers_of_ten() {
        for table in [build_power_table_above(400, 0), build_power_table(20_000)] {
            assert!(!table.is_empty());
            for entry in table.entries() {
                let mut expected = BigNum::one();
                for _ in 0..entry.power() {
                    expected *= 10u8;
                }
                assert_eq!(entry.value(), &expected, "10^{}", entry.power());
            }
        }
    }
}
