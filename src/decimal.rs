//! Conversion of BigNum to decimal strings
//!
//! Small numbers are converted directly, by repeatedly dividing by the
//! largest power of ten that fits in a single limb; this is quadratic in
//! the number of limbs. Large numbers are first split by dividing by a
//! power of ten from a [`PowerTable`], each part is converted recursively
//! with the next smaller power, and the results are concatenated.
//!

use crate::*;
use crate::arithmetic::{bit_length, strip_significant_zeros};
use crate::arithmetic::division::{divide_by_limb_in_place, divide_unchecked};


/// Largest power of ten fitting in a limb, and its exponent
#[cfg(not(limb_bits_32))]
const DECIMAL_CHUNK: (Limb, usize) = (10_000_000_000_000_000_000, 19);

#[cfg(limb_bits_32)]
const DECIMAL_CHUNK: (Limb, usize) = (1_000_000_000, 9);


/// Return the decimal representation of num
///
/// The argument is left untouched; conversion works on a private copy
/// of its limbs. The result has no leading zeros, except for the
/// number zero itself which is `"0"`.
///
pub fn to_decimal_string(num: &BigNum) -> String {
    to_decimal_string_with_threshold(num, POWER_TABLE_THRESHOLD)
}

/// Return the decimal representation of num, splitting with powers of
/// ten greater than 10^min_power
///
/// The threshold only affects speed: every value of min_power produces
/// the same string.
///
pub fn to_decimal_string_with_threshold(num: &BigNum, min_power: usize) -> String {
    let bits = num.bit_length();
    let table = build_power_table_above(bits / 2, min_power);

    let _scope = tracing::debug_span!(
        "to_decimal_string",
        bits = bits,
        limbs = num.len(),
        levels = table.len(),
    )
    .entered();

    let result = to_decimal_helper(num.limbs().to_vec(), table.entries(), 0);
    strip_leading_zeros(result)
}

/// Return the decimal representation of num using only the direct
/// (quadratic) method
pub fn to_decimal_string_direct(num: &BigNum) -> String {
    to_decimal_fixed_width(num.limbs().to_vec(), 0)
}


/// Convert num to decimal, zero padded on the left to at least width digits
///
/// Consumes the limbs, using them as scratch space.
///
pub fn to_decimal_fixed_width(num: Vec<Limb>, width: usize) -> String {
    let mut result = String::new();
    write_fixed_width(num, width, &mut result);
    result
}

/// Convert num to decimal using powers of ten in `table` (smallest first)
///
/// The last entry of the table is tried first; each recursive level
/// uses the table without its last entry. The result is zero padded to
/// at least width digits.
///
pub fn to_decimal_helper(num: Vec<Limb>, table: &[PowerOfTen], width: usize) -> String {
    let mut result = String::with_capacity(estimate_decimal_digits(bit_length(&num)).max(width));
    write_decimal(num, table, width, &mut result);
    result
}


/// Append decimal digits of num to out, splitting by table entries when num is large
fn write_decimal(num: Vec<Limb>, table: &[PowerOfTen], width: usize, out: &mut String) {
    let (entry, smaller) = match table.split_last() {
        Some((entry, smaller)) if bit_length(&num) > entry.bit_count() => (entry, smaller),
        _ => return write_fixed_width(num, width, out),
    };

    let divisor = entry.value().limbs();
    let mut parts = Vec::with_capacity((bit_length(&num) / entry.bit_count()) as usize);

    // num has more bits than the divisor, so it has at least as many limbs
    let (mut quotient, remainder) = divide_unchecked(&num, divisor);
    drop(num);
    parts.push(remainder);

    while bit_length(&quotient) > entry.bit_count() {
        let (q, r) = divide_unchecked(&quotient, divisor);
        parts.push(r);
        quotient = q;
    }

    tracing::trace!(power = entry.power(), parts = parts.len(), "split by power of ten");

    // every part is exactly entry.power() digits wide; the quotient gets
    // whatever is left of the requested width
    let quotient_width = width.saturating_sub(parts.len() * entry.power());
    write_decimal(quotient, smaller, quotient_width, out);

    for part in parts.into_iter().rev() {
        write_decimal(part, smaller, entry.power(), out);
    }
}

/// Append decimal digits of num to out, zero padded to width
fn write_fixed_width(num: Vec<Limb>, width: usize, out: &mut String) {
    let digits = decimal_digits_le(num);
    for _ in digits.len()..width {
        out.push('0');
    }
    out.extend(digits.iter().rev().map(|&d| char::from(d)));
}

/// ASCII decimal digits of num, least significant first
///
/// Digits are peeled off a chunk (a limb-sized power of ten) at a time.
/// Each chunk is zero padded, except the most significant one.
///
fn decimal_digits_le(mut num: Vec<Limb>) -> Vec<u8> {
    let (chunk, chunk_digits) = DECIMAL_CHUNK;
    let mut digits = Vec::with_capacity(estimate_decimal_digits(bit_length(&num)));

    while !num.is_empty() {
        let mut rem = divide_by_limb_in_place(&mut num, chunk);
        strip_significant_zeros(&mut num);

        for _ in 0..chunk_digits {
            digits.push(b'0' + (rem % 10) as u8);
            rem /= 10;
            if rem == 0 && num.is_empty() {
                break;
            }
        }
    }

    digits
}

/// Upper bound on the number of decimal digits in a number with this many bits
///
/// 1234 / 4096 is slightly more than log10(2).
///
pub(crate) fn estimate_decimal_digits(bits: u64) -> usize {
    ((bits * 1234) >> 12) as usize + 1
}

/// Remove leading zeros, leaving "0" if nothing else is left
fn strip_leading_zeros(mut s: String) -> String {
    match s.find(|c: char| c != '0') {
        Some(0) => s,
        Some(idx) => {
            s.replace_range(..idx, "");
            s
        }
        None => String::from("0"),
    }
}


#[cfg(test)]
mod test {
    use super::*;
    include!("decimal.tests.rs");
}
