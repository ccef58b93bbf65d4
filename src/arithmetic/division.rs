//! Long division of limb slices (Knuth, TAOCP Vol 2, 4.3.1, Algorithm D)

use crate::*;
use super::{
    is_normalized,
    join_limbs,
    leading_zero_bits,
    normalize_in_place,
    shl_or_zero,
    shr_or_zero,
    split_double_limb,
};

use num_integer::div_rem;


/// Return (quotient, remainder) of u / v
///
/// The divisor must be normalized and nonzero, and the dividend must have
/// at least as many limbs as the divisor. Both results are normalized.
///
pub fn divide(u: &[Limb], v: &[Limb]) -> Result<(Vec<Limb>, Vec<Limb>), DivisionError> {
    check_division_operands(u, v)?;
    Ok(divide_unchecked(u, v))
}

/// Validate operands of the division
pub(crate) fn check_division_operands(u: &[Limb], v: &[Limb]) -> Result<(), DivisionError> {
    if v.is_empty() {
        return Err(DivisionError::EmptyDivisor);
    }
    if v.iter().all(|&d| d == 0) {
        return Err(DivisionError::ZeroDivisor);
    }
    if !is_normalized(v) {
        return Err(DivisionError::UnnormalizedDivisor);
    }
    if u.len() < v.len() {
        return Err(DivisionError::DividendTooShort {
            dividend: u.len(),
            divisor: v.len(),
        });
    }
    Ok(())
}

/// Divide without checking the operands
///
/// Callers guarantee the same preconditions `divide` checks.
///
pub(crate) fn divide_unchecked(u: &[Limb], v: &[Limb]) -> (Vec<Limb>, Vec<Limb>) {
    debug_assert!(check_division_operands(u, v).is_ok());

    if v.len() == 1 {
        let (mut quotient, remainder) = divide_by_limb(u, v[0]);
        normalize_in_place(&mut quotient);
        return (quotient, vec![remainder]);
    }

    let (mut quotient, mut remainder) = knuth_divide(u, v);
    normalize_in_place(&mut quotient);
    normalize_in_place(&mut remainder);
    (quotient, remainder)
}

/// Divide by single nonzero limb, returning unnormalized quotient and the remainder
pub(crate) fn divide_by_limb(u: &[Limb], divisor: Limb) -> (Vec<Limb>, Limb) {
    let mut quotient = u.to_vec();
    let remainder = divide_by_limb_in_place(&mut quotient, divisor);
    (quotient, remainder)
}

/// Replace digits of u with u / divisor, returning the remainder
pub(crate) fn divide_by_limb_in_place(u: &mut [Limb], divisor: Limb) -> Limb {
    debug_assert!(divisor != 0);

    let divisor = DoubleLimb::from(divisor);
    let mut rem: Limb = 0;
    for d in u.iter_mut().rev() {
        let (q, r) = div_rem(join_limbs(rem, *d), divisor);
        // rem < divisor, so q fits in one limb
        *d = q as Limb;
        rem = r as Limb;
    }
    rem
}

/// Algorithm D for divisors of two or more limbs
///
/// Returns unnormalized (quotient, remainder) of lengths
/// `u.len() - v.len() + 1` and `v.len()`.
///
fn knuth_divide(u: &[Limb], v: &[Limb]) -> (Vec<Limb>, Vec<Limb>) {
    let base: DoubleLimb = 1 << LIMB_BITS;
    let m = u.len();
    let n = v.len();
    debug_assert!(n >= 2 && m >= n);

    // D1: shift so the divisor's top bit is set
    let s = leading_zero_bits(v[n - 1]);
    let vn = shift_left(v, s, n);
    let mut un = shift_left(u, s, m + 1);

    let mut quotient = vec![0; m - n + 1];
    let v_top = DoubleLimb::from(vn[n - 1]);
    let v_next = DoubleLimb::from(vn[n - 2]);

    for j in (0..=m - n).rev() {
        // D3: estimate qhat from the top two limbs of the window
        let top = join_limbs(un[j + n], un[j + n - 1]);
        let mut qhat = top / v_top;
        let mut rhat = top - qhat * v_top;

        // at most two corrections; qhat < base is tested first so the
        // product below cannot overflow
        while qhat >= base || qhat * v_next > join_limbs(rhat as Limb, un[j + n - 2]) {
            qhat -= 1;
            rhat += v_top;
            if rhat >= base {
                break;
            }
        }

        // D4: multiply and subtract qhat * vn from the window
        let window = &mut un[j..=j + n];
        let went_negative = multiply_subtract(window, &vn, qhat as Limb);

        // D5, D6: add back once if the estimate was one too large
        if went_negative {
            qhat -= 1;
            add_back(window, &vn);
        }

        quotient[j] = qhat as Limb;
    }

    // D8: undo the shift on the remainder
    let remainder = (0..n)
        .map(|i| (un[i] >> s) | shl_or_zero(un[i + 1], LIMB_BITS - s))
        .collect();

    (quotient, remainder)
}

/// Copy digits shifted left by s bits into a vector of given length
///
/// Bits shifted out of the top digit land in the extra limb (if any).
///
fn shift_left(digits: &[Limb], s: u32, len: usize) -> Vec<Limb> {
    debug_assert!(len == digits.len() || len == digits.len() + 1);

    let mut result = Vec::with_capacity(len);
    let mut carry_in: Limb = 0;
    for &d in digits {
        result.push(shl_or_zero(d, s) | carry_in);
        carry_in = shr_or_zero(d, LIMB_BITS - s);
    }
    if len > digits.len() {
        result.push(carry_in);
    }
    result
}

/// window -= q * v, where window has one more limb than v
///
/// Returns true if the subtraction borrowed past zero.
///
fn multiply_subtract(window: &mut [Limb], v: &[Limb], q: Limb) -> bool {
    debug_assert_eq!(window.len(), v.len() + 1);

    let q = DoubleLimb::from(q);
    let mut carry: Limb = 0;
    let mut borrow = false;
    for (w, &d) in window.iter_mut().zip(v) {
        let (hi, lo) = split_double_limb(q * DoubleLimb::from(d) + DoubleLimb::from(carry));
        carry = hi;

        let (diff, b1) = w.overflowing_sub(lo);
        let (diff, b2) = diff.overflowing_sub(Limb::from(borrow));
        *w = diff;
        borrow = b1 || b2;
    }

    let last = window.len() - 1;
    let (diff, b1) = window[last].overflowing_sub(carry);
    let (diff, b2) = diff.overflowing_sub(Limb::from(borrow));
    window[last] = diff;

    b1 || b2
}

/// window += v, discarding the final carry out of the top limb
fn add_back(window: &mut [Limb], v: &[Limb]) {
    let mut carry = false;
    for (w, &d) in window.iter_mut().zip(v) {
        let (sum, c1) = w.overflowing_add(d);
        let (sum, c2) = sum.overflowing_add(Limb::from(carry));
        *w = sum;
        carry = c1 || c2;
    }

    let last = window.len() - 1;
    window[last] = window[last].wrapping_add(Limb::from(carry));
}


#[cfg(test)]
#[allow(overflowing_literals)]
mod test {
    use super::*;

    include!("division.tests.rs");
}
