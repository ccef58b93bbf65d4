//! arithmetic routines on little-endian limb sequences

use crate::*;

pub(crate) mod multiplication;
pub(crate) mod division;


/// Strip zero limbs from the most significant end of the number
///
/// An empty vector is taken to be the value zero, and comes back as a
/// single zero limb. Calling this on an already normalized vector is a
/// no-op.
///
pub fn normalize(mut limbs: Vec<Limb>) -> Vec<Limb> {
    normalize_in_place(&mut limbs);
    limbs
}

/// Normalize vector of limbs without taking ownership
pub(crate) fn normalize_in_place(limbs: &mut Vec<Limb>) {
    match limbs.iter().rposition(|&d| d != 0) {
        Some(idx) => limbs.truncate(idx + 1),
        None => {
            limbs.clear();
            limbs.push(0);
        }
    }
}

/// Remove every zero limb at the most significant end
///
/// Unlike `normalize` the value zero becomes an empty vector.
///
pub(crate) fn strip_significant_zeros(limbs: &mut Vec<Limb>) {
    let len = limbs.iter().rposition(|&d| d != 0).map_or(0, |idx| idx + 1);
    limbs.truncate(len);
}

/// True if the slice is non-empty with a nonzero top limb, or is the single limb zero
pub(crate) fn is_normalized(limbs: &[Limb]) -> bool {
    match limbs {
        [] => false,
        [_] => true,
        [.., top] => *top != 0,
    }
}

/// Return number of leading zero bits in the limb
///
/// Counted one bit at a time so the result does not depend on the width
/// of `Limb` (zero returns `LIMB_BITS`).
///
pub fn leading_zero_bits(mut limb: Limb) -> u32 {
    let mut n = LIMB_BITS;
    while limb != 0 {
        limb >>= 1;
        n -= 1;
    }
    n
}

/// Return total number of significant bits in the number
///
/// The top limb is assumed nonzero (i.e. the slice is normalized), the
/// empty slice has zero bits.
///
pub fn bit_length(limbs: &[Limb]) -> u64 {
    match limbs.last() {
        None => 0,
        Some(&top) => limbs.len() as u64 * LIMB_BITS as u64 - leading_zero_bits(top) as u64,
    }
}

/// Shift left, producing zero if every bit is shifted out
#[inline]
pub(crate) fn shl_or_zero(limb: Limb, shift: u32) -> Limb {
    limb.checked_shl(shift).unwrap_or(0)
}

/// Shift right, producing zero if every bit is shifted out
#[inline]
pub(crate) fn shr_or_zero(limb: Limb, shift: u32) -> Limb {
    limb.checked_shr(shift).unwrap_or(0)
}

/// Split double-wide value into (high, low) limbs
#[inline]
pub(crate) fn split_double_limb(n: DoubleLimb) -> (Limb, Limb) {
    ((n >> LIMB_BITS) as Limb, n as Limb)
}

/// Join (high, low) limbs into a double-wide value
#[inline]
pub(crate) fn join_limbs(hi: Limb, lo: Limb) -> DoubleLimb {
    (DoubleLimb::from(hi) << LIMB_BITS) | DoubleLimb::from(lo)
}


#[cfg(test)]
mod test {
    use super::*;
    use paste::paste;

    mod normalize {
        use super::*;

        macro_rules! impl_case {
            ($name:ident: [$($a:literal),*] => [$($b:literal),*]) => {
                paste! {
                    #[test]
                    fn [< case_ $name >]() {
                        let input: Vec<Limb> = vec![$($a),*];
                        let expected: Vec<Limb> = vec![$($b),*];
                        let result = normalize(input);
                        assert_eq!(result, expected);

                        let again = normalize(result.clone());
                        assert_eq!(again, result);
                    }
                }
            };
        }

        impl_case!(empty: [] => [0]);
        impl_case!(zero: [0] => [0]);
        impl_case!(zeros: [0, 0, 0] => [0]);
        impl_case!(one: [1] => [1]);
        impl_case!(trailing_zeros: [7, 0, 3, 0, 0] => [7, 0, 3]);
        impl_case!(inner_zeros: [0, 0, 9] => [0, 0, 9]);
    }

    #[test]
    fn strip_zero_to_empty() {
        let mut v: Vec<Limb> = vec![0, 0];
        strip_significant_zeros(&mut v);
        assert!(v.is_empty());

        let mut v: Vec<Limb> = vec![4, 0, 5, 0];
        strip_significant_zeros(&mut v);
        assert_eq!(v, vec![4, 0, 5]);
    }

    #[test]
    fn normalized_check() {
        assert!(!is_normalized(&[]));
        assert!(is_normalized(&[0]));
        assert!(is_normalized(&[0, 1]));
        assert!(!is_normalized(&[1, 0]));
    }

    #[test]
    fn leading_zeros_matches_intrinsic() {
        assert_eq!(leading_zero_bits(0), LIMB_BITS);
        assert_eq!(leading_zero_bits(Limb::MAX), 0);
        for shift in 0..LIMB_BITS {
            let x: Limb = 1 << shift;
            assert_eq!(leading_zero_bits(x), x.leading_zeros());
            assert_eq!(leading_zero_bits(x | 1), (x | 1).leading_zeros());
        }
    }

    #[test]
    fn bit_length_of_slices() {
        assert_eq!(bit_length(&[]), 0);
        assert_eq!(bit_length(&[0]), 0);
        assert_eq!(bit_length(&[1]), 1);
        assert_eq!(bit_length(&[10]), 4);
        assert_eq!(bit_length(&[0, 1]), LIMB_BITS as u64 + 1);
        assert_eq!(bit_length(&[Limb::MAX, Limb::MAX]), 2 * LIMB_BITS as u64);
    }

    #[test]
    fn full_width_shifts() {
        assert_eq!(shl_or_zero(Limb::MAX, LIMB_BITS), 0);
        assert_eq!(shr_or_zero(Limb::MAX, LIMB_BITS), 0);
        assert_eq!(shl_or_zero(1, 3), 8);
        assert_eq!(shr_or_zero(8, 3), 1);
    }

    #[test]
    fn split_and_join() {
        let n = join_limbs(3, Limb::MAX);
        assert_eq!(split_double_limb(n), (3, Limb::MAX));
    }
}
