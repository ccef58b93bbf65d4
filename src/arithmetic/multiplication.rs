//! Schoolbook multiplication of limb slices

use crate::*;
use super::{normalize_in_place, split_double_limb};


/// Return product of two normalized limb slices
///
/// Result is normalized and at most `a.len() + b.len()` limbs long.
///
pub fn multiply(a: &[Limb], b: &[Limb]) -> Vec<Limb> {
    let mut result = Vec::with_capacity(a.len() + b.len());
    multiply_limbs_into(a, b, &mut result);
    return result;
}

/// Store product of a and b in result, overwriting any previous contents
#[inline]
pub(crate) fn multiply_limbs_into(a: &[Limb], b: &[Limb], result: &mut Vec<Limb>) {
    result.clear();
    result.resize(a.len() + b.len(), 0);

    for (ia, &limb_a) in a.iter().enumerate() {
        // row ia only touches result[ia..=ia + b.len()], the top of which
        // is still zero when the row is skipped
        if limb_a == 0 {
            continue;
        }

        let mut carry: Limb = 0;
        for (ib, &limb_b) in b.iter().enumerate() {
            let idx = ia + ib;
            let t = DoubleLimb::from(limb_a) * DoubleLimb::from(limb_b)
                  + DoubleLimb::from(result[idx])
                  + DoubleLimb::from(carry);
            let (hi, lo) = split_double_limb(t);
            result[idx] = lo;
            carry = hi;
        }
        result[ia + b.len()] = carry;
    }

    normalize_in_place(result);
}


#[cfg(test)]
#[allow(overflowing_literals)]
#[allow(unreachable_patterns)]
mod test {
    use super::*;

    include!("multiplication.tests.rs");
}
