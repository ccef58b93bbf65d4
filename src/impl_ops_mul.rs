//! Multiplication operator trait implementation
//!

use crate::*;
use crate::stdlib::ops::{Mul, MulAssign};


impl Mul<&BigNum> for &BigNum {
    type Output = BigNum;

    #[inline]
    fn mul(self, rhs: &BigNum) -> BigNum {
        if self.is_zero() || rhs.is_zero() {
            return BigNum::zero();
        }
        BigNum::from_normalized_limbs(multiply(&self.limbs, &rhs.limbs))
    }
}

forward_all_binop_to_ref_ref!(impl Mul for BigNum, mul);
forward_op_assign_to_ref_ref!(impl MulAssign for BigNum, mul_assign, Mul, mul);


macro_rules! impl_mul_primitive {
    ($t:ty) => {
        impl Mul<$t> for BigNum {
            type Output = BigNum;

            #[inline]
            fn mul(self, rhs: $t) -> BigNum {
                &self * &BigNum::from(rhs)
            }
        }

        impl Mul<$t> for &BigNum {
            type Output = BigNum;

            #[inline]
            fn mul(self, rhs: $t) -> BigNum {
                self * &BigNum::from(rhs)
            }
        }

        impl MulAssign<$t> for BigNum {
            #[inline]
            fn mul_assign(&mut self, rhs: $t) {
                *self = &*self * &BigNum::from(rhs);
            }
        }
    };
}

impl_mul_primitive!(u8);
impl_mul_primitive!(u16);
impl_mul_primitive!(u32);
impl_mul_primitive!(u64);


#[cfg(test)]
mod test {
    use super::*;
    use paste::paste;

    macro_rules! impl_case {
        ($name:ident: $a:literal * $b:literal = $c:literal) => {
            paste! {
                #[test]
                fn [< case_ $name >]() {
                    let (a, b, c): (u128, u128, u128) = ($a, $b, $c);
                    let a = BigNum::from(a);
                    let b = BigNum::from(b);
                    let expected = BigNum::from(c);

                    assert_eq!(&a * &b, expected);
                    assert_eq!(a.clone() * &b, expected);
                    assert_eq!(&a * b.clone(), expected);
                    assert_eq!(b.clone() * a.clone(), expected);

                    let mut m = a.clone();
                    m *= &b;
                    assert_eq!(m, expected);

                    let mut m = a;
                    m *= b;
                    assert_eq!(m, expected);
                }
            }
        };
    }

    impl_case!(zero: 0 * 12345 = 0);
    impl_case!(one: 1 * 98765 = 98765);
    impl_case!(small: 12 * 34 = 408);
    impl_case!(cross_limb: 4294967296 * 4294967296 = 18446744073709551616);
    impl_case!(u64_max: 18446744073709551615 * 18446744073709551615 = 340282366920938463426481119284349108225);

    #[test]
    fn multiply_by_primitive() {
        let n = BigNum::from(1000000007u64);
        assert_eq!(&n * 3u8, BigNum::from(3000000021u64));
        assert_eq!(n.clone() * 10u32, BigNum::from(10000000070u64));

        let mut m = n;
        m *= 0u64;
        assert!(m.is_zero());
    }

    #[test]
    fn square_matches_mul() {
        let n = BigNum::from(u128::MAX);
        assert_eq!(n.square(), &n * &n);
    }
}
