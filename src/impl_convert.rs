//! Code for implementing From conversions into BigNum

use crate::*;


macro_rules! impl_from_uint_primitive {
    ($t:ty) => {
        impl From<$t> for BigNum {
            fn from(n: $t) -> Self {
                let mut n = n as u128;
                let mut limbs = Vec::with_capacity(128 / LIMB_BITS as usize);
                while n != 0 {
                    limbs.push(n as Limb);
                    n >>= LIMB_BITS;
                }
                BigNum::from_limbs(limbs)
            }
        }

        impl From<&$t> for BigNum {
            fn from(n: &$t) -> Self {
                BigNum::from(*n)
            }
        }
    };
}

impl_from_uint_primitive!(u8);
impl_from_uint_primitive!(u16);
impl_from_uint_primitive!(u32);
impl_from_uint_primitive!(u64);
impl_from_uint_primitive!(u128);
impl_from_uint_primitive!(usize);


impl From<Vec<Limb>> for BigNum {
    #[inline]
    fn from(limbs: Vec<Limb>) -> Self {
        BigNum::from_limbs(limbs)
    }
}

impl From<&[Limb]> for BigNum {
    #[inline]
    fn from(limbs: &[Limb]) -> Self {
        BigNum::from_limbs(limbs.to_vec())
    }
}

impl From<BigNum> for Vec<Limb> {
    #[inline]
    fn from(n: BigNum) -> Self {
        n.into_limbs()
    }
}
