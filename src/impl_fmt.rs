//! Implementation of std::fmt traits
//!

use crate::*;


/// Numbers with more limbs than this are not fully converted by Debug
const DEBUG_DECIMAL_LIMB_LIMIT: usize = 8;


impl fmt::Display for BigNum {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let digits = to_decimal_string(self);
        f.pad_integral(true, "", &digits)
    }
}


impl fmt::Debug for BigNum {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.len() <= DEBUG_DECIMAL_LIMB_LIMIT {
            write!(f, "BigNum(\"{}\")", self)
        } else {
            write!(f, "BigNum({} limbs, {} bits)", self.len(), self.bit_length())
        }
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use paste::paste;

    #[cfg(feature = "std")]
    use std::format;

    #[cfg(not(feature = "std"))]
    use alloc::{format, string::ToString};

    macro_rules! impl_case {
        ($name:ident: $n:expr, $fmt:literal => $expected:literal) => {
            paste! {
                #[test]
                fn [< case_ $name >]() {
                    let n: BigNum = $n;
                    assert_eq!(format!($fmt, n), $expected);
                }
            }
        };
    }

    impl_case!(zero: BigNum::zero(), "{}" => "0");
    impl_case!(m13: make_mersenne_candidate(13), "{}" => "8191");
    impl_case!(padded: BigNum::from(42u8), "{:>6}" => "    42");
    impl_case!(zero_padded: BigNum::from(42u8), "{:06}" => "000042");
    impl_case!(plus_sign: BigNum::from(7u8), "{:+}" => "+7");
    impl_case!(left_aligned: BigNum::from(31u8), "{:<4}|" => "31  |");
    impl_case!(debug_small: BigNum::from(8191u32), "{:?}" => "BigNum(\"8191\")");

    #[test]
    fn debug_large_reports_size() {
        let n = make_mersenne_candidate(20 * LIMB_BITS as u64);
        let expected = format!("BigNum(20 limbs, {} bits)", 20 * LIMB_BITS);
        assert_eq!(format!("{:?}", n), expected);
    }

    #[test]
    fn to_string_matches_display() {
        let n = make_mersenne_candidate(200);
        assert_eq!(n.to_string(), format!("{}", n));
        assert_eq!(n.to_decimal_string(), n.to_string());
    }
}
