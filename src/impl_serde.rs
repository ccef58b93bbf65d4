//!
//! Support for serde implementations
//!
//! Numbers serialize as their decimal string, so arbitrarily large
//! values survive formats whose native integers are bounded.
//!
use crate::*;
use serde::ser;


impl ser::Serialize for BigNum {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.collect_str(&self)
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use paste::paste;
    use serde_test::{assert_ser_tokens, Token};

    macro_rules! impl_case {
        ($name:ident: $n:expr => $expected:literal) => {
            paste! {
                #[test]
                fn [< serialize_ $name >]() {
                    let n: BigNum = $n;
                    assert_ser_tokens(&n, &[Token::Str($expected)]);
                }
            }
        };
    }

    impl_case!(zero: BigNum::zero() => "0");
    impl_case!(one: BigNum::one() => "1");
    impl_case!(u64_max: BigNum::from(u64::MAX) => "18446744073709551615");
    impl_case!(m89: make_mersenne_candidate(89) => "618970019642690137449562111");
    impl_case!(m127: make_mersenne_candidate(127) => "170141183460469231731687303715884105727");
}
