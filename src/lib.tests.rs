use paste::paste;

include!("test_macros.rs");

mod construction {
    use super::*;

    #[test]
    fn zero_and_one() {
        assert_eq!(BigNum::zero().limbs(), &[0]);
        assert_eq!(BigNum::one().limbs(), &[1]);
        assert!(BigNum::zero().is_zero());
        assert!(!BigNum::one().is_zero());
        assert_eq!(BigNum::default(), BigNum::zero());
    }

    #[test]
    fn from_limbs_normalizes() {
        let n = BigNum::from_limbs(vec![3, 0, 0]);
        assert_eq!(n.limbs(), &[3]);
        assert_eq!(n.len(), 1);

        let n = BigNum::from_limbs(vec![0, 0]);
        assert!(n.is_zero());
        assert_eq!(n, BigNum::zero());

        let n = BigNum::from_limbs(vec![]);
        assert!(n.is_zero());
    }

    #[test]
    fn into_limbs_returns_normalized() {
        let n = BigNum::from_limbs(vec![0, 5, 0]);
        assert_eq!(n.into_limbs(), vec![0, 5]);
    }

    #[test]
    fn bit_length() {
        assert_eq!(BigNum::zero().bit_length(), 0);
        assert_eq!(BigNum::one().bit_length(), 1);
        assert_eq!(BigNum::from(8191u32).bit_length(), 13);
        assert_eq!(BigNum::from_limbs(vec![0, 1]).bit_length(), LIMB_BITS as u64 + 1);
    }

    #[test]
    fn square() {
        let n = BigNum::from(u64::MAX);
        let expected = biguint_from_limbs!(n.limbs()).pow(2);
        assert_eq!(n.square(), bignum_from_biguint!(expected));
        assert!(BigNum::zero().square().is_zero());
    }
}

mod div_rem {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $u:literal / $v:literal => $q:literal, $r:literal) => {
            paste! {
                #[test]
                fn [< case_ $name >]() {
                    let u = bignum!($u);
                    let v = bignum!($v);
                    let (q, r) = u.div_rem(&v).unwrap();
                    assert_eq!(q, bignum!($q));
                    assert_eq!(r, bignum!($r));
                }
            }
        };
    }

    impl_case!(small: "8191" / "7" => "1170", "1");
    impl_case!(equal: "12345678901234567890123" / "12345678901234567890123" => "1", "0");
    impl_case!(smaller_dividend: "100000000000000000000" / "100000000000000000001" => "0", "100000000000000000000");
    impl_case!(
        power_of_ten:
        "618970019642690137449562111" / "1000000000000000000000" => "618970", "19642690137449562111"
    );
    impl_case!(
        m127_by_m61:
        "170141183460469231731687303715884105727" / "2305843009213693951" => "73786976294838206496", "31"
    );

    impl_case!(
        u128_max_by_u64_max:
        "340282366920938463463374607431768211455" / "18446744073709551615" => "18446744073709551617", "0"
    );

    #[test]
    fn zero_divisor() {
        let result = BigNum::from(10u8).div_rem(&BigNum::zero());
        assert_eq!(result, Err(DivisionError::ZeroDivisor));
    }

    #[test]
    fn divisor_with_more_limbs() {
        let u = BigNum::from(7u8);
        let v = BigNum::from_limbs(vec![0, 1]);
        let result = u.div_rem(&v);
        assert_eq!(result, Err(DivisionError::DividendTooShort { dividend: 1, divisor: 2 }));
    }

    #[test]
    fn zero_dividend() {
        let (q, r) = BigNum::zero().div_rem(&BigNum::from(3u8)).unwrap();
        assert!(q.is_zero());
        assert!(r.is_zero());
    }
}

#[cfg(feature = "std")]
mod errors {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(DivisionError::EmptyDivisor.to_string(), "divisor has no limbs");
        assert_eq!(DivisionError::ZeroDivisor.to_string(), "division by zero");
        assert_eq!(
            DivisionError::UnnormalizedDivisor.to_string(),
            "divisor has a zero most-significant limb"
        );
        assert_eq!(
            DivisionError::DividendTooShort { dividend: 2, divisor: 3 }.to_string(),
            "dividend has 2 limbs, fewer than the divisor's 3"
        );
    }

    #[test]
    fn is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(DivisionError::ZeroDivisor);
        assert_eq!(err.to_string(), "division by zero");
    }
}

#[cfg(feature = "std")]
mod hashing {
    use super::*;
    use crate::stdlib::hash::{Hash, Hasher};
    use crate::stdlib::DefaultHasher;

    fn hash(n: &BigNum) -> u64 {
        let mut hasher = DefaultHasher::new();
        n.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn equal_values_hash_equal() {
        let a = BigNum::from_limbs(vec![1, 2, 0]);
        let b = BigNum::from_limbs(vec![1, 2]);
        assert_eq!(a, b);
        assert_eq!(hash(&a), hash(&b));

        let c = make_mersenne_candidate(300);
        let d = bignum_from_biguint!(biguint_from_limbs!(c.limbs()));
        assert_eq!(hash(&c), hash(&d));
    }
}
