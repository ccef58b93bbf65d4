//! Mersenne numbers 2^n - 1, used as large inputs for decimal conversion

use crate::*;
use num_integer::Integer;


/// Return 2^n - 1
///
/// The binary representation is simply n set bits, so every limb is
/// all ones except the most significant, which holds the remaining
/// `n % LIMB_BITS` bits (or is all ones if n is a multiple of the limb
/// width). For n = 0 the result is zero.
///
pub fn make_mersenne_candidate(n: u64) -> BigNum {
    if n == 0 {
        return BigNum::zero();
    }

    let (full_limbs, extra_bits) = n.div_rem(&(LIMB_BITS as u64));
    let len = full_limbs as usize + usize::from(extra_bits != 0);

    let mut limbs = vec![Limb::MAX; len];
    if extra_bits != 0 {
        limbs[len - 1] = Limb::MAX >> (LIMB_BITS as u64 - extra_bits);
    }

    BigNum::from_normalized_limbs(limbs)
}

/// Return number of decimal digits in 2^n - 1
pub fn prime_candidate_digit_count(n: u64) -> usize {
    let _scope = tracing::info_span!("prime_candidate_digit_count", n).entered();

    let candidate = make_mersenne_candidate(n);
    let digits = to_decimal_string(&candidate).len();

    tracing::info!(n, digits, "converted mersenne candidate");
    digits
}


#[cfg(test)]
mod test {
    use super::*;
    use paste::paste;

    macro_rules! impl_case {
        ($n:literal => $expected:literal) => {
            paste! {
                #[test]
                fn [< mersenne_ $n >]() {
                    let m = make_mersenne_candidate($n);
                    assert_eq!(m.bit_length(), $n);
                    assert_eq!(to_decimal_string(&m), $expected);
                    assert_eq!(prime_candidate_digit_count($n), $expected.len());
                }
            }
        };
    }

    impl_case!(1 => "1");
    impl_case!(2 => "3");
    impl_case!(5 => "31");
    impl_case!(7 => "127");
    impl_case!(13 => "8191");
    impl_case!(31 => "2147483647");
    impl_case!(32 => "4294967295");
    impl_case!(61 => "2305843009213693951");
    impl_case!(64 => "18446744073709551615");
    impl_case!(89 => "618970019642690137449562111");
    impl_case!(127 => "170141183460469231731687303715884105727");

    #[test]
    fn zero_bits_is_zero() {
        let m = make_mersenne_candidate(0);
        assert!(m.is_zero());
        assert_eq!(to_decimal_string(&m), "0");
    }

    #[test]
    fn limb_layout() {
        let m = make_mersenne_candidate(LIMB_BITS as u64);
        assert_eq!(m.limbs(), &[Limb::MAX]);

        let m = make_mersenne_candidate(LIMB_BITS as u64 + 3);
        assert_eq!(m.limbs(), &[Limb::MAX, 0b111]);

        let m = make_mersenne_candidate(3 * LIMB_BITS as u64);
        assert_eq!(m.limbs(), &[Limb::MAX; 3]);
    }

    #[test]
    fn digit_counts_of_known_mersenne_primes() {
        assert_eq!(prime_candidate_digit_count(521), 157);
        assert_eq!(prime_candidate_digit_count(4423), 1332);
        assert_eq!(prime_candidate_digit_count(9689), 2917);
        assert_eq!(prime_candidate_digit_count(44497), 13395);
    }

    #[test]
    #[ignore = "quadratic multiplication makes this take minutes; run with --release --ignored"]
    fn digit_count_of_m57885161() {
        assert_eq!(prime_candidate_digit_count(57885161), 17425170);
    }
}
