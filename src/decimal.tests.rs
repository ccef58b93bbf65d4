use paste::paste;

include!("test_macros.rs");

mod known_values {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $n:literal) => {
            paste! {
                #[test]
                fn [< case_ $name >]() {
                    assert_decimal_eq!(bignum!($n), $n);
                }
            }
        };
    }

    impl_case!(zero: "0");
    impl_case!(one: "1");
    impl_case!(nine: "9");
    impl_case!(ten: "10");
    impl_case!(m5: "31");
    impl_case!(m13: "8191");
    impl_case!(ten_to_nine: "1000000000");
    impl_case!(ten_to_nine_minus_one: "999999999");
    impl_case!(ten_to_nineteen: "10000000000000000000");
    impl_case!(ten_to_nineteen_plus_one: "10000000000000000001");
    impl_case!(u64_max: "18446744073709551615");
    impl_case!(u64_max_plus_one: "18446744073709551616");
    impl_case!(inner_zero_chunks: "1000000000000000000000000000000000000000000000000000000000007");
    impl_case!(u128_max: "340282366920938463463374607431768211455");
    impl_case!(ten_to_fifty: "100000000000000000000000000000000000000000000000000");
    impl_case!(
        m521:
        "6864797660130609714981900799081393217269435300143305409394463459185543183397656052122559640661454554977296311391480858037121987999716643812574028291115057151"
    );
}

mod fixed_width {
    use super::*;

    #[test]
    fn pads_to_width() {
        assert_eq!(to_decimal_fixed_width(vec![42], 5), "00042");
        assert_eq!(to_decimal_fixed_width(vec![0], 3), "000");
        assert_eq!(to_decimal_fixed_width(vec![], 2), "00");
    }

    #[test]
    fn never_truncates() {
        assert_eq!(to_decimal_fixed_width(vec![123456], 2), "123456");
        assert_eq!(to_decimal_fixed_width(vec![7], 0), "7");
    }

    #[test]
    fn zero_without_width() {
        assert_eq!(to_decimal_fixed_width(vec![0], 0), "0");
        assert_eq!(to_decimal_fixed_width(vec![], 0), "");
    }

    #[test]
    fn suppresses_zeros_in_final_chunk_only() {
        // the chunk value itself: the low chunk keeps all its zeros
        let (chunk, chunk_digits) = DECIMAL_CHUNK;
        let mut s = to_decimal_fixed_width(vec![chunk], 0);
        assert_eq!(s.len(), chunk_digits + 1);
        assert!(s.starts_with('1'));
        s.remove(0);
        assert!(s.chars().all(|c| c == '0'));
    }

    #[test]
    fn unnormalized_input() {
        assert_eq!(to_decimal_fixed_width(vec![12, 0, 0], 0), "12");
    }
}

mod helper {
    use super::*;

    #[test]
    fn empty_table_uses_direct_method() {
        let s = to_decimal_helper(vec![8191], &[], 6);
        assert_eq!(s, "008191");
    }

    #[test]
    fn pads_parts_to_power_width() {
        // 10^18 + 7 split by 10^8 gives "100", "00000000" and "00000007"
        let table = build_power_table_above(27, 4);
        assert_eq!(table.len(), 1);
        assert_eq!(table[0].power(), 8);

        let n = bignum!("1000000000000000007");
        let s = to_decimal_helper(n.into_limbs(), table.entries(), 0);
        assert_eq!(s, "1000000000000000007");
    }

    #[test]
    fn quotient_padded_to_remaining_width() {
        // width 16, split by 10^8: quotient must be padded to 8 digits
        let table = build_power_table_above(27, 4);
        let n = bignum!("3400000012");
        let s = to_decimal_helper(n.into_limbs(), table.entries(), 16);
        assert_eq!(s, "0000003400000012");
    }

    #[test]
    fn any_window_of_built_table() {
        let table = build_power_table_above(2000, 4);
        let entries = table.entries();
        let n = make_mersenne_candidate(3001);
        let expected = to_decimal_string_direct(&n);

        for start in 0..entries.len() {
            for end in start..=entries.len() {
                let s = to_decimal_helper(n.limbs().to_vec(), &entries[start..end], 0);
                assert_eq!(s, expected, "entries[{}..{}]", start, end);
            }
        }
    }

    #[test]
    fn several_parts_at_one_level() {
        // a single entry (10^8) forces repeated division at the top level
        let table = build_power_table_above(27, 4);
        let n = bignum!("123456789000000001000000020000000300000004");
        let s = to_decimal_helper(n.into_limbs(), table.entries(), 0);
        assert_eq!(s, "123456789000000001000000020000000300000004");
    }
}

mod recursion {
    use super::*;

    #[test]
    fn powers_of_ten_boundaries() {
        let ten = BigNum::from(10u8);
        let mut p = BigNum::one();
        let mut expected = String::from("1");
        for _ in 0..300 {
            p *= &ten;
            expected.push('0');
            assert_decimal_eq!(p, expected);

            let below: BigNum = bignum_from_biguint!(biguint_from_limbs!(p.limbs()) - 1u8);
            let nines: String = expected[1..].chars().map(|_| '9').collect();
            assert_decimal_eq!(below, nines);
        }
    }

    #[test]
    fn large_value_matches_num_bigint() {
        // above the default threshold: 2^20000 - 12345
        let n = biguint_from_limbs!(make_mersenne_candidate(20000).limbs()) - 12344u32;
        let expected = n.to_string();
        let n = bignum_from_biguint!(n);
        assert_eq!(to_decimal_string(&n), expected);
        assert_eq!(to_decimal_string_direct(&n), expected);
    }

    #[test]
    fn value_with_long_zero_runs() {
        // 10^5000 + 1 has a remainder part that is mostly zeros
        let n = biguint_from_limbs!([10 as Limb]).pow(5000) + 1u8;
        let expected = n.to_string();
        let n = bignum_from_biguint!(n);
        assert_eq!(to_decimal_string(&n), expected);
        assert_eq!(to_decimal_string_with_threshold(&n, 16), expected);
    }

    #[test]
    fn input_is_not_consumed() {
        let n = make_mersenne_candidate(4000);
        let before = n.clone();
        let _ = to_decimal_string(&n);
        assert_eq!(n, before);
    }
}

#[test]
fn strip_zeros() {
    assert_eq!(strip_leading_zeros(String::from("000123")), "123");
    assert_eq!(strip_leading_zeros(String::from("0000")), "0");
    assert_eq!(strip_leading_zeros(String::from("")), "0");
    assert_eq!(strip_leading_zeros(String::from("120")), "120");
}

#[test]
fn estimate_is_upper_bound() {
    for n in [1u32, 5, 13, 100, 1000, 4096, 57885161] {
        let bits = n as u64;
        let digits = (bits as f64 * core::f64::consts::LOG10_2).floor() as usize + 1;
        assert!(estimate_decimal_digits(bits) >= digits, "{}", n);
    }
}
