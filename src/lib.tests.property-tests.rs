// Property tests to be included by lib.rs (if enabled)

include!("test_macros.rs");

/// Limbs biased towards the values that stress carries and corrections
fn limb() -> impl Strategy<Value = Limb> {
    let top_bit: Limb = 1 << (LIMB_BITS - 1);
    prop_oneof![
        Just(Limb::MIN),
        Just(Limb::MIN + 1),
        Just(Limb::MAX),
        Just(top_bit),
        any::<Limb>(),
    ]
}

fn limbs(max_len: usize) -> impl Strategy<Value = Vec<Limb>> {
    prop::collection::vec(limb(), 1..=max_len)
}


mod arithmetic {
    use super::*;

    proptest! {
        #[test]
        fn normalize_is_idempotent(v in prop::collection::vec(limb(), 0..6)) {
            let n = normalize(v.clone());
            prop_assert!(crate::arithmetic::is_normalized(&n));
            prop_assert_eq!(normalize(n.clone()), n.clone());
            prop_assert_eq!(biguint_from_limbs!(n), biguint_from_limbs!(v));
        }

        #[test]
        fn multiply_matches_num_bigint(a in limbs(8), b in limbs(8)) {
            let product = multiply(&a, &b);
            prop_assert!(product.len() <= a.len() + b.len());
            prop_assert!(crate::arithmetic::is_normalized(&product));

            let expected = biguint_from_limbs!(a) * biguint_from_limbs!(b);
            prop_assert_eq!(biguint_from_limbs!(product), expected);
        }

        #[test]
        fn divide_identity(u in limbs(10), v in limbs(6)) {
            let v = normalize(v);
            prop_assume!(v != [0]);

            // pad short dividends, their top limbs may be zero
            let mut u = u;
            if u.len() < v.len() {
                u.resize(v.len(), 0);
            }

            let (q, r) = divide(&u, &v).unwrap();
            prop_assert!(crate::arithmetic::is_normalized(&q));
            prop_assert!(crate::arithmetic::is_normalized(&r));

            let (u, v) = (biguint_from_limbs!(u), biguint_from_limbs!(v));
            let (q, r) = (biguint_from_limbs!(q), biguint_from_limbs!(r));
            prop_assert!(r < v);
            prop_assert_eq!(&q * &v + &r, u.clone());
            prop_assert_eq!(q, &u / &v);
        }
    }
}


mod conversion {
    use super::*;
    use crate::decimal::to_decimal_helper;

    macro_rules! impl_test {
        ($threshold:literal) => {
            paste! { proptest! {
                #[test]
                fn [< recursive_matches_direct_above_ $threshold >](v in limbs(40)) {
                    let n = BigNum::from_limbs(v);
                    let expected = biguint_from_limbs!(n.limbs()).to_string();

                    prop_assert_eq!(to_decimal_string_with_threshold(&n, $threshold), expected.clone());
                    prop_assert_eq!(to_decimal_string_direct(&n), expected);
                }
            } }
        };
    }

    impl_test!(0);
    impl_test!(4);
    impl_test!(16);
    impl_test!(64);

    proptest! {
        #[test]
        fn helper_pads_to_width(v in limbs(12), width in 0usize..400) {
            let n = BigNum::from_limbs(v);
            let table = build_power_table_above(n.bit_length() / 2, 4);
            let s = to_decimal_helper(n.limbs().to_vec(), table.entries(), width);

            let digits = to_decimal_string_direct(&n);
            prop_assert!(s.len() >= width);
            prop_assert!(s.ends_with(digits.trim_start_matches('0')));
            prop_assert!(s[..s.len() - digits.len()].chars().all(|c| c == '0'));
        }
    }
}


mod power_tables {
    use super::*;

    proptest! {
        #[test]
        fn entries_are_successive_squares(target_bits in 0u64..6000, min_power in 0usize..70) {
            let table = build_power_table_above(target_bits, min_power);

            for entry in table.entries() {
                prop_assert!(entry.power() > min_power);
                prop_assert_eq!(entry.bit_count(), entry.value().bit_length());
            }
            for pair in table.entries().windows(2) {
                prop_assert_eq!(pair[1].power(), pair[0].power() * 2);
                prop_assert_eq!(pair[1].value(), &pair[0].value().square());
            }
            if let Some(largest) = table.largest() {
                prop_assert!(largest.bit_count() >= target_bits);
            }
        }
    }
}
