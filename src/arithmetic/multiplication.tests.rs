use paste::paste;

macro_rules! impl_test_for_limb_bits {
    ( $($bits:pat => [$($a:literal),*] [$($b:literal),*] == [$($c:literal),*]),* $(,)* ) => {{
        let do_test = |a: &[Limb], b: &[Limb], expected: &[Limb]| {
            let v = multiply(a, b);
            assert_eq!(&v, &expected);

            let commutes = multiply(b, a);
            assert_eq!(&commutes, &expected);
        };

        match LIMB_BITS {
            $( $bits => do_test(&[$($a,)*], &[$($b,)*], &[$($c,)*]), )*
            _ => unreachable!(),
        };
    }};
}

macro_rules! impl_case {
    ($name:ident: [$($a:literal),*] * [$($b:literal),*] => [$($c:literal),*]) => {
        paste! {
            #[test]
            fn [< case_ $name >]() {
                let a: &[Limb] = &[$($a),*];
                let b: &[Limb] = &[$($b),*];
                let expected: &[Limb] = &[$($c),*];

                assert_eq!(multiply(a, b), expected);
                assert_eq!(multiply(b, a), expected);
            }
        }
    };
}

impl_case!(zero_zero: [0] * [0] => [0]);
impl_case!(zero_nonzero: [0] * [12, 3] => [0]);
impl_case!(five_five: [5] * [5] => [25]);
impl_case!(one_identity: [1] * [7, 0, 9] => [7, 0, 9]);
impl_case!(shifted: [0, 1] * [0, 2] => [0, 0, 2]);

#[test]
fn test_7_22_truncates() {
    let v = multiply(&[7, 0], &[22, 0, 0]);
    assert_eq!(v, &[154]);
}

#[test]
fn test_209504545595_605739580991() {
    impl_test_for_limb_bits! {
        32 => [3346115387, 48] [149192255, 141] == [1607216517, 2338360384, 6879],
        64 => [209504545595] [605739580991] == [10043181377149218181, 6879],
    }
}

#[test]
fn test_max_u64_squared() {
    impl_test_for_limb_bits! {
        32 => [4294967295, 4294967295] [4294967295, 4294967295] == [1, 0, 4294967294, 4294967295],
        64 => [18446744073709551615] [18446744073709551615] == [1, 18446744073709551614],
    }
}

#[test]
fn test_max_u128_squared() {
    impl_test_for_limb_bits! {
        32 => [4294967295, 4294967295, 4294967295, 4294967295]
              [4294967295, 4294967295, 4294967295, 4294967295]
           == [1, 0, 0, 0, 4294967294, 4294967295, 4294967295, 4294967295],
        64 => [18446744073709551615, 18446744073709551615]
              [18446744073709551615, 18446744073709551615]
           == [1, 0, 18446744073709551614, 18446744073709551615],
    }
}

#[test]
fn product_length_bounded_and_normalized() {
    let a: Vec<Limb> = vec![Limb::MAX; 5];
    let b: Vec<Limb> = vec![1, 0, 0, 1];
    let p = multiply(&a, &b);
    assert!(p.len() <= a.len() + b.len());
    assert_ne!(p.last(), Some(&0));
}

#[test]
fn into_reuses_buffer() {
    let mut result = vec![9, 9, 9, 9, 9, 9];
    multiply_limbs_into(&[3], &[4], &mut result);
    assert_eq!(result, vec![12]);
}
