use paste::paste;

/// Little-endian limbs of a u128, normalized
fn limbs_of(mut n: u128) -> Vec<Limb> {
    let mut limbs = Vec::new();
    while n != 0 {
        limbs.push(n as Limb);
        n >>= LIMB_BITS;
    }
    normalize(limbs)
}

/// Sum of two limb slices
fn add_limbs(a: &[Limb], b: &[Limb]) -> Vec<Limb> {
    let (a, b) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut sum = Vec::with_capacity(a.len() + 1);
    let mut carry = false;
    for (i, &x) in a.iter().enumerate() {
        let y = b.get(i).copied().unwrap_or(0);
        let (s, c1) = x.overflowing_add(y);
        let (s, c2) = s.overflowing_add(Limb::from(carry));
        sum.push(s);
        carry = c1 || c2;
    }
    if carry {
        sum.push(1);
    }
    normalize(sum)
}

/// Check u == q * v + r, with r no wider than v
fn assert_division_identity(u: &[Limb], v: &[Limb]) {
    let (q, r) = divide(u, v).unwrap();
    assert_eq!(q, normalize(q.clone()));
    assert_eq!(r, normalize(r.clone()));
    // r < v allows equal bit lengths (r = 5, v = 7), so this is not strict
    assert!(bit_length(&r) <= bit_length(v));
    assert!(r.len() <= v.len());

    let reconstructed = add_limbs(&multiply(&q, v), &r);
    assert_eq!(reconstructed, normalize(u.to_vec()));
}

mod errors {
    use super::*;

    #[test]
    fn empty_divisor() {
        assert_eq!(divide(&[1, 2], &[]), Err(DivisionError::EmptyDivisor));
    }

    #[test]
    fn zero_divisor() {
        assert_eq!(divide(&[1, 2], &[0]), Err(DivisionError::ZeroDivisor));
        assert_eq!(divide(&[1, 2], &[0, 0]), Err(DivisionError::ZeroDivisor));
    }

    #[test]
    fn unnormalized_divisor() {
        assert_eq!(divide(&[1, 2], &[3, 0]), Err(DivisionError::UnnormalizedDivisor));
    }

    #[test]
    fn dividend_too_short() {
        assert_eq!(
            divide(&[1], &[1, 2]),
            Err(DivisionError::DividendTooShort { dividend: 1, divisor: 2 })
        );
    }
}

mod small_values {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $u:literal / $v:literal) => {
            paste! {
                #[test]
                fn [< case_ $name >]() {
                    let u: u128 = $u;
                    let v: u128 = $v;
                    let mut u_limbs = limbs_of(u);
                    let v_limbs = limbs_of(v);
                    // pad dividend so the length precondition holds
                    if u_limbs.len() < v_limbs.len() {
                        u_limbs.resize(v_limbs.len(), 0);
                    }

                    let (q, r) = divide(&u_limbs, &v_limbs).unwrap();
                    assert_eq!(q, limbs_of(u / v));
                    assert_eq!(r, limbs_of(u % v));
                }
            }
        };
    }

    impl_case!(zero_by_one: 0 / 1);
    impl_case!(seven_by_seven: 7 / 7);
    impl_case!(hundred_by_seven: 100 / 7);
    impl_case!(ten_to_19_by_ten_to_9: 10000000000000000000 / 1000000000);
    impl_case!(two_limb_by_one: 340282366920938463463374607431768211455 / 3);
    impl_case!(near_max_by_max_u64: 340282366920938463463374607431768211455 / 18446744073709551615);
    impl_case!(large_by_large: 324518553658426726783156020576255 / 79228162514264337593543950335);
    impl_case!(top_bit_divisor: 170141183460469231731687303715884105727 / 170141183460469231731687303715884105729);
    impl_case!(equal_lengths: 99999999999999999999999999999999999999 / 12345678901234567890123456789);
    impl_case!(smaller_dividend: 12345 / 98765432109876543210987654321);
}

#[test]
fn single_limb_divisor_remainder() {
    let u: Vec<Limb> = vec![Limb::MAX, Limb::MAX, Limb::MAX];
    let (q, r) = divide(&u, &[10]).unwrap();
    let check = add_limbs(&multiply(&q, &[10]), &r);
    assert_eq!(check, u);
    assert!(r[0] < 10);
}

#[test]
fn divisor_needs_no_shift() {
    // top bit of divisor already set: normalization shift is zero
    let top = 1 << (LIMB_BITS - 1);
    assert_division_identity(&[5, 6, 7, Limb::MAX], &[Limb::MAX, top]);
    assert_division_identity(&[0, 0, 0, top], &[1, top]);
}

#[test]
fn add_back_is_exercised() {
    // the last two pairs overshoot qhat after the rhat test and need
    // the add-back step (both limb widths)
    let half = 1 << (LIMB_BITS - 1);
    let u: Vec<Limb> = vec![0, 0, half - 1, half - 1];
    let v: Vec<Limb> = vec![1, 0, half];
    assert_division_identity(&u, &v);

    let u: Vec<Limb> = vec![0, Limb::MAX - 1, 0, half];
    let v: Vec<Limb> = vec![Limb::MAX, 0, half];
    assert_division_identity(&u, &v);

    let u: Vec<Limb> = vec![3, 0, half, half - 1];
    let v: Vec<Limb> = vec![1, 0, half];
    assert_division_identity(&u, &v);
}

#[test]
fn unnormalized_dividend() {
    assert_division_identity(&[9, 4, 0, 0], &[3, 1]);
    let (q, r) = divide(&[0, 0, 0], &[3, 1]).unwrap();
    assert_eq!(q, vec![0]);
    assert_eq!(r, vec![0]);
}

#[test]
fn divides_exact_multiples() {
    let v: Vec<Limb> = vec![123, 456, 789];
    let q: Vec<Limb> = vec![Limb::MAX, 17, 1];
    let u = multiply(&v, &q);
    let (quot, rem) = divide(&u, &v).unwrap();
    assert_eq!(quot, q);
    assert_eq!(rem, vec![0]);
}

#[test]
fn divide_by_limb_in_place_matches_divide() {
    let mut u: Vec<Limb> = vec![11, 22, 33, 44];
    let (q, r) = divide(&u, &[1000000000]).unwrap();
    let rem = divide_by_limb_in_place(&mut u, 1000000000);
    assert_eq!(normalize(u), q);
    assert_eq!(vec![rem], r);
}

#[test]
fn shift_left_carries_into_extra_limb() {
    let top = 1 << (LIMB_BITS - 1);
    assert_eq!(shift_left(&[top, top], 1, 3), vec![0, 1, 1]);
    assert_eq!(shift_left(&[top, 1], 0, 2), vec![top, 1]);
}
