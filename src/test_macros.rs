// file to be included in tests modules

/// Convert limb slice (or anything with `limbs()`) to num_bigint::BigUint
macro_rules! biguint_from_limbs {
    ($limbs:expr) => {{
        let bytes: Vec<u8> = $limbs.iter().flat_map(|d| d.to_le_bytes()).collect();
        num_bigint::BigUint::from_bytes_le(&bytes)
    }};
}

/// Convert num_bigint::BigUint to BigNum
macro_rules! bignum_from_biguint {
    ($n:expr) => {{
        let bytes = $n.to_bytes_le();
        let limb_bytes = (LIMB_BITS / 8) as usize;
        let limbs: Vec<Limb> = bytes
            .chunks(limb_bytes)
            .map(|chunk| {
                let mut buf = [0u8; (LIMB_BITS / 8) as usize];
                buf[..chunk.len()].copy_from_slice(chunk);
                Limb::from_le_bytes(buf)
            })
            .collect();
        BigNum::from_limbs(limbs)
    }};
}

/// Parse decimal literal (via num_bigint) into BigNum
macro_rules! bignum {
    ($s:literal) => {{
        let n: num_bigint::BigUint = $s.parse().unwrap();
        bignum_from_biguint!(n)
    }};
}

/// Assert both conversion paths give the expected decimal string
macro_rules! assert_decimal_eq {
    ($n:expr, $expected:expr) => {{
        let n: &BigNum = &$n;
        let expected: &str = &$expected;
        assert_eq!(to_decimal_string(n), expected);
        assert_eq!(to_decimal_string_direct(n), expected);
        assert_eq!(to_decimal_string_with_threshold(n, 4), expected);
        assert_eq!(to_decimal_string_with_threshold(n, 0), expected);
    }};
}
