//! common routines to be included by benches

use mersenne_digits::{BigNum, Limb, LIMB_BITS};


/// Build a random number with exactly `len` limbs
pub fn random_bignum(rng: &mut oorandom::Rand64, len: usize) -> BigNum {
    let mut limbs: Vec<Limb> = (0..len).map(|_| rng.rand_u64() as Limb).collect();
    // keep the top limb nonzero so every sample has the requested size
    if let Some(top) = limbs.last_mut() {
        *top |= 1 << (LIMB_BITS - 1);
    }
    BigNum::from_limbs(limbs)
}

/// Collect `count` random numbers of `len` limbs from a fixed seed
pub fn random_bignums(seed: u128, count: usize, len: usize) -> Vec<BigNum> {
    let mut rng = oorandom::Rand64::new(seed);
    (0..count).map(|_| random_bignum(&mut rng, len)).collect()
}


/// Cycles through items in vector
pub struct CyclingIterator<'a, T> {
    v: &'a [T],
    idx: usize,
}

impl<'a, T> CyclingIterator<'a, T> {
    pub fn new(v: &'a [T]) -> Self {
        Self { v, idx: 0 }
    }

    pub fn next(&mut self) -> &'a T {
        let item = &self.v[self.idx];
        self.idx = (self.idx + 1) % self.v.len();
        item
    }
}
