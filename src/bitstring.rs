use std::fmt;

/// Number of bits in a storage word.
pub const WORD_BITS: usize = u64::BITS as usize;

/// Fixed length occupation bitstring.
/// # Definition
/// The convention is to index from the left to the right: bit $i$ lives in
/// word $i/64$ at the position $63 - (i \bmod 64)$ counting from the least
/// significant bit. The number of set bits before an index is then a masked
/// popcount.
/// Bits past `n_bits` are always $0$, so equality on the words is equality on
/// the occupations.
/// # Usage
/// ```rust
/// use pairing::BitString;
/// let mut b = BitString::zeros(5);
/// b.set(1);
/// b.set(3);
/// assert_eq!(b.count_ones_before(3), 1);
/// assert_eq!(format!("{}", b), "01010");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BitString {
    words: Vec<u64>,
    n_bits: usize,
}

#[inline(always)]
fn mask(i: usize) -> u64 {
    1u64 << (WORD_BITS - 1 - i % WORD_BITS)
}

impl BitString {
    /// All bits set to $0$.
    pub fn zeros(n_bits: usize) -> Self {
        BitString {
            words: vec![0; (n_bits + WORD_BITS - 1) / WORD_BITS],
            n_bits,
        }
    }

    /// Builds the bitstring from the set positions. Out of bounds positions
    /// are ignored.
    pub fn from_indices(n_bits: usize, indices: &[usize]) -> Self {
        let mut out = BitString::zeros(n_bits);
        for i in indices.iter() {
            out.set(*i);
        }
        out
    }

    /// Length of the bitstring, the number of single-particle states.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.n_bits
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.n_bits == 0
    }

    /// Returns the truth value at index $i$, from the left. Out of bounds is
    /// always `false`.
    #[inline(always)]
    pub fn check(&self, i: usize) -> bool {
        if i >= self.n_bits {return false;}
        self.words[i / WORD_BITS] & mask(i) != 0
    }

    /// Sets the $i$-th bit to $1$. Does nothing out of bounds.
    #[inline(always)]
    pub fn set(&mut self, i: usize) {
        if i >= self.n_bits {return;}
        self.words[i / WORD_BITS] |= mask(i);
    }

    /// Sets the $i$-th bit to $0$. Does nothing out of bounds.
    #[inline(always)]
    pub fn clear(&mut self, i: usize) {
        if i >= self.n_bits {return;}
        self.words[i / WORD_BITS] &= !mask(i);
    }

    /// Number of set bits, the number of particles.
    pub fn count_ones(&self) -> u32 {
        self.words.iter().map(|w| w.count_ones()).sum()
    }

    /// Number of set bits at positions strictly smaller than $i$. The parity
    /// of this number is the fermionic sign of an operator acting on $i$.
    pub fn count_ones_before(&self, i: usize) -> u32 {
        let i = <usize>::min(i, self.n_bits);
        let meta_i = i / WORD_BITS;
        let mut count: u32 = self.words[..meta_i].iter().map(|w| w.count_ones()).sum();
        if meta_i < self.words.len() {
            count += (self.words[meta_i] & !(<u64>::MAX >> (i % WORD_BITS))).count_ones();
        }
        count
    }

    /// Iterates over the set positions in increasing order.
    pub fn iter_ones(&self) -> OnesIter<'_> {
        OnesIter { bits: self, current: 0, pos: 0, word: 0 }
    }
}

/// Iterator over the set positions of a [BitString].
pub struct OnesIter<'a> {
    bits: &'a BitString,
    current: u64,
    pos: usize,
    word: usize,
}

impl<'a> Iterator for OnesIter<'a> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        while self.current == 0 {
            if self.word >= self.bits.words.len() {
                return None;
            }
            self.current = self.bits.words[self.word];
            self.pos = self.word * WORD_BITS;
            self.word += 1;
        }
        let lz = self.current.leading_zeros() as usize;
        // Spend the bit.
        self.current ^= 1u64 << (WORD_BITS - 1 - lz);
        Some(self.pos + lz)
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for i in 0..self.n_bits {
            write!(f, "{}", self.check(i) as u8)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand::rngs::SmallRng;

    #[test]
    fn test_set_check_clear_across_words() {
        let mut b = BitString::zeros(130);
        for i in [0, 63, 64, 127, 128, 129] {
            assert!(!b.check(i));
            b.set(i);
            assert!(b.check(i));
        }
        assert_eq!(b.count_ones(), 6);
        b.clear(64);
        assert!(!b.check(64));
        assert_eq!(b.count_ones(), 5);
        // Out of bounds
        b.set(130);
        assert!(!b.check(130));
        assert_eq!(b.count_ones(), 5);
    }

    #[test]
    fn test_count_ones_before_matches_naive() {
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..100 {
            let n: usize = rng.gen_range(1..200);
            let mut b = BitString::zeros(n);
            for i in 0..n {
                if rng.gen::<bool>() {
                    b.set(i);
                }
            }
            for i in 0..=n {
                let naive = (0..i).filter(|j| b.check(*j)).count() as u32;
                assert_eq!(b.count_ones_before(i), naive);
            }
        }
    }

    #[test]
    fn test_iter_ones() {
        let b = BitString::from_indices(70, &[3, 5, 64, 69]);
        assert_eq!(b.iter_ones().collect::<Vec<usize>>(), vec![3, 5, 64, 69]);
        let b = BitString::from_indices(70, &[66]);
        assert_eq!(b.iter_ones().collect::<Vec<usize>>(), vec![66]);
        assert_eq!(BitString::zeros(70).iter_ones().count(), 0);
    }

    #[test]
    fn test_display() {
        let b = BitString::from_indices(4, &[0, 1]);
        assert_eq!(format!("{}", b), "1100");
        assert_eq!(format!("{}", BitString::zeros(0)), "");
    }
}
