// Minimal PRNG for mock session tokens.
//
// This is NOT cryptographically secure. Tokens minted from it are demo
// placeholders and must never guard anything.

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

#[derive(Debug, Clone)]
pub struct Prng {
    state: u64,
}

impl Prng {
    pub fn new(seed: u64) -> Self {
        // Avoid a zero state.
        let seed = if seed == 0 { 0x9E3779B97F4A7C15 } else { seed };
        Self { state: seed }
    }

    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        // xorshift64*
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }

    /// `len` random lowercase base-36 digits.
    pub fn base36(&mut self, len: usize) -> String {
        let mut out = String::with_capacity(len);
        let mut bits = self.next_u64();
        let mut left = 12;
        for _ in 0..len {
            if left == 0 {
                bits = self.next_u64();
                left = 12;
            }
            out.push(BASE36[(bits % 36) as usize] as char);
            bits /= 36;
            left -= 1;
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let mut a = Prng::new(42);
        let mut b = Prng::new(42);
        assert_eq!(a.base36(20), b.base36(20));
    }

    #[test]
    fn base36_uses_only_lowercase_alphanumerics() {
        let mut rng = Prng::new(0);
        let s = rng.base36(40);
        assert_eq!(s.len(), 40);
        assert!(s.bytes().all(|b| b.is_ascii_digit() || b.is_ascii_lowercase()));
    }
}
