// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Low-Bit Masking
//!
//! Masking a value to its low `bits` bits, for fields whose bit width is not
//! a whole number of bytes. The trait is implemented for unsigned wire widths
//! only; masking is defined over bit patterns, so signed inputs must be
//! reinterpreted as unsigned first (see `cast`). Attempting to mask a signed
//! value does not compile.

/// Masking to the low `bits` bits, by value (no references).
///
/// All bits at position `bits` and above are cleared. When `bits` is at
/// least the type's width the value is returned unchanged: masking with
/// every bit set is a no-op, and no truncation beyond the declared width is
/// meaningful. Callers must not rely on `bits >= W` truncating anything.
/// The guard also keeps the shift amount strictly below the width, so no
/// input reaches a full-width shift.
///
/// Masking is idempotent for a fixed `bits`.
///
/// # Examples
///
/// ```rust
/// # use ferrule_bits::mask::MaskToBitsVal;
///
/// assert_eq!(0xFFu8.mask_to_bits_val(4), 0x0F);
/// assert_eq!(0b1010_1010u8.mask_to_bits_val(3), 0b010);
/// assert_eq!(0xFFFFu16.mask_to_bits_val(16), 0xFFFF); // bits == W: identity
/// assert_eq!(0xFFFFu16.mask_to_bits_val(99), 0xFFFF); // bits > W: identity
/// ```
pub trait MaskToBitsVal: Sized {
    /// Returns the value with all bits at position `bits` and above cleared.
    fn mask_to_bits_val(self, bits: u32) -> Self;
}

macro_rules! mask_to_bits_impl_val {
    ($t:ty) => {
        impl MaskToBitsVal for $t {
            #[inline(always)]
            fn mask_to_bits_val(self, bits: u32) -> Self {
                if bits < <$t>::BITS {
                    self & (((1 as $t) << bits) - 1)
                } else {
                    self
                }
            }
        }
    };
}

mask_to_bits_impl_val!(u8);
mask_to_bits_impl_val!(u16);
mask_to_bits_impl_val!(u32);
mask_to_bits_impl_val!(u64);

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn mask_to_bits_val<T: MaskToBitsVal>(x: T, bits: u32) -> T {
        x.mask_to_bits_val(bits)
    }

    #[test]
    fn test_mask_to_bits_val_known_vectors() {
        assert_eq!(mask_to_bits_val(0xFFu8, 4), 0x0F);
        assert_eq!(mask_to_bits_val(0b1010_1010u8, 3), 0b010);
        assert_eq!(mask_to_bits_val(0xFFFF_FFFFu32, 1), 1);
        assert_eq!(mask_to_bits_val(0xFFFF_FFFF_FFFF_FFFFu64, 63), u64::MAX >> 1);
        assert_eq!(mask_to_bits_val(0x1234u16, 0), 0);
    }

    #[test]
    fn test_mask_to_bits_val_at_or_above_width_is_identity() {
        assert_eq!(mask_to_bits_val(0xFFu8, 8), 0xFF);
        assert_eq!(mask_to_bits_val(0xFFFFu16, 16), 0xFFFF);
        assert_eq!(mask_to_bits_val(0xDEAD_BEEFu32, 32), 0xDEAD_BEEF);
        assert_eq!(mask_to_bits_val(u64::MAX, 64), u64::MAX);
        assert_eq!(mask_to_bits_val(u64::MAX, 65), u64::MAX);
        assert_eq!(mask_to_bits_val(0xA5u8, u32::MAX), 0xA5);
    }

    #[test]
    fn test_mask_to_bits_val_idempotent_u8_exhaustive() {
        for x in 0..=u8::MAX {
            for bits in 0..=9 {
                let once = mask_to_bits_val(x, bits);
                assert_eq!(mask_to_bits_val(once, bits), once);
            }
        }
    }

    #[test]
    fn test_mask_to_bits_val_clears_high_bits_sampled() {
        let mut rng = StdRng::seed_from_u64(0x5EED_0003);
        for _ in 0..10_000 {
            let x: u64 = rng.gen();
            let bits = rng.gen_range(0..=64);
            let masked = mask_to_bits_val(x, bits);
            if bits < 64 {
                assert_eq!(masked >> bits, 0);
                assert_eq!(masked, x & ((1u64 << bits) - 1));
            } else {
                assert_eq!(masked, x);
            }
            assert_eq!(mask_to_bits_val(masked, bits), masked);
        }
    }
}
