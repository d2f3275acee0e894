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

//! # Two's Complement Reinterpretation
//!
//! Reading a raw unsigned bit pattern as a signed value of the same width,
//! defined for every pattern including all-ones and the minimum-negative
//! pattern. The portable functions `twos_complement8/16/32/64` are the
//! reference definition: they split the pattern into sign bit and magnitude
//! and fold the sign in with two half-subtractions, using only operations
//! whose results are fully defined for the signed type. The
//! `twos-complement-target` feature replaces the trait's path with a direct
//! `as` cast; the test suite checks both paths agree on every input.
//!
//! Unsigned types implement the trait as the identity, so generic accessor
//! code can apply the cast uniformly to signed and unsigned fields.

/// Two's complement reinterpretation by value (no references).
///
/// `twos_complement_cast_val` reads an unsigned bit pattern as a value of
/// the implementing type; `to_bits_val` reads the value's bits back as
/// unsigned. The two are exact inverses on every bit pattern.
///
/// # Examples
///
/// ```rust
/// # use ferrule_bits::cast::TwosComplementCastVal;
///
/// assert_eq!(i8::twos_complement_cast_val(0xFF), -1);
/// assert_eq!(i8::twos_complement_cast_val(0x80), -128);
/// assert_eq!(i8::twos_complement_cast_val(0x7F), 127);
/// assert_eq!((-1i8).to_bits_val(), 0xFF);
///
/// // Unsigned types round-trip as the identity.
/// assert_eq!(u16::twos_complement_cast_val(0xABCD), 0xABCD);
/// ```
pub trait TwosComplementCastVal: Sized {
    /// The unsigned type carrying the raw bit pattern.
    type Bits;

    /// Reinterprets an unsigned bit pattern as a value of this type.
    fn twos_complement_cast_val(bits: Self::Bits) -> Self;

    /// Returns the raw bit pattern of this value.
    fn to_bits_val(self) -> Self::Bits;
}

macro_rules! twos_complement_portable {
    ($name:ident, $unsigned:ty, $signed:ty) => {
        /// Portable two's complement reinterpretation.
        ///
        /// Reference definition for this width. The sign bit is cleared so
        /// the remaining magnitude converts in range, then `2^(W-2)` is
        /// subtracted twice when the sign bit was set; every intermediate
        /// value stays within the signed type's range.
        #[inline(always)]
        pub const fn $name(bits: $unsigned) -> $signed {
            let sign_bit: $unsigned = 1 << (<$unsigned>::BITS - 1);
            let magnitude = (bits & (sign_bit - 1)) as $signed;
            let sign = ((bits & sign_bit) >> 1) as $signed;
            magnitude - sign - sign
        }
    };
}

twos_complement_portable!(twos_complement8, u8, i8);
twos_complement_portable!(twos_complement16, u16, i16);
twos_complement_portable!(twos_complement32, u32, i32);
twos_complement_portable!(twos_complement64, u64, i64);

macro_rules! twos_complement_impl_val {
    ($signed:ty, $unsigned:ty, $portable:path) => {
        impl TwosComplementCastVal for $signed {
            type Bits = $unsigned;

            #[inline(always)]
            fn twos_complement_cast_val(bits: $unsigned) -> Self {
                #[cfg(feature = "twos-complement-target")]
                {
                    bits as $signed
                }
                #[cfg(not(feature = "twos-complement-target"))]
                {
                    $portable(bits)
                }
            }

            #[inline(always)]
            fn to_bits_val(self) -> $unsigned {
                self as $unsigned
            }
        }
    };
}

twos_complement_impl_val!(i8, u8, twos_complement8);
twos_complement_impl_val!(i16, u16, twos_complement16);
twos_complement_impl_val!(i32, u32, twos_complement32);
twos_complement_impl_val!(i64, u64, twos_complement64);

// Unsigned patterns already denote themselves; the identity overload lets
// generic accessor code cast uniformly regardless of field signedness.
macro_rules! twos_complement_identity_impl_val {
    ($t:ty) => {
        impl TwosComplementCastVal for $t {
            type Bits = $t;

            #[inline(always)]
            fn twos_complement_cast_val(bits: $t) -> Self {
                bits
            }

            #[inline(always)]
            fn to_bits_val(self) -> $t {
                self
            }
        }
    };
}

twos_complement_identity_impl_val!(u8);
twos_complement_identity_impl_val!(u16);
twos_complement_identity_impl_val!(u32);
twos_complement_identity_impl_val!(u64);

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_twos_complement_cast_val_known_vectors() {
        assert_eq!(i8::twos_complement_cast_val(0xFF), -1);
        assert_eq!(i8::twos_complement_cast_val(0x80), -128);
        assert_eq!(i8::twos_complement_cast_val(0x7F), 127);
        assert_eq!(i8::twos_complement_cast_val(0x00), 0);
        assert_eq!(i16::twos_complement_cast_val(0x8000), i16::MIN);
        assert_eq!(i32::twos_complement_cast_val(0xFFFF_FFFF), -1);
        assert_eq!(i64::twos_complement_cast_val(u64::MAX), -1);
        assert_eq!(i64::twos_complement_cast_val(1u64 << 63), i64::MIN);
    }

    // The portable sign-folding path and the native cast must agree on every
    // pattern, whichever one the feature selection wired into the trait.
    #[test]
    fn test_twos_complement_portable_matches_cast_exhaustive() {
        for bits in 0..=u8::MAX {
            assert_eq!(twos_complement8(bits), bits as i8);
            assert_eq!(i8::twos_complement_cast_val(bits), bits as i8);
        }
        for bits in 0..=u16::MAX {
            assert_eq!(twos_complement16(bits), bits as i16);
            assert_eq!(i16::twos_complement_cast_val(bits), bits as i16);
        }
    }

    #[test]
    fn test_twos_complement_portable_matches_cast_wide_sampled() {
        let mut rng = StdRng::seed_from_u64(0x5EED_0004);
        for _ in 0..10_000 {
            let x: u32 = rng.gen();
            assert_eq!(twos_complement32(x), x as i32);
            assert_eq!(i32::twos_complement_cast_val(x), x as i32);
            let y: u64 = rng.gen();
            assert_eq!(twos_complement64(y), y as i64);
            assert_eq!(i64::twos_complement_cast_val(y), y as i64);
        }
        for x in [0u32, 1, 0x7FFF_FFFF, 0x8000_0000, u32::MAX] {
            assert_eq!(twos_complement32(x), x as i32);
        }
        for y in [0u64, 1, i64::MAX as u64, 1u64 << 63, u64::MAX] {
            assert_eq!(twos_complement64(y), y as i64);
        }
    }

    #[test]
    fn test_twos_complement_round_trip_u16_exhaustive() {
        for bits in 0..=u16::MAX {
            assert_eq!(i16::twos_complement_cast_val(bits).to_bits_val(), bits);
        }
    }

    #[test]
    fn test_twos_complement_round_trip_wide_sampled() {
        let mut rng = StdRng::seed_from_u64(0x5EED_0005);
        for _ in 0..10_000 {
            let y: u64 = rng.gen();
            assert_eq!(i64::twos_complement_cast_val(y).to_bits_val(), y);
        }
    }

    #[test]
    fn test_twos_complement_unsigned_identity() {
        assert_eq!(u8::twos_complement_cast_val(0xAB), 0xAB);
        assert_eq!(u64::twos_complement_cast_val(u64::MAX), u64::MAX);
        assert_eq!(0xABCDu16.to_bits_val(), 0xABCD);
    }
}
