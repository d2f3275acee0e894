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

//! # Byte Order Reversal
//!
//! By-value byte swap over the unsigned wire widths. The portable functions
//! `byte_swap16`, `byte_swap32`, and `byte_swap64` are the reference
//! definition: each width is composed from the next-smaller width by swapping
//! the two halves' byte order independently and then exchanging the halves.
//! The `arch-byteswap-16`/`-32`/`-64` features substitute the core
//! `swap_bytes` intrinsic per width; any substitution must be bit-identical
//! to the portable composition, which the test suite checks differentially.

/// Byte order reversal by value (no references).
///
/// Swapping is an involution: applying it twice yields the original value.
/// A single byte has no order, so the `u8` implementation is the identity.
///
/// # Examples
///
/// ```rust
/// # use ferrule_bits::swap::ByteSwapVal;
///
/// assert_eq!(0x1234u16.byte_swap_val(), 0x3412);
/// assert_eq!(0x0102_0304u32.byte_swap_val(), 0x0403_0201);
/// assert_eq!(0xABu8.byte_swap_val(), 0xAB);
/// ```
pub trait ByteSwapVal: Sized {
    /// Returns the value with its byte order reversed.
    fn byte_swap_val(self) -> Self;
}

/// Portable byte order reversal for `u16`.
///
/// Reference definition for the 16-bit swap; the two constituent bytes
/// exchange positions.
#[inline(always)]
pub const fn byte_swap16(x: u16) -> u16 {
    (x << 8) | (x >> 8)
}

/// Portable byte order reversal for `u32`.
///
/// Composed from [`byte_swap16`]: each 16-bit half is swapped, then the
/// halves exchange positions.
#[inline(always)]
pub const fn byte_swap32(x: u32) -> u32 {
    ((byte_swap16(x as u16) as u32) << 16) | (byte_swap16((x >> 16) as u16) as u32)
}

/// Portable byte order reversal for `u64`.
///
/// Composed from [`byte_swap32`]: each 32-bit half is swapped, then the
/// halves exchange positions.
#[inline(always)]
pub const fn byte_swap64(x: u64) -> u64 {
    ((byte_swap32(x as u32) as u64) << 32) | (byte_swap32((x >> 32) as u32) as u64)
}

impl ByteSwapVal for u8 {
    #[inline(always)]
    fn byte_swap_val(self) -> Self {
        self
    }
}

macro_rules! byte_swap_impl_val {
    ($t:ty, $feature:literal, $portable:path) => {
        impl ByteSwapVal for $t {
            #[inline(always)]
            fn byte_swap_val(self) -> Self {
                #[cfg(feature = $feature)]
                {
                    self.swap_bytes()
                }
                #[cfg(not(feature = $feature))]
                {
                    $portable(self)
                }
            }
        }
    };
}

byte_swap_impl_val!(u16, "arch-byteswap-16", byte_swap16);
byte_swap_impl_val!(u32, "arch-byteswap-32", byte_swap32);
byte_swap_impl_val!(u64, "arch-byteswap-64", byte_swap64);
