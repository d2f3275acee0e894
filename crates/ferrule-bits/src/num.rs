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

//! # Wire Numeric Trait Aliases
//!
//! Unified numeric bounds for generated field accessors. `WireUnsigned` and
//! `WireSigned` collect the bit-op traits from this crate together with the
//! intrinsic `num_traits` bounds accessor code needs, so generic signatures
//! stay short and every instantiation is restricted to the supported wire
//! widths at compile time.
//!
//! ## Motivation
//!
//! The enclosing access layer is generic over field storage types while
//! relying on byte order reversal, masking, and two's complement
//! reinterpretation with fixed semantics. Collecting the bounds here keeps
//! those requirements in one place; a storage type outside the four wire
//! widths simply fails to satisfy the alias.

use std::hash::Hash;

use num_traits::{PrimInt, Signed, Unsigned};

use crate::cast::TwosComplementCastVal;
use crate::mask::MaskToBitsVal;
use crate::pow2::IsPowerOfTwoVal;
use crate::swap::ByteSwapVal;

/// A trait alias for unsigned storage types of generated field accessors.
///
/// Satisfied exactly by `u8`, `u16`, `u32`, and `u64`: wider or
/// platform-sized integers lack the bit-op impls and are rejected at
/// compile time.
pub trait WireUnsigned:
    PrimInt
    + Unsigned
    + ByteSwapVal
    + MaskToBitsVal
    + IsPowerOfTwoVal
    + TwosComplementCastVal<Bits = Self>
    + std::fmt::Debug
    + std::fmt::Display
    + Send
    + Sync
    + Hash
{
}

impl<T> WireUnsigned for T where
    T: PrimInt
        + Unsigned
        + ByteSwapVal
        + MaskToBitsVal
        + IsPowerOfTwoVal
        + TwosComplementCastVal<Bits = Self>
        + std::fmt::Debug
        + std::fmt::Display
        + Send
        + Sync
        + Hash
{
}

/// A trait alias for signed storage types of generated field accessors.
///
/// Satisfied exactly by `i8`, `i16`, `i32`, and `i64`. Masking and byte
/// order reversal are deliberately absent: both are defined over unsigned
/// bit patterns, so accessors reach them through
/// [`TwosComplementCastVal::to_bits_val`].
pub trait WireSigned:
    PrimInt
    + Signed
    + IsPowerOfTwoVal
    + TwosComplementCastVal
    + std::fmt::Debug
    + std::fmt::Display
    + Send
    + Sync
    + Hash
{
}

impl<T> WireSigned for T where
    T: PrimInt
        + Signed
        + IsPowerOfTwoVal
        + TwosComplementCastVal
        + std::fmt::Debug
        + std::fmt::Display
        + Send
        + Sync
        + Hash
{
}

#[cfg(test)]
mod tests {
    use super::*;

    // Reads a little-endian field the way a generated accessor would: swap
    // when the wire order differs from the value order, then mask to the
    // field's declared bit width.
    fn read_field<T: WireUnsigned>(raw: T, swap: bool, bits: u32) -> T {
        let v = if swap { raw.byte_swap_val() } else { raw };
        v.mask_to_bits_val(bits)
    }

    fn read_signed_field<T: WireSigned>(bits: T::Bits) -> T {
        T::twos_complement_cast_val(bits)
    }

    #[test]
    fn test_wire_unsigned_alias_usable_for_all_widths() {
        assert_eq!(read_field(0x12u8, false, 4), 0x02);
        assert_eq!(read_field(0x1234u16, true, 16), 0x3412);
        assert_eq!(read_field(0x0102_0304u32, true, 8), 0x01);
        assert_eq!(read_field(u64::MAX, false, 12), 0xFFF);
    }

    #[test]
    fn test_wire_signed_alias_usable_for_all_widths() {
        assert_eq!(read_signed_field::<i8>(0xFF), -1);
        assert_eq!(read_signed_field::<i16>(0x8000), i16::MIN);
        assert_eq!(read_signed_field::<i32>(0x7FFF_FFFF), i32::MAX);
        assert_eq!(read_signed_field::<i64>(u64::MAX), -1);
    }
}
