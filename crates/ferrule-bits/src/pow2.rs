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

//! # Power-of-Two Predicate
//!
//! A total predicate over unsigned and signed wire widths, used for
//! bit-width and alignment checks in generated accessor code.

/// Power-of-two test by value (no references).
///
/// True iff the value is strictly positive and has exactly one set bit.
/// Zero has no set bits and negative values are outside the predicate's
/// domain of use, so both yield false. Total for every bit pattern of the
/// implementing type, including the signed minimum.
///
/// # Examples
///
/// ```rust
/// # use ferrule_bits::pow2::IsPowerOfTwoVal;
///
/// assert!(!0u8.is_power_of_two_val());
/// assert!(1u8.is_power_of_two_val());
/// assert!(!3u8.is_power_of_two_val());
/// assert!((1u64 << 63).is_power_of_two_val());
/// assert!(!(-4i32).is_power_of_two_val());
/// ```
pub trait IsPowerOfTwoVal: Sized {
    /// Returns true iff the value is a positive integral power of two.
    fn is_power_of_two_val(self) -> bool;
}

macro_rules! is_power_of_two_impl_val {
    ($t:ty) => {
        impl IsPowerOfTwoVal for $t {
            #[inline(always)]
            fn is_power_of_two_val(self) -> bool {
                // x & (x - 1) clears the lowest set bit, so a nonzero x is a
                // power of two exactly when the result is zero. The positivity
                // check short-circuits before the decrement can wrap.
                self > 0 && (self & (self - 1)) == 0
            }
        }
    };
}

is_power_of_two_impl_val!(u8);
is_power_of_two_impl_val!(u16);
is_power_of_two_impl_val!(u32);
is_power_of_two_impl_val!(u64);

is_power_of_two_impl_val!(i8);
is_power_of_two_impl_val!(i16);
is_power_of_two_impl_val!(i32);
is_power_of_two_impl_val!(i64);
