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

//! # Ferrule Bits
//!
//! Portable, branch-minimal numeric primitives for a generated binary-format
//! access layer. Field accessors over raw byte buffers need to extract and
//! store values whose byte order, bit width, and signedness may not match the
//! host's native representation; this crate supplies the raw numeric
//! transforms they are built from, as by-value traits over the fixed wire
//! widths (8, 16, 32, and 64 bits).
//!
//! ## Modules
//!
//! - `swap`: Byte order reversal (`ByteSwapVal`) built by recursive
//!   decomposition, with per-width feature gates substituting the core
//!   `swap_bytes` intrinsic.
//! - `mask`: Low-bit masking (`MaskToBitsVal`) over unsigned wire widths,
//!   with a documented identity policy for out-of-range bit counts.
//! - `pow2`: Power-of-two predicate (`IsPowerOfTwoVal`) over unsigned and
//!   signed wire widths.
//! - `cast`: Two's complement reinterpretation (`TwosComplementCastVal`)
//!   between unsigned bit patterns and signed values, with a portable
//!   sign-folding path and an optional native-cast fast path.
//! - `num`: Trait aliases (`WireUnsigned`, `WireSigned`) bundling the above
//!   with `num_traits` bounds for generic accessor code.
//!
//! ## Purpose
//!
//! Every operation here is pure, total over its declared width, and free of
//! allocation, I/O, and shared state, so accessors may call them from
//! arbitrarily parallel contexts. Each primitive avoids a subtly wrong
//! "obvious" implementation: naive signed casts, shifts by the full width,
//! and branchy bit tests. The portable definitions are the behavioral
//! contract; the feature-gated fast paths are bit-identical optimizations.
//!
//! Refer to each module for detailed APIs and examples.

pub mod cast;
pub mod mask;
pub mod num;
pub mod pow2;
pub mod swap;
