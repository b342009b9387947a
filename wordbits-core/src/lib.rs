//! Bit vectors packed into 64-bit words.
//!
//! [`BitVec`] grows when a bit past its storage is set and shrinks as soon as
//! its highest words become zero. [`FixedBitVec`] has a capacity chosen at
//! construction and rejects indices past it. Both implement [`Bits`].
//!
//! Ranges are half-open: `2..5` covers bits 2, 3 and 4.
//!
//! ```
//! use wordbits_core::BitVec;
//!
//! let mut bv = BitVec::new();
//! bv.set(2);
//! bv.set(3);
//! bv.set(5);
//! assert_eq!(bv.to_string(), "001101");
//!
//! bv.shift_left(2);
//! assert_eq!(bv.iter().collect::<Vec<_>>(), vec![0, 1, 3]);
//! ```

pub mod arbitrary;
pub mod bits;
pub mod dynamic;
pub mod error;
pub mod fixed;
pub mod iter;
pub mod word;

pub use bits::Bits;
pub use dynamic::BitVec;
pub use error::{BitError, BitErrorKind};
pub use fixed::FixedBitVec;
pub use iter::Ones;
