//! # Self-delimiting text codec
//!
//! This crate packs text over a 28-symbol alphabet (`A`–`Z`, space,
//! newline) into a binary stream and back. Every symbol has a fixed
//! variable-length codeword of 3 to 12 bits that ends in two consecutive
//! zero bits and contains no earlier pair of zeros, so a decoder can
//! recover codeword boundaries from the bit stream itself — no length
//! prefixes, no separators. Codewords are concatenated MSB-first and
//! packed into bytes, with the final partial byte zero-padded.
//!
//! The encode and decode drivers run one whole pass over a byte stream:
//!
//! ```
//! let text = b"SEND MORE CODES\n";
//!
//! let mut packed = Vec::new();
//! telex::encode::encode_all(&text[..], &mut packed).unwrap();
//!
//! let mut recovered = Vec::new();
//! telex::decode::decode_all(&packed[..], &mut recovered).unwrap();
//! assert_eq!(recovered, text);
//! ```
//!
//! The lower layers are public as well: [`code`] holds the fixed
//! symbol↔codeword table and [`bits`] the bit-level buffer that splits
//! and reassembles codewords across byte boundaries.

use std::fmt;

/// No codeword in the table is longer than this many bits. The decoder
/// rejects a parse that runs past the bound without finding a terminator.
pub const MAX_CODE_BITS: u8 = 12;

/// A variable-length binary codeword: an unsigned value paired with its
/// exact bit count.
///
/// The value alone is ambiguous since leading zero bits are significant,
/// so two codewords are equal only when both value and length agree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Codeword {
    value: u16,
    len: u8,
}

impl Codeword {
    /// Build a codeword from the low `len` bits of `value`.
    pub fn new(value: u16, len: u8) -> Self {
        debug_assert!(len >= 1 && len <= 16);
        Codeword { value, len }
    }

    /// The codeword's bits, right-aligned.
    pub fn value(&self) -> u16 {
        self.value
    }

    /// The number of bits in the codeword.
    pub fn bits(&self) -> u8 {
        self.len
    }
}

impl fmt::Display for Codeword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$b}", self.value, width = usize::from(self.len))
    }
}

pub mod bits;
pub mod code;
pub mod decode;
pub mod encode;
pub mod error;

#[cfg(feature = "cli")]
pub mod cli;

pub use error::Error;
