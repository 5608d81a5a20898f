//! Failure taxonomy shared by the encode and decode paths.
//!
//! A clean end of input is not represented here: the decoder reports it
//! as the `Ok(None)` arm of [`crate::bits::BitReader::next_code`]. Every
//! variant below is fatal to its pass; the format carries no checksum or
//! resynchronization marker, so nothing is retried.

use std::io;

use thiserror::Error;

use crate::Codeword;

#[derive(Debug, Error)]
pub enum Error {
    /// The text input held a byte with no codeword.
    #[error("byte {0:#04x} is outside the codec alphabet")]
    UnknownSymbol(u8),

    /// A complete, well-framed codeword that matches no table entry.
    #[error("codeword {0} maps to no symbol")]
    UnknownCode(Codeword),

    /// The byte source ran dry in the middle of a codeword.
    #[error("stream ends inside a codeword")]
    Truncated,

    /// A run longer than any codeword arrived without a terminator.
    #[error("codeword exceeds the maximum length without a terminator")]
    MissingTerminator,

    /// The underlying byte stream failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}
