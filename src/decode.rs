//! The decode pass: self-delimiting codewords in, text symbols out.

use std::io::{BufRead, Write};

use log::debug;

use crate::bits::BitReader;
use crate::code;
use crate::error::Error;

/// Decode every codeword from `input`, writing the recovered symbols to
/// `output`. Returns the number of symbols decoded.
///
/// The pass ends cleanly when the byte source is exhausted; an empty
/// input decodes to an empty output. A truncated or unterminated parse
/// surfaces the corresponding [`Error`] from the bit layer, and a
/// well-framed codeword that names no table entry aborts with
/// [`Error::UnknownCode`]. Symbols already recovered stay written.
pub fn decode_all<R: BufRead, W: Write>(input: R, mut output: W) -> Result<u64, Error> {
    let mut reader = BitReader::new(input);
    let mut symbols: u64 = 0;

    while let Some(code) = reader.next_code()? {
        let symbol = code::symbol_of(code).ok_or(Error::UnknownCode(code))?;
        output.write_all(&[symbol])?;
        symbols += 1;
    }

    output.flush()?;
    debug!("decoded {symbols} symbols");
    Ok(symbols)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_codeword_rejected() {
        // A lone zero byte frames as the 00 pseudo-codeword.
        let mut out = Vec::new();
        let result = decode_all(&[0x00][..], &mut out);
        assert!(matches!(result, Err(Error::UnknownCode(_))));
    }

    #[test]
    fn clean_stream_reports_count() {
        let mut out = Vec::new();
        assert_eq!(decode_all(&[0xB2, 0xB6, 0x00][..], &mut out).unwrap(), 2);
        assert_eq!(out, b"A\n");
    }
}
