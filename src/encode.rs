//! The encode pass: text symbols in, bit-packed codewords out.

use std::io::{BufRead, Write};

use log::debug;

use crate::bits::BitWriter;
use crate::code;
use crate::error::Error;

/// Encode every symbol from `input`, writing the packed stream to
/// `output`. Returns the number of symbols encoded.
///
/// Each input byte is translated through the code table and its codeword
/// appended to the output bit stream; after the last symbol the final
/// partial byte, if any, is zero-padded and emitted, and the sink is
/// flushed.
///
/// A byte outside the alphabet aborts the pass with
/// [`Error::UnknownSymbol`]. Whole bytes already packed stay written;
/// discarding a partial output file is the caller's decision.
pub fn encode_all<R: BufRead, W: Write>(mut input: R, output: W) -> Result<u64, Error> {
    let mut writer = BitWriter::new(output);
    let mut symbols: u64 = 0;

    loop {
        let consumed = {
            let chunk = input.fill_buf()?;
            if chunk.is_empty() {
                break;
            }
            for &byte in chunk {
                let code = code::code_of(byte).ok_or(Error::UnknownSymbol(byte))?;
                writer.write_code(u32::from(code.value()), code.bits())?;
            }
            chunk.len()
        };
        input.consume(consumed);
        symbols += consumed as u64;
    }

    writer.flush()?;
    writer.into_inner().flush()?;
    debug!("encoded {symbols} symbols");
    Ok(symbols)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_rejected() {
        let mut out = Vec::new();
        let result = encode_all(&b"TEa"[..], &mut out);
        assert!(matches!(result, Err(Error::UnknownSymbol(b'a'))));
    }

    #[test]
    fn symbol_count_reported() {
        let mut out = Vec::new();
        assert_eq!(encode_all(&b"CODE\n"[..], &mut out).unwrap(), 5);
    }
}
