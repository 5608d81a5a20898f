//! Shared front end for the `encrypt` and `decrypt` binaries.
//!
//! Both binaries are two-argument file-to-file passes with the same
//! reporting contract: exit 0 on success; on any failure a line on
//! standard error and exit 1. A stream that cannot be encoded or decoded
//! is reported as `Invalid file`; the precise cause is visible under
//! `RUST_LOG=debug`.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use log::debug;

use crate::error::Error;
use crate::{decode, encode};

/// Which pass a binary drives.
#[derive(Clone, Copy, Debug)]
pub enum Operation {
    Encrypt,
    Decrypt,
}

impl Operation {
    fn name(self) -> &'static str {
        match self {
            Operation::Encrypt => "encrypt",
            Operation::Decrypt => "decrypt",
        }
    }
}

#[derive(Parser, Debug)]
#[command(version, about = "Translate a text file to or from bit-packed codewords")]
struct Args {
    /// File to read.
    infile: PathBuf,
    /// File to write.
    outfile: PathBuf,
}

/// Entry point shared by both binaries.
pub fn main(op: Operation) -> ExitCode {
    init_logger();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(_) => {
            eprintln!("usage: {} <infile> <outfile>", op.name());
            return ExitCode::from(1);
        }
    };

    run(op, &args)
}

fn run(op: Operation, args: &Args) -> ExitCode {
    let input = match File::open(&args.infile) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("{}: {}", args.infile.display(), err);
            return ExitCode::from(1);
        }
    };
    let output = match File::create(&args.outfile) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("{}: {}", args.outfile.display(), err);
            return ExitCode::from(1);
        }
    };

    let reader = BufReader::new(input);
    let writer = BufWriter::new(output);
    let result = match op {
        Operation::Encrypt => encode::encode_all(reader, writer),
        Operation::Decrypt => decode::decode_all(reader, writer),
    };

    // A failed pass may leave a partial output file behind, as the
    // reference tools do; callers that care should remove it.
    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(Error::Io(err)) => {
            eprintln!("{err}");
            ExitCode::from(1)
        }
        Err(err) => {
            debug!("{} failed: {err}", op.name());
            eprintln!("Invalid file");
            ExitCode::from(1)
        }
    }
}

fn init_logger() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .try_init();
}
