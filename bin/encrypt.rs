#![forbid(unsafe_code)]
use std::process::ExitCode;

use telex::cli::{self, Operation};

fn main() -> ExitCode {
    cli::main(Operation::Encrypt)
}
