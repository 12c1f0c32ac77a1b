//! Regenerates `crates/htmldoc/src/entities/decode_tree.rs` from the WHATWG
//! `entities.json` list.
//!
//! Usage: `cargo run -p tools --bin gen_decode_tree -- entities.json [out.rs]`
//! Without an output path the table is written to stdout.

use std::fs;
use std::io::Write;
use std::process::ExitCode;

use tools::decode_tree::generate;

fn main() -> ExitCode {
    let mut args = std::env::args().skip(1);
    let Some(input) = args.next() else {
        eprintln!("usage: gen_decode_tree <entities.json> [output.rs]");
        return ExitCode::from(2);
    };
    let output = args.next();

    let json = match fs::read_to_string(&input) {
        Ok(json) => json,
        Err(err) => {
            eprintln!("failed to read {input}: {err}");
            return ExitCode::FAILURE;
        }
    };
    let source = match generate(&json) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("{input}: {err}");
            return ExitCode::FAILURE;
        }
    };

    let written = match &output {
        Some(path) => fs::write(path, source.as_bytes()),
        None => std::io::stdout().lock().write_all(source.as_bytes()),
    };
    if let Err(err) = written {
        eprintln!("failed to write table: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
