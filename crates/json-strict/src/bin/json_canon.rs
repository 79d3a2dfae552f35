//! `json-canon` — read JSON text on stdin, write its canonical form on
//! stdout.
//!
//! Exits 1 with the parse error on stderr when the input is not valid JSON.

use std::io::{self, Read, Write};

use json_strict::{parse, stringify};

fn main() {
    let mut input = Vec::new();
    if let Err(e) = io::stdin().read_to_end(&mut input) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    match parse(&input) {
        Ok(value) => {
            let mut out = stringify(&value);
            out.push(b'\n');
            if let Err(e) = io::stdout().write_all(&out) {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("parse error: {e}");
            std::process::exit(1);
        }
    }
}
