//! Console printing and line reading.

use std::fmt::Display;
use std::io::{self, BufRead};

/// Prints the value to stdout.
pub fn log(value: impl Display) {
    println!("{value}");
}

/// Prints the value to stderr.
pub fn error(value: impl Display) {
    eprintln!("{value}");
}

/// Reads one line from stdin, without the trailing line break. Read
/// failures are logged, not returned.
pub fn read_line() -> Option<String> {
    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => {
            while line.ends_with('\n') || line.ends_with('\r') {
                line.pop();
            }
            Some(line)
        }
        Err(e) => {
            log::error!("read stdin: {e}");
            None
        }
    }
}
