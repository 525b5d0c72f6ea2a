use std::io;

use crate::console::ConsoleSink;

// Example handlers for the demo command set.

/// Echo the arguments back, space-joined.
pub fn echo_handler(argv: &[&str], console: &mut dyn ConsoleSink) -> io::Result<()> {
    console.write_line(&argv[1..].join(" "))
}

/// Sum integer arguments and print the total.
pub fn add_handler(argv: &[&str], console: &mut dyn ConsoleSink) -> io::Result<()> {
    let mut total: i64 = 0;
    for arg in &argv[1..] {
        match arg.parse::<i64>() {
            Ok(n) => total += n,
            Err(_) => {
                return console.write_line(&format!("add: not a number: {arg}"));
            }
        }
    }
    console.write_line(&total.to_string())
}
