use anyhow::Result;
use std::io::Write;

/// Returns true when the input is present and contains at least one
/// non-whitespace character. `None` stands in for a missing value.
pub fn is_valid(input: Option<&str>) -> bool {
    input.map_or(false, |s| !s.trim().is_empty())
}

/// Prints each item to stdout on its own line, in order.
pub fn process_list<S: AsRef<str>>(items: &[S]) {
    for item in items {
        println!("{}", item.as_ref());
    }
}

/// Writer-parameterized core of [`process_list`]; write errors propagate
/// to the caller instead of panicking.
pub fn write_list<S: AsRef<str>, W: Write>(items: &[S], out: &mut W) -> Result<()> {
    for item in items {
        writeln!(out, "{}", item.as_ref())?;
    }
    Ok(())
}
