//! JSON output formatting

use std::io;

use crate::tree::TreeResult;

/// Print the walk result as pretty-printed JSON to stdout.
pub fn print_json(tree: &TreeResult) -> io::Result<()> {
    let json =
        serde_json::to_string_pretty(tree).map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    println!("{}", json);
    Ok(())
}
