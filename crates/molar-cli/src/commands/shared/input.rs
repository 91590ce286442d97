use std::io::Read;
use std::path::Path;

use anyhow::Context;

/// Use `text` when given, else read all of stdin.
pub fn text_or_stdin(text: Option<&str>) -> anyhow::Result<String> {
    match text {
        Some(text) => Ok(text.to_string()),
        None => read_stdin(),
    }
}

/// Read a file, with `-` meaning stdin.
pub fn file_or_stdin(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        return read_stdin();
    }
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn read_stdin() -> anyhow::Result<String> {
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("failed to read stdin")?;
    Ok(buf)
}
