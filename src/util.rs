// util.rs

use std::io::Write;

pub fn writeln_ignore_broken_pipe<W: Write, S: AsRef<str>>(mut w: W, s: S) -> std::io::Result<()> {
    match writeln!(w, "{}", s.as_ref()) {
        Err(ref e) if e.kind() == std::io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}

/// Writes one `{:>5}  {title}` row per title, numbered from 1.
pub fn write_numbered<W: Write>(mut w: W, titles: &[String]) -> std::io::Result<()> {
    for (i, title) in titles.iter().enumerate() {
        writeln_ignore_broken_pipe(&mut w, format!("{:>5}  {}", i + 1, title))?;
    }
    Ok(())
}
