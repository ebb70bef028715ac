use std::io::{self, BufRead, Write};

/// Write `text`, then read one trimmed line. `None` at end of input.
pub(super) fn prompt<I, O>(input: &mut I, out: &mut O, text: &str) -> io::Result<Option<String>>
where
    I: BufRead,
    O: Write,
{
    write!(out, "{text}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        writeln!(out)?;
        return Ok(None);
    }
    Ok(Some(line.trim().to_owned()))
}
