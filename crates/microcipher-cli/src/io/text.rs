// crates/microcipher-cli/src/io/text.rs

use std::io::{Read, Write};

use anyhow::{Context, Result};

/// Messages to cipher: `--text` as a single line, else the lines of `--in`,
/// else the lines of stdin. Line endings (LF or CRLF) are dropped.
pub fn read_lines(text: Option<&str>, path: Option<&str>) -> Result<Vec<String>> {
    if let Some(t) = text {
        return Ok(vec![t.to_string()]);
    }

    let raw = match path {
        Some(p) => std::fs::read_to_string(p).with_context(|| format!("read input {p}"))?,
        None => {
            let mut s = String::new();
            std::io::stdin()
                .read_to_string(&mut s)
                .context("read stdin")?;
            s
        }
    };
    Ok(raw.lines().map(str::to_string).collect())
}

pub fn write_lines(path: Option<&str>, lines: &[String]) -> Result<()> {
    let mut body = String::new();
    for l in lines {
        body.push_str(l);
        body.push('\n');
    }

    match path {
        Some(p) => std::fs::write(p, body).with_context(|| format!("write output {p}"))?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(body.as_bytes()).context("write stdout")?;
            stdout.flush().context("flush stdout")?;
        }
    }
    Ok(())
}
