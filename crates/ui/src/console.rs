use std::io::{self, BufRead, Write};

/// Line-oriented terminal surface.
///
/// Generic over its streams so the menu can be driven from tests.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `label` and read one line without its line ending.
    ///
    /// Bytes that are not valid UTF-8 become U+FFFD rather than failing the
    /// read. Returns `Ok(None)` once input is exhausted.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the underlying streams.
    pub fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&raw);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_owned()))
    }

    /// Print `message` followed by a newline.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the output stream.
    pub fn say(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{message}")?;
        self.output.flush()
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
