use std::io::{BufWriter, Write};

pub const WRITER_BUFFER_SIZE: usize = 256 * 1024;

/// Buffered line writer for the generated SQL script.
///
/// Every line is newline terminated, so the finished output always ends with
/// a trailing newline.
pub struct SqlWriter<W: Write> {
    writer: BufWriter<W>,
}

impl<W: Write> SqlWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            writer: BufWriter::with_capacity(WRITER_BUFFER_SIZE, inner),
        }
    }

    /// `-- <text>`
    pub fn write_comment(&mut self, text: &str) -> std::io::Result<()> {
        self.writer.write_all(b"-- ")?;
        self.writer.write_all(text.as_bytes())?;
        self.writer.write_all(b"\n")
    }

    pub fn write_statement(&mut self, stmt: &str) -> std::io::Result<()> {
        self.writer.write_all(stmt.as_bytes())?;
        self.writer.write_all(b"\n")
    }

    pub fn write_blank_line(&mut self) -> std::io::Result<()> {
        self.writer.write_all(b"\n")
    }

    pub fn flush(&mut self) -> std::io::Result<()> {
        self.writer.flush()
    }
}
