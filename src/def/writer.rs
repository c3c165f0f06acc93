// Wed Oct 14 2026 - Alex

use std::io::{self, Write};

pub const EXPORTS_HEADER: &str = "EXPORTS";

/// Streams a module definition file: the `EXPORTS` header, then one
/// name per line in the order they are written.
pub struct DefWriter<W: Write> {
    inner: W,
    written: usize,
}

impl<W: Write> DefWriter<W> {
    pub fn new(mut inner: W) -> io::Result<Self> {
        writeln!(inner, "{}", EXPORTS_HEADER)?;
        Ok(Self { inner, written: 0 })
    }

    pub fn write_symbol(&mut self, symbol: &str) -> io::Result<()> {
        writeln!(self.inner, "{}", symbol)?;
        self.written += 1;
        Ok(())
    }

    pub fn written(&self) -> usize {
        self.written
    }

    pub fn finish(mut self) -> io::Result<W> {
        self.inner.flush()?;
        Ok(self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_definition_has_header() {
        let out = DefWriter::new(Vec::new()).unwrap().finish().unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "EXPORTS\n");
    }

    #[test]
    fn test_symbols_in_write_order() {
        let mut writer = DefWriter::new(Vec::new()).unwrap();
        writer.write_symbol("mysql_init").unwrap();
        writer.write_symbol("mysql_close").unwrap();
        assert_eq!(writer.written(), 2);

        let out = writer.finish().unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "EXPORTS\nmysql_init\nmysql_close\n");
    }
}
