//! CSV persistence for product records.

use spec_engine::ProductRecord;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;

use crate::error::{CrawlError, CrawlResult};
use crate::traits::RecordSink;

/// Column headers: product name, URL, detail spec.
pub const CSV_HEADER: [&str; 3] = ["상품명", "URL", "상세정보"];

const UTF8_BOM: &[u8] = "\u{FEFF}".as_bytes();

/// Writes records as UTF-8 CSV with a byte-order mark, so spreadsheet
/// tools pick the right encoding for the Korean text.
pub struct CsvSink<W: Write> {
    writer: csv::Writer<W>,
    written: usize,
}

impl CsvSink<File> {
    /// Create (or truncate) a CSV file at `path`.
    pub fn create(path: impl AsRef<Path>) -> CrawlResult<Self> {
        let file = File::create(path.as_ref())?;
        info!(path = %path.as_ref().display(), "Writing records to CSV");
        Self::from_writer(file)
    }
}

impl<W: Write> CsvSink<W> {
    /// Wrap any writer. The BOM and header row are written immediately.
    pub fn from_writer(mut inner: W) -> CrawlResult<Self> {
        inner.write_all(UTF8_BOM)?;
        let mut writer = csv::Writer::from_writer(inner);
        writer.write_record(CSV_HEADER)?;
        Ok(Self { writer, written: 0 })
    }

    /// Records written so far.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Flush and return the underlying writer.
    pub fn into_inner(self) -> CrawlResult<W> {
        self.writer
            .into_inner()
            .map_err(|e| CrawlError::Io(std::io::Error::new(e.error().kind(), e.error().to_string())))
    }
}

impl<W: Write> RecordSink for CsvSink<W> {
    fn write_record(&mut self, record: &ProductRecord) -> CrawlResult<()> {
        self.writer
            .write_record([&record.title, &record.link, &record.spec])?;
        self.written += 1;
        Ok(())
    }

    fn finish(&mut self) -> CrawlResult<()> {
        self.writer.flush()?;
        info!(records = self.written, "CSV output flushed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(sink: CsvSink<Vec<u8>>) -> String {
        String::from_utf8(sink.into_inner().unwrap()).unwrap()
    }

    #[test]
    fn test_header_and_bom() {
        let sink = CsvSink::from_writer(Vec::new()).unwrap();
        assert_eq!(output(sink), "\u{FEFF}상품명,URL,상세정보\n");
    }

    #[test]
    fn test_records_are_quoted_when_needed() {
        let mut sink = CsvSink::from_writer(Vec::new()).unwrap();
        sink.write_all(&[
            ProductRecord::new("아기밥, 소고기", "https://prod.danawa.com/info/?pcode=1", "형태:죽,진밥"),
            ProductRecord::new("미음", "https://prod.danawa.com/info/?pcode=2", ""),
        ])
        .unwrap();
        assert_eq!(sink.written(), 2);

        assert_eq!(
            output(sink),
            "\u{FEFF}상품명,URL,상세정보\n\
             \"아기밥, 소고기\",https://prod.danawa.com/info/?pcode=1,\"형태:죽,진밥\"\n\
             미음,https://prod.danawa.com/info/?pcode=2,\n"
        );
    }
}
