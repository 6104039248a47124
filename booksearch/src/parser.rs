use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

use crate::errors::{SearchError, SearchResult};
use crate::record::Book;

/// Default field delimiter for record files
pub const DEFAULT_DELIMITER: char = ',';

/// Turns delimited text lines into [`Book`] records.
///
/// Parsing never fails. A line with fewer than two delimiters produces a
/// record whose missing trailing fields are empty, and anything after a third
/// delimiter is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordParser {
    delimiter: char,
}

impl Default for RecordParser {
    fn default() -> Self {
        Self::new(DEFAULT_DELIMITER)
    }
}

impl RecordParser {
    pub fn new(delimiter: char) -> Self {
        Self { delimiter }
    }

    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Parses one `id,language,category` line
    pub fn parse_line(&self, line: &str) -> Book {
        let mut fields = line.split(self.delimiter);
        let id = fields.next().unwrap_or_default();
        let language = fields.next().unwrap_or_default();
        let category = fields.next().unwrap_or_default();
        Book::new(id, language, category)
    }

    /// Reads every line of `reader` as a record.
    ///
    /// Lines end at `\n` or `\r\n`. Bytes that are not valid UTF-8 are
    /// replaced with U+FFFD rather than rejected.
    pub fn read_from<R: BufRead>(&self, mut reader: R) -> std::io::Result<Vec<Book>> {
        let mut books = Vec::new();
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                return Ok(books);
            }
            if buf.last() == Some(&b'\n') {
                buf.pop();
                if buf.last() == Some(&b'\r') {
                    buf.pop();
                }
            }
            books.push(self.parse_line(&String::from_utf8_lossy(&buf)));
        }
    }

    /// Reads a whole record file. The handle is closed before returning.
    pub fn read_books(&self, path: &Path) -> std::io::Result<Vec<Book>> {
        let file = File::open(path)?;
        let books = self.read_from(BufReader::new(file))?;
        debug!("Loaded {} records from {}", books.len(), path.display());
        Ok(books)
    }
}

/// Loads the catalog and request files.
///
/// A failure on either file is reported as [`SearchError::Load`] naming both.
pub fn load_collections(
    catalog_path: &Path,
    requests_path: &Path,
    parser: &RecordParser,
) -> SearchResult<(Vec<Book>, Vec<Book>)> {
    let load = || -> std::io::Result<(Vec<Book>, Vec<Book>)> {
        Ok((
            parser.read_books(catalog_path)?,
            parser.read_books(requests_path)?,
        ))
    };
    load().map_err(|e| SearchError::load(catalog_path, requests_path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use tempfile::tempdir;

    #[test]
    fn test_parse_full_line() {
        let book = RecordParser::default().parse_line("111,en,new");
        assert_eq!(book, Book::new("111", "en", "new"));
    }

    #[test]
    fn test_parse_missing_category() {
        let book = RecordParser::default().parse_line("555,en");
        assert_eq!(book.id(), "555");
        assert_eq!(book.language(), "en");
        assert_eq!(book.category(), "");
    }

    #[test]
    fn test_parse_only_id() {
        let book = RecordParser::default().parse_line("555");
        assert_eq!(book, Book::new("555", "", ""));
    }

    #[test]
    fn test_parse_empty_line() {
        assert_eq!(RecordParser::default().parse_line(""), Book::default());
    }

    #[test]
    fn test_parse_drops_extra_fields() {
        let book = RecordParser::default().parse_line("111,en,new,extra,more");
        assert_eq!(book, Book::new("111", "en", "new"));
    }

    #[test]
    fn test_parse_keeps_empty_inner_fields() {
        let book = RecordParser::default().parse_line(",,used");
        assert_eq!(book, Book::new("", "", "used"));
    }

    #[test]
    fn test_custom_delimiter() {
        let parser = RecordParser::new('|');
        assert_eq!(parser.parse_line("111|en|new"), Book::new("111", "en", "new"));
        assert_eq!(parser.parse_line("111,en,new"), Book::new("111,en,new", "", ""));
    }

    #[test]
    fn test_read_from_strips_line_endings() {
        let input = Cursor::new("111,en,new\r\n222,fr,used\n\n333,de,new");
        let books = RecordParser::default().read_from(input).unwrap();
        assert_eq!(
            books,
            vec![
                Book::new("111", "en", "new"),
                Book::new("222", "fr", "used"),
                Book::default(),
                Book::new("333", "de", "new"),
            ]
        );
    }

    #[test]
    fn test_read_from_tolerates_invalid_utf8() {
        let input = Cursor::new(b"111,en,new\n222,fran\xe7ais,used\r\n333,de".to_vec());
        let books = RecordParser::default().read_from(input).unwrap();
        assert_eq!(books.len(), 3);
        assert_eq!(books[1].id(), "222");
        assert_eq!(books[1].language(), "fran\u{FFFD}ais");
        assert_eq!(books[1].category(), "used");
        assert_eq!(books[2], Book::new("333", "de", ""));
    }

    #[test]
    fn test_load_collections_latin1_catalog() {
        let dir = tempdir().unwrap();
        let catalog = dir.path().join("newBooks.dat");
        let requests = dir.path().join("request.dat");
        fs::write(&catalog, b"111,en,new\n222,fran\xe7ais,used\n").unwrap();
        fs::write(&requests, "111,en,new\n").unwrap();

        let (catalog, requests) =
            load_collections(&catalog, &requests, &RecordParser::default()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog[1].category(), "used");
        assert_eq!(requests, vec![Book::new("111", "en", "new")]);
    }

    #[test]
    fn test_load_collections() {
        let dir = tempdir().unwrap();
        let catalog = dir.path().join("newBooks.dat");
        let requests = dir.path().join("request.dat");
        fs::write(&catalog, "111,en,new\n222,fr,used\n").unwrap();
        fs::write(&requests, "222,fr,used\n").unwrap();

        let (catalog, requests) =
            load_collections(&catalog, &requests, &RecordParser::default()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(requests, vec![Book::new("222", "fr", "used")]);
    }

    #[test]
    fn test_load_collections_missing_file() {
        let dir = tempdir().unwrap();
        let catalog = dir.path().join("newBooks.dat");
        let requests = dir.path().join("missing.dat");
        fs::write(&catalog, "111,en,new\n").unwrap();

        let err = load_collections(&catalog, &requests, &RecordParser::default()).unwrap_err();
        match err {
            SearchError::Load {
                catalog: c,
                requests: r,
                source,
            } => {
                assert_eq!(c, catalog);
                assert_eq!(r, requests);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
