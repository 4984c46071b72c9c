//! Whitespace-delimited key/value record reader.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::marker::PhantomData;
use std::path::Path;
use std::str::FromStr;

use tracing::debug;

use crate::common::{Error, Result};
use crate::index::btree::BTree;

/// Reads `(key, value)` records from text, one per line.
///
/// # Format
/// ```text
/// 42   apple
/// 7    banana    extra columns are ignored
///
/// 19   cherry
/// ```
/// - Fields are separated by any run of whitespace
/// - Field 0 is the key, field 1 the value
/// - Blank lines are skipped
///
/// A line with fewer than two fields, or a field that fails to parse,
/// yields `Error::Parse` with the 1-based line number. Iteration may
/// continue past a bad line.
pub struct RecordReader<R, K, V> {
    reader: R,
    line_no: usize,
    buf: String,
    _marker: PhantomData<fn() -> (K, V)>,
}

impl<K, V> RecordReader<BufReader<File>, K, V> {
    /// Open a record file.
    ///
    /// # Errors
    /// Returns `Error::Io` if the file cannot be opened.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(&path)?;
        debug!(path = %path.as_ref().display(), "opened record file");
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead, K, V> RecordReader<R, K, V> {
    /// Read records from any buffered reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_no: 0,
            buf: String::new(),
            _marker: PhantomData,
        }
    }

    /// Number of lines consumed so far.
    pub fn line_no(&self) -> usize {
        self.line_no
    }
}

impl<R, K, V> RecordReader<R, K, V>
where
    K: FromStr,
    V: FromStr,
    K::Err: std::fmt::Display,
    V::Err: std::fmt::Display,
{
    fn parse_line(line: &str, line_no: usize) -> Result<(K, V)> {
        let parse_error = |message: String| Error::Parse {
            line: line_no,
            message,
        };

        let mut fields = line.split_whitespace();
        let (key, value) = match (fields.next(), fields.next()) {
            (Some(key), Some(value)) => (key, value),
            _ => return Err(parse_error("expected a key and a value".to_string())),
        };

        let key = key
            .parse()
            .map_err(|e: K::Err| parse_error(format!("invalid key {:?}: {}", key, e)))?;
        let value = value
            .parse()
            .map_err(|e: V::Err| parse_error(format!("invalid value {:?}: {}", value, e)))?;

        Ok((key, value))
    }
}

impl<R, K, V> Iterator for RecordReader<R, K, V>
where
    R: BufRead,
    K: FromStr,
    V: FromStr,
    K::Err: std::fmt::Display,
    V::Err: std::fmt::Display,
{
    type Item = Result<(K, V)>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.buf.clear();
            match self.reader.read_line(&mut self.buf) {
                Ok(0) => return None,
                Ok(_) => self.line_no += 1,
                Err(e) => return Some(Err(e.into())),
            }

            if self.buf.trim().is_empty() {
                continue;
            }
            return Some(Self::parse_line(&self.buf, self.line_no));
        }
    }
}

/// Insert every record into `tree`, in order.
///
/// Later records overwrite earlier ones with the same key. Stops at the
/// first error.
///
/// # Returns
/// The number of records inserted.
pub fn load_into<K, V, I>(tree: &mut BTree<K, V>, records: I) -> Result<usize>
where
    K: Ord,
    I: IntoIterator<Item = Result<(K, V)>>,
{
    let mut count = 0;
    for record in records {
        let (key, value) = record?;
        tree.insert(key, value);
        count += 1;
    }

    debug!(records = count, entries = tree.len(), "loaded records into tree");
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn read_all(input: &str) -> Vec<Result<(i64, String)>> {
        RecordReader::new(Cursor::new(input)).collect()
    }

    #[test]
    fn test_parse_records() {
        let records = read_all("1 one\n2\ttwo\n  3    three  \n");
        let records: Vec<_> = records.into_iter().map(|r| r.unwrap()).collect();

        assert_eq!(
            records,
            vec![
                (1, "one".to_string()),
                (2, "two".to_string()),
                (3, "three".to_string()),
            ]
        );
    }

    #[test]
    fn test_skips_blank_lines() {
        let mut reader = RecordReader::<_, i64, String>::new(Cursor::new("\n1 a\n\n   \n2 b"));

        assert_eq!(reader.next().unwrap().unwrap(), (1, "a".to_string()));
        assert_eq!(reader.next().unwrap().unwrap(), (2, "b".to_string()));
        assert!(reader.next().is_none());
        assert_eq!(reader.line_no(), 5);
    }

    #[test]
    fn test_ignores_extra_columns() {
        let records = read_all("5 five 55 fifty-five\n");
        assert_eq!(records[0].as_ref().unwrap(), &(5, "five".to_string()));
    }

    #[test]
    fn test_missing_value() {
        let records = read_all("1 one\n2\n");

        assert!(records[0].is_ok());
        match &records[1] {
            Err(Error::Parse { line, .. }) => assert_eq!(*line, 2),
            other => panic!("Expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_key() {
        let records = read_all("abc one\n");
        match &records[0] {
            Err(Error::Parse { line, message }) => {
                assert_eq!(*line, 1);
                assert!(message.contains("invalid key"));
            }
            other => panic!("Expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_into() {
        let mut tree = BTree::with_maximum(3).unwrap();
        let reader = RecordReader::new(Cursor::new("3 c\n1 a\n2 b\n1 z\n"));

        let count = load_into(&mut tree, reader).unwrap();

        assert_eq!(count, 4);
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.get(&1), Some(&"z".to_string()));
    }

    #[test]
    fn test_load_into_stops_at_error() {
        let mut tree: BTree<i64, String> = BTree::new();
        let reader = RecordReader::new(Cursor::new("1 a\nbad\n3 c\n"));

        assert!(load_into(&mut tree, reader).is_err());
        assert_eq!(tree.len(), 1);
    }
}
