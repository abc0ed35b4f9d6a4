use std::path::{Path, PathBuf};
use std::fs::File;
use std::io::{BufRead, BufReader};

use tracing::debug;

use crate::common::checker;
use crate::errors::{Id3Error, Result};
use super::dataset::Dataset;
use super::schema::SampleKey;


/// A struct that returns [`Dataset`].
/// The input is whitespace separated tokens, one row per line.
/// The first line is the header: the attribute names followed by
/// the name of the label column.
/// Every other line holds the attribute values followed by
/// `yes` or `no`. Blank lines are skipped.
///
/// # Example
/// ```no_run
/// use id3boosts::prelude::*;
///
/// let dataset = SampleReader::new()
///     .file("/path/to/data.txt")
///     .read()
///     .unwrap();
/// println!("{dataset}");
/// ```
#[derive(Debug, Default)]
pub struct SampleReader {
    file: Option<PathBuf>,
}


impl SampleReader {
    /// Construct a new instance of [`SampleReader`].
    pub fn new() -> Self {
        Self { file: None }
    }


    /// Set the file name.
    pub fn file<P>(mut self, file: P) -> Self
        where P: AsRef<Path>
    {
        self.file = Some(file.as_ref().to_path_buf());
        self
    }


    /// Reads the file and aggregates its rows.
    /// This method consumes `self.`
    ///
    /// Returns [`Id3Error::FileAccess`] if the file is not set
    /// or cannot be opened.
    pub fn read(self) -> Result<Dataset> {
        let Some(file) = self.file else {
            let source = std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "the file name is not set",
            );
            let path = PathBuf::new();
            return Err(Id3Error::FileAccess { path, source });
        };
        let path = file.as_path();

        let handle = File::open(path)
            .map_err(|source| {
                let path = path.to_path_buf();
                Id3Error::FileAccess { path, source }
            })?;
        debug!(path = %path.display(), "reading samples");

        Self::from_reader(BufReader::new(handle))
    }


    /// Tokenize every non-blank line of `reader` and aggregate the rows.
    /// Errors name the line of `reader` they occur on,
    /// blank lines included.
    pub fn from_reader<R>(reader: R) -> Result<Dataset>
        where R: BufRead
    {
        let mut lines = Vec::new();
        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            let tokens = line.split_whitespace()
                .map(str::to_string)
                .collect::<Vec<_>>();
            if tokens.is_empty() { continue; }
            lines.push((i + 1, tokens));
        }
        Self::ingest_lines(lines)
    }


    /// Aggregate already tokenized rows into a [`Dataset`].
    /// The first row is the header.
    ///
    /// Every data row must have the header's column count and end with
    /// `yes` or `no`; the first row breaking this rule is reported.
    /// Rows are numbered from 1, the header being row 1.
    pub fn ingest<I, R, S>(rows: I) -> Result<Dataset>
        where I: IntoIterator<Item = R>,
              R: AsRef<[S]>,
              S: AsRef<str>,
    {
        let lines = rows.into_iter()
            .enumerate()
            .map(|(i, tokens)| (i + 1, tokens));
        Self::ingest_lines(lines)
    }


    /// Aggregate `(line number, tokens)` pairs.
    /// The first pair is the header.
    fn ingest_lines<I, R, S>(lines: I) -> Result<Dataset>
        where I: IntoIterator<Item = (usize, R)>,
              R: AsRef<[S]>,
              S: AsRef<str>,
    {
        let mut lines = lines.into_iter();
        let (_, header) = lines.next().ok_or(Id3Error::EmptyDataset)?;
        let schema = checker::header(header.as_ref())?;

        let mut dataset = Dataset::new(schema);
        let mut n_rows = 0_usize;
        for (line, tokens) in lines {
            let tokens = tokens.as_ref();
            let label = checker::row(line, tokens, dataset.schema())?;

            let key = tokens[..tokens.len() - 1].iter()
                .map(|token| token.as_ref())
                .collect::<SampleKey>();
            dataset.record(key, label)?;
            n_rows += 1;
        }

        if n_rows == 0 {
            return Err(Id3Error::EmptyDataset);
        }

        debug!(
            rows = n_rows,
            keys = dataset.len(),
            attributes = dataset.schema().len(),
            "aggregated samples"
        );
        Ok(dataset)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::LabelCounts;

    #[test]
    fn ingest_counts_rows_per_key() {
        let rows = vec![
            vec!["weather", "outcome"],
            vec!["sunny", "yes"],
            vec!["rainy", "no"],
            vec!["sunny", "yes"],
        ];
        let dataset = SampleReader::ingest(rows).unwrap();
        assert_eq!(dataset.schema().attributes(), &["weather"]);
        assert_eq!(dataset.schema().target(), "outcome");
        assert_eq!(dataset.n_rows(), 3);

        let sunny = ["sunny"].into_iter().collect::<SampleKey>();
        assert_eq!(dataset.counts(&sunny), Some(LabelCounts::new(2, 0)));
    }


    #[test]
    fn ingest_rejects_short_rows() {
        let rows = vec![
            vec!["sky", "wind", "play"],
            vec!["sunny", "weak", "yes"],
            vec!["sunny", "no"],
        ];
        let err = SampleReader::ingest(rows).unwrap_err();
        assert!(matches!(
            err,
            Id3Error::SchemaMismatch { row: 3, expected: 3, found: 2 }
        ));
    }


    #[test]
    fn header_only_input_is_empty() {
        let rows = vec![vec!["sky", "play"]];
        let err = SampleReader::ingest(rows).unwrap_err();
        assert!(matches!(err, Id3Error::EmptyDataset));

        let none: Vec<Vec<&str>> = Vec::new();
        let err = SampleReader::ingest(none).unwrap_err();
        assert!(matches!(err, Id3Error::EmptyDataset));
    }


    #[test]
    fn from_reader_skips_blank_lines() {
        let text = "sky play\n\nsunny yes\n   \nrainy no\n";
        let dataset = SampleReader::from_reader(text.as_bytes()).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.n_rows(), 2);
    }


    #[test]
    fn errors_name_the_input_line() {
        let text = "sky play\n\nsunny yes\n\n\nrainy maybe\n";
        let err = SampleReader::from_reader(text.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            Id3Error::InvalidLabel { row: 6, label } if label == "maybe"
        ));

        let text = "sky wind play\n\nsunny weak yes\n\nrainy no\n";
        let err = SampleReader::from_reader(text.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            Id3Error::SchemaMismatch { row: 5, expected: 3, found: 2 }
        ));
    }


    #[test]
    fn missing_file_is_a_file_access_error() {
        let err = SampleReader::new()
            .file("this/file/does/not/exist.txt")
            .read()
            .unwrap_err();
        assert!(matches!(err, Id3Error::FileAccess { .. }));
    }
}
