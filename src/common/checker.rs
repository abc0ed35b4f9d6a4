//! This file defines some functions that checks some pre-conditions
//! on the raw rows, e.g., the number of columns.

use crate::errors::{Id3Error, Result};
use crate::sample::{Label, Schema};

use std::collections::HashSet;


/// Check the header row and build the [`Schema`] from it.
/// The last token names the label column.
pub(crate) fn header<S>(tokens: &[S]) -> Result<Schema>
    where S: AsRef<str>
{
    let Some((target, attributes)) = tokens.split_last() else {
        return Err(Id3Error::EmptyDataset);
    };

    let mut seen = HashSet::new();
    for name in attributes {
        let name = name.as_ref();
        if !seen.insert(name) {
            let name = name.to_string();
            return Err(Id3Error::DuplicateAttribute { name });
        }
    }

    let attributes = attributes.iter().map(|name| name.as_ref());
    Ok(Schema::new(attributes, target.as_ref()))
}


/// Check that a data row has as many columns as the header
/// and ends with a valid label. Returns that label.
/// `row` is the 1-based line of the row in the input.
pub(crate) fn row<S>(row: usize, tokens: &[S], schema: &Schema)
    -> Result<Label>
    where S: AsRef<str>
{
    let expected = schema.n_columns();
    let found = tokens.len();
    if found != expected {
        return Err(Id3Error::SchemaMismatch { row, expected, found });
    }

    let token = tokens[found - 1].as_ref();
    token.parse::<Label>()
        .map_err(|label| Id3Error::InvalidLabel { row, label })
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_splits_off_the_label_column() {
        let schema = header(&["outlook", "wind", "play"]).unwrap();
        assert_eq!(schema.attributes(), &["outlook", "wind"]);
        assert_eq!(schema.target(), "play");
    }


    #[test]
    fn header_rejects_repeated_names() {
        let err = header(&["wind", "wind", "play"]).unwrap_err();
        assert!(matches!(err, Id3Error::DuplicateAttribute { name } if name == "wind"));
    }


    #[test]
    fn empty_header_is_an_empty_dataset() {
        let tokens: [&str; 0] = [];
        assert!(matches!(header(&tokens), Err(Id3Error::EmptyDataset)));
    }


    #[test]
    fn row_checks_column_count() {
        let schema = Schema::new(["outlook"], "play");
        assert_eq!(row(1, &["sunny", "yes"], &schema).unwrap(), Label::Yes);

        let err = row(2, &["sunny", "weak", "no"], &schema).unwrap_err();
        assert!(matches!(
            err,
            Id3Error::SchemaMismatch { row: 2, expected: 2, found: 3 }
        ));
    }


    #[test]
    fn row_checks_label_token() {
        let schema = Schema::new(["outlook"], "play");
        let err = row(4, &["sunny", "maybe"], &schema).unwrap_err();
        assert!(matches!(
            err,
            Id3Error::InvalidLabel { row: 4, label } if label == "maybe"
        ));
    }
}
