use serde::{Serialize, Deserialize};

use std::fmt;
use std::ops::Index;


/// Ordered attribute names taken from the header row,
/// plus the name of the label column.
///
/// The schema is stored next to the counts table, never inside it,
/// so it cannot accumulate counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    attributes: Vec<String>,
    target: String,
}


impl Schema {
    /// Construct a new instance of `Schema`.
    pub fn new<I, S, T>(attributes: I, target: T) -> Self
        where I: IntoIterator<Item = S>,
              S: Into<String>,
              T: Into<String>,
    {
        let attributes = attributes.into_iter()
            .map(Into::into)
            .collect();
        Self { attributes, target: target.into() }
    }


    /// Attribute names in column order.
    #[inline]
    pub fn attributes(&self) -> &[String] {
        &self.attributes[..]
    }


    /// Name of the label column.
    #[inline]
    pub fn target(&self) -> &str {
        &self.target
    }


    /// Number of attributes (the label column is not counted).
    #[inline]
    pub fn len(&self) -> usize {
        self.attributes.len()
    }


    /// Returns `true` if the schema has no attribute.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }


    /// Column count of a raw data row, label included.
    #[inline]
    pub fn n_columns(&self) -> usize {
        self.attributes.len() + 1
    }


    /// Resolve an attribute name to its column in a [`SampleKey`].
    #[inline]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.attributes.iter().position(|attr| attr == name)
    }
}


impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.attributes.join(" "), self.target)
    }
}


/// The attribute values of one raw row, in column order.
/// Immutable once built; used as a lookup key in the counts table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SampleKey(Box<[String]>);


impl SampleKey {
    /// Value at column `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }


    /// Number of attribute values.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }


    /// Returns `true` if the key holds no value.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}


impl<S> FromIterator<S> for SampleKey
    where S: Into<String>
{
    fn from_iter<I>(iter: I) -> Self
        where I: IntoIterator<Item = S>
    {
        let values = iter.into_iter()
            .map(Into::into)
            .collect::<Vec<String>>();
        Self(values.into_boxed_slice())
    }
}


impl From<Vec<String>> for SampleKey {
    #[inline]
    fn from(values: Vec<String>) -> Self {
        Self(values.into_boxed_slice())
    }
}


impl Index<usize> for SampleKey {
    type Output = str;
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}


impl fmt::Display for SampleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(" "))
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_attribute_columns() {
        let schema = Schema::new(["outlook", "wind"], "play");
        assert_eq!(schema.index_of("outlook"), Some(0));
        assert_eq!(schema.index_of("wind"), Some(1));
        assert_eq!(schema.index_of("play"), None);
        assert_eq!(schema.n_columns(), 3);
        assert_eq!(schema.to_string(), "outlook wind play");
        assert!(!schema.is_empty());

        let label_only = Schema::new(Vec::<String>::new(), "play");
        assert!(label_only.is_empty());
        assert_eq!(label_only.n_columns(), 1);
    }


    #[test]
    fn sample_keys_compare_by_value() {
        let a = ["sunny", "weak"].into_iter().collect::<SampleKey>();
        let b = SampleKey::from(vec!["sunny".to_string(), "weak".to_string()]);
        assert_eq!(a, b);
        assert_eq!(a.get(1), Some("weak"));
        assert_eq!(a.get(2), None);
        assert_eq!(&a[0], "sunny");
        assert_eq!(a.len(), 2);
        assert!(!a.is_empty());
        assert!(Vec::<String>::new().into_iter().collect::<SampleKey>().is_empty());
    }
}
