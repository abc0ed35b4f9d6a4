use serde::{Serialize, Deserialize};

use std::fmt;
use std::ops;
use std::str::FromStr;


/// The binary outcome attached to every sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    /// Positive outcome, written as `yes`.
    Yes,
    /// Negative outcome, written as `no`.
    No,
}


impl Label {
    /// Returns the token used for this label in the input file.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
        }
    }
}


impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}


impl FromStr for Label {
    type Err = String;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "yes" => Ok(Self::Yes),
            "no" => Ok(Self::No),
            _ => Err(token.to_string()),
        }
    }
}


/// Number of raw rows sharing one sample key, split by outcome.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize
)]
pub struct LabelCounts {
    /// Rows labelled `yes`.
    pub yes: usize,
    /// Rows labelled `no`.
    pub no: usize,
}


impl LabelCounts {
    /// Construct a new instance of `LabelCounts`.
    #[inline]
    pub fn new(yes: usize, no: usize) -> Self {
        Self { yes, no }
    }


    /// Total number of rows.
    #[inline]
    pub fn total(&self) -> usize {
        self.yes + self.no
    }


    /// Returns `true` if no row is recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }


    /// Number of rows with the given label.
    #[inline]
    pub fn get(&self, label: Label) -> usize {
        match label {
            Label::Yes => self.yes,
            Label::No => self.no,
        }
    }


    /// Fraction of `yes` rows.
    /// An empty counter has fraction `0`.
    #[inline]
    pub fn yes_fraction(&self) -> f64 {
        let total = self.total();
        if total == 0 { return 0f64; }
        self.yes as f64 / total as f64
    }


    /// Record one more row with `label`.
    #[inline]
    pub fn increment(&mut self, label: Label) {
        match label {
            Label::Yes => self.yes += 1,
            Label::No => self.no += 1,
        }
    }


    /// Remove one row with `label`.
    /// Returns `false` (and changes nothing) if there is no such row.
    #[inline]
    pub fn decrement(&mut self, label: Label) -> bool {
        let count = match label {
            Label::Yes => &mut self.yes,
            Label::No => &mut self.no,
        };
        if *count == 0 { return false; }
        *count -= 1;
        true
    }


    /// Returns `Some(label)` if every recorded row has that label.
    /// An empty counter has no single outcome.
    #[inline]
    pub fn single_outcome(&self) -> Option<Label> {
        match (self.yes, self.no) {
            (0, 0) => None,
            (_, 0) => Some(Label::Yes),
            (0, _) => Some(Label::No),
            _ => None,
        }
    }


    /// The majority label. Ties go to `no`.
    #[inline]
    pub fn plurality(&self) -> Label {
        if self.yes > self.no { Label::Yes } else { Label::No }
    }
}


impl ops::Add<Self> for LabelCounts {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.yes + rhs.yes, self.no + rhs.no)
    }
}


impl ops::AddAssign<Self> for LabelCounts {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.yes += rhs.yes;
        self.no += rhs.no;
    }
}


impl fmt::Display for LabelCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.yes, self.no)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_label_tokens() {
        assert_eq!("yes".parse::<Label>(), Ok(Label::Yes));
        assert_eq!("no".parse::<Label>(), Ok(Label::No));
        assert!("Yes".parse::<Label>().is_err());
        assert!("maybe".parse::<Label>().is_err());
    }


    #[test]
    fn decrement_stops_at_zero() {
        let mut counts = LabelCounts::new(1, 0);
        assert!(counts.decrement(Label::Yes));
        assert!(!counts.decrement(Label::Yes));
        assert!(!counts.decrement(Label::No));
        assert!(counts.is_empty());
    }


    #[test]
    fn plurality_ties_resolve_to_no() {
        assert_eq!(LabelCounts::new(2, 2).plurality(), Label::No);
        assert_eq!(LabelCounts::new(0, 0).plurality(), Label::No);
        assert_eq!(LabelCounts::new(3, 2).plurality(), Label::Yes);
        assert_eq!(LabelCounts::new(1, 4).plurality(), Label::No);
    }


    #[test]
    fn single_outcome_needs_one_nonzero_side() {
        assert_eq!(LabelCounts::new(4, 0).single_outcome(), Some(Label::Yes));
        assert_eq!(LabelCounts::new(0, 2).single_outcome(), Some(Label::No));
        assert_eq!(LabelCounts::new(1, 1).single_outcome(), None);
        assert_eq!(LabelCounts::new(0, 0).single_outcome(), None);
    }
}
