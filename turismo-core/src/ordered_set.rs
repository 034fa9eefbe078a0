//! Insertion-ordered, deduplicated string sets.
//!
//! Templates keep their tags and acceptance lists in the order they were
//! declared so output stays stable, while scoring only ever asks about
//! membership.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A list of strings with set semantics and first-seen ordering.
///
/// # Examples
/// ```
/// use turismo_core::OrderedSet;
///
/// let set: OrderedSet = ["naturaleza", "aventura", "naturaleza"].into_iter().collect();
/// assert_eq!(set.as_slice(), ["naturaleza", "aventura"]);
/// assert!(set.contains("aventura"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(from = "Vec<String>", into = "Vec<String>")
)]
pub struct OrderedSet {
    items: Vec<String>,
}

impl OrderedSet {
    /// Construct an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Append `value` unless it is already present.
    ///
    /// Returns `true` when the value was inserted.
    pub fn insert(&mut self, value: impl Into<String>) -> bool {
        let candidate = value.into();
        if self.contains(&candidate) {
            return false;
        }
        self.items.push(candidate);
        true
    }

    /// Report whether `value` is a member.
    #[must_use]
    pub fn contains(&self, value: &str) -> bool {
        self.items.iter().any(|item| item == value)
    }

    /// Count the members shared with `other`.
    ///
    /// # Examples
    /// ```
    /// use turismo_core::OrderedSet;
    ///
    /// let tags: OrderedSet = ["aventura", "naturaleza"].into_iter().collect();
    /// let interests: OrderedSet = ["naturaleza", "cultura"].into_iter().collect();
    /// assert_eq!(tags.overlap(&interests), 1);
    /// ```
    #[must_use]
    pub fn overlap(&self, other: &Self) -> usize {
        self.items.iter().filter(|item| other.contains(item)).count()
    }

    /// Return the members in lexicographic order.
    #[must_use]
    pub fn into_sorted(mut self) -> Self {
        self.items.sort_unstable();
        self
    }

    /// Number of members.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Report whether the set has no members.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Borrow the members in order.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    /// Iterate over the members in order.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.items.iter()
    }
}

impl<S: Into<String>> FromIterator<S> for OrderedSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<S: Into<String>> Extend<S> for OrderedSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl From<Vec<String>> for OrderedSet {
    fn from(values: Vec<String>) -> Self {
        values.into_iter().collect()
    }
}

impl From<OrderedSet> for Vec<String> {
    fn from(set: OrderedSet) -> Self {
        set.items
    }
}

impl<'a> IntoIterator for &'a OrderedSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn insert_skips_duplicates() {
        let mut set = OrderedSet::new();
        assert!(set.insert("manana"));
        assert!(set.insert("tarde"));
        assert!(!set.insert("manana"));
        assert_eq!(set.as_slice(), ["manana", "tarde"]);
    }

    #[rstest]
    fn sorting_is_lexicographic() {
        let set: OrderedSet = ["panorama", "fotografia", "naturaleza"]
            .into_iter()
            .collect();
        assert_eq!(
            set.into_sorted().as_slice(),
            ["fotografia", "naturaleza", "panorama"]
        );
    }

    #[rstest]
    #[case(&["a", "b"], &["b", "c"], 1)]
    #[case(&["a", "b"], &["c"], 0)]
    #[case(&["a", "b"], &["a", "b"], 2)]
    #[case(&[] as &[&str], &["a"], 0)]
    fn overlap_counts_shared_members(
        #[case] left: &[&str],
        #[case] right: &[&str],
        #[case] expected: usize,
    ) {
        let lhs: OrderedSet = left.iter().copied().collect();
        let rhs: OrderedSet = right.iter().copied().collect();
        assert_eq!(lhs.overlap(&rhs), expected);
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn deserialising_deduplicates() {
        let set: OrderedSet =
            serde_json::from_str(r#"["cultura","cultura","bienestar"]"#).expect("decode set");
        assert_eq!(set.as_slice(), ["cultura", "bienestar"]);
        let encoded = serde_json::to_string(&set).expect("encode set");
        assert_eq!(encoded, r#"["cultura","bienestar"]"#);
    }
}
