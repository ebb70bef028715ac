//! Append-only battle history.

/// Ordered narrative record of an encounter.
///
/// Entries are only ever appended. Insertion order is the narrative order and
/// is persisted verbatim.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct EventLog {
    entries: Vec<String>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one rendered entry.
    pub fn push(&mut self, entry: impl Into<String>) {
        self.entries.push(entry.into());
    }

    /// Iterates entries in insertion order. Can be called any number of times.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.entries
    }
}

impl From<Vec<String>> for EventLog {
    fn from(entries: Vec<String>) -> Self {
        Self { entries }
    }
}

impl<S: Into<String>> FromIterator<S> for EventLog {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a EventLog {
    type Item = &'a str;
    type IntoIter = core::iter::Map<core::slice::Iter<'a, String>, fn(&String) -> &str>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries
            .iter()
            .map(String::as_str as fn(&String) -> &str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_insertion_order_and_duplicates() {
        let mut log = EventLog::new();
        log.push("b");
        log.push("a");
        log.push("b");

        assert_eq!(log.iter().collect::<Vec<_>>(), vec!["b", "a", "b"]);
        assert_eq!(log.len(), 3);
        assert_eq!(log.last(), Some("b"));
    }

    #[test]
    fn iteration_is_restartable() {
        let log: EventLog = ["first", "second"].into_iter().collect();

        let once: Vec<&str> = log.iter().collect();
        let twice: Vec<&str> = (&log).into_iter().collect();
        assert_eq!(once, twice);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_as_plain_array() {
        let log = EventLog::from(vec!["x".to_string(), "y".to_string()]);
        assert_eq!(serde_json::to_string(&log).unwrap(), r#"["x","y"]"#);
    }
}
