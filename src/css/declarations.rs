//! Ordered CSS declaration list and assembly into declaration-list syntax.

/// An ordered mapping from CSS property names to values.
///
/// An empty value means "omit this property": producers may record every
/// property they know about and leave suppression to
/// [`assemble`](Declarations::assemble), which filters empty values out.
/// Inserting a property that is already present overwrites its value in
/// place without changing its position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Declarations {
    entries: Vec<(&'static str, String)>,
}

impl Declarations {
    /// Create an empty declaration list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a property, overwriting the value of an existing entry with
    /// the same name.
    pub fn insert(&mut self, property: &'static str, value: impl Into<String>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(name, _)| *name == property) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((property, value)),
        }
    }

    /// Append all entries of `other`, preserving their order.
    pub fn extend(&mut self, other: Declarations) {
        for (property, value) in other.entries {
            self.insert(property, value);
        }
    }

    /// Look up the recorded value for a property.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| *name == property)
            .map(|(_, value)| value.as_str())
    }

    /// Iterate the entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.entries
            .iter()
            .map(|(name, value)| (*name, value.as_str()))
    }

    /// Number of recorded entries, including ones with empty values.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize into CSS declaration-list syntax.
    ///
    /// Entries with empty values are skipped; the survivors are joined
    /// with `"; "` and terminated with a single `;`. An all-empty list
    /// yields the empty string.
    pub fn assemble(&self) -> String {
        let mut out = String::new();
        for (property, value) in &self.entries {
            if value.is_empty() {
                continue;
            }
            if !out.is_empty() {
                out.push_str("; ");
            }
            out.push_str(property);
            out.push_str(": ");
            out.push_str(value);
        }
        if !out.is_empty() {
            out.push(';');
        }
        out
    }
}
