//! Id -> display name index for resolving foreign keys in tables.

use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NameIndex {
    names: HashMap<String, String>,
}

impl NameIndex {
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: ToString,
        V: Into<String>,
    {
        Self {
            names: pairs
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.into()))
                .collect(),
        }
    }

    /// Resolved name, or the key itself when the referenced record is unknown.
    pub fn name_of(&self, key: &str) -> String {
        self.names
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.names.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolves_and_falls_back() {
        let index = NameIndex::from_pairs(vec![(1, "Assets"), (2, "Liabilities")]);
        assert_eq!(index.name_of("2"), "Liabilities");
        assert_eq!(index.name_of("9"), "9");
        assert_eq!(index.get("9"), None);
        assert_eq!(index.len(), 2);
    }
}
