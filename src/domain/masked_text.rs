use std::collections::BTreeMap;

/// Positional placeholder tokens (`[NUM_0]`, `[NUM_1]`, ...) mapped back to the
/// numeric substrings they replaced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceholderMap {
    values: BTreeMap<usize, String>,
}

impl PlaceholderMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn token(position: usize) -> String {
        format!("[NUM_{position}]")
    }

    /// Records `value` at the next position and returns its token.
    pub fn push(&mut self, value: String) -> String {
        let position = self.values.len();
        self.values.insert(position, value);
        Self::token(position)
    }

    pub fn get(&self, position: usize) -> Option<&str> {
        self.values.get(&position).map(String::as_str)
    }

    /// Resolves a full token such as `[NUM_3]`. Tokens that are not in the exact
    /// canonical form (`[NUM_03]`) never resolve.
    pub fn resolve(&self, token: &str) -> Option<&str> {
        let position: usize = token
            .strip_prefix("[NUM_")?
            .strip_suffix(']')?
            .parse()
            .ok()?;
        if Self::token(position) != token {
            return None;
        }
        self.get(position)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (String, &str)> {
        self.values
            .iter()
            .map(|(position, value)| (Self::token(*position), value.as_str()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskedText {
    pub masked: String,
    pub placeholders: PlaceholderMap,
}
