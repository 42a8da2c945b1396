//! Objective templates handed to the host randomizer.
use serde::Serialize;
use std::collections::BTreeMap;

/// Binding from a placeholder token to a dataset and how many items to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DataBinding<D> {
    pub dataset: D,
    pub count: usize,
}

impl<D> DataBinding<D> {
    pub const fn new(dataset: D, count: usize) -> Self {
        Self { dataset, count }
    }
}

/// A parameterized goal. Placeholder tokens in `label` are uppercase words
/// that appear as keys in `data`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ObjectiveTemplate<D> {
    pub label: String,
    pub data: BTreeMap<String, DataBinding<D>>,
    pub is_time_consuming: bool,
    pub is_difficult: bool,
    pub weight: u32,
}

impl<D> ObjectiveTemplate<D> {
    #[must_use]
    pub fn new(label: impl Into<String>, weight: u32) -> Self {
        Self {
            label: label.into(),
            data: BTreeMap::new(),
            is_time_consuming: false,
            is_difficult: false,
            weight,
        }
    }

    #[must_use]
    pub fn bind(mut self, placeholder: impl Into<String>, dataset: D, count: usize) -> Self {
        self.data
            .insert(placeholder.into(), DataBinding::new(dataset, count));
        self
    }

    #[must_use]
    pub const fn time_consuming(mut self, is_time_consuming: bool) -> Self {
        self.is_time_consuming = is_time_consuming;
        self
    }

    #[must_use]
    pub const fn difficult(mut self, is_difficult: bool) -> Self {
        self.is_difficult = is_difficult;
        self
    }

    /// Bound placeholders ordered by where they first appear in the label.
    #[must_use]
    pub fn placeholders(&self) -> Vec<&str> {
        let mut found: Vec<(usize, &str)> = self
            .data
            .keys()
            .filter_map(|token| self.label.find(token.as_str()).map(|pos| (pos, token.as_str())))
            .collect();
        found.sort_unstable();
        found.into_iter().map(|(_, token)| token).collect()
    }

    /// Substitute placeholder tokens with drawn values. Multiple values for
    /// one token are joined with ", ". Tokens without values stay as-is.
    #[must_use]
    pub fn render<S: AsRef<str>>(&self, values: &BTreeMap<&str, Vec<S>>) -> String {
        // Longest tokens first so a token that prefixes another is not
        // replaced inside it.
        let mut tokens: Vec<&str> = self.data.keys().map(String::as_str).collect();
        tokens.sort_by_key(|token| std::cmp::Reverse(token.len()));

        let mut rendered = self.label.clone();
        for token in tokens {
            if let Some(drawn) = values.get(token) {
                let joined = drawn
                    .iter()
                    .map(AsRef::as_ref)
                    .collect::<Vec<_>>()
                    .join(", ");
                rendered = rendered.replace(token, &joined);
            }
        }
        rendered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
    enum Fixture {
        Heist,
        Difficulty,
    }

    fn template() -> ObjectiveTemplate<Fixture> {
        ObjectiveTemplate::new("Beat HEIST on DIFFICULTY", 4)
            .bind("DIFFICULTY", Fixture::Difficulty, 1)
            .bind("HEIST", Fixture::Heist, 2)
    }

    #[test]
    fn builder_defaults_flags_off() {
        let t = template();
        assert!(!t.is_time_consuming);
        assert!(!t.is_difficult);
        assert_eq!(t.weight, 4);
        assert_eq!(t.data["HEIST"], DataBinding::new(Fixture::Heist, 2));
        let flagged = t.time_consuming(true).difficult(true);
        assert!(flagged.is_time_consuming && flagged.is_difficult);
    }

    #[test]
    fn placeholders_follow_label_order() {
        assert_eq!(template().placeholders(), vec!["HEIST", "DIFFICULTY"]);
    }

    #[test]
    fn render_substitutes_values() {
        let mut values = BTreeMap::new();
        values.insert("HEIST", vec!["Road Rage", "Cook Off"]);
        values.insert("DIFFICULTY", vec!["Hard"]);
        assert_eq!(template().render(&values), "Beat Road Rage, Cook Off on Hard");
    }

    #[test]
    fn render_leaves_missing_tokens() {
        let values: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
        assert_eq!(template().render(&values), "Beat HEIST on DIFFICULTY");
    }
}
