use std::collections::HashMap;

use crate::tokenize::tokenize;

pub type Count = u64;

/// Case-insensitive word occurrence counts for one input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FrequencyMap {
    counts: HashMap<String, Count>,
    total: Count,
}

impl FrequencyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lower-cases `word` and bumps its count. Empty words are ignored.
    pub fn add_word(&mut self, word: &str) {
        if word.is_empty() {
            return;
        }
        *self.counts.entry(word.to_lowercase()).or_insert(0) += 1;
        self.total += 1;
    }

    /// Counts every word token of a single line.
    pub fn add_line(&mut self, line: &str) {
        for token in tokenize(line).filter(|t| t.is_word()) {
            self.add_word(token.text);
        }
    }

    pub fn get(&self, word: &str) -> Option<Count> {
        self.counts.get(word).copied()
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of word tokens counted, i.e. the sum of all counts.
    pub fn total(&self) -> Count {
        self.total
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Count)> {
        self.counts.iter().map(|(word, count)| (word.as_str(), *count))
    }

    pub fn into_entries(self) -> Vec<(String, Count)> {
        self.counts.into_iter().collect()
    }
}

/// Builds the frequency map of `text`, scanning each line on its own.
pub fn count_words(text: &str) -> FrequencyMap {
    let mut map = FrequencyMap::new();
    for line in text.lines() {
        map.add_line(line);
    }
    map
}
