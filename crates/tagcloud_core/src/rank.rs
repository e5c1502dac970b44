use std::cmp::Ordering;

use crate::count::{Count, FrequencyMap};

/// How words with equal counts are ordered before the top-N cut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TieBreak {
    /// Greater word first: "sat" beats "on" for the last slot.
    #[default]
    ReverseAlphabetical,
    /// Smaller word first.
    Alphabetical,
}

/// Ranking order: descending count, then by `tie_break` on the word.
pub fn rank_order(a: (&str, Count), b: (&str, Count), tie_break: TieBreak) -> Ordering {
    b.1.cmp(&a.1).then_with(|| match tie_break {
        TieBreak::ReverseAlphabetical => b.0.cmp(a.0),
        TieBreak::Alphabetical => a.0.cmp(b.0),
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedWord {
    pub word: String,
    pub count: Count,
}

/// The top-N words, held in ascending alphabetical order for display.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RankedSelection {
    words: Vec<RankedWord>,
}

impl RankedSelection {
    pub fn into_words(self) -> Vec<RankedWord> {
        self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RankedWord> {
        self.words.iter()
    }

    /// Smallest and largest count, or `None` when empty.
    pub fn count_range(&self) -> Option<(Count, Count)> {
        let mut counts = self.words.iter().map(|w| w.count);
        let first = counts.next()?;
        Some(counts.fold((first, first), |(min, max), c| (min.min(c), max.max(c))))
    }
}

impl<'a> IntoIterator for &'a RankedSelection {
    type Item = &'a RankedWord;
    type IntoIter = std::slice::Iter<'a, RankedWord>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

/// Picks the `n` highest ranked words and re-sorts them alphabetically.
pub fn select_top(map: FrequencyMap, n: usize, tie_break: TieBreak) -> RankedSelection {
    let mut entries = map.into_entries();
    entries.sort_unstable_by(|a, b| {
        rank_order((a.0.as_str(), a.1), (b.0.as_str(), b.1), tie_break)
    });
    entries.truncate(n);
    entries.sort_unstable_by(|a, b| a.0.cmp(&b.0));

    RankedSelection {
        words: entries
            .into_iter()
            .map(|(word, count)| RankedWord { word, count })
            .collect(),
    }
}
