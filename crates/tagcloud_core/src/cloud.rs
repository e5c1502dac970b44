use crate::count::{count_words, Count};
use crate::rank::{select_top, RankedSelection, TieBreak};
use crate::scale::{font_sizes, FontSize};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloudEntry {
    pub word: String,
    pub count: Count,
    pub font_size: FontSize,
}

/// Display-ready tag cloud: alphabetical entries with their font sizes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TagCloud {
    pub requested: usize,
    pub total_words: Count,
    pub distinct_words: usize,
    pub entries: Vec<CloudEntry>,
}

impl TagCloud {
    /// Scales an already ranked selection and pairs each word with its size.
    pub fn from_selection(
        selection: RankedSelection,
        requested: usize,
        total_words: Count,
        distinct_words: usize,
    ) -> Self {
        Self {
            requested,
            total_words,
            distinct_words,
            entries: zip_sizes(selection),
        }
    }

    /// Counts, ranks and scales `text` into a cloud of at most `requested` words.
    pub fn from_text(text: &str, requested: usize, tie_break: TieBreak) -> Self {
        let map = count_words(text);
        let total_words = map.total();
        let distinct_words = map.len();
        let selection = select_top(map, requested, tie_break);
        Self::from_selection(selection, requested, total_words, distinct_words)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn zip_sizes(selection: RankedSelection) -> Vec<CloudEntry> {
    let sizes = font_sizes(&selection);
    selection
        .into_words()
        .into_iter()
        .zip(sizes)
        .map(|(ranked, font_size)| CloudEntry {
            word: ranked.word,
            count: ranked.count,
            font_size,
        })
        .collect()
}
