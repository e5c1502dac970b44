//! Tag cloud core: pure tokenize, count, rank and scale pipeline.
mod cloud;
mod count;
mod rank;
mod scale;
mod tokenize;

pub use cloud::{CloudEntry, TagCloud};
pub use count::{count_words, Count, FrequencyMap};
pub use rank::{rank_order, select_top, RankedSelection, RankedWord, TieBreak};
pub use scale::{font_sizes, scale_count, FontSize};
pub use tokenize::{
    is_separator, next_word_or_separator, tokenize, Token, TokenKind, Tokens, SEPARATORS,
};
