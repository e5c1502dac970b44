/// Characters that delimit words. Anything else is part of a word.
pub const SEPARATORS: &[char] = &[
    ' ', '\t', '\r', '\n', '.', ',', ':', ';', '?', '!', '-', '(', ')', '/', '¡', '"',
];

pub fn is_separator(c: char) -> bool {
    SEPARATORS.contains(&c)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Word,
    Separator,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub kind: TokenKind,
}

impl Token<'_> {
    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }
}

/// Returns the maximal run starting at byte `position` whose characters are
/// all separators or all non-separators, matching the class of the first one.
///
/// `position` must be a char boundary strictly inside `text`; otherwise the
/// result is empty.
pub fn next_word_or_separator(text: &str, position: usize) -> &str {
    let Some(rest) = text.get(position..) else {
        return "";
    };
    let mut chars = rest.char_indices();
    let Some((_, first)) = chars.next() else {
        return "";
    };
    let class = is_separator(first);
    let end = chars
        .find(|&(_, c)| is_separator(c) != class)
        .map_or(rest.len(), |(idx, _)| idx);
    &rest[..end]
}

/// Iterator partitioning one line into consecutive word and separator runs.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    text: &'a str,
    position: usize,
}

impl<'a> Tokens<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, position: 0 }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let run = next_word_or_separator(self.text, self.position);
        let first = run.chars().next()?;
        self.position += run.len();
        let kind = if is_separator(first) {
            TokenKind::Separator
        } else {
            TokenKind::Word
        };
        Some(Token { text: run, kind })
    }
}

pub fn tokenize(line: &str) -> Tokens<'_> {
    Tokens::new(line)
}
