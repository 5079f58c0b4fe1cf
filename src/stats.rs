use regex::Regex;
use serde::Serialize;
use std::ops::{Add, AddAssign};
use std::sync::LazyLock;

static PARAGRAPH_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\s*\n").unwrap());
static SENTENCE_END: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]+").unwrap());

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TextStats {
    pub words: usize,
    pub characters: usize,
    pub characters_no_spaces: usize,
    pub paragraphs: usize,
    pub sentences: usize,
    pub lines: usize,
}

impl Add for TextStats {
    type Output = TextStats;

    fn add(mut self, rhs: TextStats) -> TextStats {
        self += rhs;
        self
    }
}

impl AddAssign for TextStats {
    fn add_assign(&mut self, rhs: TextStats) {
        self.words += rhs.words;
        self.characters += rhs.characters;
        self.characters_no_spaces += rhs.characters_no_spaces;
        self.paragraphs += rhs.paragraphs;
        self.sentences += rhs.sentences;
        self.lines += rhs.lines;
    }
}

/// Counts words, characters, paragraphs, sentences and lines.
///
/// Character counts are UTF-16 code units. Word and sentence rules are
/// whitespace and ASCII punctuation only; no Unicode segmentation.
pub fn count_text(text: &str) -> TextStats {
    let trimmed = text.trim();

    let words = trimmed.split_whitespace().count();
    let characters = text.encode_utf16().count();
    let characters_no_spaces: usize = text
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(char::len_utf16)
        .sum();

    let paragraphs = if trimmed.is_empty() {
        0
    } else {
        PARAGRAPH_BREAK
            .split(text)
            .filter(|segment| !segment.trim().is_empty())
            .count()
            .max(1)
    };

    // A terminator run only counts when it closes some text.
    let mut sentences = 0;
    let mut segment_start = 0;
    for terminator in SENTENCE_END.find_iter(text) {
        if !text[segment_start..terminator.start()].trim().is_empty() {
            sentences += 1;
        }
        segment_start = terminator.end();
    }

    let lines = text.split('\n').count();

    TextStats {
        words,
        characters,
        characters_no_spaces,
        paragraphs,
        sentences,
        lines,
    }
}
