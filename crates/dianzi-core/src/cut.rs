//! Run cutter: split mixed text into same-class runs and syllable tokens.

use crate::classify::{classify, CharacterClass};

/// A maximal run of characters sharing one [`CharacterClass`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run<'a> {
    pub class: CharacterClass,
    pub text: &'a str,
}

/// Split `sentence` into maximal same-class runs in one left-to-right pass.
pub fn cut(sentence: &str) -> Vec<Run<'_>> {
    let mut runs = Vec::new();
    let mut iter = sentence.char_indices();
    let Some((_, first)) = iter.next() else {
        return runs;
    };
    let mut start = 0;
    let mut class = classify(first);
    for (i, c) in iter {
        let next = classify(c);
        if next != class {
            runs.push(Run {
                class,
                text: &sentence[start..i],
            });
            start = i;
            class = next;
        }
    }
    runs.push(Run {
        class,
        text: &sentence[start..],
    });
    runs
}

/// Cut `sentence` into runs and split each run on whitespace.
///
/// Zhuyin runs yield one token per syllable; punctuation runs carry no
/// whitespace and come through whole.
pub fn tokens(sentence: &str) -> Vec<&str> {
    cut(sentence)
        .into_iter()
        .flat_map(|run| run.text.split_whitespace())
        .collect()
}
