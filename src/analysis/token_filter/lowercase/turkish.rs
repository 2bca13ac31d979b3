//! Turkish lowercase folding with dotted/dotless I handling.

use super::CaseFolder;

/// Latin capital letter I with dot above (U+0130).
const CAPITAL_DOTTED_I: char = '\u{0130}';
/// Latin small letter dotless i (U+0131).
const SMALL_DOTLESS_I: char = '\u{0131}';
/// Combining dot above (U+0307).
const COMBINING_DOT_ABOVE: char = '\u{0307}';

/// Case folder for Turkish (and Azeri) text.
///
/// Turkish has two distinct letter pairs where default Unicode lowercasing
/// gives the wrong result: dotted `İ` pairs with `i`, and dotless `I` pairs
/// with `ı`. This folder maps `İ` to `i`, `I` to `ı`, and collapses the
/// decomposed sequence `I` + combining dot above to `i`. Every other
/// character takes the default mapping.
#[derive(Clone, Debug, Default)]
pub struct TurkishCaseFolder;

impl TurkishCaseFolder {
    /// Create a new Turkish case folder.
    pub fn new() -> Self {
        TurkishCaseFolder
    }
}

impl CaseFolder for TurkishCaseFolder {
    fn fold(&self, text: &str) -> String {
        let mut folded = String::with_capacity(text.len());
        let mut chars = text.chars().peekable();

        while let Some(ch) = chars.next() {
            match ch {
                CAPITAL_DOTTED_I => folded.push('i'),
                'I' => {
                    if chars.peek() == Some(&COMBINING_DOT_ABOVE) {
                        chars.next();
                        folded.push('i');
                    } else {
                        folded.push(SMALL_DOTLESS_I);
                    }
                }
                _ => folded.extend(ch.to_lowercase()),
            }
        }

        folded
    }

    fn name(&self) -> &'static str {
        "turkish"
    }
}
