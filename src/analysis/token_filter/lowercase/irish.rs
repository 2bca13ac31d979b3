//! Irish lowercase folding with mutation-prefix handling.

use super::CaseFolder;

/// Uppercase vowels, including the fada (acute accent) forms, that mark a
/// mutated root behind an eclipsis `n` or t-prothesis `t` prefix.
const UPPER_VOWELS: [char; 10] = ['A', 'E', 'I', 'O', 'U', 'Á', 'É', 'Í', 'Ó', 'Ú'];

/// Case folder for Irish text.
///
/// Irish orthography attaches mutation prefixes to capitalized roots without
/// a hyphen: `nAthair`, `tUisce`. Naive lowercasing would merge the prefix
/// into the root (`nathair` is a different word), so when the token starts
/// with `n` or `t` immediately followed by an uppercase vowel, the hyphen
/// mutation marker is restored before the rest of the token is lowercased:
/// `nAthair` becomes `n-athair`. `h`-prothesis forms (`hARD`) lowercase
/// cleanly and take the default path, as does everything else.
#[derive(Clone, Debug, Default)]
pub struct IrishCaseFolder;

impl IrishCaseFolder {
    /// Create a new Irish case folder.
    pub fn new() -> Self {
        IrishCaseFolder
    }
}

impl CaseFolder for IrishCaseFolder {
    fn fold(&self, text: &str) -> String {
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(prefix @ ('n' | 't')), Some(vowel)) if UPPER_VOWELS.contains(&vowel) => {
                let mut folded = String::with_capacity(text.len() + 1);
                folded.push(prefix);
                folded.push('-');
                folded.extend(vowel.to_lowercase());
                for ch in chars {
                    folded.extend(ch.to_lowercase());
                }
                folded
            }
            _ => text.chars().flat_map(char::to_lowercase).collect(),
        }
    }

    fn name(&self) -> &'static str {
        "irish"
    }
}
