//! Greek lowercase folding with final-sigma correction.

use super::CaseFolder;

/// Lowercase sigma, the medial/initial form (U+03C3).
const SIGMA: char = 'σ';
/// Lowercase final sigma, used at the end of a word (U+03C2).
const FINAL_SIGMA: char = 'ς';

/// Case folder for Greek text.
///
/// Applies the default Unicode lowercase mapping, then rewrites a medial
/// sigma at the end of the token to the final-sigma form. Sigma elsewhere in
/// the token keeps the medial form. The check is against the token's own
/// text, so an already-final sigma is left alone and folding is idempotent.
#[derive(Clone, Debug, Default)]
pub struct GreekCaseFolder;

impl GreekCaseFolder {
    /// Create a new Greek case folder.
    pub fn new() -> Self {
        GreekCaseFolder
    }
}

impl CaseFolder for GreekCaseFolder {
    fn fold(&self, text: &str) -> String {
        let mut folded: String = text.chars().flat_map(char::to_lowercase).collect();
        if folded.ends_with(SIGMA) {
            folded.pop();
            folded.push(FINAL_SIGMA);
        }
        folded
    }

    fn name(&self) -> &'static str {
        "greek"
    }
}
