//! Default Unicode lowercase folding.

use super::CaseFolder;

/// Case folder applying the default Unicode lowercase mapping.
///
/// Each code point is mapped independently via [`char::to_lowercase`],
/// preserving one-to-many expansions (e.g. 'İ' lowers to "i\u{307}").
#[derive(Clone, Debug, Default)]
pub struct DefaultCaseFolder;

impl DefaultCaseFolder {
    /// Create a new default case folder.
    pub fn new() -> Self {
        DefaultCaseFolder
    }
}

impl CaseFolder for DefaultCaseFolder {
    fn fold(&self, text: &str) -> String {
        text.chars().flat_map(char::to_lowercase).collect()
    }

    fn name(&self) -> &'static str {
        "default"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_fold() {
        let folder = DefaultCaseFolder::new();
        assert_eq!(folder.fold("HeLLo"), "hello");
        assert_eq!(folder.fold("Irmak"), "irmak");
        assert_eq!(folder.fold("ΜΆΣΚΑ"), "μάσκα");
    }

    #[test]
    fn test_multi_codepoint_expansion() {
        let folder = DefaultCaseFolder::new();
        // U+0130 lowers to 'i' followed by a combining dot above
        assert_eq!(folder.fold("İ"), "i\u{307}");
    }

    #[test]
    fn test_idempotent() {
        let folder = DefaultCaseFolder::new();
        let once = folder.fold("İstanbul Straße");
        assert_eq!(folder.fold(&once), once);
    }

    #[test]
    fn test_empty() {
        assert_eq!(DefaultCaseFolder::new().fold(""), "");
    }
}
