//! Lowercase filter with language-specific variants.
//!
//! This module provides a filter that converts token text to lowercase,
//! which is essential for case-insensitive search. Besides the default
//! Unicode mapping, three language-specific folding algorithms are
//! available, selected by the `language` option at construction time:
//!
//! | `language` (case-insensitive) | effect |
//! |---|---|
//! | absent | default Unicode lowercasing |
//! | `greek` | default + final-sigma correction |
//! | `irish` | Irish mutation-prefix-aware lowercasing |
//! | `turkish` | Turkish dotted/dotless "I" handling |
//! | anything else | construction fails |
//!
//! The algorithm is resolved exactly once, before any token flows; an
//! unsupported value is a configuration error, never a per-token failure.
//!
//! # Examples
//!
//! ```
//! use xyston::analysis::token::Token;
//! use xyston::analysis::token_filter::Filter;
//! use xyston::analysis::token_filter::lowercase::LowercaseFilter;
//!
//! let filter = LowercaseFilter::for_language(Some("greek")).unwrap();
//! let tokens = vec![Token::new("ΣΟΦΊΑΣ", 0)];
//! let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(filtered[0].text, "σοφίας");
//! ```

use super::Filter;
use crate::analysis::token::TokenStream;
use crate::error::{Result, XystonError};

/// Trait for case folding algorithms.
///
/// A case folder is a pure, stateless function from token text to its
/// normalized lowercase form. Folders never fail; text that a folding rule
/// does not cover passes through the default mapping unchanged.
pub trait CaseFolder: Send + Sync {
    /// Fold the text of a single token to its normalized lowercase form.
    fn fold(&self, text: &str) -> String;

    /// Get the name of this case folder.
    fn name(&self) -> &'static str;
}

// Case folder implementations
pub mod default;
pub mod greek;
pub mod irish;
pub mod turkish;

// Re-export case folders
pub use default::DefaultCaseFolder;
pub use greek::GreekCaseFolder;
pub use irish::IrishCaseFolder;
pub use turkish::TurkishCaseFolder;

/// A filter that converts tokens to lowercase.
///
/// The folding algorithm is chosen once at construction and applied to every
/// token. Token positions and offsets are preserved; only the text content
/// is rewritten. Stopped tokens are passed through untouched.
pub struct LowercaseFilter {
    /// The case folder to use.
    folder: Box<dyn CaseFolder>,
}

impl std::fmt::Debug for LowercaseFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LowercaseFilter")
            .field("folder", &self.folder.name())
            .finish()
    }
}

impl LowercaseFilter {
    /// Create a new lowercase filter with the default Unicode mapping.
    pub fn new() -> Self {
        LowercaseFilter {
            folder: Box::new(DefaultCaseFolder::new()),
        }
    }

    /// Create a lowercase filter with a custom case folder.
    pub fn with_folder(folder: Box<dyn CaseFolder>) -> Self {
        LowercaseFilter { folder }
    }

    /// Create a lowercase filter for the given language selector.
    ///
    /// The selector is matched case-insensitively. `None` selects the
    /// default Unicode mapping. Any unrecognized value fails with a
    /// configuration error naming the rejected value.
    ///
    /// # Examples
    ///
    /// ```
    /// use xyston::analysis::token_filter::lowercase::LowercaseFilter;
    ///
    /// assert!(LowercaseFilter::for_language(None).is_ok());
    /// assert!(LowercaseFilter::for_language(Some("Turkish")).is_ok());
    /// assert!(LowercaseFilter::for_language(Some("klingon")).is_err());
    /// ```
    pub fn for_language(language: Option<&str>) -> Result<Self> {
        match language {
            None => Ok(Self::new()),
            Some(lang) if lang.eq_ignore_ascii_case("greek") => {
                Ok(Self::with_folder(Box::new(GreekCaseFolder::new())))
            }
            Some(lang) if lang.eq_ignore_ascii_case("irish") => {
                Ok(Self::with_folder(Box::new(IrishCaseFolder::new())))
            }
            Some(lang) if lang.eq_ignore_ascii_case("turkish") => {
                Ok(Self::with_folder(Box::new(TurkishCaseFolder::new())))
            }
            Some(lang) => Err(XystonError::config(format!(
                "language [{lang}] not supported for lowercase filter"
            ))),
        }
    }

    /// Create a lowercase filter from a JSON settings map.
    ///
    /// Reads the optional `language` key and delegates to
    /// [`LowercaseFilter::for_language`]. A non-string `language` value is a
    /// configuration error.
    ///
    /// # Examples
    ///
    /// ```
    /// use serde_json::json;
    /// use xyston::analysis::token_filter::lowercase::LowercaseFilter;
    ///
    /// let filter = LowercaseFilter::from_settings(&json!({"language": "irish"})).unwrap();
    /// assert_eq!(filter.folder().name(), "irish");
    ///
    /// let filter = LowercaseFilter::from_settings(&json!({})).unwrap();
    /// assert_eq!(filter.folder().name(), "default");
    /// ```
    pub fn from_settings(settings: &serde_json::Value) -> Result<Self> {
        match settings.get("language") {
            None | Some(serde_json::Value::Null) => Self::for_language(None),
            Some(serde_json::Value::String(lang)) => Self::for_language(Some(lang)),
            Some(other) => Err(XystonError::config(format!(
                "language [{other}] must be a string"
            ))),
        }
    }

    /// Get the case folder used by this filter.
    pub fn folder(&self) -> &dyn CaseFolder {
        self.folder.as_ref()
    }
}

impl Default for LowercaseFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for LowercaseFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens = tokens
            .map(|token| {
                if token.is_stopped() {
                    token
                } else {
                    let folded = self.folder.fold(&token.text);
                    token.with_text(folded)
                }
            })
            .collect::<Vec<_>>();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}
