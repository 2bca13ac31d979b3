//! Tokenizer implementations for text analysis.
//!
//! Tokenizers are the first step in the text analysis pipeline, responsible
//! for splitting input text into meaningful units (tokens).
//!
//! # Examples
//!
//! ```
//! use xyston::analysis::tokenizer::Tokenizer;
//! use xyston::analysis::tokenizer::whitespace::WhitespaceTokenizer;
//!
//! let tokenizer = WhitespaceTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello world").unwrap().collect();
//! assert_eq!(tokens.len(), 2);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// All tokenizers must implement this trait to be used in the analysis
/// pipeline. The trait requires `Send + Sync` to allow use in concurrent
/// contexts.
///
/// # Examples
///
/// Implementing a custom tokenizer:
///
/// ```
/// use xyston::analysis::token::{Token, TokenStream};
/// use xyston::analysis::tokenizer::Tokenizer;
/// use xyston::error::Result;
///
/// struct CommaTokenizer;
///
/// impl Tokenizer for CommaTokenizer {
///     fn tokenize(&self, text: &str) -> Result<TokenStream> {
///         let tokens: Vec<Token> = text
///             .split(',')
///             .enumerate()
///             .map(|(i, s)| Token::new(s.trim(), i))
///             .collect();
///         Ok(Box::new(tokens.into_iter()))
///     }
///
///     fn name(&self) -> &'static str {
///         "comma"
///     }
/// }
/// ```
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual tokenizer modules
pub mod whitespace;

pub use whitespace::WhitespaceTokenizer;
