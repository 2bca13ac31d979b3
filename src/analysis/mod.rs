//! Text analysis module for Xyston.
//!
//! This module provides the core text analysis functionality including
//! tokenization, token filtering, and analysis pipelines.

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::*;
pub use token::*;
pub use token_filter::*;
pub use tokenizer::*;
