//! # Xyston
//!
//! A small, composable text analysis pipeline for Rust.
//!
//! Text flows through a tokenizer and a chain of token filters:
//!
//! ```text
//! text → Tokenizer → Token Filters → tokens
//! ```
//!
//! The centerpiece is a lowercase token filter with language-specific
//! variants (Greek, Irish, Turkish) selected once at configuration time.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use xyston::analysis::analyzer::analyzer::Analyzer;
//! use xyston::analysis::analyzer::pipeline::PipelineAnalyzer;
//! use xyston::analysis::token_filter::lowercase::LowercaseFilter;
//! use xyston::analysis::tokenizer::whitespace::WhitespaceTokenizer;
//!
//! let analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
//!     .add_filter(Arc::new(LowercaseFilter::for_language(Some("turkish")).unwrap()));
//!
//! let tokens: Vec<_> = analyzer.analyze("Irmak İstanbul").unwrap().collect();
//! assert_eq!(tokens[0].text, "ırmak");
//! assert_eq!(tokens[1].text, "istanbul");
//! ```

pub mod analysis;
pub mod error;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
