//! End-to-end tests for the language-selectable lowercase filter.

use std::sync::Arc;

use xyston::analysis::analyzer::analyzer::Analyzer;
use xyston::analysis::analyzer::pipeline::PipelineAnalyzer;
use xyston::analysis::token::Token;
use xyston::analysis::token_filter::lowercase::LowercaseFilter;
use xyston::analysis::tokenizer::whitespace::WhitespaceTokenizer;
use xyston::error::XystonError;

fn analyzer_for(language: Option<&str>) -> PipelineAnalyzer {
    let filter = LowercaseFilter::for_language(language).unwrap();
    PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new())).add_filter(Arc::new(filter))
}

fn analyze(analyzer: &PipelineAnalyzer, text: &str) -> Vec<Token> {
    analyzer.analyze(text).unwrap().collect()
}

#[test]
fn default_language_lowercases_with_unicode_rules() {
    let analyzer = analyzer_for(None);
    let tokens = analyze(&analyzer, "Hello WORLD Irmak");

    assert_eq!(tokens[0].text, "hello");
    assert_eq!(tokens[1].text, "world");
    // Default mapping for dotless capital I is the ASCII i
    assert_eq!(tokens[2].text, "irmak");
}

#[test]
fn greek_language_restores_final_sigma() {
    let analyzer = analyzer_for(Some("greek"));
    let tokens = analyze(&analyzer, "ΣΟΦΊΑΣ ΘΆΛΑΣΣΑ");

    assert_eq!(tokens[0].text, "σοφίας");
    // Mid-token sigmas keep the medial form
    assert_eq!(tokens[1].text, "θάλασσα");
}

#[test]
fn irish_language_restores_mutation_hyphen() {
    let analyzer = analyzer_for(Some("irish"));
    let tokens = analyze(&analyzer, "nAthair tUISCE hARD Gaeilge");

    assert_eq!(tokens[0].text, "n-athair");
    assert_eq!(tokens[1].text, "t-uisce");
    assert_eq!(tokens[2].text, "hard");
    assert_eq!(tokens[3].text, "gaeilge");
}

#[test]
fn turkish_language_distinguishes_dotted_and_dotless_i() {
    let analyzer = analyzer_for(Some("turkish"));
    let tokens = analyze(&analyzer, "İstanbul Irmak");

    assert_eq!(tokens[0].text, "istanbul");
    assert_eq!(tokens[1].text, "ırmak");

    // The same input under the default selector folds differently
    let default = analyzer_for(None);
    let tokens = analyze(&default, "İstanbul Irmak");
    assert_eq!(tokens[0].text, "i\u{307}stanbul");
    assert_eq!(tokens[1].text, "irmak");
}

#[test]
fn selector_is_case_insensitive() {
    let analyzer = analyzer_for(Some("TURKISH"));
    let tokens = analyze(&analyzer, "DİYARBAKIR");
    assert_eq!(tokens[0].text, "diyarbakır");
}

#[test]
fn unsupported_language_fails_before_any_token_is_processed() {
    let err = LowercaseFilter::for_language(Some("klingon")).unwrap_err();

    match err {
        XystonError::Config(msg) => assert!(msg.contains("klingon")),
        other => panic!("expected Config error, got: {other}"),
    }
}

#[test]
fn filters_from_settings_map() {
    let settings = serde_json::json!({"language": "greek"});
    let filter = LowercaseFilter::from_settings(&settings).unwrap();
    let analyzer =
        PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new())).add_filter(Arc::new(filter));

    let tokens = analyze(&analyzer, "ΛΌΓΟΣ");
    assert_eq!(tokens[0].text, "λόγος");

    let err = LowercaseFilter::from_settings(&serde_json::json!({"language": "elvish"}));
    assert!(err.is_err());
}

#[test]
fn applying_the_pipeline_twice_is_a_projection() {
    for language in [None, Some("greek"), Some("irish"), Some("turkish")] {
        let analyzer = analyzer_for(language);
        let input = "ΣΟΦΊΑΣ nAthair İstanbul Irmak HELLO";

        let once: Vec<String> = analyze(&analyzer, input)
            .into_iter()
            .map(|t| t.text)
            .collect();
        let twice: Vec<String> = analyze(&analyzer, &once.join(" "))
            .into_iter()
            .map(|t| t.text)
            .collect();

        assert_eq!(once, twice, "language {language:?} is not idempotent");
    }
}
