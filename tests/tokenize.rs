//! Tokenizer integration tests
//!
//! Coverage, classification and degradation behaviour across language
//! families.

mod common;

use common::assert_partition;
use glint::syntax::{display_name, select_lexer, tokenize, LanguageId, TokenCategory};

fn categories_of(source: &str, hint: &str) -> Vec<(TokenCategory, String)> {
    tokenize(source, hint)
        .iter()
        .filter(|t| t.category != TokenCategory::Whitespace)
        .map(|t| (t.category, t.text.clone()))
        .collect()
}

// ========================================================================
// Coverage
// ========================================================================

#[test]
fn test_streams_cover_input_exactly() {
    let samples = [
        ("python", "class A(B):\n    \"\"\"doc\"\"\"\n    x: int = 0x1F  # hex\n"),
        ("js", "const s = `a${b}c`;\nlet r = /x+/gi.test(s) ? 1 : 2;\n"),
        ("ts", "interface P { name: string }\nexport default P;\n"),
        ("sql", "SELECT * FROM t -- trailing\nWHERE id = 'x';"),
        ("", "anything goes 🚀 ünïcödé\t\r\n"),
        ("rust", "fn main() { println!(\"{}\", 1.5e3); }"),
    ];
    for (hint, source) in samples {
        let tokens = tokenize(source, hint);
        assert_partition(&tokens, source);
        assert_eq!(tokens.concat_text(), source, "hint {:?}", hint);
    }
}

#[test]
fn test_whitespace_is_kept() {
    let tokens = tokenize("a \t\n b", "text");
    let ws: Vec<_> = tokens
        .iter()
        .filter(|t| t.category == TokenCategory::Whitespace)
        .map(|t| t.text.as_str())
        .collect();
    assert_eq!(ws, vec![" \t\n "]);
}

#[test]
fn test_classification_is_deterministic() {
    let source = "def f(x):\n    return x ** 2 # sq\n";
    assert_eq!(tokenize(source, "py"), tokenize(source, "py"));
}

// ========================================================================
// Dispatch
// ========================================================================

#[test]
fn test_dispatch_aliases() {
    for hint in ["python", "py", "Python3", " PY "] {
        assert_eq!(select_lexer(hint).language(), LanguageId::Python, "{}", hint);
    }
    for hint in ["javascript", "js", "TypeScript", "tsx", "node"] {
        assert_eq!(select_lexer(hint).language(), LanguageId::JavaScript, "{}", hint);
    }
    for hint in ["", "go", "c++", "not a language"] {
        assert_eq!(select_lexer(hint).language(), LanguageId::Generic, "{}", hint);
    }
}

#[test]
fn test_display_names() {
    assert_eq!(display_name("js"), "JavaScript");
    assert_eq!(display_name("cpp"), "C++");
    assert_eq!(display_name("go"), "Go");
    assert_eq!(display_name(""), "Text");
}

// ========================================================================
// Python
// ========================================================================

#[test]
fn test_python_scenario() {
    use TokenCategory::*;
    assert_eq!(
        categories_of("def f():\n    return 1", "python"),
        vec![
            (Keyword, "def".to_string()),
            (Method, "f".to_string()),
            (Punctuation, "(".to_string()),
            (Punctuation, ")".to_string()),
            (Punctuation, ":".to_string()),
            (Keyword, "return".to_string()),
            (Number, "1".to_string()),
        ]
    );
}

#[test]
fn test_python_hash_inside_string_is_not_comment() {
    let tokens = categories_of("s = '#no' # yes", "py");
    assert!(tokens.contains(&(TokenCategory::String, "'#no'".to_string())));
    assert!(tokens.contains(&(TokenCategory::Comment, "# yes".to_string())));
}

#[test]
fn test_python_comment_on_every_line() {
    let tokens = categories_of("a = 1  # one\nb = 2  # two\n", "py");
    let comments: Vec<_> = tokens
        .iter()
        .filter(|(c, _)| *c == TokenCategory::Comment)
        .map(|(_, t)| t.as_str())
        .collect();
    assert_eq!(comments, vec!["# one", "# two"]);
}

#[test]
fn test_python_prefixed_strings() {
    for literal in ["rb'x'", "BR\"x\"", "f'{a}'", "u'x'", "Rf\"{a}\""] {
        let tokens = categories_of(literal, "py");
        assert_eq!(tokens, vec![(TokenCategory::String, literal.to_string())]);
    }
}

#[test]
fn test_python_escaped_quote() {
    let tokens = categories_of(r#"x = "a\"b""#, "py");
    assert!(tokens.contains(&(TokenCategory::String, r#""a\"b""#.to_string())));
}

#[test]
fn test_python_keyword_prefix_is_identifier() {
    let tokens = categories_of("define = iffy", "py");
    assert_eq!(tokens[0], (TokenCategory::Text, "define".to_string()));
    assert_eq!(tokens[2], (TokenCategory::Text, "iffy".to_string()));
}

#[test]
fn test_python_matrix_multiply_is_operator() {
    let tokens = categories_of("c = a@b\n@cache\ndef f(): pass", "py");
    assert!(tokens.contains(&(TokenCategory::Operator, "@".to_string())));
    assert!(tokens.contains(&(TokenCategory::Text, "b".to_string())));
    assert!(tokens.contains(&(TokenCategory::Decorator, "@cache".to_string())));
}

// ========================================================================
// JavaScript
// ========================================================================

#[test]
fn test_js_template_spans_lines() {
    let tokens = categories_of("x = `a\nb`;", "js");
    assert!(tokens.contains(&(TokenCategory::String, "`a\nb`".to_string())));
}

#[test]
fn test_js_regex_after_keyword_and_paren() {
    let tokens = categories_of("return /ab+c/i", "js");
    assert_eq!(tokens[1], (TokenCategory::String, "/ab+c/i".to_string()));

    let tokens = categories_of("if (/x/.test(s)) {}", "js");
    assert!(tokens.contains(&(TokenCategory::String, "/x/".to_string())));
}

#[test]
fn test_js_division_after_identifier_and_number() {
    let tokens = categories_of("a = b / 2 / c", "js");
    let slashes = tokens
        .iter()
        .filter(|(c, t)| *c == TokenCategory::Operator && t == "/")
        .count();
    assert_eq!(slashes, 2);
}

#[test]
fn test_js_comment_after_division_context() {
    let tokens = categories_of("x // note", "js");
    assert_eq!(tokens[1], (TokenCategory::Comment, "// note".to_string()));
}

#[test]
fn test_js_dollar_identifiers() {
    let tokens = categories_of("$el = _x$", "js");
    assert_eq!(tokens[0], (TokenCategory::Text, "$el".to_string()));
    assert_eq!(tokens[2], (TokenCategory::Text, "_x$".to_string()));
}

#[test]
fn test_js_numbers() {
    for literal in ["0xff", "0b1010", "0o17", "3.25", "42"] {
        let tokens = categories_of(literal, "js");
        assert_eq!(tokens, vec![(TokenCategory::Number, literal.to_string())]);
    }
}

#[test]
fn test_js_optional_chaining_and_arrow() {
    let tokens = categories_of("a?.b => c", "js");
    assert!(tokens.contains(&(TokenCategory::Operator, "?.".to_string())));
    assert!(tokens.contains(&(TokenCategory::Property, "b".to_string())));
    assert!(tokens.contains(&(TokenCategory::Operator, "=>".to_string())));
}

// ========================================================================
// Generic
// ========================================================================

#[test]
fn test_generic_comment_styles() {
    for (source, comment) in [
        ("x # hash", "# hash"),
        ("x -- dash", "-- dash"),
        ("x // slash", "// slash"),
        ("x /* block */ y", "/* block */"),
    ] {
        let tokens = categories_of(source, "unknown");
        assert!(
            tokens.contains(&(TokenCategory::Comment, comment.to_string())),
            "{:?}",
            source
        );
    }
}

#[test]
fn test_generic_keywords_and_constants() {
    let tokens = categories_of("if x == nil { return true }", "go");
    assert_eq!(tokens[0], (TokenCategory::Keyword, "if".to_string()));
    assert!(tokens.contains(&(TokenCategory::Constant, "nil".to_string())));
    assert!(tokens.contains(&(TokenCategory::Constant, "true".to_string())));
}

// ========================================================================
// Degradation
// ========================================================================

#[test]
fn test_unterminated_string_degrades() {
    let source = "unterminated \"string";
    let tokens = tokenize(source, "python");
    assert_partition(&tokens, source);
    let quote = tokens.iter().find(|t| t.start == 13).unwrap();
    assert_eq!(quote.text, "\"");
    assert_eq!(quote.category, TokenCategory::Text);
    assert!(tokens.iter().all(|t| t.category != TokenCategory::String));
}

#[test]
fn test_unterminated_triple_quote_degrades() {
    let source = "x = \"\"\"never\nclosed";
    let tokens = tokenize(source, "py");
    assert_partition(&tokens, source);
    assert!(tokens
        .iter()
        .any(|t| t.text == "\"\"\"" && t.category == TokenCategory::Text));
}

#[test]
fn test_every_unclosed_opener_degrades_alone() {
    let source = "/* x ".repeat(1_000);
    let tokens = tokenize(&source, "js");
    assert_partition(&tokens, &source);
    let openers = tokens
        .iter()
        .filter(|t| t.text == "/*" && t.category == TokenCategory::Text)
        .count();
    assert_eq!(openers, 1_000);
    assert!(tokens.iter().all(|t| t.category != TokenCategory::Comment));
}

#[test]
fn test_unknown_characters_become_text() {
    let tokens = tokenize("§", "js");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens.as_slice()[0].category, TokenCategory::Text);
}

#[test]
fn test_empty_input_yields_empty_stream() {
    for hint in ["python", "js", ""] {
        assert!(tokenize("", hint).is_empty());
    }
}
