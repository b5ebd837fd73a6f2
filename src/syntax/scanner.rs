//! Shared first-match scanning loop

use super::rules::{Outcome, Rule, RuleMemo, ScanContext};
use super::token::{Token, TokenCategory};

/// Scan `source` with an ordered rule table.
///
/// At every position the first matching rule wins. When nothing matches,
/// exactly one character is emitted as [`TokenCategory::Text`], so the
/// cursor always advances and the loop runs at most `source.len()` times.
/// Each rule keeps a [`RuleMemo`] for the whole scan, so lookahead that
/// failed once is not walked again and the total work stays linear.
pub fn scan(source: &str, rules: &[Rule]) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut pos = 0;
    let mut last_significant: Option<(TokenCategory, &str)> = None;
    let mut memos: Vec<RuleMemo> = rules.iter().map(|_| RuleMemo::default()).collect();

    while pos < source.len() {
        let ctx = ScanContext {
            source,
            pos,
            last_significant,
        };
        let (category, len) = classify(&ctx, rules, &mut memos);
        let end = pos + len;
        let text = &source[pos..end];

        if !category.is_trivia() {
            last_significant = Some((category, text));
        }
        tokens.push(Token::new(category, text, pos));
        pos = end;
    }

    tokens
}

fn classify(
    ctx: &ScanContext<'_>,
    rules: &[Rule],
    memos: &mut [RuleMemo],
) -> (TokenCategory, usize) {
    let rest = ctx.rest();
    let valid = |len: usize| len > 0 && len <= rest.len() && rest.is_char_boundary(len);

    for (rule, memo) in rules.iter().zip(memos.iter_mut()) {
        match rule.matcher.apply(ctx, memo) {
            Outcome::Matched(len) if valid(len) => return (rule.category, len),
            Outcome::Unterminated(len) if valid(len) => return (TokenCategory::Text, len),
            _ => {}
        }
    }

    let fallback = rest.chars().next().map_or(1, char::len_utf8);
    (TokenCategory::Text, fallback)
}
