//! Declarative scanning rules
//!
//! A language is described by an ordered `&'static [Rule]` table. Each rule
//! pairs a [`Matcher`] with the category it produces. The scanner tries the
//! rules in order at every position and commits to the first that matches.

use super::token::TokenCategory;

/// One entry of a language rule table
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub matcher: Matcher,
    pub category: TokenCategory,
}

impl Rule {
    pub const fn new(matcher: Matcher, category: TokenCategory) -> Self {
        Self { matcher, category }
    }
}

/// Pattern recognized by a rule at the cursor
#[derive(Debug, Clone, Copy)]
pub enum Matcher {
    /// A run of whitespace characters
    Whitespace,
    /// `prefix` up to (not including) the end of the line
    LineComment(&'static str),
    /// `open` ... `close`, may span lines
    BlockComment {
        open: &'static str,
        close: &'static str,
    },
    /// Delimited string. `prefixes` are tried in order; `""` means no prefix.
    /// Prefixes are matched ASCII case-insensitively.
    Quoted {
        prefixes: &'static [&'static str],
        quote: &'static str,
        multiline: bool,
    },
    /// ECMAScript `/pattern/flags`, only where a division cannot appear
    RegexLiteral,
    /// Hex, octal, binary, decimal-with-fraction or integer literal
    Number,
    /// A whole word contained in the set
    Words(&'static [&'static str]),
    /// `@name`
    Decorator,
    /// A word followed by optional whitespace and `(`
    CallPosition,
    /// A word starting with an uppercase letter
    Capitalized,
    /// `__name__`
    Dunder,
    /// A word immediately preceded by a single `.`
    Property,
    /// A word starting with a letter or `_` (or `$` when allowed)
    Identifier { allow_dollar: bool },
    /// First listed symbol that the input starts with
    Symbols(&'static [&'static str]),
    /// A single character from the set
    Chars(&'static str),
}

/// Result of trying one matcher at the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Token of this byte length
    Matched(usize),
    /// Construct opened but never closed; only the opener (this many bytes)
    /// is consumed, as plain text
    Unterminated(usize),
    NoMatch,
}

/// What one rule learned from lookahead that failed, kept for a single scan.
///
/// Openers with no closer would otherwise rescan to the end of the line or
/// input on every attempt.
#[derive(Debug, Default)]
pub struct RuleMemo {
    /// `(body_start, end)` of the last unterminated body. A body starting
    /// in `(body_start, end]` stops at the same `end` without closing.
    unterminated: Option<(usize, usize)>,
    /// Regex walk states that lead to failure, indexed by byte offset:
    /// bit 0 outside a character class, bit 1 inside one
    dead_regex: Vec<u8>,
}

impl RuleMemo {
    fn known_unterminated(&self, body_start: usize) -> bool {
        self.unterminated
            .is_some_and(|(start, end)| start < body_start && body_start <= end)
    }

    fn is_dead(&self, offset: usize, in_class: bool) -> bool {
        self.dead_regex
            .get(offset)
            .is_some_and(|bits| bits & class_bit(in_class) != 0)
    }

    /// Mark a regex state as failing. False if it already was.
    fn mark_dead(&mut self, source_len: usize, offset: usize, in_class: bool) -> bool {
        if self.dead_regex.is_empty() {
            self.dead_regex = vec![0; source_len];
        }
        match self.dead_regex.get_mut(offset) {
            Some(bits) if *bits & class_bit(in_class) == 0 => {
                *bits |= class_bit(in_class);
                true
            }
            _ => false,
        }
    }
}

fn class_bit(in_class: bool) -> u8 {
    if in_class {
        2
    } else {
        1
    }
}

/// Read-only view of the scan position handed to matchers
#[derive(Debug, Clone, Copy)]
pub struct ScanContext<'a> {
    pub source: &'a str,
    pub pos: usize,
    /// Previous token that is neither whitespace nor a comment
    pub last_significant: Option<(TokenCategory, &'a str)>,
}

impl<'a> ScanContext<'a> {
    pub fn rest(&self) -> &'a str {
        &self.source[self.pos..]
    }

    pub fn prev_char(&self) -> Option<char> {
        self.source[..self.pos].chars().next_back()
    }

    /// True when the cursor does not sit inside a word
    fn at_word_start(&self) -> bool {
        !self.prev_char().is_some_and(is_word_char)
    }
}

/// `\w` equivalent, extended to Unicode letters and digits
pub fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// Byte length of the word at the start of `s`
fn word_len(s: &str) -> usize {
    s.char_indices()
        .find(|&(_, ch)| !is_word_char(ch))
        .map_or(s.len(), |(i, _)| i)
}

fn ends_at_boundary(s: &str, len: usize) -> bool {
    !s[len..].chars().next().is_some_and(is_word_char)
}

impl Matcher {
    /// Try this matcher at the context's cursor. `memo` belongs to this
    /// rule and lives for the whole scan.
    pub fn apply(&self, ctx: &ScanContext<'_>, memo: &mut RuleMemo) -> Outcome {
        let rest = ctx.rest();
        let len = match *self {
            Matcher::Whitespace => rest
                .char_indices()
                .find(|&(_, ch)| !ch.is_whitespace())
                .map_or(rest.len(), |(i, _)| i),
            Matcher::LineComment(prefix) => {
                if !rest.starts_with(prefix) {
                    return Outcome::NoMatch;
                }
                rest.find(['\n', '\r']).unwrap_or(rest.len())
            }
            Matcher::BlockComment { open, close } => {
                if !rest.starts_with(open) {
                    return Outcome::NoMatch;
                }
                let body_start = ctx.pos + open.len();
                if memo.known_unterminated(body_start) {
                    return Outcome::Unterminated(open.len());
                }
                return match rest[open.len()..].find(close) {
                    Some(i) => Outcome::Matched(open.len() + i + close.len()),
                    None => {
                        memo.unterminated = Some((body_start, ctx.source.len()));
                        Outcome::Unterminated(open.len())
                    }
                };
            }
            Matcher::Quoted {
                prefixes,
                quote,
                multiline,
            } => return match_quoted(ctx, memo, prefixes, quote, multiline),
            Matcher::RegexLiteral => {
                if !regex_allowed(ctx.last_significant) {
                    return Outcome::NoMatch;
                }
                regex_len(ctx, memo).unwrap_or(0)
            }
            Matcher::Number => {
                if !ctx.at_word_start() {
                    return Outcome::NoMatch;
                }
                number_len(rest).unwrap_or(0)
            }
            Matcher::Words(words) => {
                if !ctx.at_word_start() {
                    return Outcome::NoMatch;
                }
                let len = word_len(rest);
                if len > 0 && words.contains(&&rest[..len]) {
                    len
                } else {
                    0
                }
            }
            Matcher::Decorator => match rest.strip_prefix('@') {
                // `a@b` is an operator
                _ if !ctx.at_word_start() => 0,
                Some(name) => match word_len(name) {
                    0 => 0,
                    n => n + 1,
                },
                None => 0,
            },
            Matcher::CallPosition => {
                if !ctx.at_word_start() {
                    return Outcome::NoMatch;
                }
                let len = word_len(rest);
                if len > 0 && rest[len..].trim_start().starts_with('(') {
                    len
                } else {
                    0
                }
            }
            Matcher::Capitalized => {
                if !ctx.at_word_start() || !rest.starts_with(|c: char| c.is_uppercase()) {
                    return Outcome::NoMatch;
                }
                word_len(rest)
            }
            Matcher::Dunder => {
                if !ctx.at_word_start() {
                    return Outcome::NoMatch;
                }
                let len = word_len(rest);
                let word = &rest[..len];
                if len >= 5 && word.starts_with("__") && word.ends_with("__") {
                    len
                } else {
                    0
                }
            }
            Matcher::Property => {
                let before = &ctx.source[..ctx.pos];
                if !before.ends_with('.') || before.ends_with("..") {
                    return Outcome::NoMatch;
                }
                word_len(rest)
            }
            Matcher::Identifier { allow_dollar } => {
                let is_part = |ch: char| is_word_char(ch) || (allow_dollar && ch == '$');
                if ctx.prev_char().is_some_and(is_part) {
                    return Outcome::NoMatch;
                }
                let starts = rest
                    .chars()
                    .next()
                    .is_some_and(|ch| ch.is_alphabetic() || ch == '_' || (allow_dollar && ch == '$'));
                if !starts {
                    return Outcome::NoMatch;
                }
                rest.char_indices()
                    .find(|&(_, ch)| !is_part(ch))
                    .map_or(rest.len(), |(i, _)| i)
            }
            Matcher::Symbols(symbols) => symbols
                .iter()
                .find(|sym| rest.starts_with(**sym))
                .map_or(0, |sym| sym.len()),
            Matcher::Chars(set) => match rest.chars().next() {
                Some(ch) if set.contains(ch) => ch.len_utf8(),
                _ => 0,
            },
        };

        if len == 0 {
            Outcome::NoMatch
        } else {
            Outcome::Matched(len)
        }
    }
}

fn match_quoted(
    ctx: &ScanContext<'_>,
    memo: &mut RuleMemo,
    prefixes: &[&str],
    quote: &str,
    multiline: bool,
) -> Outcome {
    let rest = ctx.rest();
    let Some(prefix_len) = prefixes.iter().find_map(|prefix| {
        let n = prefix.len();
        let head = rest.get(..n)?;
        let opens = head.eq_ignore_ascii_case(prefix)
            && rest[n..].starts_with(quote)
            && (n == 0 || ctx.at_word_start());
        opens.then_some(n)
    }) else {
        return Outcome::NoMatch;
    };

    let opener = prefix_len + quote.len();
    let body_start = ctx.pos + opener;
    // A later opener inside a failed body was escaped there, so its own
    // walk joins the failed one at the next character.
    if memo.known_unterminated(body_start) {
        return Outcome::Unterminated(opener);
    }

    let body = &rest[opener..];
    let mut end = body.len();
    let mut chars = body.char_indices();
    while let Some((i, ch)) = chars.next() {
        if ch == '\\' {
            chars.next();
            continue;
        }
        if body[i..].starts_with(quote) {
            return Outcome::Matched(opener + i + quote.len());
        }
        if ch == '\n' && !multiline {
            end = i;
            break;
        }
    }
    memo.unterminated = Some((body_start, body_start + end));
    Outcome::Unterminated(opener)
}

/// A `/` opens a regex unless the previous token could end an operand
fn regex_allowed(last: Option<(TokenCategory, &str)>) -> bool {
    match last {
        None => true,
        Some((TokenCategory::Operator, _)) => true,
        Some((TokenCategory::Keyword, word)) => !matches!(word, "this" | "super"),
        Some((TokenCategory::Punctuation, p)) => !matches!(p, ")" | "]" | "}"),
        Some(_) => false,
    }
}

fn regex_len(ctx: &ScanContext<'_>, memo: &mut RuleMemo) -> Option<usize> {
    let s = ctx.rest();
    let body = s.strip_prefix('/')?;
    if body.starts_with('/') || body.starts_with('*') {
        return None;
    }

    let body_start = ctx.pos + 1;
    let close = walk_regex_body(body, |i, in_class| !memo.is_dead(body_start + i, in_class));
    let Some(close) = close else {
        // Every state on the failed path fails from anywhere; record them
        // so no later `/` on this line walks them again.
        let source_len = ctx.source.len();
        walk_regex_body(body, |i, in_class| {
            memo.mark_dead(source_len, body_start + i, in_class)
        });
        return None;
    };
    let after = 1 + close + 1;
    let flags = s[after..]
        .bytes()
        .take_while(|b| b"dgimsuy".contains(b))
        .count();
    Some(after + flags)
}

/// Walk a regex body up to its closing `/`, returning that offset.
///
/// `visit` sees the offset of every character the walk steps on together
/// with the character-class state, and stops the walk by returning false.
fn walk_regex_body(body: &str, mut visit: impl FnMut(usize, bool) -> bool) -> Option<usize> {
    let mut in_class = false;
    let mut chars = body.char_indices();
    loop {
        let (i, ch) = chars.next()?;
        if !visit(i, in_class) {
            return None;
        }
        match ch {
            '\n' | '\r' => return None,
            '\\' => match chars.next() {
                Some((_, '\n' | '\r')) | None => return None,
                Some(_) => {}
            },
            '[' => in_class = true,
            ']' => in_class = false,
            '/' if !in_class => return Some(i),
            _ => {}
        }
    }
}

fn number_len(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    let run = |from: usize, pred: fn(&u8) -> bool| {
        bytes[from..].iter().take_while(|&b| pred(b)).count()
    };

    let mut candidates = [0usize; 4];
    if bytes.len() > 2 && bytes[0] == b'0' {
        let digits = match bytes[1] {
            b'x' | b'X' => run(2, u8::is_ascii_hexdigit),
            b'o' | b'O' => run(2, |b| (b'0'..=b'7').contains(b)),
            b'b' | b'B' => run(2, |b| *b == b'0' || *b == b'1'),
            _ => 0,
        };
        if digits > 0 {
            candidates[0] = 2 + digits;
        }
    }
    let int = run(0, u8::is_ascii_digit);
    if int > 0 {
        if bytes.get(int) == Some(&b'.') {
            let frac = run(int + 1, u8::is_ascii_digit);
            if frac > 0 {
                candidates[1] = int + 1 + frac;
            }
        }
        candidates[2] = int;
    }

    candidates
        .into_iter()
        .find(|&len| len > 0 && ends_at_boundary(s, len))
}
