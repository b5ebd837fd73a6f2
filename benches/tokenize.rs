//! Benchmarks for tokenizing and rendering
//!
//! Run with: cargo bench --bench tokenize

use glint::markup::{highlight, render};
use glint::response::parse_response;
use glint::reveal::{drive, RevealConfig, RevealSession};
use glint::syntax::tokenize;

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

// ============================================================================
// Sample source code for different languages
// ============================================================================

const PYTHON_SAMPLE: &str = r#"
import json
from dataclasses import dataclass

@dataclass
class Store:
    """A simple key-value store"""
    data: dict
    count: int = 0

    def insert(self, key, value):
        self.count += 1
        self.data[key] = value  # overwrite
        return f"{key}={value}"

    def dump(self):
        return json.dumps(self.data, indent=2)

if __name__ == "__main__":
    store = Store({})
    for i in range(10):
        store.insert(f"k{i}", i * 0x10 + 1.5e3)
    print(store.dump())
"#;

const JAVASCRIPT_SAMPLE: &str = r#"
const EventEmitter = require('events');

class Store extends EventEmitter {
    constructor() {
        super();
        this.data = new Map();
    }

    insert(key, value) {
        this.data.set(key, value); // notify listeners
        this.emit('insert', { key, value });
        return `${key}=${value}`;
    }

    async load(url) {
        const res = await fetch(url);
        const items = (await res.json()).filter(x => /^k\d+$/.test(x.id));
        return items.length / 2;
    }
}

module.exports = { Store };
"#;

const GENERIC_SAMPLE: &str = r#"
use std::collections::HashMap;

/* A simple key-value store */
pub struct Store<K, V> {
    data: HashMap<K, V>,
    count: usize,
}

fn main() {
    let mut store = Store::new();
    store.insert("hello", 42);
    println!("Found: {}", 0xFF);
}
"#;

fn sample(lang: &str) -> &'static str {
    match lang {
        "python" => PYTHON_SAMPLE,
        "javascript" => JAVASCRIPT_SAMPLE,
        "rust" => GENERIC_SAMPLE,
        _ => panic!("Unknown language"),
    }
}

fn generate_large_python(lines: usize) -> String {
    let mut source = String::with_capacity(lines * 40);
    for i in 0..lines / 4 {
        source.push_str(&format!(
            "def function_{}(x):\n    # step {}\n    return x * {} + 'tail'\n\n",
            i, i, i
        ));
    }
    source
}

// ============================================================================
// Tokenizing
// ============================================================================

#[divan::bench(args = ["python", "javascript", "rust"])]
fn tokenize_sample(lang: &str) {
    let tokens = tokenize(sample(lang), lang);
    divan::black_box(tokens);
}

#[divan::bench(args = [100, 500, 1000, 5000])]
fn tokenize_large_python(bencher: divan::Bencher, lines: usize) {
    let source = generate_large_python(lines);
    bencher.bench_local(|| divan::black_box(tokenize(&source, "python")));
}

#[divan::bench(args = [100, 1000, 10000])]
fn tokenize_unterminated_string(bencher: divan::Bencher, len: usize) {
    let source = format!("\"{}", "x".repeat(len));
    bencher.bench_local(|| divan::black_box(tokenize(&source, "js")));
}

// ============================================================================
// Rendering
// ============================================================================

#[divan::bench(args = ["python", "javascript", "rust"])]
fn render_only(bencher: divan::Bencher, lang: &str) {
    let tokens = tokenize(sample(lang), lang);
    bencher.bench_local(|| divan::black_box(render(&tokens)));
}

#[divan::bench(args = ["python", "javascript", "rust"])]
fn highlight_sample(lang: &str) {
    divan::black_box(highlight(sample(lang), lang));
}

// ============================================================================
// Responses
// ============================================================================

#[divan::bench]
fn parse_response_mixed(bencher: divan::Bencher) {
    let content = format!(
        "Here is the store:\n\n```python\n{}```\n\nAnd in JS:\n\n```js\n{}```\n\nDone.",
        PYTHON_SAMPLE, JAVASCRIPT_SAMPLE
    );
    bencher.bench_local(|| divan::black_box(parse_response(&content)));
}

#[divan::bench]
fn reveal_instant(bencher: divan::Bencher) {
    let content = format!("```python\n{}```\n\n```js\n{}```", PYTHON_SAMPLE, JAVASCRIPT_SAMPLE);
    let segments = glint::response::code_segments(&parse_response(&content));
    bencher.bench_local(|| {
        let mut session =
            RevealSession::new(segments.clone()).with_config(RevealConfig::instant());
        divan::black_box(drive(&mut session, |_| {}, |event| {
            divan::black_box(event);
        }))
    });
}
