use std::io::{self, Read, Write};
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use glint::cli::{CliArgs, Command, HighlightArgs, RevealArgs};
use glint::markup::{self, code_block, render_document};
use glint::response::{code_segments, parse_response, render_parts, ResponsePart};
use glint::reveal::{drive, RevealConfig, RevealEvent, RevealSession};
use glint::{syntax, GlintConfig};

fn main() -> Result<()> {
    glint::tracing::init();

    let args = CliArgs::parse();
    let config = match &args.config {
        Some(path) => GlintConfig::load_from(path),
        None => GlintConfig::load(),
    };

    match args.command {
        Command::Highlight(highlight) => run_highlight(&highlight, &config),
        Command::Reveal(reveal) => run_reveal(&reveal, &config),
        Command::Stylesheet { theme } => {
            let theme = load_theme(theme.as_deref(), &config)?;
            print!("{}", theme.stylesheet());
            Ok(())
        }
    }
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read stdin")?;
            Ok(input)
        }
    }
}

fn load_theme(id: Option<&str>, config: &GlintConfig) -> Result<markup::SyntaxTheme> {
    let id = id.unwrap_or(&config.theme);
    markup::load_theme(id).map_err(anyhow::Error::msg)
}

fn run_highlight(args: &HighlightArgs, config: &GlintConfig) -> Result<()> {
    let source = read_input(args.file.as_deref())?;
    let hint = args.language_hint(&config.default_language);

    if args.json {
        let tokens = syntax::tokenize(&source, &hint);
        let json = serde_json::to_string_pretty(&tokens).context("Failed to serialize tokens")?;
        println!("{}", json);
        return Ok(());
    }

    let output = if args.response {
        let body = render_parts(&parse_response(&source));
        if args.standalone {
            render_document(&body, &load_theme(args.theme.as_deref(), config)?)
        } else {
            body.into_string()
        }
    } else {
        let body = markup::highlight(&source, &hint);
        if args.standalone {
            let block = code_block(&body, &hint);
            render_document(&block, &load_theme(args.theme.as_deref(), config)?)
        } else {
            body.into_string()
        }
    };
    println!("{}", output);
    Ok(())
}

fn run_reveal(args: &RevealArgs, config: &GlintConfig) -> Result<()> {
    let content = read_input(args.file.as_deref())?;
    let parts = parse_response(&content);
    let segments = code_segments(&parts);
    let reveal_config = if args.instant {
        RevealConfig::instant()
    } else {
        config.reveal
    };

    // Prose is printed as-is around the revealed code: bucket 0 precedes the
    // first segment, bucket i + 1 follows segment i.
    let mut prose: Vec<Vec<&str>> = vec![Vec::new(); segments.len() + 1];
    let mut bucket = 0;
    for part in &parts {
        match part {
            ResponsePart::Text(text) => prose[bucket].push(text),
            ResponsePart::Code(_) => bucket += 1,
        }
    }

    let code_mode = !segments.is_empty();
    let mut session = if code_mode {
        RevealSession::new(segments)
    } else {
        RevealSession::for_text(content.trim())
    }
    .with_config(reveal_config);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if code_mode {
        for text in &prose[0] {
            writeln!(out, "{}\n", text).context("Failed to write to stdout")?;
        }
    }

    let handle = session.cancel_handle();
    let mut revealed = 0usize;
    let mut write_error: Option<io::Error> = None;
    let sleep = |delay: Duration| {
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
    };

    drive(&mut session, sleep, |event| {
        let result = match event {
            RevealEvent::Revealed { ch, .. } => {
                revealed += 1;
                if args.cancel_after.is_some_and(|limit| revealed >= limit) {
                    handle.cancel();
                }
                write!(out, "{}", ch).and_then(|_| out.flush())
            }
            RevealEvent::Finalized { segment, markup } => {
                let mut result = writeln!(out);
                if args.markup {
                    result = result.and_then(|_| writeln!(out, "{}", markup));
                }
                for text in prose.get(segment + 1).into_iter().flatten() {
                    result = result.and_then(|_| writeln!(out, "\n{}", text));
                }
                result.and_then(|_| writeln!(out))
            }
            RevealEvent::Cancelled { segment } => {
                writeln!(out, "\n[stopped during segment {}]", segment)
            }
            RevealEvent::Done => Ok(()),
        };
        if let Err(e) = result {
            handle.cancel();
            write_error.get_or_insert(e);
        }
    });

    if let Some(e) = write_error {
        return Err(e).context("Failed to write to stdout");
    }
    Ok(())
}
