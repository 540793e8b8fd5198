//! `bough words`: most frequent words of a plain-text book.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use bough_core::WordFrequency;
use bough_core::config::WordsConfig;
use bough_core::text::{Stopwords, count_words};
use clap::Args;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::output::{OutputMode, pretty_kv, pretty_section, render_mode};

/// Stopword file picked up from the working directory when the config
/// names none.
const DEFAULT_STOPWORDS_FILE: &str = "stopwords";

/// Arguments for `bough words`.
#[derive(Args, Debug)]
pub struct WordsArgs {
    /// Optional word count followed by the book to read: `[N] FILE`.
    #[arg(value_name = "[N] FILE", num_args = 1..=2, required = true)]
    pub inputs: Vec<String>,
}

impl WordsArgs {
    /// Split `[N] FILE` into the requested count and the path.
    fn split(&self) -> Result<(Option<usize>, PathBuf)> {
        match self.inputs.as_slice() {
            [file] => Ok((None, PathBuf::from(file))),
            [count, file] => {
                let n = count
                    .parse()
                    .with_context(|| format!("word count must be a non-negative integer, got `{count}`"))?;
                Ok((Some(n), PathBuf::from(file)))
            }
            _ => bail!("usage: bough words [N] FILE"),
        }
    }
}

#[derive(Debug, Serialize)]
struct WordsReport {
    file: PathBuf,
    requested: usize,
    distinct: usize,
    total: u64,
    words: Vec<WordFrequency>,
}

/// Stopwords from the config, else `./stopwords` if present, else none.
fn load_stopwords(config: &WordsConfig, project_root: &Path) -> Result<Stopwords> {
    let path = match &config.stopwords {
        Some(path) => path.clone(),
        None => {
            let fallback = project_root.join(DEFAULT_STOPWORDS_FILE);
            if !fallback.is_file() {
                debug!("no stopword file, counting every word");
                return Ok(Stopwords::new());
            }
            fallback
        }
    };
    let stopwords = Stopwords::load(&path)?;
    debug!(path = %path.display(), count = stopwords.len(), "loaded stopwords");
    Ok(stopwords)
}

/// Execute `bough words`.
#[instrument(skip_all)]
pub fn run_words(
    args: &WordsArgs,
    config: &WordsConfig,
    output: OutputMode,
    project_root: &Path,
) -> Result<()> {
    let (requested, file) = args.split()?;
    let n = config.effective_top_n(requested);
    let stopwords = load_stopwords(config, project_root)?;

    let text = std::fs::read_to_string(&file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    let dict = count_words(&text, &stopwords, config.tokenizer_options())
        .with_context(|| format!("failed to scan {}", file.display()))?;

    let report = WordsReport {
        file,
        requested: n,
        distinct: dict.len(),
        total: dict.total(),
        words: dict.top_n(n),
    };

    render_mode(
        output,
        &report,
        |r, w| {
            for entry in &r.words {
                writeln!(w, "{} {}", entry.count, entry.word)?;
            }
            Ok(())
        },
        |r, w| {
            pretty_section(w, &format!("Top {} words in {}", r.requested, r.file.display()))?;
            pretty_kv(w, "distinct", r.distinct.to_string())?;
            pretty_kv(w, "total", r.total.to_string())?;
            writeln!(w)?;
            for (rank, entry) in r.words.iter().enumerate() {
                writeln!(w, "{:>4}. {:>8}  {}", rank + 1, entry.count, entry.word)?;
            }
            Ok(())
        },
    )
}
