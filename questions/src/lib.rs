use anyhow::{Context, Result};
use clap::builder::TypedValueParser;
use clap::Parser;
use engine::{answer, Answer, Corpus, EnglishNormalizer, FILE_MATCHES, SENTENCE_MATCHES};
use std::io::{BufRead, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "questions")]
#[command(about = "Answer a question with the best matching sentence from a text corpus", long_about = None)]
pub struct Cli {
    /// Corpus directory
    pub corpus: PathBuf,
    /// Query to answer; read from stdin when omitted
    #[arg(long, short)]
    pub query: Option<String>,
    /// Number of top documents to draw sentences from
    #[arg(long, default_value_t = FILE_MATCHES, value_parser = clap::value_parser!(u64).range(1..).map(|v| v as usize))]
    pub files: usize,
    /// Number of sentences to print
    #[arg(long, default_value_t = SENTENCE_MATCHES, value_parser = clap::value_parser!(u64).range(1..).map(|v| v as usize))]
    pub sentences: usize,
    /// Only read files with this extension
    #[arg(long, default_value = "txt", conflicts_with = "all_files")]
    pub extension: String,
    /// Read every file in the corpus directory regardless of extension
    #[arg(long, default_value_t = false)]
    pub all_files: bool,
    /// Print the scored answer as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

/// Run one query cycle. The prompt and results go to `output`.
pub fn run<R: BufRead, W: Write>(cli: &Cli, input: &mut R, output: &mut W) -> Result<Answer> {
    let extension = if cli.all_files { None } else { Some(cli.extension.as_str()) };
    let corpus = Corpus::load_dir(&cli.corpus, extension)
        .with_context(|| format!("loading corpus from {}", cli.corpus.display()))?;

    let query = match &cli.query {
        Some(q) => q.clone(),
        None => read_query(input, output)?,
    };

    let result = answer(&EnglishNormalizer, &corpus, &query, cli.files, cli.sentences)
        .context("answering query")?;
    tracing::info!(files = ?result.files.iter().map(|f| &f.name).collect::<Vec<_>>(), "selected documents");

    if cli.json {
        serde_json::to_writer_pretty(&mut *output, &result)?;
        writeln!(output)?;
    } else {
        for sentence in result.sentence_texts() {
            writeln!(output, "{sentence}")?;
        }
    }
    Ok(result)
}

fn read_query<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<String> {
    write!(output, "Query: ")?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line).context("reading query")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
