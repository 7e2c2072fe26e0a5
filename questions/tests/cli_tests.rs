use clap::Parser;
use questions::{run, Cli};
use serde_json::Value;
use std::fs;
use std::io::Cursor;
use tempfile::tempdir;

fn build_tiny_corpus(dir: &std::path::Path) {
    fs::write(
        dir.join("python.txt"),
        "Python is a programming language.\nPython was created by Guido van Rossum. It was first released in 1991.",
    )
    .unwrap();
    fs::write(dir.join("rust.txt"), "Rust is a systems programming language. Rust guarantees memory safety.").unwrap();
    fs::write(dir.join("README.md"), "Python Python Python created created").unwrap();
}

fn cli(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("questions").chain(args.iter().copied())).unwrap()
}

#[test]
fn prompts_and_prints_best_sentence() {
    let dir = tempdir().unwrap();
    build_tiny_corpus(dir.path());
    let cli = cli(&[dir.path().to_str().unwrap()]);

    let mut input = Cursor::new("Who created Python?\n");
    let mut output = Vec::new();
    let answer = run(&cli, &mut input, &mut output).unwrap();

    assert_eq!(answer.files[0].name, "python.txt");
    let printed = String::from_utf8(output).unwrap();
    assert_eq!(printed, "Query: Python was created by Guido van Rossum.\n");
}

#[test]
fn json_output_carries_scores() {
    let dir = tempdir().unwrap();
    build_tiny_corpus(dir.path());
    let cli = cli(&[dir.path().to_str().unwrap(), "--query", "memory safety", "--sentences", "2", "--json"]);

    let mut output = Vec::new();
    run(&cli, &mut Cursor::new(""), &mut output).unwrap();

    let json: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["files"][0]["name"], "rust.txt");
    let sentences = json["sentences"].as_array().unwrap();
    assert_eq!(sentences.len(), 1);
    assert_eq!(sentences[0]["text"], "Rust guarantees memory safety.");
    assert!(sentences[0]["density"].as_f64().unwrap() > 0.0);
}

#[test]
fn all_files_includes_other_extensions() {
    let dir = tempdir().unwrap();
    build_tiny_corpus(dir.path());
    let cli = cli(&[dir.path().to_str().unwrap(), "--all-files", "--query", "Python created", "--files", "3"]);

    let answer = run(&cli, &mut Cursor::new(""), &mut std::io::sink()).unwrap();
    assert_eq!(answer.files.len(), 3);
    assert_eq!(answer.files[0].name, "README.md");
}

#[test]
fn zero_counts_are_rejected() {
    assert!(Cli::try_parse_from(["questions", "corpus", "--files", "0"]).is_err());
    assert!(Cli::try_parse_from(["questions", "corpus", "--sentences", "0"]).is_err());
}

#[test]
fn missing_corpus_is_an_error() {
    let dir = tempdir().unwrap();
    let cli = cli(&[dir.path().join("missing").to_str().unwrap(), "--query", "anything"]);
    assert!(run(&cli, &mut Cursor::new(""), &mut std::io::sink()).is_err());
}

#[test]
fn extension_accepts_leading_dot() {
    let dir = tempdir().unwrap();
    build_tiny_corpus(dir.path());
    let cli = cli(&[dir.path().to_str().unwrap(), "--extension", ".txt", "--query", "memory safety"]);

    let answer = run(&cli, &mut Cursor::new(""), &mut std::io::sink()).unwrap();
    assert_eq!(answer.files[0].name, "rust.txt");
}
