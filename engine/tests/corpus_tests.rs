use engine::{Corpus, Error};
use std::fs;
use tempfile::tempdir;

#[test]
fn loads_matching_files_by_name() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("b.txt"), "Bees buzz.").unwrap();
    fs::write(dir.path().join("a.txt"), "Ants march.").unwrap();
    fs::write(dir.path().join("notes.md"), "# ignored").unwrap();
    fs::create_dir(dir.path().join("nested")).unwrap();
    fs::write(dir.path().join("nested/c.txt"), "Not read.").unwrap();

    let corpus = Corpus::load_dir(dir.path(), Some("txt")).unwrap();
    assert_eq!(corpus.iter().map(|(name, _)| name).collect::<Vec<_>>(), vec!["a.txt", "b.txt"]);
    assert_eq!(corpus.get("a.txt"), Some("Ants march."));

    let all = Corpus::load_dir(dir.path(), None).unwrap();
    assert_eq!(all.len(), 3);
}

#[test]
fn missing_directory_is_reported() {
    let dir = tempdir().unwrap();
    let err = Corpus::load_dir(dir.path().join("nope"), None).unwrap_err();
    assert!(matches!(err, Error::NotADirectory(_)));
}

#[test]
fn non_utf8_file_is_an_io_error() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("bad.txt"), [0xff, 0xfe, 0x00]).unwrap();
    let err = Corpus::load_dir(dir.path(), Some("txt")).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}

#[test]
fn extension_with_leading_dot_matches() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "Ants march.").unwrap();
    let corpus = Corpus::load_dir(dir.path(), Some(".txt")).unwrap();
    assert_eq!(corpus.len(), 1);
}

#[cfg(unix)]
#[test]
fn non_utf8_names_are_skipped() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let dir = tempdir().unwrap();
    fs::write(dir.path().join(OsStr::from_bytes(b"bad\xff.txt")), "First.").unwrap();
    fs::write(dir.path().join(OsStr::from_bytes(b"bad\xfe.txt")), "Second.").unwrap();
    fs::write(dir.path().join("good.txt"), "Third.").unwrap();

    let corpus = Corpus::load_dir(dir.path(), Some("txt")).unwrap();
    assert_eq!(corpus.iter().map(|(name, _)| name).collect::<Vec<_>>(), vec!["good.txt"]);
}
