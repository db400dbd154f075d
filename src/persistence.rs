// File: src/persistence.rs
use crate::core::tokenizer::join_lines;
use crate::error::{AnalysisError, Result};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Reads a one-line-per-sentence IPA file and joins it into a single stream.
pub fn read_corpus(path: &Path) -> Result<String> {
    let text = fs::read_to_string(path).map_err(|source| AnalysisError::Input {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("read {} ({} bytes)", path.display(), text.len());
    Ok(join_lines(&text))
}

/// Writes `contents` next to `path` in a temp file, then renames it into
/// place so a failed write never leaves a partial report.
pub fn write_report(path: &Path, contents: &str) -> Result<()> {
    let output_err = |source| AnalysisError::Output {
        path: path.to_path_buf(),
        source,
    };

    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir).map_err(output_err)?;

    let temp_file = NamedTempFile::new_in(parent_dir).map_err(output_err)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        writer.write_all(contents.as_bytes()).map_err(output_err)?;
        writer.flush().map_err(output_err)?;
    }

    temp_file.persist(path).map_err(|e| output_err(e.error))?;
    log::info!("wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corpus_lines_are_joined() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("x-ipa.txt");
        fs::write(&path, "ba\nba\n").unwrap();
        assert_eq!(read_corpus(&path).unwrap(), "ba ba");
    }

    #[test]
    fn missing_corpus_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-ipa.txt");
        match read_corpus(&path) {
            Err(AnalysisError::Input { path: p, .. }) => assert_eq!(p, path),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn report_replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("x-stats.txt");
        fs::write(&path, "old").unwrap();
        write_report(&path, "new\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new\n");
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }
}
