//! Reading `.ron` fixtures from disk.

use crate::{NlpFixture, SpecError, SpecResult};
use std::fs;
use std::path::{Path, PathBuf};

/// Parse fixture text. `path` only labels errors.
pub fn parse_fixture(content: &str, path: &str) -> SpecResult<NlpFixture> {
    ron::from_str(content).map_err(|e| SpecError::ron(path, e))
}

pub fn load_fixture(path: &Path) -> SpecResult<NlpFixture> {
    let content = fs::read_to_string(path).map_err(|e| load_error(path, e))?;
    parse_fixture(&content, &path.display().to_string())
}

/// Every `.ron` file under `dir`, named by its path relative to `dir` and
/// sorted by that name. A missing directory holds no fixtures.
pub fn load_all_fixtures(dir: &Path) -> SpecResult<Vec<(String, NlpFixture)>> {
    let mut named: Vec<(String, PathBuf)> = fixture_paths(dir)?
        .into_iter()
        .map(|path| {
            let name = path.strip_prefix(dir).unwrap_or(path.as_path()).display().to_string();
            (name, path)
        })
        .collect();
    named.sort();

    named
        .into_iter()
        .map(|(name, path)| -> SpecResult<(String, NlpFixture)> {
            let fixture = load_fixture(&path)?;
            Ok((name, fixture))
        })
        .collect()
}

fn fixture_paths(dir: &Path) -> SpecResult<Vec<PathBuf>> {
    let mut found = Vec::new();
    let mut pending = vec![dir.to_path_buf()];
    while let Some(dir) = pending.pop() {
        if !dir.is_dir() {
            continue;
        }
        for entry in fs::read_dir(&dir).map_err(|e| load_error(&dir, e))? {
            let path = entry.map_err(|e| load_error(&dir, e))?.path();
            if path.is_dir() {
                pending.push(path);
            } else if path.extension().map_or(false, |ext| ext == "ron") {
                found.push(path);
            }
        }
    }
    Ok(found)
}

fn load_error(path: &Path, err: std::io::Error) -> SpecError {
    SpecError::Load {
        path: path.display().to_string(),
        message: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_fixture() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("fixtures")
            .join("copular.ron");
        let fixture = load_fixture(&path).unwrap();
        assert!(!fixture.title.is_empty());
    }

    #[test]
    fn test_load_all_fixtures() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures");
        let fixtures = load_all_fixtures(&dir).unwrap();
        assert!(fixtures.len() >= 4);
        assert!(fixtures.iter().all(|(name, _)| name.ends_with(".ron")));
    }

    #[test]
    fn test_parse_error_has_line() {
        let err = parse_fixture("(\n  title: \"x\",\n  documents: 3,\n)", "broken.ron").unwrap_err();
        match err {
            SpecError::Parse { path, line, .. } => {
                assert_eq!(path, "broken.ron");
                assert!(line >= 3);
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_invalid_document_is_a_parse_error() {
        let mut file = tempfile::Builder::new().suffix(".ron").tempfile().unwrap();
        write!(
            file,
            r#"(documents: [(text: "x", tokens: [(text: "x", pos: "X", dep: "ROOT", head: 4)])])"#
        )
        .unwrap();

        let err = load_fixture(file.path()).unwrap_err();
        assert!(err.to_string().contains("head 4"), "{}", err);
    }

    #[test]
    fn test_nested_fixtures_are_named_by_relative_path() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested").join("b.ron"), "(title: \"b\")").unwrap();
        fs::write(dir.path().join("a.ron"), "(title: \"a\")").unwrap();
        fs::write(dir.path().join("notes.txt"), "not a fixture").unwrap();

        let fixtures = load_all_fixtures(dir.path()).unwrap();
        let names: Vec<String> = fixtures.iter().map(|(name, _)| name.replace('\\', "/")).collect();
        assert_eq!(names, ["a.ron", "nested/b.ron"]);
        assert_eq!(fixtures[1].1.title, "b");
    }

    #[test]
    fn test_missing_dir_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_all_fixtures(&dir.path().join("nope")).unwrap().is_empty());
    }
}
