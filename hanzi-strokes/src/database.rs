//! Loading the stroke geometry dataset.

use std::collections::HashMap;
use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use anyhow::Result;
use serde::Deserialize;

use crate::order::StrokeOrder;
use crate::order::ViewBox;

/// The attribution recorded on every payload built from the dataset.
const SOURCE: &str = "makemeahanzi";

/// One line of the `graphics.txt` dataset.
#[derive(Debug, Deserialize)]
struct Glyph {
    /// The character the glyph belongs to.
    character: String,

    /// SVG path strings, one per stroke.
    strokes: Vec<String>,

    /// Median points for each stroke.
    #[serde(default)]
    medians: Option<Vec<Vec<[f64; 2]>>>,
}

/// An in-memory index from simplified form to stroke geometry.
#[derive(Clone, Debug, Default)]
pub struct StrokeDatabase {
    /// The glyphs, keyed by character.
    glyphs: HashMap<String, StrokeOrder>,
}

impl StrokeDatabase {
    /// Loads a database from a `graphics.txt` dataset file.
    ///
    /// The file is line-delimited JSON, one glyph per line. Blank lines are
    /// skipped; lines that fail to parse are logged with their line number
    /// and skipped, so one bad record never discards the rest of the
    /// dataset.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("failed to open `{path}`", path = path.display()))?;

        let mut glyphs = HashMap::new();
        for (index, line) in BufReader::new(file).lines().enumerate() {
            let line = line
                .with_context(|| format!("failed to read `{path}`", path = path.display()))?;
            if line.trim().is_empty() {
                continue;
            }

            let glyph: Glyph = match serde_json::from_str(&line) {
                Ok(glyph) => glyph,
                Err(e) => {
                    tracing::warn!(
                        "skipping line {number} of `{path}`: {e}",
                        number = index + 1,
                        path = path.display()
                    );
                    continue;
                }
            };

            glyphs.insert(
                glyph.character,
                StrokeOrder {
                    strokes: glyph.strokes,
                    medians: glyph.medians.filter(|medians| !medians.is_empty()),
                    source: SOURCE.to_string(),
                    view_box: ViewBox::default(),
                },
            );
        }

        Ok(Self { glyphs })
    }

    /// Gets the stroke geometry for a character, if the dataset has it.
    pub fn get(&self, character: &str) -> Option<&StrokeOrder> {
        self.glyphs.get(character)
    }

    /// The number of characters in the database.
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Whether the database holds no characters.
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use pretty_assertions::assert_eq;

    use super::*;

    /// Writes a dataset file with the given lines and loads it.
    fn load_lines(lines: &[&str]) -> StrokeDatabase {
        let mut file = tempfile::NamedTempFile::new().expect("temp file should be created");
        for line in lines {
            writeln!(file, "{line}").expect("line should be written");
        }

        StrokeDatabase::load(file.path()).expect("database should load")
    }

    #[test]
    fn loads_glyphs_and_skips_bad_lines() {
        let database = load_lines(&[
            r#"{"character": "你", "strokes": ["M 1 2 L 3 4"], "medians": [[[1.0, 2.0], [3.0, 4.0]]]}"#,
            "",
            "not json",
            r#"{"character": "好", "strokes": ["M 5 6 L 7 8"]}"#,
        ]);

        assert_eq!(database.len(), 2);

        let glyph = database.get("你").expect("glyph should be present");
        assert_eq!(glyph.strokes, vec!["M 1 2 L 3 4".to_string()]);
        assert_eq!(glyph.medians, Some(vec![vec![[1.0, 2.0], [3.0, 4.0]]]));
        assert_eq!(glyph.source, "makemeahanzi");
        assert_eq!(glyph.view_box, ViewBox::default());

        assert!(database.get("爱").is_none());
    }

    #[test]
    fn empty_medians_are_normalized_to_none() {
        let database =
            load_lines(&[r#"{"character": "一", "strokes": ["M 0 0 L 9 9"], "medians": []}"#]);

        let glyph = database.get("一").expect("glyph should be present");
        assert_eq!(glyph.medians, None);
    }
}
