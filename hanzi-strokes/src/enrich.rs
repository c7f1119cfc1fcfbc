//! Attaching stroke geometry to deck documents.

use serde_json::Value;

use crate::database::StrokeDatabase;

/// The outcome of enriching one deck document.
#[derive(Clone, Debug, Default)]
pub struct EnrichmentSummary {
    /// The number of characters that received stroke geometry.
    pub updated: usize,

    /// The simplified forms with no geometry in the dataset, in item order.
    pub missing: Vec<String>,
}

/// Attaches stroke geometry to every character of a parsed deck document.
///
/// The document is modified in place: each character entry whose
/// `simplified` form is in the database gets a `strokeOrder` field (an
/// existing payload is replaced), and every other field of the document is
/// left untouched. Characters absent from the dataset are recorded in the
/// summary.
pub fn enrich_deck(deck: &mut Value, database: &StrokeDatabase) -> EnrichmentSummary {
    let mut summary = EnrichmentSummary::default();

    let Some(characters) = deck.get_mut("characters").and_then(Value::as_array_mut) else {
        return summary;
    };

    for character in characters {
        let Some(simplified) = character
            .get("simplified")
            .and_then(Value::as_str)
            .map(str::to_owned)
        else {
            continue;
        };

        match database.get(&simplified) {
            Some(order) => {
                let payload =
                    serde_json::to_value(order).expect("stroke geometry should serialize");
                if let Some(fields) = character.as_object_mut() {
                    fields.insert("strokeOrder".to_string(), payload);
                    summary.updated += 1;
                }
            }
            None => summary.missing.push(simplified),
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn enrichment_attaches_payloads_and_reports_misses() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file should be created");
        writeln!(
            file,
            r#"{{"character": "你", "strokes": ["M 1 2 L 3 4"], "medians": [[[1.0, 2.0]]]}}"#
        )
        .expect("line should be written");
        let database = StrokeDatabase::load(file.path()).expect("database should load");

        let mut deck = json!({
            "name": "Greetings",
            "tags": ["beginner"],
            "characters": [
                {"simplified": "你", "pinyin": "nǐ"},
                {"simplified": "好", "pinyin": "hǎo"},
            ],
        });

        let summary = enrich_deck(&mut deck, &database);

        assert_eq!(summary.updated, 1);
        assert_eq!(summary.missing, vec!["好".to_string()]);

        let payload = &deck["characters"][0]["strokeOrder"];
        assert_eq!(payload["strokes"], json!(["M 1 2 L 3 4"]));
        assert_eq!(payload["source"], json!("makemeahanzi"));
        assert_eq!(payload["viewBox"], json!({"width": 1024.0, "height": 1024.0}));

        // Everything else is untouched.
        assert_eq!(deck["tags"], json!(["beginner"]));
        assert_eq!(deck["characters"][1].get("strokeOrder"), None);
    }

    #[test]
    fn documents_without_characters_are_left_alone() {
        let database = StrokeDatabase::default();
        let mut deck = json!({"name": "Empty"});

        let summary = enrich_deck(&mut deck, &database);

        assert_eq!(summary.updated, 0);
        assert!(summary.missing.is_empty());
        assert_eq!(deck, json!({"name": "Empty"}));
    }
}
