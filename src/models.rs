use serde::Serialize;
use serde_json::{Map, Value};

/// One row of the checker's table: a package and its detected license.
///
/// `license` is `None` when the checker printed its "No license file"
/// sentinel for the package; that absence serializes to JSON `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PackageLicense {
    pub name: String,
    pub license: Option<String>,
}

/// Result of parsing one captured table.
///
/// `skipped` holds the raw text of every candidate row that did not parse,
/// so dropped rows stay visible instead of vanishing silently.
#[derive(Debug, Default)]
pub struct ParseOutcome {
    pub entries: Vec<PackageLicense>,
    pub skipped: Vec<String>,
}

impl ParseOutcome {
    /// Collapse the entries into a name → license map.
    ///
    /// Duplicate package names keep the position of the first occurrence
    /// and the license of the last one.
    pub fn mapping(&self) -> Map<String, Value> {
        let mut map = Map::new();
        for entry in &self.entries {
            let value = match &entry.license {
                Some(license) => Value::String(license.clone()),
                None => Value::Null,
            };
            map.insert(entry.name.clone(), value);
        }
        map
    }

    /// Number of entries whose license is absent.
    pub fn missing_count(&self) -> usize {
        self.entries.iter().filter(|e| e.license.is_none()).count()
    }
}
