use anyhow::Result;
use regex::Regex;

use crate::models::{PackageLicense, ParseOutcome};

/// Box-drawing vertical bar used for the table's cell borders.
const VERTICAL_BAR: char = '\u{2502}';

/// License field text the checker emits when no license file was found.
const NO_LICENSE_SENTINEL: &str = "No license file";

/// Parse a captured license table into package/license pairs.
///
/// The checker renders a box-drawing table: a column-header row between a
/// top border and a header separator, data rows, then a bottom border.
/// Data rows are located structurally — they are the lines strictly between
/// the last two border lines — rather than by fixed header/footer offsets,
/// so a change in the checker's preamble or title rows does not shift the
/// data region. Input with fewer than two border lines (e.g. injected test
/// text) is treated as all data rows.
///
/// Each data row is stripped of vertical bars, trimmed, and split at the
/// rightmost run of two or more spaces into (name, license); package names
/// may contain internal single spaces. Rows without such a run are collected
/// in [`ParseOutcome::skipped`].
pub fn parse_table(text: &str) -> Result<ParseOutcome> {
    let separator = Regex::new(r" {2,}")?;
    let lines: Vec<&str> = text.lines().collect();

    let mut outcome = ParseOutcome::default();
    for raw in data_rows(&lines) {
        let cleaned = raw.replace(VERTICAL_BAR, "");
        let cleaned = cleaned.trim();
        if cleaned.is_empty() {
            continue;
        }

        let Some(split) = separator.find_iter(cleaned).last() else {
            outcome.skipped.push(raw.to_string());
            continue;
        };

        // cleaned is trimmed, so the match is interior and both sides non-empty
        let name = cleaned[..split.start()].trim();
        let license = cleaned[split.end()..].trim();

        outcome.entries.push(PackageLicense {
            name: name.to_string(),
            license: (license != NO_LICENSE_SENTINEL).then(|| license.to_string()),
        });
    }

    Ok(outcome)
}

/// Select the candidate data rows: the lines strictly between the last two
/// border lines, or every line when no table frame is present.
fn data_rows<'a>(lines: &'a [&'a str]) -> &'a [&'a str] {
    let borders: Vec<usize> = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| is_border_line(line))
        .map(|(i, _)| i)
        .collect();

    match borders.as_slice() {
        [.., header_end, bottom] => &lines[header_end + 1..*bottom],
        _ => lines,
    }
}

/// A border line consists solely of Unicode box-drawing characters
/// (`─ │ ┌ ┐ └ ┘ ├ ┤ ┬ ┴ ┼` and friends, U+2500–U+257F).
fn is_border_line(line: &str) -> bool {
    let trimmed = line.trim();
    !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|c| ('\u{2500}'..='\u{257F}').contains(&c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    const TABLE: &str = "\
Building package executable...
┌──────────────────────────────────────────────┐
│ Package Name                License          │
├──────────────────────────────────────────────┤
│ some_pkg                    MIT              │
│ other_pkg          No license file           │
│ my spaced pkg               BSD-3-Clause     │
└──────────────────────────────────────────────┘
";

    #[test]
    fn test_every_well_formed_row_yields_one_entry() {
        let outcome = parse_table(TABLE).unwrap();
        assert_eq!(outcome.entries.len(), 3);
        assert!(outcome.skipped.is_empty());

        let map = outcome.mapping();
        assert_eq!(map["some_pkg"], Value::String("MIT".to_string()));
        assert_eq!(map["my spaced pkg"], Value::String("BSD-3-Clause".to_string()));
    }

    #[test]
    fn test_column_header_row_is_not_an_entry() {
        let outcome = parse_table(TABLE).unwrap();
        assert!(!outcome.mapping().contains_key("Package Name"));
    }

    #[test]
    fn test_no_license_sentinel_maps_to_null() {
        let outcome = parse_table(TABLE).unwrap();
        assert_eq!(outcome.mapping()["other_pkg"], Value::Null);
    }

    #[test]
    fn test_single_row_split_happens_at_rightmost_run() {
        let outcome = parse_table("│ some_pkg                    MIT                │").unwrap();
        assert_eq!(
            outcome.entries,
            vec![PackageLicense {
                name: "some_pkg".to_string(),
                license: Some("MIT".to_string()),
            }]
        );
    }

    #[test]
    fn test_sentinel_keeps_its_internal_single_spaces_intact() {
        let outcome = parse_table("│ other_pkg          No license file  │").unwrap();
        assert_eq!(
            outcome.entries,
            vec![PackageLicense {
                name: "other_pkg".to_string(),
                license: None,
            }]
        );
    }

    #[test]
    fn test_row_without_separator_run_is_skipped_and_reported() {
        let text = "\
┌──────────────────────┐
│ Package Name  License│
├──────────────────────┤
│ good_pkg         MIT │
│ one-field-only-row │
└──────────────────────┘
";
        let outcome = parse_table(text).unwrap();
        assert_eq!(outcome.entries.len(), 1);
        assert_eq!(outcome.skipped, vec!["│ one-field-only-row │"]);
    }

    #[test]
    fn test_header_and_footer_only_yields_empty_outcome() {
        let text = "\
┌──────────────────────┐
│ Package Name  License│
├──────────────────────┤
└──────────────────────┘
";
        let outcome = parse_table(text).unwrap();
        assert!(outcome.entries.is_empty());
        assert!(outcome.skipped.is_empty());
        assert!(outcome.mapping().is_empty());
    }

    #[test]
    fn test_unframed_text_is_parsed_as_data_rows() {
        let outcome = parse_table("alpha   MIT\nbeta  Apache-2.0\n").unwrap();
        assert_eq!(outcome.entries.len(), 2);
        assert_eq!(outcome.entries[1].name, "beta");
    }

    #[test]
    fn test_blank_lines_are_dropped_without_being_reported() {
        let outcome = parse_table("alpha   MIT\n\n   \n").unwrap();
        assert_eq!(outcome.entries.len(), 1);
        assert!(outcome.skipped.is_empty());
    }

    #[test]
    fn test_empty_input_yields_empty_outcome() {
        let outcome = parse_table("").unwrap();
        assert!(outcome.entries.is_empty());
        assert!(outcome.skipped.is_empty());
    }

    #[test]
    fn test_trailing_spaces_do_not_create_a_split_point() {
        let outcome = parse_table("dangling_pkg   \n").unwrap();
        assert!(outcome.entries.is_empty());
        assert_eq!(outcome.skipped.len(), 1);
    }
}
