//! Tabular classification results and their CSV form.

use std::io::Write;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::difficulty::{Difficulty, ScoreCard};
use crate::error::{ExportError, ExportResult};

/// CSV column headers, in column order.
pub const CSV_HEADERS: [&str; 5] = [
    "Track Name",
    "Difficulty",
    "% Rare Words",
    "Avg Words/Sentence",
    "Readability (Flesch)",
];

/// One classified lyric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ResultRow {
    /// Session key of the lyric.
    pub track_name: String,
    /// Difficulty label.
    pub difficulty: Difficulty,
    /// Share of rare words, in `[0, 1]`.
    pub rare_ratio: f64,
    /// Mean words per sentence.
    pub avg_sentence_length: f64,
    /// Flesch Reading Ease.
    pub readability: f64,
}

impl ResultRow {
    /// Build a row from a track name and its score card.
    pub fn new(track_name: impl Into<String>, card: ScoreCard) -> Self {
        Self {
            track_name: track_name.into(),
            difficulty: card.difficulty,
            rare_ratio: card.rare_ratio,
            avg_sentence_length: card.avg_sentence_length,
            readability: card.readability,
        }
    }
}

/// Row layout on disk, with the display headers.
#[derive(Serialize, Deserialize)]
struct CsvRow {
    #[serde(rename = "Track Name")]
    track_name: String,
    #[serde(rename = "Difficulty")]
    difficulty: Difficulty,
    #[serde(rename = "% Rare Words")]
    rare_ratio: f64,
    #[serde(rename = "Avg Words/Sentence")]
    avg_sentence_length: f64,
    #[serde(rename = "Readability (Flesch)")]
    readability: f64,
}

impl From<&ResultRow> for CsvRow {
    fn from(row: &ResultRow) -> Self {
        Self {
            track_name: row.track_name.clone(),
            difficulty: row.difficulty,
            rare_ratio: row.rare_ratio,
            avg_sentence_length: row.avg_sentence_length,
            readability: row.readability,
        }
    }
}

impl From<CsvRow> for ResultRow {
    fn from(row: CsvRow) -> Self {
        Self {
            track_name: row.track_name,
            difficulty: row.difficulty,
            rare_ratio: row.rare_ratio,
            avg_sentence_length: row.avg_sentence_length,
            readability: row.readability,
        }
    }
}

/// Ordered collection of [`ResultRow`]s.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct ResultsTable {
    /// Rows in session order.
    pub rows: Vec<ResultRow>,
}

impl ResultsTable {
    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows in order.
    pub fn iter(&self) -> std::slice::Iter<'_, ResultRow> {
        self.rows.iter()
    }

    /// Rows whose name contains `name` (case-insensitive) and whose label
    /// equals `difficulty`. `None` disables either filter.
    pub fn filter(&self, name: Option<&str>, difficulty: Option<Difficulty>) -> Self {
        let needle = name.map(str::to_lowercase);
        self.rows
            .iter()
            .filter(|row| {
                needle
                    .as_deref()
                    .is_none_or(|n| row.track_name.to_lowercase().contains(n))
            })
            .filter(|row| difficulty.is_none_or(|d| row.difficulty == d))
            .cloned()
            .collect()
    }

    /// Number of rows carrying each label, easiest first.
    pub fn counts(&self) -> [(Difficulty, usize); 3] {
        Difficulty::ALL.map(|d| (d, self.rows.iter().filter(|r| r.difficulty == d).count()))
    }

    /// Write the table as CSV with a header row.
    pub fn write_csv<W: Write>(&self, writer: W) -> ExportResult<()> {
        let mut wtr = csv::WriterBuilder::new()
            .has_headers(true)
            .quote_style(csv::QuoteStyle::Necessary)
            .from_writer(writer);

        if self.rows.is_empty() {
            // Serialization emits headers lazily, so an empty table needs them spelled out
            wtr.write_record(CSV_HEADERS)?;
        }
        for row in &self.rows {
            wtr.serialize(CsvRow::from(row))?;
        }
        wtr.flush()?;
        Ok(())
    }

    /// Render the table as a CSV string.
    pub fn to_csv(&self) -> ExportResult<String> {
        let mut buf = Vec::new();
        self.write_csv(&mut buf)?;
        String::from_utf8(buf).map_err(|_| ExportError::Utf8)
    }

    /// Parse a table previously written by [`Self::write_csv`].
    pub fn from_csv(data: &str) -> ExportResult<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(data.as_bytes());
        let rows = rdr
            .deserialize::<CsvRow>()
            .map(|row| row.map(ResultRow::from))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rows })
    }
}

impl FromIterator<ResultRow> for ResultsTable {
    fn from_iter<I: IntoIterator<Item = ResultRow>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ResultsTable {
    type Item = &'a ResultRow;
    type IntoIter = std::slice::Iter<'a, ResultRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, difficulty: Difficulty, rare: f64) -> ResultRow {
        ResultRow {
            track_name: name.to_string(),
            difficulty,
            rare_ratio: rare,
            avg_sentence_length: 7.5,
            readability: 81.29,
        }
    }

    fn sample() -> ResultsTable {
        [
            row("Evidencias.txt", Difficulty::Easy, 0.1),
            row("Tempo Perdido.txt", Difficulty::Hard, 0.42),
            row("Pais e Filhos.txt", Difficulty::Medium, 0.25),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn json_is_a_plain_array_of_rows() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json[1]["track_name"], "Tempo Perdido.txt");
        assert_eq!(json[1]["difficulty"], "Hard");
        assert_eq!(json.as_array().unwrap().len(), 3);
    }

    #[test]
    fn csv_has_display_headers() {
        let csv = sample().to_csv().unwrap();
        let header = csv.lines().next().unwrap();
        assert_eq!(
            header,
            "Track Name,Difficulty,% Rare Words,Avg Words/Sentence,Readability (Flesch)"
        );
        assert!(csv.contains("Tempo Perdido.txt,Hard,0.42,7.5,81.29"));
    }

    #[test]
    fn csv_round_trip_reproduces_rows() {
        let mut table = sample();
        table.rows.push(row("Comma, \"Quoted\".txt", Difficulty::Easy, 0.0));
        let parsed = ResultsTable::from_csv(&table.to_csv().unwrap()).unwrap();
        assert_eq!(parsed, table);
    }

    #[test]
    fn empty_table_still_writes_headers() {
        let csv = ResultsTable::default().to_csv().unwrap();
        assert_eq!(csv.lines().count(), 1);
        assert!(ResultsTable::from_csv(&csv).unwrap().is_empty());
    }

    #[test]
    fn bad_csv_errors() {
        let result = ResultsTable::from_csv(
            "Track Name,Difficulty,% Rare Words,Avg Words/Sentence,Readability (Flesch)\n\
             x.txt,Impossible,0,0,0\n",
        );
        assert!(matches!(result, Err(ExportError::Csv(_))));
    }

    #[test]
    fn filter_by_name_is_case_insensitive() {
        let filtered = sample().filter(Some("tempo"), None);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered.rows[0].track_name, "Tempo Perdido.txt");
    }

    #[test]
    fn filter_by_difficulty_and_name() {
        let table = sample();
        assert_eq!(table.filter(None, Some(Difficulty::Medium)).len(), 1);
        assert_eq!(table.filter(Some("txt"), Some(Difficulty::Easy)).len(), 1);
        assert!(table.filter(Some("tempo"), Some(Difficulty::Easy)).is_empty());
        assert_eq!(table.filter(None, None), table);
    }

    #[test]
    fn counts_per_label() {
        let counts = sample().counts();
        assert_eq!(
            counts,
            [
                (Difficulty::Easy, 1),
                (Difficulty::Medium, 1),
                (Difficulty::Hard, 1)
            ]
        );
    }
}
