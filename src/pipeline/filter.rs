use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::constants::pipeline::YEAR_ALL_LABEL;
use crate::data::{ArticleFields, ArticleRow, Table};
use crate::errors::DashboardError;
use crate::utils::contains_lowercase;

/// Year selector value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum YearSelection {
    /// No year restriction.
    #[default]
    All,
    /// Keep only rows published in this calendar year.
    Year(i32),
}

impl YearSelection {
    /// Selector choices: "all" followed by `years` in ascending order.
    pub fn choices(years: &[i32]) -> Vec<YearSelection> {
        let mut sorted: Vec<i32> = years.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        std::iter::once(YearSelection::All)
            .chain(sorted.into_iter().map(YearSelection::Year))
            .collect()
    }
}

impl fmt::Display for YearSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YearSelection::All => f.write_str(YEAR_ALL_LABEL),
            YearSelection::Year(year) => write!(f, "{year}"),
        }
    }
}

impl FromStr for YearSelection {
    type Err = DashboardError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        if value.eq_ignore_ascii_case(YEAR_ALL_LABEL) || value.eq_ignore_ascii_case("all") {
            return Ok(YearSelection::All);
        }
        value.parse::<i32>().map(YearSelection::Year).map_err(|_| {
            DashboardError::Configuration(format!(
                "invalid year '{value}'; expected '{YEAR_ALL_LABEL}', 'all', or a number like 2023"
            ))
        })
    }
}

impl Serialize for YearSelection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// User-driven filters applied on top of the topical table.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DashboardFilters {
    /// Year restriction.
    pub year: YearSelection,
    /// Case-insensitive title substring; empty means no restriction.
    pub search: String,
}

impl DashboardFilters {
    /// Filters with a year selection and title query.
    pub fn new(year: YearSelection, search: impl Into<String>) -> Self {
        Self {
            year,
            search: search.into(),
        }
    }

    /// Whether these filters leave the table unchanged.
    pub fn is_passthrough(&self) -> bool {
        self.year == YearSelection::All && self.search.is_empty()
    }

    /// Whether a single row passes both filters.
    fn accepts(&self, row: &ArticleRow, search_lower: &str) -> bool {
        if let YearSelection::Year(year) = self.year
            && row.year() != year
        {
            return false;
        }
        if search_lower.is_empty() {
            return true;
        }
        row.title()
            .is_some_and(|title| contains_lowercase(title, search_lower))
    }

    /// New table holding the rows that pass both filters.
    ///
    /// The title query is matched as literal text, never as a pattern.
    pub fn apply(&self, table: &Table<ArticleRow>) -> Table<ArticleRow> {
        let search_lower = self.search.to_lowercase();
        table.retain_view(|row| self.accepts(row, &search_lower))
    }
}

/// Distinct publish years of `table`, ascending.
pub fn available_years(table: &Table<ArticleRow>) -> Vec<i32> {
    table
        .rows
        .iter()
        .map(ArticleRow::year)
        .collect::<BTreeSet<i32>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Article, RawDocument};
    use chrono::NaiveDate;
    use serde_json::{Value, json};

    fn row(title: Value, y: i32, m: u32) -> ArticleRow {
        let published_at = NaiveDate::from_ymd_opt(y, m, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        ArticleRow {
            article: Article {
                document: RawDocument::from_pairs([("title", title)]),
                published_at,
            },
            word_count: 1,
            month: format!("{y}-{m:02}"),
        }
    }

    fn sample_table() -> Table<ArticleRow> {
        Table::new(
            vec!["title".into()],
            vec![
                row(json!("Senam Panggul untuk Ibu"), 2022, 3),
                row(json!("Mengenal prolaps uteri"), 2023, 1),
                row(Value::Null, 2023, 2),
                row(json!("Tips PANGGUL sehat"), 2024, 7),
            ],
        )
    }

    #[test]
    fn passthrough_filters_are_a_no_op() {
        let table = sample_table();
        let filters = DashboardFilters::default();
        assert!(filters.is_passthrough());
        assert_eq!(filters.apply(&table), table);
    }

    #[test]
    fn year_filter_keeps_only_that_year() {
        let table = sample_table();
        for year in [2021, 2022, 2023, 2024, 2030] {
            let filtered = DashboardFilters::new(YearSelection::Year(year), "").apply(&table);
            assert!(filtered.rows.iter().all(|r| r.year() == year));
            let expected = table.rows.iter().filter(|r| r.year() == year).count();
            assert_eq!(filtered.len(), expected);
        }
    }

    #[test]
    fn search_is_case_insensitive_and_skips_missing_titles() {
        let table = sample_table();
        let filtered = DashboardFilters::new(YearSelection::All, "panggul").apply(&table);
        assert_eq!(filtered.len(), 2);
        let none = DashboardFilters::new(YearSelection::All, "tidak ada").apply(&table);
        assert!(none.is_empty());
    }

    #[test]
    fn search_treats_pattern_characters_literally() {
        let table = Table::new(
            vec!["title".into()],
            vec![
                row(json!("Prolaps (uteri) grade 2"), 2023, 1),
                row(json!("Prolaps uteri"), 2023, 1),
            ],
        );
        let filtered = DashboardFilters::new(YearSelection::All, "(uteri)").apply(&table);
        assert_eq!(filtered.len(), 1);
        let dotted = DashboardFilters::new(YearSelection::All, "p.olaps").apply(&table);
        assert!(dotted.is_empty());
    }

    #[test]
    fn year_and_search_compose_by_conjunction() {
        let table = sample_table();
        let filtered = DashboardFilters::new(YearSelection::Year(2024), "panggul").apply(&table);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered.rows[0].title(), Some("Tips PANGGUL sehat"));
    }

    #[test]
    fn year_selection_parses_and_displays() {
        assert_eq!("Semua".parse::<YearSelection>().unwrap(), YearSelection::All);
        assert_eq!("ALL".parse::<YearSelection>().unwrap(), YearSelection::All);
        assert_eq!(
            " 2023 ".parse::<YearSelection>().unwrap(),
            YearSelection::Year(2023)
        );
        assert!("tahun lalu".parse::<YearSelection>().is_err());
        assert_eq!(YearSelection::All.to_string(), "Semua");
        assert_eq!(YearSelection::Year(2023).to_string(), "2023");
    }

    #[test]
    fn choices_start_with_all_and_sort_years() {
        let choices = YearSelection::choices(&[2024, 2022, 2024]);
        assert_eq!(
            choices,
            vec![
                YearSelection::All,
                YearSelection::Year(2022),
                YearSelection::Year(2024)
            ]
        );
        assert_eq!(available_years(&sample_table()), vec![2022, 2023, 2024]);
    }
}
