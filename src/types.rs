/// Identifier for the store that produced a document set.
/// Examples: `memory`, `articles.jsonl`, `utercare_db/article`
pub type SourceId = String;
/// Column name in the working table.
/// Examples: `_id`, `title`, `isi`, `tanggal_publish`, `jumlah_kata`
pub type ColumnName = String;
/// Lower-cased topical keyword matched against body text.
/// Examples: `prolaps uteri`, `panggul`
pub type Keyword = String;
/// Month bucket label derived from a publish date.
/// Example: `2023-01`
pub type MonthBucket = String;
/// Store location string resolved from CLI, environment, or defaults.
/// Examples: `jsonl://data/articles.jsonl`, `dir:///srv/utercare/article`
pub type StoreUri = String;
/// Single token counted for the word cloud.
/// Example: `panggul`
pub type Word = String;
