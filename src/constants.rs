/// Canonical field names of article documents and derived columns.
pub mod fields {
    /// Article headline.
    pub const FIELD_TITLE: &str = "title";
    /// Article body text.
    pub const FIELD_BODY: &str = "isi";
    /// Publish date as stored (string or extended JSON date).
    pub const FIELD_PUBLISH_DATE: &str = "tanggal_publish";
    /// Publisher name.
    pub const FIELD_SOURCE: &str = "sumber";
    /// Article URL.
    pub const FIELD_LINK: &str = "link";
    /// Derived whitespace token count of the body.
    pub const FIELD_WORD_COUNT: &str = "jumlah_kata";
    /// Derived `YYYY-MM` month bucket.
    pub const FIELD_MONTH: &str = "bulan";
    /// Display label used for the title column of the recent-items table.
    pub const LABEL_TITLE: &str = "Judul";
}

/// Defaults used by the filtering and reporting pipeline.
pub mod pipeline {
    /// Topical keywords matched (case-insensitively) against article bodies.
    pub const DEFAULT_TOPIC_KEYWORDS: [&str; 4] =
        ["prolaps uteri", "turun peranakan", "panggul", "uterine"];
    /// Number of equal-width bins in the word-count histogram.
    pub const DEFAULT_HISTOGRAM_BINS: usize = 20;
    /// Number of evaluation points of the word-count density curve.
    pub const DENSITY_GRID_POINTS: usize = 200;
    /// Number of rows shown in the recent-items table.
    pub const DEFAULT_RECENT_LIMIT: usize = 5;
    /// Maximum number of ranked words handed to the word cloud layout.
    pub const DEFAULT_WORD_CLOUD_MAX_WORDS: usize = 200;
    /// Shortest token kept for the word cloud.
    pub const WORD_CLOUD_MIN_TOKEN_CHARS: usize = 2;
    /// Year selector label meaning "no year restriction".
    pub const YEAR_ALL_LABEL: &str = "Semua";
    /// Display format of month buckets.
    pub const MONTH_BUCKET_FORMAT: &str = "%Y-%m";
    /// Display format of dates in the recent-items table.
    pub const DISPLAY_DATE_FORMAT: &str = "%Y-%m-%d";
}

/// Constants describing the downloadable artifact.
pub mod export {
    /// Fixed filename of the exported artifact.
    pub const EXPORT_FILENAME: &str = "prolaps_articles.csv";
    /// Media type of the exported artifact.
    pub const EXPORT_MEDIA_TYPE: &str = "text/csv";
    /// Date format used when every exported timestamp is at midnight.
    pub const EXPORT_DATE_FORMAT: &str = "%Y-%m-%d";
    /// Date format used when any exported timestamp carries a time of day.
    pub const EXPORT_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
    /// Date format used when any exported timestamp has fractional seconds.
    pub const EXPORT_DATETIME_MICROS_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";
}

/// Constants used to resolve and open the document store.
pub mod store {
    /// Environment variable carrying the store location.
    pub const STORE_URI_ENV: &str = "UTERCARE_STORE_URI";
    /// Project-relative fallback locations probed when no URI is configured.
    pub const DEFAULT_STORE_CANDIDATES: [&str; 2] =
        ["data/articles.jsonl", "../data/articles.jsonl"];
    /// Scheme prefix for JSON Lines collection files.
    pub const SCHEME_JSONL: &str = "jsonl://";
    /// Scheme prefix for JSON array collection files.
    pub const SCHEME_JSON: &str = "json://";
    /// Scheme prefix for one-document-per-file directories.
    pub const SCHEME_DIR: &str = "dir://";
    /// Generic file scheme, dispatched on the path.
    pub const SCHEME_FILE: &str = "file://";
    /// Source id used by in-memory stores.
    pub const MEMORY_SOURCE_ID: &str = "memory";
    /// Log message used when unreadable document files are skipped.
    pub const SKIP_UNREADABLE_MSG: &str = "skipping unreadable document file";
}

/// User-facing message text.
pub mod messages {
    /// Warning shown when the store holds no documents at all.
    pub const NO_DATA_MSG: &str = "Tidak ada data artikel yang ditemukan di database.";
}
