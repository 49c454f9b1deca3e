//! Plain-text rendering of a dashboard report for terminal output.

use std::fmt;

use crate::constants::fields::LABEL_TITLE;
use crate::report::DashboardReport;
use crate::utils::{normalize_inline_whitespace, truncate_chars};

const BAR_WIDTH: usize = 40;
const TOP_WORDS_SHOWN: usize = 20;
const TITLE_WIDTH: usize = 48;
const EMPTY: &str = "(kosong)";

/// Terminal layout of every view of a dashboard report.
pub struct TextReport<'a>(pub &'a DashboardReport);

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        writeln!(out, "Visualisasi Artikel Prolaps Uteri")?;
        writeln!(
            out,
            "Filter: tahun={} judul={:?} | {} artikel (dimuat {}, tanggal valid {}, relevan {})",
            report.filters.year,
            report.filters.search,
            report.counts.filtered,
            report.counts.loaded,
            report.counts.dated,
            report.counts.on_topic,
        )?;
        let choices: Vec<String> = report.year_choices.iter().map(|c| c.to_string()).collect();
        writeln!(out, "Pilihan tahun: {}", choices.join(", "))?;

        section(out, "1. Jumlah Artikel per Bulan")?;
        if report.monthly_counts.is_empty() {
            writeln!(out, "{EMPTY}")?;
        }
        let max_month = report.monthly_counts.iter().map(|m| m.count).max().unwrap_or(0);
        for entry in &report.monthly_counts {
            writeln!(
                out,
                "{} | {} {}",
                entry.month,
                bar(entry.count, max_month),
                entry.count
            )?;
        }

        section(out, "2. Distribusi Panjang Artikel (Jumlah Kata)")?;
        let dist = &report.word_counts;
        if dist.bins.is_empty() {
            writeln!(out, "{EMPTY}")?;
        } else {
            let max_bin = dist.bins.iter().map(|b| b.count).max().unwrap_or(0);
            for bin in &dist.bins {
                writeln!(
                    out,
                    "{:>9.1} - {:<9.1} | {} {}",
                    bin.lower,
                    bin.upper,
                    bar(bin.count, max_bin),
                    bin.count
                )?;
            }
            if let Some(mean) = dist.mean {
                writeln!(
                    out,
                    "n={} min={} max={} rata-rata={:.1}",
                    dist.sample_size,
                    dist.min.unwrap_or(0),
                    dist.max.unwrap_or(0),
                    mean
                )?;
            }
        }

        section(out, "3. WordCloud dari Konten Artikel")?;
        if report.word_cloud.is_empty() {
            writeln!(out, "{EMPTY}")?;
        } else {
            let words: Vec<String> = report
                .word_cloud
                .frequencies
                .iter()
                .take(TOP_WORDS_SHOWN)
                .map(|w| format!("{} ({})", w.word, w.count))
                .collect();
            writeln!(out, "{}", words.join(", "))?;
        }

        section(out, "5 Artikel Terbaru")?;
        if report.recent.is_empty() {
            return writeln!(out, "{EMPTY}");
        }
        writeln!(
            out,
            "{:<width$} | {:<10} | {:<16} | link",
            LABEL_TITLE,
            "tanggal",
            "sumber",
            width = TITLE_WIDTH
        )?;
        for item in &report.recent {
            let title = normalize_inline_whitespace(item.title.as_deref().unwrap_or("-"));
            writeln!(
                out,
                "{:<width$} | {:<10} | {:<16} | {}",
                truncate_chars(&title, TITLE_WIDTH),
                item.tanggal_publish,
                truncate_chars(item.sumber.as_deref().unwrap_or("-"), 16),
                item.link.as_deref().unwrap_or("-"),
                width = TITLE_WIDTH
            )?;
        }
        Ok(())
    }
}

fn section(out: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
    writeln!(out)?;
    writeln!(out, "{title}")?;
    writeln!(out, "{}", "-".repeat(title.chars().count()))
}

fn bar(count: usize, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let len = (count * BAR_WIDTH).div_ceil(max);
    "#".repeat(len)
}
