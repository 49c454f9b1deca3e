use serde_json::json;

use utercare::report::MonthlyCount;
use utercare::{
    DashboardError, DashboardFilters, DashboardPipeline, InMemorySource, PipelineConfig,
    RawDocument, WordCloudConfig, YearSelection,
};

fn article(title: &str, body: &str, date: &str) -> RawDocument {
    RawDocument::from_pairs([
        ("title", json!(title)),
        ("isi", json!(body)),
        ("tanggal_publish", json!(date)),
    ])
}

#[test]
fn empty_store_reports_no_data() {
    let pipeline = DashboardPipeline::with_defaults(InMemorySource::new(Vec::new())).unwrap();
    let err = pipeline.render(&DashboardFilters::default()).unwrap_err();
    assert!(matches!(err, DashboardError::NoData));
    assert_eq!(
        err.to_string(),
        "Tidak ada data artikel yang ditemukan di database."
    );
}

#[test]
fn off_topic_store_renders_empty_views() {
    let pipeline = DashboardPipeline::with_defaults(InMemorySource::new(vec![
        article("Flu", "demam dan batuk", "2023-01-01"),
        article("Diet", "makan sayur", "2023-02-01"),
    ]))
    .unwrap();
    let view = pipeline.render(&DashboardFilters::default()).unwrap();
    assert!(view.report.is_empty());
    assert!(view.report.monthly_counts.is_empty());
    assert!(view.report.word_counts.bins.is_empty());
    assert!(view.report.word_cloud.is_empty());
    assert!(view.report.recent.is_empty());
    assert_eq!(view.report.year_choices, vec![YearSelection::All]);
    assert_eq!(view.report.counts.loaded, 2);
}

#[test]
fn monthly_counts_per_bucket() {
    let pipeline = DashboardPipeline::with_defaults(InMemorySource::new(vec![
        article("Feb", "senam panggul", "2023-02-20"),
        article("Jan", "prolaps uteri", "2023-01-15"),
    ]))
    .unwrap();
    let view = pipeline.render(&DashboardFilters::default()).unwrap();
    assert_eq!(
        view.report.monthly_counts,
        vec![
            MonthlyCount {
                month: "2023-01".into(),
                count: 1
            },
            MonthlyCount {
                month: "2023-02".into(),
                count: 1
            },
        ]
    );
}

#[test]
fn unmatched_search_exports_header_only() {
    let pipeline = DashboardPipeline::with_defaults(InMemorySource::new(vec![
        article("Senam Kegel", "senam panggul", "2023-02-20"),
    ]))
    .unwrap();
    let view = pipeline
        .render(&DashboardFilters::new(YearSelection::All, "tidak ada judul seperti ini"))
        .unwrap();
    assert!(view.report.is_empty());
    assert!(view.report.recent.is_empty());
    let artifact = view.export().unwrap();
    assert_eq!(artifact.media_type, "text/csv");
    assert_eq!(
        artifact.as_str().unwrap(),
        "title,isi,tanggal_publish,jumlah_kata,bulan\n"
    );
}

#[test]
fn histogram_uses_twenty_bins_over_word_counts() {
    let docs: Vec<RawDocument> = (1..=30)
        .map(|n| {
            let body = format!("prolaps uteri {}", "kata ".repeat(n));
            article(&format!("t{n}"), &body, "2023-03-01")
        })
        .collect();
    let pipeline = DashboardPipeline::with_defaults(InMemorySource::new(docs)).unwrap();
    let view = pipeline.render(&DashboardFilters::default()).unwrap();
    let dist = &view.report.word_counts;
    assert_eq!(dist.bins.len(), 20);
    assert_eq!(dist.bins.iter().map(|b| b.count).sum::<usize>(), 30);
    assert_eq!(dist.min, Some(3));
    assert_eq!(dist.max, Some(32));
    assert!(!dist.density.is_empty());
}

#[test]
fn word_cloud_reads_filtered_bodies() {
    let pipeline = DashboardPipeline::with_defaults(InMemorySource::new(vec![
        article("A", "Senam panggul rutin, senam panggul sehat", "2023-01-01"),
        article("B", "prolaps uteri dan operasi", "2022-01-01"),
    ]))
    .unwrap();
    let view = pipeline
        .render(&DashboardFilters::new(YearSelection::Year(2023), ""))
        .unwrap();
    let cloud = &view.report.word_cloud;
    assert_eq!(cloud.documents, 1);
    assert!(!cloud.text.contains("operasi"));
    let top = &cloud.frequencies[0];
    assert!(top.word == "senam" || top.word == "panggul");
    assert_eq!(top.count, 2);
}

#[test]
fn injected_recent_limit_and_stopwords_shape_views() {
    let config = PipelineConfig::default()
        .with_recent_limit(2)
        .with_word_cloud(WordCloudConfig::default().with_extra_stopwords(["Panggul", "SENAM"]));
    let pipeline = DashboardPipeline::new(
        InMemorySource::new(vec![
            article("A", "senam panggul pagi", "2023-01-01"),
            article("B", "senam panggul sore", "2023-03-01"),
            article("C", "prolaps uteri ringan", "2023-02-01"),
        ]),
        config,
    )
    .unwrap();
    let view = pipeline.render(&DashboardFilters::default()).unwrap();
    let titles: Vec<&str> = view
        .report
        .recent
        .iter()
        .filter_map(|item| item.title.as_deref())
        .collect();
    assert_eq!(titles, vec!["B", "C"]);
    let words: Vec<&str> = view
        .report
        .word_cloud
        .frequencies
        .iter()
        .map(|f| f.word.as_str())
        .collect();
    assert!(!words.contains(&"panggul"));
    assert!(!words.contains(&"senam"));
    assert!(words.contains(&"prolaps"));
    assert!(view.report.word_cloud.text.contains("panggul"));
}
