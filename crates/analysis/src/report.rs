use crate::record::{classify_severity, Disagreement, DisagreementSeverity};

/// Aggregate view of a disagreement log.
#[derive(Debug, Clone, PartialEq)]
pub struct DisagreementReport {
    pub records: usize,
    /// Lines the loader could not parse.
    pub skipped: usize,
    /// Records carrying both scores needed for a deficit.
    pub scored: usize,
    pub mean_deficit: f64,
    pub minor: usize,
    pub moderate: usize,
    pub major: usize,
}

pub fn summarize(records: &[Disagreement], skipped: usize) -> DisagreementReport {
    let mut report = DisagreementReport {
        records: records.len(),
        skipped,
        scored: 0,
        mean_deficit: 0.0,
        minor: 0,
        moderate: 0,
        major: 0,
    };

    let mut total = 0.0;
    for record in records {
        if let (Some(deficit), Some(reference)) = (record.deficit(), record.engine_score()) {
            report.scored += 1;
            total += deficit;
            match classify_severity(deficit, reference) {
                DisagreementSeverity::Minor => report.minor += 1,
                DisagreementSeverity::Moderate => report.moderate += 1,
                DisagreementSeverity::Major => report.major += 1,
            }
        }
    }
    if report.scored > 0 {
        report.mean_deficit = total / report.scored as f64;
    }
    report
}

/// The `n` records with the largest deficits, worst first. Records
/// without a deficit are left out.
pub fn worst(records: &[Disagreement], n: usize) -> Vec<&Disagreement> {
    let mut scored: Vec<(&Disagreement, f64)> = records
        .iter()
        .filter_map(|record| record.deficit().map(|deficit| (record, deficit)))
        .collect();
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    scored.truncate(n);
    scored.into_iter().map(|(record, _)| record).collect()
}
