use serde::{Deserialize, Serialize};

/// Content-analysis scores shown on the feedback page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackReport {
    pub relevance: String,
    pub evaluation_score: String,
    pub overall_feedback: String,
    pub readability_score: f64,
    pub cosine_score: f64,
    /// Returned by the analysis service alongside `cosine_score`; the page
    /// reports similarity from the cosine score only.
    pub jaccard_index: f64,
}

/// One labelled bar on the feedback page.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackMetric {
    pub label: &'static str,
    pub value: String,
    /// Bar fill, clamped to `0.0..=100.0`.
    pub percentage: f64,
    pub description: &'static str,
}

impl FeedbackReport {
    #[must_use]
    pub fn metrics(&self) -> Vec<FeedbackMetric> {
        let similarity = self.cosine_score * 100.0;
        vec![
            FeedbackMetric {
                label: "Readability Score",
                value: format!("{:.1}%", self.readability_score),
                percentage: clamp_percent(self.readability_score),
                description: "Measures clarity and ease of understanding.",
            },
            FeedbackMetric {
                label: "Relevance Score",
                value: relevance_label(&self.relevance).to_string(),
                percentage: relevance_percent(&self.relevance),
                description: "How well the content aligns with the topic.",
            },
            FeedbackMetric {
                label: "Similarity Index",
                value: format!("{similarity:.1}%"),
                percentage: clamp_percent(similarity),
                description: "Content similarity assessment.",
            },
        ]
    }

    /// Overall feedback split into paragraphs on blank lines.
    #[must_use]
    pub fn overall_sections(&self) -> Vec<&str> {
        self.overall_feedback
            .split("\n\n")
            .map(str::trim)
            .filter(|section| !section.is_empty())
            .collect()
    }
}

fn relevance_label(relevance: &str) -> &'static str {
    let lower = relevance.to_ascii_lowercase();
    if lower.contains("high") {
        "High"
    } else if lower.contains("medium") || lower.contains("moderate") {
        "Medium"
    } else if lower.contains("low") {
        "Low"
    } else {
        "Unknown"
    }
}

fn relevance_percent(relevance: &str) -> f64 {
    match relevance_label(relevance) {
        "High" => 90.0,
        "Medium" => 60.0,
        "Low" => 30.0,
        _ => 0.0,
    }
}

fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}
