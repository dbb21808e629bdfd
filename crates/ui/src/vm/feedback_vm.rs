use quiz_core::model::FeedbackReport;

#[derive(Clone, Debug, PartialEq)]
pub struct MetricVm {
    pub label: &'static str,
    pub value: String,
    pub bar_style: String,
    pub description: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FeedbackVm {
    pub relevance: String,
    pub evaluation_score: String,
    pub metrics: Vec<MetricVm>,
    pub sections: Vec<String>,
}

#[must_use]
pub fn map_feedback(report: &FeedbackReport) -> FeedbackVm {
    let metrics = report
        .metrics()
        .into_iter()
        .map(|metric| MetricVm {
            label: metric.label,
            value: metric.value,
            bar_style: format!("width: {:.1}%", metric.percentage),
            description: metric.description,
        })
        .collect();

    FeedbackVm {
        relevance: report.relevance.clone(),
        evaluation_score: format!("{}/10", report.evaluation_score),
        metrics,
        sections: report
            .overall_sections()
            .into_iter()
            .map(str::to_string)
            .collect(),
    }
}

/// Report shown until a content-analysis backend is wired in.
#[must_use]
pub fn sample_feedback_report() -> FeedbackReport {
    FeedbackReport {
        relevance: "High relevance to the topic".into(),
        evaluation_score: "7".into(),
        overall_feedback: "Overall Strengths:\n\u{2022} Scalability & Efficiency\n\u{2022} Consistency & Objectivity\n\u{2022} Personalized Feedback\n\nChallenges:\n\u{2022} Contextual Understanding\n\u{2022} Bias & Fairness\n\u{2022} Ethical Considerations".into(),
        readability_score: 63.36,
        cosine_score: 0.3734,
        jaccard_index: 0.0,
    }
}
