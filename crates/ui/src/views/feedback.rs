use dioxus::prelude::*;

use crate::vm::{MetricVm, map_feedback, sample_feedback_report};

#[component]
pub fn FeedbackView() -> Element {
    let vm = use_hook(|| map_feedback(&sample_feedback_report()));

    rsx! {
        div { class: "page feedback",
            h2 { "Content feedback" }
            dl { class: "summary",
                dt { "Relevance" }
                dd { "{vm.relevance}" }

                dt { "Evaluation" }
                dd { "{vm.evaluation_score}" }
            }
            div { class: "metrics",
                for metric in vm.metrics.iter().cloned() {
                    MetricCard { key: "{metric.label}", metric }
                }
            }
            h3 { "Overall feedback" }
            for section in vm.sections.iter() {
                pre { class: "feedback-section", "{section}" }
            }
        }
    }
}

#[component]
fn MetricCard(metric: MetricVm) -> Element {
    rsx! {
        div { class: "metric",
            h4 { "{metric.label}" }
            div { class: "metric-value", "{metric.value}" }
            div { class: "bar",
                div { class: "bar-fill", style: "{metric.bar_style}" }
            }
            p { "{metric.description}" }
        }
    }
}
