use url::Url;

/// A graded question the user got wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrongAnswer {
    pub question_index: usize,
    pub question: String,
    pub user_answer_text: String,
    /// Empty when the question has no matching correct option.
    pub correct_answer_text: String,
}

/// Explanation returned for one wrong answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    question: String,
    analysis_text: String,
    video_url: Option<Url>,
}

impl Analysis {
    /// Build an analysis entry; a blank or unparsable video link becomes `None`.
    #[must_use]
    pub fn new(
        question: impl Into<String>,
        analysis_text: impl Into<String>,
        video_url: Option<&str>,
    ) -> Self {
        let video_url = video_url
            .map(str::trim)
            .filter(|raw| !raw.is_empty())
            .and_then(|raw| Url::parse(raw).ok())
            .filter(|url| matches!(url.scheme(), "http" | "https"));
        Self {
            question: question.into(),
            analysis_text: analysis_text.into(),
            video_url,
        }
    }

    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    #[must_use]
    pub fn analysis_text(&self) -> &str {
        &self.analysis_text
    }

    #[must_use]
    pub fn video_url(&self) -> Option<&Url> {
        self.video_url.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_valid_video_link() {
        let analysis = Analysis::new(
            "Q",
            "Because.",
            Some("https://www.youtube.com/watch?v=abc"),
        );
        assert_eq!(
            analysis.video_url().map(Url::as_str),
            Some("https://www.youtube.com/watch?v=abc")
        );
    }

    #[test]
    fn drops_blank_and_invalid_links() {
        assert!(Analysis::new("Q", "A", Some("  ")).video_url().is_none());
        assert!(Analysis::new("Q", "A", Some("not a url")).video_url().is_none());
        assert!(Analysis::new("Q", "A", Some("javascript:alert(1)")).video_url().is_none());
        assert!(Analysis::new("Q", "A", None).video_url().is_none());
    }
}
