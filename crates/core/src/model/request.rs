use thiserror::Error;

/// Upper bound on questions per generation request.
pub const MAX_QUESTION_COUNT: u32 = 50;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RequestError {
    #[error("a topic or description is required")]
    EmptyTopic,

    #[error("question count must be between 1 and {max}, got {count}")]
    CountOutOfRange { count: u32, max: u32 },
}

/// What to ask the generation service for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    topic: String,
    question_count: u32,
}

impl GenerationRequest {
    /// # Errors
    ///
    /// Returns `RequestError::EmptyTopic` for a blank topic and
    /// `RequestError::CountOutOfRange` when the count is 0 or above
    /// [`MAX_QUESTION_COUNT`].
    pub fn new(topic: impl Into<String>, question_count: u32) -> Result<Self, RequestError> {
        let topic = topic.into().trim().to_string();
        if topic.is_empty() {
            return Err(RequestError::EmptyTopic);
        }
        if question_count == 0 || question_count > MAX_QUESTION_COUNT {
            return Err(RequestError::CountOutOfRange {
                count: question_count,
                max: MAX_QUESTION_COUNT,
            });
        }
        Ok(Self {
            topic,
            question_count,
        })
    }

    #[must_use]
    pub fn topic(&self) -> &str {
        &self.topic
    }

    #[must_use]
    pub fn question_count(&self) -> u32 {
        self.question_count
    }

    /// Prompt text sent to the generator: the topic plus the count phrase.
    #[must_use]
    pub fn prompt(&self) -> String {
        format!("{} Give me {} only", self.topic, self.question_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_appends_count_phrase() {
        let request = GenerationRequest::new("  Photosynthesis basics ", 5).unwrap();
        assert_eq!(request.topic(), "Photosynthesis basics");
        assert_eq!(request.prompt(), "Photosynthesis basics Give me 5 only");
    }

    #[test]
    fn rejects_blank_topic_and_bad_counts() {
        assert_eq!(
            GenerationRequest::new(" ", 3).unwrap_err(),
            RequestError::EmptyTopic
        );
        assert!(matches!(
            GenerationRequest::new("Rust", 0),
            Err(RequestError::CountOutOfRange { count: 0, .. })
        ));
        assert!(GenerationRequest::new("Rust", MAX_QUESTION_COUNT + 1).is_err());
        assert!(GenerationRequest::new("Rust", MAX_QUESTION_COUNT).is_ok());
    }
}
