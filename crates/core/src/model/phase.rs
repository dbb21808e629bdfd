use std::fmt;

/// Discrete state of a quiz session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SessionPhase {
    #[default]
    Idle,
    Generating,
    Reviewing,
    Submitted,
    AnalysisLoading,
    AnalysisReady,
    Error,
}

impl SessionPhase {
    /// A request is outstanding for this phase.
    #[must_use]
    pub fn is_loading(self) -> bool {
        matches!(self, Self::Generating | Self::AnalysisLoading)
    }

    /// Results have been computed and answers are frozen.
    #[must_use]
    pub fn is_graded(self) -> bool {
        matches!(
            self,
            Self::Submitted | Self::AnalysisLoading | Self::AnalysisReady
        )
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Generating => "generating",
            Self::Reviewing => "reviewing",
            Self::Submitted => "submitted",
            Self::AnalysisLoading => "analysis_loading",
            Self::AnalysisReady => "analysis_ready",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_request_phases_are_loading() {
        let loading: Vec<_> = [
            SessionPhase::Idle,
            SessionPhase::Generating,
            SessionPhase::Reviewing,
            SessionPhase::Submitted,
            SessionPhase::AnalysisLoading,
            SessionPhase::AnalysisReady,
            SessionPhase::Error,
        ]
        .into_iter()
        .filter(|phase| phase.is_loading())
        .collect();
        assert_eq!(
            loading,
            vec![SessionPhase::Generating, SessionPhase::AnalysisLoading]
        );
    }
}
