use std::collections::BTreeMap;

/// Selected option per question index. Absent entries are unanswered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSet {
    selections: BTreeMap<usize, usize>,
}

impl AnswerSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a selection, replacing any earlier one for the same question.
    pub fn select(&mut self, question: usize, option: usize) {
        self.selections.insert(question, option);
    }

    #[must_use]
    pub fn get(&self, question: usize) -> Option<usize> {
        self.selections.get(&question).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.selections.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    /// True when every index in `0..total` has a selection.
    #[must_use]
    pub fn covers(&self, total: usize) -> bool {
        (0..total).all(|question| self.selections.contains_key(&question))
    }

    pub fn clear(&mut self) {
        self.selections.clear();
    }
}
