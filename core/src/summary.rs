use crate::label::Label;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagSummary {
    #[serde(default)]
    pub critical: u32,
    #[serde(default)]
    pub red: u32,
    #[serde(default)]
    pub amber: u32,
    #[serde(default)]
    pub green: u32,
}

impl FlagSummary {
    pub fn record(&mut self, label: Label) {
        let slot = self.slot(label);
        *slot = slot.saturating_add(1);
    }

    pub fn count(&self, label: Label) -> u32 {
        match label {
            Label::Critical => self.critical,
            Label::Red => self.red,
            Label::Amber => self.amber,
            Label::Green => self.green,
        }
    }

    /// Widened so that host-supplied counts near `u32::MAX` cannot overflow.
    pub fn total(&self) -> u64 {
        Label::ALL
            .into_iter()
            .map(|label| u64::from(self.count(label)))
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Field-wise addition, saturating at `u32::MAX`.
    pub fn merge(&mut self, other: &FlagSummary) {
        for label in Label::ALL {
            let slot = self.slot(label);
            *slot = slot.saturating_add(other.count(label));
        }
    }

    /// Most severe label that was seen at least once.
    pub fn worst(&self) -> Option<Label> {
        Label::ALL.into_iter().find(|label| self.count(*label) > 0)
    }

    fn slot(&mut self, label: Label) -> &mut u32 {
        match label {
            Label::Critical => &mut self.critical,
            Label::Red => &mut self.red,
            Label::Amber => &mut self.amber,
            Label::Green => &mut self.green,
        }
    }
}

/// Per-document summaries of a batch together with their combined counts.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchReport {
    pub summaries: Vec<FlagSummary>,
    pub combined: FlagSummary,
    #[serde(default)]
    pub worst: Option<Label>,
}

impl BatchReport {
    pub fn new(summaries: Vec<FlagSummary>) -> Self {
        let mut combined = FlagSummary::default();
        for summary in &summaries {
            combined.merge(summary);
        }
        Self {
            worst: combined.worst(),
            summaries,
            combined,
        }
    }
}
