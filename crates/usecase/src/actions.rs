// crates/usecase/src/actions.rs
use std::path::PathBuf;

use eol_stats_shared_kernel::SourceName;

/// One step of a run, in command-line order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    AnalyzeFile(PathBuf),
    AnalyzeStdin,
    /// Affects every analysis that comes after it.
    SetVisualization(bool),
}

impl Action {
    /// The source this action reads, if it reads one.
    pub fn source(&self) -> Option<SourceName> {
        match self {
            Self::AnalyzeFile(path) => Some(SourceName::File(path.clone())),
            Self::AnalyzeStdin => Some(SourceName::Stdin),
            Self::SetVisualization(_) => None,
        }
    }
}

/// Ordered action list with the standard-input fallback applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionPlan {
    actions: Vec<Action>,
}

impl ActionPlan {
    /// Builds a plan from actions in command-line order.
    ///
    /// When no file is named, standard input is analysed exactly once, after
    /// every flag, so the flags still apply to it.
    pub fn from_ordered(actions: impl IntoIterator<Item = Action>) -> Self {
        let mut actions: Vec<Action> = actions.into_iter().collect();
        if !actions.iter().any(|a| a.source().is_some()) {
            actions.push(Action::AnalyzeStdin);
        }
        Self { actions }
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Number of sources the plan will try to analyse.
    pub fn source_count(&self) -> usize {
        self.actions.iter().filter(|a| a.source().is_some()).count()
    }
}

impl IntoIterator for ActionPlan {
    type Item = Action;
    type IntoIter = std::vec::IntoIter<Action>;

    fn into_iter(self) -> Self::IntoIter {
        self.actions.into_iter()
    }
}
