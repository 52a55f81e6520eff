use crate::model::UserRecord;
use crate::ui::mvi::UiState;

/// Load state of the profile container.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ProfileState {
    /// Fetch not finished yet.
    #[default]
    Loading,

    /// Fetch succeeded.
    Loaded { record: UserRecord },

    /// Fetch failed; `reason` is shown to the user.
    Failed { reason: String },
}

impl UiState for ProfileState {}

impl ProfileState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Loaded and Failed are final.
    pub fn is_terminal(&self) -> bool {
        !self.is_loading()
    }

    pub fn record(&self) -> Option<&UserRecord> {
        match self {
            Self::Loaded { record } => Some(record),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            Self::Failed { reason } => Some(reason),
            _ => None,
        }
    }

    /// Short status word for the header.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Loaded { .. } => "loaded",
            Self::Failed { .. } => "failed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_is_default() {
        assert_eq!(ProfileState::default(), ProfileState::Loading);
        assert!(ProfileState::default().is_loading());
    }

    #[test]
    fn accessors_match_variant() {
        let loaded = ProfileState::Loaded {
            record: UserRecord::new("Ada", "ada@example.com"),
        };
        assert_eq!(loaded.record().map(|r| r.name.as_str()), Some("Ada"));
        assert_eq!(loaded.failure(), None);
        assert!(loaded.is_terminal());

        let failed = ProfileState::Failed {
            reason: "boom".into(),
        };
        assert_eq!(failed.failure(), Some("boom"));
        assert!(failed.record().is_none());
        assert!(failed.is_terminal());
    }

    #[test]
    fn labels() {
        assert_eq!(ProfileState::Loading.label(), "loading");
        assert_eq!(
            ProfileState::Failed { reason: "x".into() }.label(),
            "failed"
        );
    }
}
