use crate::model::UserRecord;
use crate::ui::mvi::Intent;

/// Events produced by the profile fetch.
#[derive(Debug, Clone)]
pub enum ProfileIntent {
    /// The current user was retrieved and decoded.
    Loaded { record: UserRecord },

    /// Retrieval or decoding failed.
    Failed { reason: String },
}

impl Intent for ProfileIntent {}
