//! Note Composer — renders the case note an agent pastes back into the CRM.

use serde::{Deserialize, Serialize};

use crate::notes::crm_parser::ParsedProfile;
use crate::notes::options::{
    CallOutcome, InfoSource, ProgressStage, ReturnStatus, TransferFailReason, TransferStatus,
};

/// Operator selections that accompany a parsed profile.
///
/// Fields that do not apply to the chosen outcome are carried but ignored by
/// the template, so switching outcome back and forth never loses a selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoteDraft {
    pub outcome: CallOutcome,
    /// Completed calls only. Persisted with the log, never rendered.
    pub info_source: InfoSource,
    pub reason: String,
    pub stage: ProgressStage,
    pub returned: ReturnStatus,
    pub transfer_status: TransferStatus,
    pub transfer_fail_reason: TransferFailReason,
}

impl NoteDraft {
    /// What the transfer line (and the log) reports: `Successful`, or the
    /// selected failure reason verbatim.
    pub fn transfer_label(&self) -> &'static str {
        match self.transfer_status {
            TransferStatus::Successful => "Successful",
            TransferStatus::Unsuccessful => self.transfer_fail_reason.label(),
        }
    }
}

/// Renders the note for `profile` and `draft`. Pure: equal inputs always give
/// an equal string.
pub fn compose_note(profile: &ParsedProfile, draft: &NoteDraft) -> String {
    let customer_line = format!("CX: {} || {}", profile.customer_name, profile.customer_id);
    let affiliate_line = format!("Affiliate: {}", profile.affiliate);

    match draft.outcome {
        CallOutcome::Completed => {
            format!("✅ WC Completed\n{customer_line}\n{affiliate_line}")
        }
        CallOutcome::NotCompleted => format!(
            "❌ WC Not Completed – {}\n{customer_line}\n\n• Reason: {}\n\n• Call Progress: {}\n• Transfer Status: {}\n{affiliate_line}",
            draft.returned.label(),
            draft.reason,
            draft.stage,
            draft.transfer_label(),
        ),
    }
}
