//! Turns a parsed profile and draft into the log the backend stores.

use crate::errors::AppError;
use crate::models::log::LogPayload;
use crate::notes::composer::NoteDraft;
use crate::notes::crm_parser::ParsedProfile;
use crate::notes::options::CallOutcome;

/// Builds the `POST /logs/` body. A profile without a customer ID cannot be
/// logged.
pub fn build_log_payload(profile: &ParsedProfile, draft: &NoteDraft) -> Result<LogPayload, AppError> {
    if !profile.has_customer_id() {
        return Err(AppError::Validation(
            "Missing Cordoba ID. Paste the CRM profile first.".to_string(),
        ));
    }

    let (info_until, transfer_status) = match draft.outcome {
        CallOutcome::Completed => (draft.info_source.label(), "Successful"),
        CallOutcome::NotCompleted => (draft.stage.label(), draft.transfer_label()),
    };

    Ok(LogPayload {
        customer: profile.customer_name.clone(),
        cordoba_id: profile
            .customer_id
            .chars()
            .filter(|c| c.is_ascii_digit())
            .collect(),
        result: draft.outcome.label().to_string(),
        affiliate: profile.affiliate.clone(),
        info_until: info_until.to_string(),
        client_language: profile.language.clone(),
        comments: Some(draft.reason.clone()),
        transfer_status: Some(transfer_status.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notes::crm_parser::parse;
    use crate::notes::options::{InfoSource, ProgressStage, TransferFailReason, TransferStatus};

    const PROFILE: &str = "Customer ID CORDOBA-4821\nJohn Smith\nMarketing Company Acme Corp\nLanguage: Spanish";

    #[test]
    fn test_missing_id_is_rejected() {
        let result = build_log_payload(&parse("Jane Roe"), &NoteDraft::default());
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_completed_payload_uses_info_source() {
        let draft = NoteDraft {
            outcome: CallOutcome::Completed,
            info_source: InfoSource::ProvidedByAnotherAgent,
            stage: ProgressStage::Intro,
            transfer_status: TransferStatus::Unsuccessful,
            ..Default::default()
        };
        let payload = build_log_payload(&parse(PROFILE), &draft).unwrap();
        assert_eq!(payload.cordoba_id, "4821");
        assert_eq!(payload.customer, "John Smith");
        assert_eq!(payload.result, "Completed");
        assert_eq!(payload.info_until, "All, info provided by another agent");
        assert_eq!(payload.transfer_status.as_deref(), Some("Successful"));
        assert_eq!(payload.client_language, "Spanish");
    }

    #[test]
    fn test_not_completed_payload_uses_stage_and_fail_reason() {
        let draft = NoteDraft {
            outcome: CallOutcome::NotCompleted,
            reason: "No time".to_string(),
            stage: ProgressStage::RightOfOffset,
            transfer_status: TransferStatus::Unsuccessful,
            transfer_fail_reason: TransferFailReason::SaUnavailable,
            ..Default::default()
        };
        let payload = build_log_payload(&parse(PROFILE), &draft).unwrap();
        assert_eq!(payload.result, "Not Completed");
        assert_eq!(payload.info_until, "the right of offset");
        assert_eq!(payload.comments.as_deref(), Some("No time"));
        assert_eq!(
            payload.transfer_status.as_deref(),
            Some("Unsuccessful, the SA was unavailable.")
        );
        assert_eq!(payload.affiliate, "Acme Corp");
    }
}
