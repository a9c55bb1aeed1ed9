//! Closed option sets for the note form.
//!
//! Every selectable value is an enum variant whose serde name is the exact
//! phrase interpolated into the note. Anything outside these sets is rejected
//! when the request body is deserialized.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Result of the welcome call. Selects which note template is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CallOutcome {
    Completed,
    #[default]
    #[serde(rename = "Not Completed")]
    NotCompleted,
}

impl CallOutcome {
    pub const ALL: [CallOutcome; 2] = [CallOutcome::Completed, CallOutcome::NotCompleted];

    pub fn label(&self) -> &'static str {
        match self {
            CallOutcome::Completed => "Completed",
            CallOutcome::NotCompleted => "Not Completed",
        }
    }
}

/// Where the information came from on a completed call. Stored with the log,
/// never shown in the note.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum InfoSource {
    #[default]
    #[serde(rename = "All info provided")]
    AllInfoProvided,
    #[serde(rename = "All, info provided by another agent")]
    ProvidedByAnotherAgent,
}

impl InfoSource {
    pub const ALL: [InfoSource; 2] = [InfoSource::AllInfoProvided, InfoSource::ProvidedByAnotherAgent];

    pub fn label(&self) -> &'static str {
        match self {
            InfoSource::AllInfoProvided => "All info provided",
            InfoSource::ProvidedByAnotherAgent => "All, info provided by another agent",
        }
    }
}

/// How far the call progressed ("info until").
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProgressStage {
    #[default]
    #[serde(rename = "All info provided")]
    AllInfoProvided,
    #[serde(rename = "All, info provided by another agent")]
    ProvidedByAnotherAgent,
    #[serde(rename = "No info provided")]
    NoInfoProvided,
    #[serde(rename = "the text message of the VCF")]
    VcfTextMessage,
    #[serde(rename = "the banking info verification")]
    BankingInfoVerification,
    #[serde(rename = "the enrollment plan verification")]
    EnrollmentPlanVerification,
    #[serde(rename = "the Yes/No verification questions")]
    YesNoVerificationQuestions,
    #[serde(rename = "the creditors verification")]
    CreditorsVerification,
    #[serde(rename = "the right of offset")]
    RightOfOffset,
    Intro,
}

impl ProgressStage {
    pub const ALL: [ProgressStage; 10] = [
        ProgressStage::AllInfoProvided,
        ProgressStage::ProvidedByAnotherAgent,
        ProgressStage::NoInfoProvided,
        ProgressStage::VcfTextMessage,
        ProgressStage::BankingInfoVerification,
        ProgressStage::EnrollmentPlanVerification,
        ProgressStage::YesNoVerificationQuestions,
        ProgressStage::CreditorsVerification,
        ProgressStage::RightOfOffset,
        ProgressStage::Intro,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProgressStage::AllInfoProvided => "All info provided",
            ProgressStage::ProvidedByAnotherAgent => "All, info provided by another agent",
            ProgressStage::NoInfoProvided => "No info provided",
            ProgressStage::VcfTextMessage => "the text message of the VCF",
            ProgressStage::BankingInfoVerification => "the banking info verification",
            ProgressStage::EnrollmentPlanVerification => "the enrollment plan verification",
            ProgressStage::YesNoVerificationQuestions => "the Yes/No verification questions",
            ProgressStage::CreditorsVerification => "the creditors verification",
            ProgressStage::RightOfOffset => "the right of offset",
            ProgressStage::Intro => "Intro",
        }
    }
}

/// Whether the customer was transferred back to sales.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransferStatus {
    Successful,
    #[default]
    Unsuccessful,
}

/// Why a transfer back to sales failed. Union of every deployment's list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransferFailReason {
    #[default]
    #[serde(rename = "Unsuccessful, number was not in service.")]
    NotInService,
    #[serde(rename = "Unsuccessful, attempted to contact sales back with no success.")]
    SalesUnreachable,
    #[serde(rename = "Unsuccessful, the SA was unavailable.")]
    SaUnavailable,
    #[serde(rename = "Unsuccessful, the Cx disconnected the call.")]
    CustomerDisconnected,
    #[serde(
        rename = "Unsuccessful, the call was concluded before the verification outcome was completed."
    )]
    ConcludedBeforeOutcome,
    #[serde(
        rename = "Unsuccessful, the Cx disconnected the call before I could transfer the call back to Sales."
    )]
    DisconnectedBeforeTransfer,
    #[serde(
        rename = "Unsuccessful, the Cx disconnected the call and requested for a call back later."
    )]
    CallbackRequested,
    #[serde(
        rename = "Unsuccessful, I tried to transfer the client to their representative by calling the company’s extension, but no one answered."
    )]
    ExtensionNoAnswer,
    #[serde(
        rename = "Unsuccessful, I tried to transfer the client to their representative by calling the company’s extension, but it goes straight to voicemail."
    )]
    ExtensionVoicemail,
    #[serde(
        rename = "Unsuccessful, the client is busy and will be waiting for their representative’s call."
    )]
    ClientBusy,
}

impl TransferFailReason {
    pub const ALL: [TransferFailReason; 10] = [
        TransferFailReason::NotInService,
        TransferFailReason::SalesUnreachable,
        TransferFailReason::SaUnavailable,
        TransferFailReason::CustomerDisconnected,
        TransferFailReason::ConcludedBeforeOutcome,
        TransferFailReason::DisconnectedBeforeTransfer,
        TransferFailReason::CallbackRequested,
        TransferFailReason::ExtensionNoAnswer,
        TransferFailReason::ExtensionVoicemail,
        TransferFailReason::ClientBusy,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TransferFailReason::NotInService => "Unsuccessful, number was not in service.",
            TransferFailReason::SalesUnreachable => {
                "Unsuccessful, attempted to contact sales back with no success."
            }
            TransferFailReason::SaUnavailable => "Unsuccessful, the SA was unavailable.",
            TransferFailReason::CustomerDisconnected => "Unsuccessful, the Cx disconnected the call.",
            TransferFailReason::ConcludedBeforeOutcome => {
                "Unsuccessful, the call was concluded before the verification outcome was completed."
            }
            TransferFailReason::DisconnectedBeforeTransfer => {
                "Unsuccessful, the Cx disconnected the call before I could transfer the call back to Sales."
            }
            TransferFailReason::CallbackRequested => {
                "Unsuccessful, the Cx disconnected the call and requested for a call back later."
            }
            TransferFailReason::ExtensionNoAnswer => {
                "Unsuccessful, I tried to transfer the client to their representative by calling the company’s extension, but no one answered."
            }
            TransferFailReason::ExtensionVoicemail => {
                "Unsuccessful, I tried to transfer the client to their representative by calling the company’s extension, but it goes straight to voicemail."
            }
            TransferFailReason::ClientBusy => {
                "Unsuccessful, the client is busy and will be waiting for their representative’s call."
            }
        }
    }
}

/// Whether the customer is expected to call back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReturnStatus {
    Yes,
    #[default]
    No,
}

impl ReturnStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ReturnStatus::Yes => "Returned",
            ReturnStatus::No => "Not Returned",
        }
    }
}

impl fmt::Display for ProgressStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
