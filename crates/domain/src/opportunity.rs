use crate::shared::entity::{Entity, ID};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A tracked job application or lead
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Opportunity {
    #[serde(default)]
    pub id: ID,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub applied_date: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    /// Genuine status history, only present when the store recorded it
    #[serde(default)]
    pub status_history: Vec<StatusChange>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StatusChange {
    pub status: String,
    pub changed_at: String,
}

impl Entity for Opportunity {
    fn id(&self) -> &ID {
        &self.id
    }
}

impl Opportunity {
    pub fn status(&self) -> OpportunityStatus {
        OpportunityStatus::parse(&self.status)
    }

    pub fn has_notes(&self) -> bool {
        self.notes
            .as_deref()
            .map(|n| !n.trim().is_empty())
            .unwrap_or(false)
    }
}

/// Lifecycle stage of an `Opportunity`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpportunityStatus {
    Bookmarked,
    Applying,
    Applied,
    PhoneScreen,
    InitialInterview,
    TechnicalAssessment,
    SecondInterview,
    FinalInterview,
    OfferReceived,
    Accepted,
    Rejected,
    Withdrawn,
    Other(String),
}

impl OpportunityStatus {
    /// Case insensitive and tolerant to `-`, `_` and whitespace differences,
    /// so `"technical-assessment"` and `"Technical Assessment"` are equal.
    pub fn parse(raw: &str) -> Self {
        let normalized = raw
            .trim()
            .to_lowercase()
            .replace(['-', '_'], " ")
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");

        match normalized.as_str() {
            "bookmarked" | "saved" | "wishlist" => Self::Bookmarked,
            "applying" | "in progress" => Self::Applying,
            "applied" | "submitted" => Self::Applied,
            "phone screen" | "screening" => Self::PhoneScreen,
            "initial interview" | "interview" | "interviewing" => Self::InitialInterview,
            "technical assessment" | "assessment" | "technical interview" => {
                Self::TechnicalAssessment
            }
            "second interview" => Self::SecondInterview,
            "final interview" | "onsite" => Self::FinalInterview,
            "offer received" | "offer" => Self::OfferReceived,
            "accepted" | "hired" => Self::Accepted,
            "rejected" | "declined" => Self::Rejected,
            "withdrawn" | "archived" => Self::Withdrawn,
            _ => Self::Other(raw.trim().to_string()),
        }
    }

    /// Statuses an opportunity starts out in before anything happened to it.
    /// A blank status counts as initial.
    pub fn is_initial_stage(&self) -> bool {
        match self {
            Self::Bookmarked | Self::Applying | Self::Applied => true,
            Self::Other(status) => status.is_empty(),
            _ => false,
        }
    }

    pub fn is_interview_stage(&self) -> bool {
        matches!(
            self,
            Self::PhoneScreen
                | Self::InitialInterview
                | Self::TechnicalAssessment
                | Self::SecondInterview
                | Self::FinalInterview
        )
    }

    /// Label of the interview marker for interview stage statuses
    pub fn interview_label(&self) -> Option<&'static str> {
        match self {
            Self::PhoneScreen => Some("Phone screen"),
            Self::InitialInterview => Some("Initial interview"),
            Self::TechnicalAssessment => Some("Technical assessment"),
            Self::SecondInterview => Some("Second interview"),
            Self::FinalInterview => Some("Final interview"),
            _ => None,
        }
    }
}

impl Display for OpportunityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Bookmarked => "Bookmarked",
            Self::Applying => "Applying",
            Self::Applied => "Applied",
            Self::PhoneScreen => "Phone Screen",
            Self::InitialInterview => "Initial Interview",
            Self::TechnicalAssessment => "Technical Assessment",
            Self::SecondInterview => "Second Interview",
            Self::FinalInterview => "Final Interview",
            Self::OfferReceived => "Offer Received",
            Self::Accepted => "Accepted",
            Self::Rejected => "Rejected",
            Self::Withdrawn => "Withdrawn",
            Self::Other(status) => status,
        };
        write!(f, "{}", label)
    }
}
