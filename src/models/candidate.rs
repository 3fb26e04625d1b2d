use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::dto::candidate_dto::CandidatePayload;
use crate::models::entity::{Entity, EntityId};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: EntityId,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub technology: Technology,
    pub level: Level,
    pub experience: String,
    pub expected_salary: String,
    pub interview_status: InterviewStatus,
    #[serde(default)]
    pub references: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Filename of the uploaded CV; the file itself is not stored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cv: Option<String>,
}

impl Entity for Candidate {
    const KIND: &'static str = "candidate";
    const COLLECTION: &'static str = "candidates";
    type Draft = CandidatePayload;

    fn id(&self) -> &EntityId {
        &self.id
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Technology {
    #[serde(rename = ".NET")]
    DotNet,
    #[serde(rename = "ReactJS")]
    ReactJs,
    DevOps,
    #[serde(rename = "QA")]
    Qa,
}

impl Technology {
    pub fn as_str(&self) -> &'static str {
        match self {
            Technology::DotNet => ".NET",
            Technology::ReactJs => "ReactJS",
            Technology::DevOps => "DevOps",
            Technology::Qa => "QA",
        }
    }
}

impl FromStr for Technology {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ".NET" => Ok(Technology::DotNet),
            "ReactJS" => Ok(Technology::ReactJs),
            "DevOps" => Ok(Technology::DevOps),
            "QA" => Ok(Technology::Qa),
            other => Err(format!("Unknown technology: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Level {
    Junior,
    Mid,
    Senior,
}

/// Position of a candidate in the hiring pipeline.
///
/// Variant order is the progression order; `index` is what the workflow guard
/// compares.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum InterviewStatus {
    Shortlisted,
    #[serde(rename = "First Interview Complete")]
    FirstInterviewComplete,
    #[serde(rename = "Second Interview Complete")]
    SecondInterviewComplete,
    Hired,
    Rejected,
    Blacklisted,
}

impl InterviewStatus {
    pub const ALL: [InterviewStatus; 6] = [
        InterviewStatus::Shortlisted,
        InterviewStatus::FirstInterviewComplete,
        InterviewStatus::SecondInterviewComplete,
        InterviewStatus::Hired,
        InterviewStatus::Rejected,
        InterviewStatus::Blacklisted,
    ];

    pub fn index(&self) -> usize {
        match self {
            InterviewStatus::Shortlisted => 0,
            InterviewStatus::FirstInterviewComplete => 1,
            InterviewStatus::SecondInterviewComplete => 2,
            InterviewStatus::Hired => 3,
            InterviewStatus::Rejected => 4,
            InterviewStatus::Blacklisted => 5,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InterviewStatus::Shortlisted => "Shortlisted",
            InterviewStatus::FirstInterviewComplete => "First Interview Complete",
            InterviewStatus::SecondInterviewComplete => "Second Interview Complete",
            InterviewStatus::Hired => "Hired",
            InterviewStatus::Rejected => "Rejected",
            InterviewStatus::Blacklisted => "Blacklisted",
        }
    }
}

impl fmt::Display for InterviewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InterviewStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InterviewStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("Unknown interview status: {}", s))
    }
}
