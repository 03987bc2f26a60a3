use std::fs;
use std::path::Path;

use chrono::NaiveDate;

use crate::core::application::{Application, ApplicationStatus, StatusValue};
use crate::core::error::GigError;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Built-in snapshot used when no record file is supplied. In a real
/// deployment this is replaced by a data-fetching collaborator returning the
/// same record shape.
pub fn sample_applications() -> Vec<Application> {
    vec![
        Application {
            id: "1".to_string(),
            job_title: "Product Survey Tester".to_string(),
            company: "Market Research Co.".to_string(),
            status: StatusValue::Known(ApplicationStatus::Accepted),
            applied_date: date(2024, 1, 15),
            earnings: Some(45.0),
            description: "Complete surveys about consumer products and services".to_string(),
            category: "Surveys & Market Research".to_string(),
        },
        Application {
            id: "2".to_string(),
            job_title: "AI Training Data Specialist".to_string(),
            company: "TechCorp AI".to_string(),
            status: StatusValue::Known(ApplicationStatus::Pending),
            applied_date: date(2024, 1, 14),
            earnings: None,
            description: "Label data and provide feedback for AI training".to_string(),
            category: "AI & Machine Learning".to_string(),
        },
        Application {
            id: "3".to_string(),
            job_title: "Virtual Assistant".to_string(),
            company: "StartupXYZ".to_string(),
            status: StatusValue::Known(ApplicationStatus::Completed),
            applied_date: date(2024, 1, 12),
            earnings: Some(120.0),
            description: "Administrative support and email management".to_string(),
            category: "Virtual Assistance".to_string(),
        },
        Application {
            id: "4".to_string(),
            job_title: "Content Moderator".to_string(),
            company: "Social Platform Inc.".to_string(),
            status: StatusValue::Known(ApplicationStatus::InProgress),
            applied_date: date(2024, 1, 10),
            earnings: Some(80.5),
            description: "Review and moderate user-generated content".to_string(),
            category: "Social Media & Moderation".to_string(),
        },
        Application {
            id: "5".to_string(),
            job_title: "Audio Transcription Specialist".to_string(),
            company: "Media Corp".to_string(),
            status: StatusValue::Known(ApplicationStatus::Rejected),
            applied_date: date(2024, 1, 8),
            earnings: None,
            description: "Transcribe audio recordings to text".to_string(),
            category: "Transcription & Translation".to_string(),
        },
    ]
}

/// Load a JSON array of application records from disk.
pub fn load_applications(path: &Path) -> Result<Vec<Application>, GigError> {
    let contents = fs::read_to_string(path).map_err(|e| GigError::SourceRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    serde_json::from_str(&contents).map_err(|e| GigError::SourceParse {
        path: path.to_path_buf(),
        source: e,
    })
}
