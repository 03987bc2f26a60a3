use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Lifecycle stage of a job application as delivered by the record source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplicationStatus {
    Pending,
    Accepted,
    InProgress,
    Completed,
    Rejected,
}

impl ApplicationStatus {
    /// Parse a wire status string. Unrecognized values return `None` and are
    /// rendered with the neutral fallback style instead of failing.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "pending" => Some(Self::Pending),
            "accepted" => Some(Self::Accepted),
            "in_progress" => Some(Self::InProgress),
            "completed" => Some(Self::Completed),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Rejected => "rejected",
        }
    }
}

/// Status exactly as the source delivered it: one of the five known stages,
/// or the raw string of anything unrecognized. Keeping the raw value lets a
/// bad status degrade to the neutral "Unknown" badge instead of failing the
/// whole load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusValue {
    Known(ApplicationStatus),
    Unrecognized(String),
}

impl StatusValue {
    pub fn known(&self) -> Option<ApplicationStatus> {
        match self {
            Self::Known(status) => Some(*status),
            Self::Unrecognized(_) => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Known(status) => status.as_str(),
            Self::Unrecognized(raw) => raw,
        }
    }
}

impl From<ApplicationStatus> for StatusValue {
    fn from(status: ApplicationStatus) -> Self {
        Self::Known(status)
    }
}

impl Serialize for StatusValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for StatusValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(match ApplicationStatus::parse(&raw) {
            Some(status) => Self::Known(status),
            None => Self::Unrecognized(raw),
        })
    }
}

/// One job-application record. Records arrive whole from an external source;
/// the view only filters and groups a snapshot, it never mutates one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub id: String,
    pub job_title: String,
    pub company: String,
    pub status: StatusValue,
    pub applied_date: NaiveDate,
    /// `None` means no payout yet; a present value renders even when it is
    /// 0.00, so a zero-dollar outcome is distinguishable from "not earned".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub earnings: Option<f64>,
    pub description: String,
    pub category: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_five_wire_statuses() {
        let cases = [
            ("pending", ApplicationStatus::Pending),
            ("accepted", ApplicationStatus::Accepted),
            ("in_progress", ApplicationStatus::InProgress),
            ("completed", ApplicationStatus::Completed),
            ("rejected", ApplicationStatus::Rejected),
        ];
        for (raw, expected) in cases {
            assert_eq!(ApplicationStatus::parse(raw), Some(expected));
            assert_eq!(expected.as_str(), raw);
        }
    }

    #[test]
    fn rejects_unknown_status_strings() {
        assert_eq!(ApplicationStatus::parse("archived"), None);
        assert_eq!(ApplicationStatus::parse("Pending"), None);
        assert_eq!(ApplicationStatus::parse(""), None);
    }

    #[test]
    fn status_value_keeps_the_raw_string_for_unknown_statuses() {
        let value: StatusValue = serde_json::from_str(r#""archived""#).unwrap();
        assert_eq!(value, StatusValue::Unrecognized("archived".to_string()));
        assert_eq!(value.known(), None);
        assert_eq!(value.as_str(), "archived");
        assert_eq!(serde_json::to_string(&value).unwrap(), r#""archived""#);
    }

    #[test]
    fn record_deserializes_from_source_shape() {
        let raw = r#"{
            "id": "9",
            "job_title": "Data Entry Clerk",
            "company": "Acme Ops",
            "status": "in_progress",
            "applied_date": "2024-02-01",
            "earnings": 12.5,
            "description": "Enter invoice data",
            "category": "Data Entry"
        }"#;
        let app: Application = serde_json::from_str(raw).unwrap();
        assert_eq!(app.status, StatusValue::Known(ApplicationStatus::InProgress));
        assert_eq!(app.applied_date, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert_eq!(app.earnings, Some(12.5));
    }

    #[test]
    fn record_with_unrecognized_status_still_deserializes() {
        let raw = r#"{
            "id": "11",
            "job_title": "Mystery Shopper",
            "company": "Retail Audit LLC",
            "status": "archived",
            "applied_date": "2024-02-05",
            "description": "Visit stores and report on service",
            "category": "Retail"
        }"#;
        let app: Application = serde_json::from_str(raw).unwrap();
        assert_eq!(app.status, StatusValue::Unrecognized("archived".to_string()));
    }

    #[test]
    fn missing_earnings_deserializes_as_none() {
        let raw = r#"{
            "id": "10",
            "job_title": "Proofreader",
            "company": "Copy Desk",
            "status": "pending",
            "applied_date": "2024-02-03",
            "description": "Proofread articles",
            "category": "Writing"
        }"#;
        let app: Application = serde_json::from_str(raw).unwrap();
        assert_eq!(app.earnings, None);
    }
}
