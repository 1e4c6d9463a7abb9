use core::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use sitequote_core::{ApplicationId, DomainError, DomainResult};

/// Review status of a job application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Pending,
    Accepted,
    Rejected,
}

impl ApplicationStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Accepted => "accepted",
            ApplicationStatus::Rejected => "rejected",
        }
    }
}

impl core::fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApplicationStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ApplicationStatus::Pending),
            "accepted" => Ok(ApplicationStatus::Accepted),
            "rejected" => Ok(ApplicationStatus::Rejected),
            other => Err(DomainError::validation(format!(
                "unknown application status: {other} (expected one of: pending, accepted, rejected)"
            ))),
        }
    }
}

/// A submitted career-page application (payload without server-assigned
/// fields).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewApplication {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub role: String,
    pub cover_letter: String,
    #[serde(default)]
    pub social_links: String,
    /// Filename of the uploaded resume, if any.
    #[serde(default, rename = "resume")]
    pub resume_filename: Option<String>,
    /// Uploaded resume content (base64 data URL), carried verbatim so the
    /// admin review flow can preview and download it.
    #[serde(default, rename = "resumeData")]
    pub resume_data: Option<String>,
}

impl NewApplication {
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name must not be empty"));
        }
        if self.email.trim().is_empty() || !self.email.contains('@') {
            return Err(DomainError::validation("email must be a valid address"));
        }
        if self.role.trim().is_empty() {
            return Err(DomainError::validation("role must not be empty"));
        }
        Ok(())
    }
}

/// A persisted application as read back for the admin dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: ApplicationId,
    #[serde(flatten)]
    pub details: NewApplication,
    pub submitted_at: DateTime<Utc>,
    pub status: ApplicationStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NewApplication {
        NewApplication {
            name: "Abebe Kebede".to_string(),
            address: "Addis Ababa".to_string(),
            phone: "+251911000000".to_string(),
            email: "abebe@example.com".to_string(),
            role: "Frontend Developer".to_string(),
            cover_letter: "Hello".to_string(),
            social_links: String::new(),
            resume_filename: None,
            resume_data: None,
        }
    }

    #[test]
    fn valid_application_passes() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn rejects_blank_name_and_role() {
        let mut app = sample();
        app.name = "  ".to_string();
        assert!(app.validate().is_err());

        let mut app = sample();
        app.role = String::new();
        assert!(app.validate().is_err());
    }

    #[test]
    fn rejects_malformed_email() {
        let mut app = sample();
        app.email = "not-an-email".to_string();
        match app.validate().unwrap_err() {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error"),
        }
    }

    #[test]
    fn status_parses_and_round_trips() {
        for status in [
            ApplicationStatus::Pending,
            ApplicationStatus::Accepted,
            ApplicationStatus::Rejected,
        ] {
            let parsed: ApplicationStatus = status.as_str().parse().unwrap();
            assert_eq!(parsed, status);
        }
        assert!("archived".parse::<ApplicationStatus>().is_err());
    }

    #[test]
    fn resume_content_round_trips_through_the_wire_layout() {
        let mut app = sample();
        app.resume_filename = Some("cv.pdf".to_string());
        app.resume_data = Some("data:application/pdf;base64,JVBERi0x".to_string());

        let json = serde_json::to_value(&app).unwrap();
        assert_eq!(json["resume"], "cv.pdf");
        assert_eq!(json["resumeData"], "data:application/pdf;base64,JVBERi0x");

        let back: NewApplication = serde_json::from_value(json).unwrap();
        assert_eq!(back, app);
    }

    #[test]
    fn persisted_record_uses_camel_case_fields() {
        let app = Application {
            id: ApplicationId::new("app-1"),
            details: sample(),
            submitted_at: Utc::now(),
            status: ApplicationStatus::Pending,
        };
        let json = serde_json::to_value(&app).unwrap();
        assert_eq!(json["status"], "pending");
        assert!(json.get("coverLetter").is_some());
        assert!(json.get("submittedAt").is_some());
    }
}
