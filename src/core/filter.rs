use crate::core::application::{Application, ApplicationStatus};
use crate::core::error::GigError;

/// Status dimension of the filter bar: everything, or one exact status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    All,
    Only(ApplicationStatus),
}

impl StatusFilter {
    /// Parse a `--status` value: `all` or one of the five wire statuses.
    pub fn parse(raw: &str) -> Result<Self, GigError> {
        if raw.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        ApplicationStatus::parse(raw)
            .map(Self::Only)
            .ok_or_else(|| GigError::InvalidStatusFilter {
                value: raw.to_string(),
            })
    }

    /// Next filter in the fixed cycle used by the TUI's filter key.
    pub fn cycle_next(self) -> Self {
        match self {
            Self::All => Self::Only(ApplicationStatus::Pending),
            Self::Only(ApplicationStatus::Pending) => Self::Only(ApplicationStatus::Accepted),
            Self::Only(ApplicationStatus::Accepted) => Self::Only(ApplicationStatus::InProgress),
            Self::Only(ApplicationStatus::InProgress) => Self::Only(ApplicationStatus::Completed),
            Self::Only(ApplicationStatus::Completed) => Self::Only(ApplicationStatus::Rejected),
            Self::Only(ApplicationStatus::Rejected) => Self::All,
        }
    }

    pub fn cycle_prev(self) -> Self {
        match self {
            Self::All => Self::Only(ApplicationStatus::Rejected),
            Self::Only(ApplicationStatus::Pending) => Self::All,
            Self::Only(ApplicationStatus::Accepted) => Self::Only(ApplicationStatus::Pending),
            Self::Only(ApplicationStatus::InProgress) => Self::Only(ApplicationStatus::Accepted),
            Self::Only(ApplicationStatus::Completed) => Self::Only(ApplicationStatus::InProgress),
            Self::Only(ApplicationStatus::Rejected) => Self::Only(ApplicationStatus::Completed),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All Status",
            Self::Only(status) => crate::core::display::StatusStyle::of(status).label,
        }
    }
}

/// Pure filter predicate: case-insensitive substring match of the search term
/// against job title or company, AND an exact status match unless the filter
/// is `All`. An empty term matches every record.
pub fn matches(app: &Application, search_term: &str, filter: StatusFilter) -> bool {
    let term = search_term.to_lowercase();
    let matches_search = app.job_title.to_lowercase().contains(&term)
        || app.company.to_lowercase().contains(&term);
    let matches_status = match filter {
        StatusFilter::All => true,
        StatusFilter::Only(status) => app.status.known() == Some(status),
    };
    matches_search && matches_status
}
