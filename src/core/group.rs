use crate::core::application::{Application, ApplicationStatus, StatusValue};

/// Display partition of the five statuses into three mutually exclusive tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    Active,
    Completed,
    Rejected,
}

impl Bucket {
    /// Every status lands in exactly one bucket.
    pub const fn of(status: ApplicationStatus) -> Self {
        match status {
            ApplicationStatus::Pending
            | ApplicationStatus::Accepted
            | ApplicationStatus::InProgress => Self::Active,
            ApplicationStatus::Completed => Self::Completed,
            ApplicationStatus::Rejected => Self::Rejected,
        }
    }

    /// Bucket for a source-delivered status. Unrecognized values belong to no
    /// bucket: they survive loading and filtering but are not listed under
    /// any tab, matching the view this reproduces.
    pub fn of_value(status: &StatusValue) -> Option<Self> {
        status.known().map(Self::of)
    }

    pub const fn ordered() -> [Self; 3] {
        [Self::Active, Self::Completed, Self::Rejected]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Completed => "Completed",
            Self::Rejected => "Not Selected",
        }
    }

    pub const fn empty_message(self) -> &'static str {
        match self {
            Self::Active => "No active applications found.",
            Self::Completed => "No completed applications found.",
            Self::Rejected => "No rejected applications found.",
        }
    }
}

/// The three bucket views over one filtered snapshot, in input order.
#[derive(Debug, Default)]
pub struct Grouped<'a> {
    pub active: Vec<&'a Application>,
    pub completed: Vec<&'a Application>,
    pub rejected: Vec<&'a Application>,
}

impl<'a> Grouped<'a> {
    pub fn partition(apps: impl IntoIterator<Item = &'a Application>) -> Self {
        let mut grouped = Self::default();
        for app in apps {
            match Bucket::of_value(&app.status) {
                Some(Bucket::Active) => grouped.active.push(app),
                Some(Bucket::Completed) => grouped.completed.push(app),
                Some(Bucket::Rejected) => grouped.rejected.push(app),
                None => {}
            }
        }
        grouped
    }

    pub fn bucket(&self, bucket: Bucket) -> &[&'a Application] {
        match bucket {
            Bucket::Active => &self.active,
            Bucket::Completed => &self.completed,
            Bucket::Rejected => &self.rejected,
        }
    }

    pub fn count(&self, bucket: Bucket) -> usize {
        self.bucket(bucket).len()
    }
}
