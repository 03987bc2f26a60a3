use crate::core::application::ApplicationStatus;

/// Abstract color class for a status badge. Core stays render-agnostic; the
/// TUI maps tones onto terminal colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Warning,
    Success,
    Info,
    Highlight,
    Danger,
    Neutral,
}

/// The one shared status-to-display mapping. Both the card badge and the
/// plain report go through here so the two render paths cannot drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusStyle {
    pub tone: Tone,
    pub label: &'static str,
}

impl StatusStyle {
    pub const UNKNOWN: Self = Self {
        tone: Tone::Neutral,
        label: "Unknown",
    };

    pub const fn of(status: ApplicationStatus) -> Self {
        match status {
            ApplicationStatus::Pending => Self {
                tone: Tone::Warning,
                label: "Pending Review",
            },
            ApplicationStatus::Accepted => Self {
                tone: Tone::Success,
                label: "Accepted",
            },
            ApplicationStatus::Completed => Self {
                tone: Tone::Info,
                label: "Completed",
            },
            ApplicationStatus::InProgress => Self {
                tone: Tone::Highlight,
                label: "In Progress",
            },
            ApplicationStatus::Rejected => Self {
                tone: Tone::Danger,
                label: "Not Selected",
            },
        }
    }

    /// Total over arbitrary wire strings: anything unrecognized degrades to
    /// the neutral fallback instead of failing.
    pub fn of_raw(raw: &str) -> Self {
        match ApplicationStatus::parse(raw) {
            Some(status) => Self::of(status),
            None => Self::UNKNOWN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_status_maps_to_its_pair() {
        let cases = [
            (ApplicationStatus::Pending, Tone::Warning, "Pending Review"),
            (ApplicationStatus::Accepted, Tone::Success, "Accepted"),
            (ApplicationStatus::Completed, Tone::Info, "Completed"),
            (ApplicationStatus::InProgress, Tone::Highlight, "In Progress"),
            (ApplicationStatus::Rejected, Tone::Danger, "Not Selected"),
        ];
        for (status, tone, label) in cases {
            let style = StatusStyle::of(status);
            assert_eq!(style.tone, tone);
            assert_eq!(style.label, label);
        }
    }

    #[test]
    fn unrecognized_raw_values_degrade_to_neutral_unknown() {
        for raw in ["archived", "", "PENDING", "done"] {
            let style = StatusStyle::of_raw(raw);
            assert_eq!(style.tone, Tone::Neutral);
            assert_eq!(style.label, "Unknown");
        }
    }

    #[test]
    fn of_raw_agrees_with_of_for_known_statuses() {
        for status in [
            ApplicationStatus::Pending,
            ApplicationStatus::Accepted,
            ApplicationStatus::InProgress,
            ApplicationStatus::Completed,
            ApplicationStatus::Rejected,
        ] {
            assert_eq!(StatusStyle::of_raw(status.as_str()), StatusStyle::of(status));
        }
    }
}
