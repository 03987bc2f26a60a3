use chrono::NaiveDate;

use crate::core::application::Application;
use crate::core::display::StatusStyle;
use crate::core::group::Bucket;

pub fn format_tab_label(bucket: Bucket, count: usize) -> String {
    format!("{} ({})", bucket.label(), count)
}

pub fn format_applied_line(date: NaiveDate) -> String {
    format!("Applied: {}", date.format("%Y-%m-%d"))
}

/// Earnings render only when present; `None` means no payout yet.
pub fn format_earnings(earnings: Option<f64>) -> Option<String> {
    earnings.map(|amount| format!("${amount:.2}"))
}

/// The card body shared by the TUI card and the plain report. The badge goes
/// through `of_raw` so an unrecognized status renders as the neutral Unknown
/// fallback instead of failing.
pub fn format_card_lines(app: &Application) -> Vec<String> {
    let style = StatusStyle::of_raw(app.status.as_str());
    let mut lines = vec![
        format!("{} [{}]", app.job_title, style.label),
        app.company.clone(),
        app.description.clone(),
        format!("{}  |  {}", format_applied_line(app.applied_date), app.category),
    ];
    if let Some(earned) = format_earnings(app.earnings) {
        lines.push(format!("Earned: {earned}"));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::application::StatusValue;
    use crate::core::source::sample_applications;

    #[test]
    fn tab_label_carries_bucket_name_and_count() {
        assert_eq!(format_tab_label(Bucket::Active, 3), "Active (3)");
        assert_eq!(format_tab_label(Bucket::Rejected, 0), "Not Selected (0)");
    }

    #[test]
    fn earnings_format_is_two_decimal_dollars() {
        assert_eq!(format_earnings(Some(45.0)).unwrap(), "$45.00");
        assert_eq!(format_earnings(Some(80.5)).unwrap(), "$80.50");
        assert_eq!(format_earnings(None), None);
    }

    #[test]
    fn zero_earnings_still_render_when_present() {
        assert_eq!(format_earnings(Some(0.0)).unwrap(), "$0.00");
    }

    #[test]
    fn card_lines_include_status_label_and_skip_absent_earnings() {
        let apps = sample_applications();
        let pending = &apps[1];
        let lines = format_card_lines(pending);
        assert!(lines[0].contains("Pending Review"));
        assert!(lines.iter().all(|line| !line.starts_with("Earned:")));

        let accepted = &apps[0];
        let lines = format_card_lines(accepted);
        assert!(lines.iter().any(|line| line == "Earned: $45.00"));
        assert!(lines.iter().any(|line| line.contains("Applied: 2024-01-15")));
    }

    #[test]
    fn unrecognized_status_renders_the_unknown_badge() {
        let mut apps = sample_applications();
        apps[0].status = StatusValue::Unrecognized("archived".to_string());
        let lines = format_card_lines(&apps[0]);
        assert!(lines[0].contains("[Unknown]"), "{:?}", lines[0]);
    }
}
