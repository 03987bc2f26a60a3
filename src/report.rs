use crate::core::application::Application;
use crate::core::filter::{matches, StatusFilter};
use crate::core::formatter::{format_card_lines, format_tab_label};
use crate::core::group::{Bucket, Grouped};
use crate::core::session::Session;

/// Plain-text rendering of the same gate -> filter -> partition -> format
/// pipeline the TUI draws. Pure so tests can assert on the output directly.
pub fn render(session: &Session, apps: &[Application], search: &str, filter: StatusFilter) -> String {
    match session {
        Session::Loading => "Loading applications...\n".to_string(),
        Session::Unauthenticated => {
            let mut out = String::new();
            out.push_str("Please Sign In\n");
            out.push_str("You need to be signed in to view your applications.\n");
            out.push_str("[Sign In]\n");
            out
        }
        Session::Authenticated(profile) => {
            let filtered: Vec<&Application> = apps
                .iter()
                .filter(|app| matches(app, search, filter))
                .collect();
            let grouped = Grouped::partition(filtered);

            let mut out = String::new();
            out.push_str(&format!("My Applications - {}\n", profile.display_name));
            out.push_str("Track and manage your job applications\n");
            if !search.is_empty() {
                out.push_str(&format!("Search: {search}\n"));
            }
            out.push_str(&format!("Filter: {}\n", filter.label()));

            for bucket in Bucket::ordered() {
                out.push('\n');
                out.push_str(&format_tab_label(bucket, grouped.count(bucket)));
                out.push('\n');
                let entries = grouped.bucket(bucket);
                if entries.is_empty() {
                    out.push_str("  ");
                    out.push_str(bucket.empty_message());
                    out.push('\n');
                    if bucket == Bucket::Active {
                        out.push_str("  [Browse Jobs]\n");
                    }
                    continue;
                }
                for app in entries {
                    for line in format_card_lines(app) {
                        out.push_str("  ");
                        out.push_str(&line);
                        out.push('\n');
                    }
                    out.push('\n');
                }
            }
            out
        }
    }
}
