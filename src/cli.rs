use std::path::PathBuf;

use clap::Parser;

use crate::core::error::GigError;
use crate::core::filter::StatusFilter;
use crate::core::session::UserProfile;

#[derive(Debug, Parser)]
#[command(name = "gigboard", version, about = "Track and manage your job applications")]
pub struct Cli {
    /// Path to a JSON file holding an array of application records
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Initial search term (matched against job title and company)
    #[arg(long = "search", default_value = "")]
    pub search: String,

    /// Initial status filter: all, pending, accepted, in_progress, completed, rejected
    #[arg(long = "status", default_value = "all")]
    pub status: String,

    /// Print the grouped view to stdout instead of starting the TUI
    #[arg(long = "plain")]
    pub plain: bool,

    /// Display name the sample session provider resolves to
    #[arg(long = "user", default_value = "Demo User")]
    pub user: String,

    /// Make the sample session provider resolve unauthenticated
    #[arg(long = "signed-out")]
    pub signed_out: bool,
}

impl Cli {
    pub fn status_filter(&self) -> Result<StatusFilter, GigError> {
        StatusFilter::parse(&self.status)
    }

    pub fn session_profile(&self) -> Option<UserProfile> {
        if self.signed_out {
            None
        } else {
            Some(UserProfile {
                display_name: self.user.clone(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_all_filter_and_signed_in_demo_user() {
        let cli = Cli::try_parse_from(["gigboard"]).unwrap();
        assert_eq!(cli.status_filter().unwrap(), StatusFilter::All);
        let profile = cli.session_profile().unwrap();
        assert_eq!(profile.display_name, "Demo User");
        assert!(!cli.plain);
    }

    #[test]
    fn signed_out_flag_yields_no_profile() {
        let cli = Cli::try_parse_from(["gigboard", "--signed-out"]).unwrap();
        assert_eq!(cli.session_profile(), None);
    }

    #[test]
    fn bad_status_value_is_rejected() {
        let cli = Cli::try_parse_from(["gigboard", "--status", "archived"]).unwrap();
        assert!(matches!(
            cli.status_filter(),
            Err(GigError::InvalidStatusFilter { .. })
        ));
    }
}
