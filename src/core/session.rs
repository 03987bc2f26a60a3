use std::sync::mpsc;
use std::thread;

/// Profile of the signed-in user as exposed by the session provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub display_name: String,
}

/// Access gate driven by the external session provider. The view starts in
/// `Loading` and moves exactly once when the provider resolves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Session {
    Loading,
    Unauthenticated,
    Authenticated(UserProfile),
}

impl Session {
    pub fn resolve(profile: Option<UserProfile>) -> Self {
        match profile {
            Some(profile) => Self::Authenticated(profile),
            None => Self::Unauthenticated,
        }
    }

}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    Resolved(Option<UserProfile>),
}

/// Stand-in for the external session provider: resolves once, on its own
/// thread, and delivers the answer over a channel the UI polls each tick.
pub fn spawn_provider(profile: Option<UserProfile>) -> mpsc::Receiver<SessionEvent> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let _ = tx.send(SessionEvent::Resolved(profile));
    });
    rx
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_moves_to_authenticated_with_a_profile() {
        let profile = UserProfile {
            display_name: "Demo User".to_string(),
        };
        assert_eq!(
            Session::resolve(Some(profile.clone())),
            Session::Authenticated(profile)
        );
    }

    #[test]
    fn resolve_moves_to_unauthenticated_without_a_profile() {
        assert_eq!(Session::resolve(None), Session::Unauthenticated);
    }

    #[test]
    fn provider_delivers_one_resolved_event() {
        let rx = spawn_provider(None);
        let event = rx.recv().unwrap();
        assert_eq!(event, SessionEvent::Resolved(None));
        assert!(rx.recv().is_err());
    }
}
