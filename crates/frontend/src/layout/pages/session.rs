//! Navigation generations. Async work remembers the token it started under
//! and checks it before touching the page.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionToken {
    generation: u64,
}

#[derive(Debug, Default, Clone)]
pub struct NavigationSessions {
    generation: u64,
    page: Option<String>,
}

impl NavigationSessions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a session for `page`, making every earlier token stale.
    pub fn begin(&mut self, page: &str) -> SessionToken {
        self.generation += 1;
        self.page = Some(page.to_string());
        SessionToken {
            generation: self.generation,
        }
    }

    pub fn current_token(&self) -> SessionToken {
        SessionToken {
            generation: self.generation,
        }
    }

    pub fn is_current(&self, token: SessionToken) -> bool {
        token.generation == self.generation
    }

    pub fn current_page(&self) -> Option<&str> {
        self.page.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_navigation_stales_old_token() {
        let mut sessions = NavigationSessions::new();
        let upload = sessions.begin("upload");
        assert!(sessions.is_current(upload));

        let manage = sessions.begin("manage");
        assert!(!sessions.is_current(upload));
        assert!(sessions.is_current(manage));
        assert_eq!(sessions.current_token(), manage);
        assert_eq!(sessions.current_page(), Some("manage"));
    }

    #[test]
    fn test_reentering_same_page_opens_new_session() {
        let mut sessions = NavigationSessions::new();
        let first = sessions.begin("webhooks");
        let second = sessions.begin("webhooks");
        assert_ne!(first, second);
        assert!(!sessions.is_current(first));
        assert!(sessions.is_current(second));
    }
}
