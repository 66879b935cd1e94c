use crate::{
    config::Config,
    errors::{CashbookError, Result},
};

/// Explicit per-process session state. Everything behind the entry forms is
/// gated on `authenticated`; there is no global flag.
#[derive(Debug, Default)]
pub struct Session {
    authenticated: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Checks the supplied PIN against the configured one. Returns `Ok(true)`
    /// and marks the session authenticated on a match, `Ok(false)` on a
    /// mismatch. Refuses to authenticate when no PIN has been configured.
    pub fn login(&mut self, config: &Config, pin: &str) -> Result<bool> {
        let expected = config.app_pin.as_deref().ok_or_else(|| {
            CashbookError::Config("no access PIN configured; set `app_pin` in the config file".into())
        })?;
        if pin == expected {
            self.authenticated = true;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    pub fn logout(&mut self) {
        self.authenticated = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_pin(pin: &str) -> Config {
        Config {
            app_pin: Some(pin.into()),
            ..Config::default()
        }
    }

    #[test]
    fn correct_pin_authenticates() {
        let mut session = Session::new();
        assert!(session.login(&config_with_pin("1234"), "1234").unwrap());
        assert!(session.is_authenticated());
    }

    #[test]
    fn wrong_pin_is_rejected() {
        let mut session = Session::new();
        assert!(!session.login(&config_with_pin("1234"), "0000").unwrap());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn unset_pin_refuses_login() {
        let mut session = Session::new();
        let err = session.login(&Config::default(), "1234").unwrap_err();
        assert!(matches!(err, CashbookError::Config(_)));
    }
}
