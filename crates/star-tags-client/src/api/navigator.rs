//! Redirect Handling
//!
//! The backend signals "go sign in" with `{"error": 302, "location": ...}`
//! in an otherwise normal JSON body. Following it is left to the host.

/// Something that can send the user to another page
pub trait Navigator: Send + Sync {
    fn navigate(&self, location: &str);
}

/// Navigator for hosts without a page to move (tests, native tools)
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNavigator;

impl Navigator for NoopNavigator {
    fn navigate(&self, location: &str) {
        log::warn!("redirect to {} ignored: no navigator installed", location);
    }
}
