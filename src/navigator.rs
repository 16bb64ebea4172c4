//! Browser Redirects

use star_tags_client::Navigator;

/// Follows backend redirects by moving the current page
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate(&self, location: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(e) = window.location().set_href(location) {
            log::error!("failed to redirect to {}: {:?}", location, e);
        }
    }
}
