//! Decide whether the portal served the attendance page or bounced us to login.
//!
//! The portal answers an expired session with 200 and its login page, so the
//! status code alone says nothing. The page title is the only signal.

use crate::attendance::dom;
use crate::error::AttendanceError;
use scraper::Html;

/// What kind of page the portal returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    /// The forwarded cookie was rejected.
    Login,
    /// Anything else; treated as the attendance page.
    Content,
}

/// Classify a page by its title text.
pub fn classify_title(title: &str) -> PageKind {
    if title.to_lowercase().contains("login") {
        PageKind::Login
    } else {
        PageKind::Content
    }
}

/// Classify a parsed document.
pub fn classify_page(document: &Html) -> PageKind {
    classify_title(&dom::title_text(document))
}

/// Pass the document through if the session was accepted.
pub fn ensure_session(document: &Html) -> Result<&Html, AttendanceError> {
    match classify_page(document) {
        PageKind::Login => Err(AttendanceError::SessionExpired),
        PageKind::Content => Ok(document),
    }
}
