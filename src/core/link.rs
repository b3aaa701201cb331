//! Link classification utilities.

/// Site-root-relative path (`/about`, `/articles/foo#intro`).
#[inline]
pub fn is_site_root(link: &str) -> bool {
    link.starts_with('/')
}

/// HTTP or HTTPS URL.
#[inline]
pub fn is_http(link: &str) -> bool {
    link.starts_with("http://") || link.starts_with("https://")
}
