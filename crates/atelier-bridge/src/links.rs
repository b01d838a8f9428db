//! External-link tagging for lesson content.
//!
//! Anchors whose href leaves the lesson's host get `target="_blank"` so
//! they open outside the embedded frame. Relative links and anchors with
//! no resolvable hostname are left alone.

use tracing::debug;

use crate::page::Page;

/// Extract the hostname from an absolute or protocol-relative URL.
///
/// Mirrors what a browser reports for `anchor.hostname`: no scheme, no
/// port, no path. Relative URLs yield `None`.
pub fn hostname(url: &str) -> Option<&str> {
    let rest = if let Some((scheme, rest)) = url.split_once("://") {
        if scheme.is_empty() || scheme.contains('/') {
            return None;
        }
        rest
    } else if let Some(rest) = url.strip_prefix("//") {
        rest
    } else {
        return None;
    };

    let authority = rest.split(['/', '?', '#']).next().unwrap_or("");
    // Drop credentials, then the port.
    let host = authority.rsplit('@').next().unwrap_or(authority);
    let host = host.split(':').next().unwrap_or(host);

    if host.is_empty() {
        None
    } else {
        Some(host)
    }
}

/// Mark every anchor pointing off-host with `target="_blank"`.
///
/// Returns how many anchors were tagged.
pub fn tag_external_links(page: &mut Page, page_hostname: &str) -> usize {
    let external: Vec<String> = page
        .elements()
        .filter(|element| element.tag() == "a")
        .filter(|element| {
            element
                .attribute("href")
                .and_then(hostname)
                .is_some_and(|host| host != page_hostname)
        })
        .map(|element| element.id().to_string())
        .collect();

    for id in &external {
        if let Some(anchor) = page.element_mut(id) {
            anchor.set_attribute("target", "_blank");
        }
    }

    debug!(count = external.len(), "external links tagged");
    external.len()
}
