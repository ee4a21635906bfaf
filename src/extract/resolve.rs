// src/extract/resolve.rs
// =============================================================================
// This module turns possibly-relative link strings into absolute URLs.
//
// Unlike url::Url::join, resolution here is plain string concatenation:
// - "http..." references are already absolute and pass through untouched
// - "/path" is appended to the base
// - "./path" and "path" are appended to the base after a "/"
//
// There is no normalization, so "http://h/p" and "http://h/p/" stay two
// different URLs. Malformed input never fails, it just produces a string
// that may not be reachable.
// =============================================================================

// Resolves a reference relative to the page it was found on
//
// Parameters:
//   reference: the raw link (absolute, root-relative or page-relative)
//   base: the URL of the page the reference was found on
//
// Examples:
//   resolve("/a/b", "http://h")        -> "http://h/a/b"
//   resolve("./x", "http://h/p")       -> "http://h/p/x"
//   resolve("http://other", "http://h") -> "http://other"
//   resolve("y", "http://h/p")         -> "http://h/p/y"
pub fn resolve(reference: &str, base: &str) -> String {
    if reference.starts_with("http") {
        return reference.to_string();
    }

    if reference.starts_with('/') {
        return format!("{}{}", base, reference);
    }

    let relative = reference.strip_prefix("./").unwrap_or(reference);
    format!("{}/{}", base, relative)
}

// Resolves a markup attribute (href/src) against the site origin
//
// Root-relative attributes belong to the site root, not to the page path,
// so "/docs" on "http://h/blog/post" means "http://h/docs".
// "./" references are left alone here; the crawl engine resolves them
// against the page afterwards.
pub fn resolve_against_origin(reference: &str, origin: &str) -> String {
    if reference.starts_with("http") || reference.starts_with("./") {
        return reference.to_string();
    }

    if reference.starts_with('/') {
        return format!("{}{}", origin, reference);
    }

    format!("{}/{}", origin, reference)
}
