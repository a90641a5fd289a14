use regex::Regex;
use std::sync::OnceLock;
use std::time::Duration;

/// Rewrites a protocol-relative source (`//host/...`) to `https://host/...`.
/// Everything else, including absolute `http` sources, is returned untouched.
pub fn ensure_https(src: &str) -> String {
    if src.starts_with("//") {
        format!("https:{}", src)
    } else {
        src.to_string()
    }
}

/// Resolves a catalog-relative link by prefixing the base origin
pub fn resolve_page_link(base_url: &str, href: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), href)
}

fn dotted_quad() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?-u:\b)[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}(?-u:\b)").expect("dotted-quad pattern is valid")
    })
}

/// Replaces every IPv4-shaped substring with the stable CDN hostname.
///
/// This is a textual substitution, octets are not range-checked.
pub fn rewrite_endpoint(url: &str, cdn_host: &str) -> String {
    dotted_quad()
        .replace_all(url, regex::NoExpand(cdn_host))
        .into_owned()
}

/// Request timeout in seconds as a `Duration`, never shorter than one second
pub fn request_timeout(secs: u64) -> Duration {
    Duration::from_secs(secs.max(1))
}
