use url::Url;

/// Resolves `href` against `base`. Hrefs that already start with `http`
/// are returned unchanged; unresolvable input is returned as given.
pub fn absolute(base: &str, href: &str) -> String {
    if href.starts_with("http") {
        return href.to_string();
    }

    Url::parse(base)
        .and_then(|b| b.join(href))
        .map(|u| u.to_string())
        .unwrap_or_else(|_| href.to_string())
}

/// True when the URL's host ends with `host_tail`.
pub fn same_host(url: &str, host_tail: &str) -> bool {
    Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(|h| h.ends_with(host_tail)))
        .unwrap_or(false)
}
