use url::Url;

/// Hostname of `url` without a leading `www.`.
///
/// Returns the input unchanged when it does not parse or carries no host.
#[must_use]
pub fn extract_domain(url: &str) -> String {
    let Ok(parsed) = Url::parse(url) else {
        return url.to_string();
    };
    match parsed.host_str() {
        Some(host) if !host.is_empty() => host.strip_prefix("www.").unwrap_or(host).to_string(),
        _ => url.to_string(),
    }
}

/// Make a scraped image reference absolute.
///
/// Protocol-relative references get `https:`; `http(s)://` URLs pass through;
/// anything else is joined onto the origin of the page it was scraped from.
#[must_use]
pub fn resolve_image_url(image: &str, page_url: &str) -> Option<String> {
    if image.starts_with("//") {
        return Some(format!("https:{image}"));
    }
    if has_http_scheme(image) {
        return Some(image.to_string());
    }

    let origin = Url::parse(page_url).ok()?.origin();
    if !origin.is_tuple() {
        return None;
    }
    let base = Url::parse(&origin.ascii_serialization()).ok()?;
    base.join(image).ok().map(String::from)
}

fn has_http_scheme(candidate: &str) -> bool {
    let lower = candidate.get(..8).unwrap_or(candidate).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}
