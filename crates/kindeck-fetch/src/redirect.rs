use kindeck_types::RedirectRule;
use percent_encoding::percent_decode_str;
use url::Url;

/// Headword a site redirected `word` to, or `word` itself
pub fn redirect_title(rule: RedirectRule, requested: &Url, landed: &Url, word: &str) -> String {
    if requested == landed {
        return word.to_string();
    }

    match rule {
        RedirectRule::None => word.to_string(),
        RedirectRule::PenultimateSegment => penultimate_segment(landed)
            .filter(|segment| !segment.is_empty())
            .unwrap_or_else(|| word.to_string()),
    }
}

fn penultimate_segment(url: &Url) -> Option<String> {
    let segments: Vec<&str> = url.path_segments()?.collect();
    let segment = segments.len().checked_sub(2).map(|i| segments[i])?;

    Some(percent_decode_str(segment).decode_utf8_lossy().into_owned())
}
