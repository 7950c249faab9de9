use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8, WINDOWS_1252};
use regex::bytes::Regex;

const META_SNIFF_LEN: usize = 1024;

static META_CHARSET: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]*charset\s*=\s*["']?([a-z0-9_:.\-]+)"#).ok()
});

/// Picks the text encoding of a response body.
///
/// Order: byte order mark, `Content-Type` charset, `<meta>` charset in the
/// first kilobyte, UTF-8 if the bytes are valid UTF-8, else windows-1252.
pub fn detect_encoding(body: &[u8], content_type: Option<&str>) -> &'static Encoding {
    if let Some((encoding, _)) = Encoding::for_bom(body) {
        return encoding;
    }

    if let Some(encoding) = content_type.and_then(charset_param) {
        return encoding;
    }

    if let Some(encoding) = meta_charset(&body[..body.len().min(META_SNIFF_LEN)]) {
        return encoding;
    }

    if std::str::from_utf8(body).is_ok() {
        UTF_8
    } else {
        WINDOWS_1252
    }
}

fn charset_param(content_type: &str) -> Option<&'static Encoding> {
    content_type
        .split(';')
        .filter_map(|param| param.trim().split_once('='))
        .find(|(key, _)| key.trim().eq_ignore_ascii_case("charset"))
        .and_then(|(_, value)| Encoding::for_label(value.trim().trim_matches('"').as_bytes()))
}

fn meta_charset(head: &[u8]) -> Option<&'static Encoding> {
    let captures = META_CHARSET.as_ref()?.captures(head)?;
    Encoding::for_label(captures.get(1)?.as_bytes())
}
