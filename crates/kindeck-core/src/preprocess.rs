use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    // Default: NFC, single spaces, trimmed
    fn process(&self, text: &str) -> String {
        let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");

        collapsed.nfc().collect()
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}

/// Newlines become `<br>`, runs of two or more spaces become as many `&nbsp;`
pub fn htmlify(text: &str) -> String {
    let text = text.replace("\r\n", "\n").replace('\n', "<br>");

    let mut out = String::with_capacity(text.len());
    let mut spaces = 0usize;
    for c in text.chars() {
        if c == ' ' {
            spaces += 1;
            continue;
        }
        push_spaces(&mut out, spaces);
        spaces = 0;
        out.push(c);
    }
    push_spaces(&mut out, spaces);

    out
}

fn push_spaces(out: &mut String, count: usize) {
    match count {
        0 => {}
        1 => out.push(' '),
        n => out.push_str(&"&nbsp;".repeat(n)),
    }
}
