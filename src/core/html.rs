// src/core/html.rs
// Tolerant tag scanner for registry listing pages.
// Walks `<...>` openers/closers in document order; tag and attribute names are
// matched case-insensitively. Comments are skipped, and so are the bodies of
// <script>/<style>. No tree is built; callers keep whatever stack they need.

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input",
    "link", "meta", "param", "source", "track", "wbr",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag<'a> {
    /// ASCII-lowercased tag name
    pub name: String,
    pub closing: bool,
    pub self_closing: bool,
    /// Raw attribute text following the name (may end with '/')
    pub attrs: &'a str,
}

impl Tag<'_> {
    /// True when this opener never gets a matching closer.
    pub fn is_void(&self) -> bool {
        self.self_closing || VOID_ELEMENTS.contains(&self.name.as_str())
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        attr_value(self.attrs, key)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .map(|v| v.split_ascii_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }
}

pub struct Tags<'a> {
    s: &'a str,
    b: &'a [u8],
    i: usize,
}

impl<'a> Tags<'a> {
    pub fn new(s: &'a str) -> Self { Self { s, b: s.as_bytes(), i: 0 } }

    // `from` points just past '<'. Quote-aware so `title="a > b"` survives.
    fn tag_end(&self, from: usize) -> Option<usize> {
        let mut in_s = false; // '
        let mut in_d = false; // "
        let mut j = from;
        while j < self.b.len() {
            match self.b[j] {
                b'\'' if !in_d => in_s = !in_s,
                b'"' if !in_s => in_d = !in_d,
                b'>' if !in_s && !in_d => return Some(j),
                _ => {}
            }
            j += 1;
        }
        None
    }
}

impl<'a> Iterator for Tags<'a> {
    type Item = Tag<'a>;

    fn next(&mut self) -> Option<Tag<'a>> {
        loop {
            let lt = self.b.get(self.i..)?.iter().position(|&c| c == b'<')? + self.i;
            let rest = &self.s[lt..];

            if rest.starts_with("<!--") {
                match rest[4..].find("-->") {
                    Some(e) => { self.i = lt + 4 + e + 3; continue; }
                    None => { self.i = self.b.len(); return None; }
                }
            }

            // A '<' in text ("a < b") is not a tag; step over just that byte.
            let first = rest.as_bytes().get(1).copied().unwrap_or(b' ');
            let looks_like_tag = first.is_ascii_alphabetic() || first == b'/' || first == b'!' || first == b'?';
            if !looks_like_tag {
                self.i = lt + 1;
                continue;
            }

            let gt = match self.tag_end(lt + 1) {
                Some(p) => p,
                None => { self.i = self.b.len(); return None; }
            };
            let inner = &self.s[lt + 1..gt];
            self.i = gt + 1;

            let (closing, body) = match inner.strip_prefix('/') {
                Some(r) => (true, r),
                None => (false, inner),
            };
            let name_len = body
                .bytes()
                .take_while(|c| c.is_ascii_alphanumeric() || *c == b'-')
                .count();
            if name_len == 0 {
                continue; // <!doctype>, <?xml ...?>
            }

            let name = body[..name_len].to_ascii_lowercase();
            let attrs = &body[name_len..];
            let self_closing = !closing && attrs.trim_end().ends_with('/');

            if !closing && !self_closing && (name == "script" || name == "style") {
                let closer = join!("</", &name);
                match find_ci(&self.s[self.i..], &closer) {
                    Some(off) => self.i += off,
                    None => self.i = self.b.len(),
                }
            }

            return Some(Tag { name, closing, self_closing, attrs });
        }
    }
}

/// Value of attribute `key` in a raw attribute string. Handles double, single
/// and unquoted values. No entity decoding.
pub fn attr_value<'a>(attrs: &'a str, key: &str) -> Option<&'a str> {
    let b = attrs.as_bytes();
    let n = b.len();
    let mut i = 0usize;

    while i < n {
        // skip separators
        while i < n && (b[i].is_ascii_whitespace() || b[i] == b'/') { i += 1; }
        if i >= n { break; }

        let name_start = i;
        while i < n && !b[i].is_ascii_whitespace() && b[i] != b'=' && b[i] != b'/' { i += 1; }
        let name = &attrs[name_start..i];

        while i < n && b[i].is_ascii_whitespace() { i += 1; }
        if i >= n || b[i] != b'=' {
            // bare attribute (e.g. `hidden`)
            if name.eq_ignore_ascii_case(key) { return Some(""); }
            continue;
        }
        i += 1; // '='
        while i < n && b[i].is_ascii_whitespace() { i += 1; }

        let (val_start, val_end) = match b.get(i) {
            Some(&q) if q == b'"' || q == b'\'' => {
                let start = i + 1;
                let end = b[start..].iter().position(|&c| c == q).map(|p| start + p).unwrap_or(n);
                i = (end + 1).min(n);
                (start, end)
            }
            Some(_) => {
                let start = i;
                while i < n && !b[i].is_ascii_whitespace() { i += 1; }
                (start, i)
            }
            None => (n, n),
        };

        if name.eq_ignore_ascii_case(key) {
            return Some(&attrs[val_start..val_end]);
        }
    }
    None
}

/// ASCII case-insensitive substring search.
pub fn find_ci(hay: &str, needle: &str) -> Option<usize> {
    let (h, nd) = (hay.as_bytes(), needle.as_bytes());
    if nd.is_empty() { return Some(0); }
    h.windows(nd.len()).position(|w| w.eq_ignore_ascii_case(nd))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(doc: &str) -> Vec<String> {
        Tags::new(doc)
            .map(|t| if t.closing { join!("/", &t.name) } else { t.name })
            .collect()
    }

    #[test]
    fn walks_openers_and_closers() {
        let doc = r#"<!DOCTYPE html><DIV class="x"><A HREF="/p">t</A><br/></div>"#;
        assert_eq!(names(doc), vec!["div", "a", "/a", "br", "/div"]);
    }

    #[test]
    fn skips_comments_scripts_and_stray_lt() {
        let doc = r#"<p>1 < 2</p><!-- <a href="/x"> --><script>if (a<b) { x = "<a>"; }</script><a>"#;
        assert_eq!(names(doc), vec!["p", "/p", "script", "/script", "a"]);
    }

    #[test]
    fn quoted_gt_does_not_end_tag() {
        let doc = r#"<a title="a > b" href="/packages/x">x</a>"#;
        let first = Tags::new(doc).next().unwrap();
        assert_eq!(first.attr("href"), Some("/packages/x"));
    }

    #[test]
    fn attr_value_forms() {
        assert_eq!(attr_value(r#" href="/a" class='b c'"#, "class"), Some("b c"));
        assert_eq!(attr_value(" data-x=1 HREF=/packages/y ", "href"), Some("/packages/y"));
        assert_eq!(attr_value(" hidden href=\"/z\"", "hidden"), Some(""));
        assert_eq!(attr_value(" href=\"/z\"", "class"), None);
    }

    #[test]
    fn class_match_is_whole_token() {
        let t = Tags::new(r#"<h3 class="packages-title big">"#).next().unwrap();
        assert!(t.has_class("packages-title"));
        assert!(!t.has_class("packages"));
    }

    #[test]
    fn void_and_self_closing() {
        let tags: Vec<_> = Tags::new("<img src=x><div/><span>").collect();
        assert!(tags[0].is_void());
        assert!(tags[1].is_void());
        assert!(!tags[2].is_void());
    }
}
