// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! SVG source fix-ups applied before parsing.
//!
//! `usvg` is strict about namespaces, while hand-written SVG snippets
//! often omit them or consist of a single shape element.

use std::borrow::Cow;

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const XLINK_NS: &str = "http://www.w3.org/1999/xlink";

/// Checks that a string looks like SVG code: a full document or a single tag.
///
/// Leading and trailing whitespaces are ignored.
pub fn is_svg_code(text: &str) -> bool {
    let text = text.trim();
    text.starts_with('<') && text.ends_with('>')
}

/// Prepares an SVG source for parsing.
///
/// - strips a leading BOM
/// - wraps a fragment whose root element is not `svg` into one
/// - adds the SVG and XLink namespaces to the root element when missing
///
/// Returns the input unchanged when nothing has to be fixed.
pub fn prepare(text: &str) -> Cow<'_, str> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let uses_xlink = text.contains("xlink:");

    let root = find_root_start(text);
    let (start, end) = match root.and_then(|pos| svg_start_tag(text, pos)) {
        Some(v) => v,
        None => {
            log::debug!("The root element is not 'svg'. Wrapping the input as a fragment.");

            // The XML declaration and comments must stay in front.
            let pos = root.unwrap_or(0);
            let mut wrapped = String::with_capacity(text.len() + 96);
            wrapped.push_str(&text[..pos]);
            wrapped.push_str("<svg xmlns=\"");
            wrapped.push_str(SVG_NS);
            wrapped.push('"');
            if uses_xlink {
                wrapped.push_str(" xmlns:xlink=\"");
                wrapped.push_str(XLINK_NS);
                wrapped.push('"');
            }
            wrapped.push('>');
            wrapped.push_str(&text[pos..]);
            wrapped.push_str("</svg>");
            return Cow::Owned(wrapped);
        }
    };

    let tag = &text[start..end];
    let mut missing = String::new();
    if !tag.contains("xmlns=") {
        missing.push_str(" xmlns=\"");
        missing.push_str(SVG_NS);
        missing.push('"');
    }

    if uses_xlink && !tag.contains("xmlns:xlink") {
        missing.push_str(" xmlns:xlink=\"");
        missing.push_str(XLINK_NS);
        missing.push('"');
    }

    if missing.is_empty() {
        return Cow::Borrowed(text);
    }

    // Right after `<svg`.
    let insert_at = start + 4;
    let mut fixed = String::with_capacity(text.len() + missing.len());
    fixed.push_str(&text[..insert_at]);
    fixed.push_str(&missing);
    fixed.push_str(&text[insert_at..]);
    Cow::Owned(fixed)
}

/// Returns the position of the first element start tag.
///
/// The XML declaration, processing instructions, comments and DOCTYPE
/// are skipped. `None` when the text has no elements.
fn find_root_start(text: &str) -> Option<usize> {
    let mut pos = 0;
    loop {
        let rest = text[pos..].trim_start();
        pos = text.len() - rest.len();

        if rest.starts_with("<?") {
            pos += rest.find("?>")? + 2;
        } else if rest.starts_with("<!--") {
            pos += rest.find("-->")? + 3;
        } else if rest.starts_with("<!") {
            pos += find_doctype_end(rest.as_bytes())?;
        } else if rest.starts_with('<') {
            return Some(pos);
        } else {
            return None;
        }
    }
}

/// Finds the position right after a DOCTYPE, including its internal subset.
fn find_doctype_end(bytes: &[u8]) -> Option<usize> {
    let mut quote = None;
    let mut depth = 0;
    for (i, c) in bytes.iter().enumerate() {
        match (quote, *c) {
            (None, b'"') | (None, b'\'') => quote = Some(*c),
            (Some(q), c) if q == c => quote = None,
            (None, b'[') => depth += 1,
            (None, b']') => depth -= 1,
            (None, b'>') if depth == 0 => return Some(i + 1),
            _ => {}
        }
    }

    None
}

/// Returns the byte range of an `<svg ...>` start tag at `start`.
fn svg_start_tag(text: &str, start: usize) -> Option<(usize, usize)> {
    let bytes = text.as_bytes();
    if !text[start..].starts_with("<svg") {
        return None;
    }

    let is_tag = matches!(
        bytes.get(start + 4).copied(),
        Some(b' ') | Some(b'\t') | Some(b'\n') | Some(b'\r') | Some(b'>') | Some(b'/')
    );
    if !is_tag {
        return None;
    }

    let end = find_tag_end(bytes, start + 4)?;
    Some((start, end))
}

/// Finds the position right after the closing `>`, skipping quoted values.
fn find_tag_end(bytes: &[u8], from: usize) -> Option<usize> {
    let mut quote = None;
    for (i, c) in bytes.iter().enumerate().skip(from) {
        match (quote, *c) {
            (None, b'"') | (None, b'\'') => quote = Some(*c),
            (Some(q), c) if q == c => quote = None,
            (None, b'>') => return Some(i + 1),
            _ => {}
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn svg_code_detection() {
        assert!(is_svg_code("<svg/>"));
        assert!(is_svg_code("  <path d='M 0 0 L 1 1'/>\n"));
        assert!(!is_svg_code("input.svg"));
        assert!(!is_svg_code("<svg"));
        assert!(!is_svg_code(""));
    }

    #[test]
    fn complete_document_is_borrowed() {
        let text = "<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 1 1'/>";
        assert!(matches!(prepare(text), Cow::Borrowed(_)));
    }

    #[test]
    fn bom_is_stripped() {
        let text = "\u{feff}<svg xmlns='http://www.w3.org/2000/svg'/>";
        assert_eq!(prepare(text), "<svg xmlns='http://www.w3.org/2000/svg'/>");
    }

    #[test]
    fn fragment_is_wrapped() {
        assert_eq!(
            prepare("<rect width='10' height='10'/>"),
            "<svg xmlns=\"http://www.w3.org/2000/svg\"><rect width='10' height='10'/></svg>"
        );
    }

    #[test]
    fn svg_namespace_is_injected() {
        assert_eq!(
            prepare("<svg viewBox='0 0 1 1'><rect/></svg>"),
            "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox='0 0 1 1'><rect/></svg>"
        );
    }

    #[test]
    fn xlink_namespace_is_injected() {
        let text = "<svg xmlns='http://www.w3.org/2000/svg'><use xlink:href='#a'/></svg>";
        assert_eq!(
            prepare(text),
            "<svg xmlns:xlink=\"http://www.w3.org/1999/xlink\" \
             xmlns='http://www.w3.org/2000/svg'><use xlink:href='#a'/></svg>"
        );
    }

    #[test]
    fn svg_prefixed_names_are_not_root() {
        // `<svgfoo>` is not an `svg` element.
        let text = "<svgfoo/>";
        assert_eq!(
            prepare(text),
            "<svg xmlns=\"http://www.w3.org/2000/svg\"><svgfoo/></svg>"
        );
    }

    #[test]
    fn quoted_gt_inside_root_tag() {
        let text = "<svg data-x='a>b'><rect/></svg>";
        let tag = svg_start_tag(text, 0).unwrap();
        assert_eq!(&text[tag.0..tag.1], "<svg data-x='a>b'>");
    }

    #[test]
    fn nested_svg_is_not_root() {
        let text = "<g><svg viewBox='0 0 10 10'><rect/></svg></g>";
        assert_eq!(
            prepare(text),
            "<svg xmlns=\"http://www.w3.org/2000/svg\">\
             <g><svg viewBox='0 0 10 10'><rect/></svg></g></svg>"
        );
    }

    #[test]
    fn prolog_is_skipped() {
        let text = "<?xml version='1.0'?>\n<!-- <svg> -->\n\
                    <!DOCTYPE svg [<!ENTITY e '>'>]>\n<svg><rect/></svg>";
        let fixed = prepare(text);
        assert!(fixed.ends_with("<svg xmlns=\"http://www.w3.org/2000/svg\"><rect/></svg>"));
        assert!(fixed.starts_with("<?xml version='1.0'?>\n<!-- <svg> -->"));
    }

    #[test]
    fn fragment_is_wrapped_after_prolog() {
        assert_eq!(
            prepare("<?xml version='1.0'?><rect/>"),
            "<?xml version='1.0'?><svg xmlns=\"http://www.w3.org/2000/svg\"><rect/></svg>"
        );
    }

    #[test]
    fn root_lookup() {
        assert_eq!(find_root_start("  <rect/>"), Some(2));
        assert_eq!(find_root_start("<!-- a --><g/>"), Some(10));
        assert_eq!(find_root_start("<!-- unterminated"), None);
        assert_eq!(find_root_start("text"), None);
    }
}
