// src/core/html.rs
// Streaming <tr>/<td> extractor. One pass over the document, no tree:
// only row/cell structure and cell text matter, everything else is skipped.

use std::mem::take;

/// Collects cell text into rows as tag/text/char-ref events arrive.
#[derive(Default)]
struct RowCollector {
    in_cell: bool,
    cell: String,
    row: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl RowCollector {
    fn open_tag(&mut self, name: &str) {
        if name.eq_ignore_ascii_case("tr") {
            self.row.clear();
        } else if name.eq_ignore_ascii_case("td") {
            self.in_cell = true;
            self.cell.clear();
        }
    }

    fn close_tag(&mut self, name: &str) {
        if name.eq_ignore_ascii_case("td") {
            self.in_cell = false;
            let text = take(&mut self.cell);
            self.row.push(s!(text.trim()));
        } else if name.eq_ignore_ascii_case("tr") && !self.row.is_empty() {
            self.rows.push(take(&mut self.row));
        }
    }

    fn text(&mut self, t: &str) {
        if self.in_cell {
            self.cell.push_str(t);
        }
    }

    fn char_ref(&mut self, c: char) {
        if self.in_cell {
            self.cell.push(c);
        }
    }
}

/// Scan `doc` and return the text cells of every `<tr>` as one row each.
/// Cell text is entity-decoded and whitespace-trimmed; rows with no `<td>`
/// at all are dropped. Tags other than `tr`/`td` only delimit text.
pub fn extract_rows(doc: &str) -> Vec<Vec<String>> {
    let mut sink = RowCollector::default();
    let bytes = doc.as_bytes();
    let mut i = 0usize;

    while i < bytes.len() {
        match bytes[i] {
            b'<' => {
                if let Some((name, closing, next)) = parse_tag(doc, i) {
                    if closing {
                        sink.close_tag(name);
                    } else {
                        sink.open_tag(name);
                    }
                    i = next;
                } else {
                    // stray '<' with no closing '>', treat as text
                    sink.text("<");
                    i += 1;
                }
            }
            b'&' if sink.in_cell => {
                if let Some((decoded, next)) = parse_char_ref(doc, i) {
                    if let Some(c) = decoded {
                        sink.char_ref(c);
                    }
                    i = next;
                } else {
                    sink.text("&");
                    i += 1;
                }
            }
            _ => {
                let start = i;
                while i < bytes.len()
                    && bytes[i] != b'<'
                    && !(bytes[i] == b'&' && sink.in_cell)
                {
                    i += 1;
                }
                sink.text(&doc[start..i]);
            }
        }
    }

    sink.rows
}

/// Parse the tag starting at `at` (a '<'). Returns (name, is_closing, index
/// past the '>'). Attributes are skipped; comments/doctype come back with an
/// empty name so the collector ignores them.
fn parse_tag(doc: &str, at: usize) -> Option<(&str, bool, usize)> {
    let bytes = doc.as_bytes();
    let mut i = at + 1;

    let closing = if bytes.get(i) == Some(&b'/') {
        i += 1;
        true
    } else {
        false
    };

    let name_start = i;
    while i < bytes.len() && bytes[i].is_ascii_alphanumeric() {
        i += 1;
    }
    if i == name_start {
        // "<!--", "<!DOCTYPE", "<?xml": markup, but not an element
        if matches!(bytes.get(name_start), Some(b'!') | Some(b'?')) {
            let end = doc[at..].find('>')? + at;
            return Some(("", false, end + 1));
        }
        return None;
    }

    let name = &doc[name_start..i];
    let end = doc[i..].find('>')? + i;
    Some((name, closing, end + 1))
}

/// Parse a character reference starting at `at` (a '&'). Returns the decoded
/// char (None for unknown named refs, which decode to nothing) and the index
/// past the ';'. A '&' that forms no well-formed reference returns None and
/// stays literal text.
fn parse_char_ref(doc: &str, at: usize) -> Option<(Option<char>, usize)> {
    let rest = &doc[at + 1..];

    // bounded lookahead; real references are short
    let mut semi = None;
    for (j, &b) in rest.as_bytes().iter().take(33).enumerate() {
        if b == b';' {
            semi = Some(j);
            break;
        }
    }
    let semi = semi?;
    if semi == 0 {
        return None;
    }
    let body = &rest[..semi];
    let next = at + 1 + semi + 1;

    if let Some(num) = body.strip_prefix('#') {
        let code = if let Some(hex) = num.strip_prefix(['x', 'X']) {
            u32::from_str_radix(hex, 16).ok()?
        } else {
            num.parse::<u32>().ok()?
        };
        return Some((char::from_u32(code), next));
    }

    if !body.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return None;
    }
    let decoded = match body {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some(' '),
        _ => None,
    };
    Some((decoded, next))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_rows_and_cells() {
        let doc = r#"
            <table>
              <tr><td>USA</td><td>Super Mario 3D Land</td><td>AXME</td><td>0004000000030800</td></tr>
              <tr><td>EUR</td><td>Mario Kart 7</td></tr>
            </table>
        "#;
        let rows = extract_rows(doc);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][1], "Super Mario 3D Land");
        assert_eq!(rows[0][3], "0004000000030800");
        assert_eq!(rows[1], vec!["EUR", "Mario Kart 7"]);
    }

    #[test]
    fn row_without_cells_is_dropped() {
        let doc = "<tr></tr><tr><th>Header only</th></tr><tr><td>x</td></tr>";
        let rows = extract_rows(doc);
        assert_eq!(rows, vec![vec!["x".to_string()]]);
    }

    #[test]
    fn inner_tags_only_delimit_text() {
        let doc = r#"<tr><td><a href="/t?id=1"><b>Mario</b> Kart</a><br>7</td></tr>"#;
        let rows = extract_rows(doc);
        assert_eq!(rows[0][0], "Mario Kart7");
    }

    #[test]
    fn named_entities_decode() {
        let doc = "<tr><td>Mario&apos;s Adventure</td><td>A &amp; B &lt;3&gt; &quot;q&quot;&nbsp;</td></tr>";
        let rows = extract_rows(doc);
        assert_eq!(rows[0][0], "Mario's Adventure");
        assert_eq!(rows[0][1], r#"A & B <3> "q""#);
    }

    #[test]
    fn unknown_named_entity_decodes_to_nothing() {
        let doc = "<tr><td>A&copy;B&hellip;C</td></tr>";
        let rows = extract_rows(doc);
        assert_eq!(rows[0][0], "ABC");
    }

    #[test]
    fn numeric_refs_decimal_and_hex() {
        let doc = "<tr><td>&#77;ario &#x4E16;&#x754C;</td></tr>";
        let rows = extract_rows(doc);
        assert_eq!(rows[0][0], "Mario 世界");
    }

    #[test]
    fn malformed_ampersand_stays_literal() {
        let doc = "<tr><td>Fish & Chips</td><td>a&b;c</td></tr>";
        let rows = extract_rows(doc);
        assert_eq!(rows[0][0], "Fish & Chips");
        // "b" is alphanumeric but unknown, so it decodes to nothing
        assert_eq!(rows[0][1], "ac");
    }

    #[test]
    fn tag_case_is_ignored() {
        let doc = "<TR><TD>Upper</TD></TR>";
        let rows = extract_rows(doc);
        assert_eq!(rows[0][0], "Upper");
    }

    #[test]
    fn cell_text_is_trimmed() {
        let doc = "<tr><td>  padded \n </td></tr>";
        let rows = extract_rows(doc);
        assert_eq!(rows[0][0], "padded");
    }

    #[test]
    fn comments_and_doctype_are_skipped() {
        let doc = "<!DOCTYPE html><tr><td><!-- note -->X</td></tr>";
        let rows = extract_rows(doc);
        assert_eq!(rows[0][0], "X");
    }
}
