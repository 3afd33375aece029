use memchr::memchr;
use smallvec::SmallVec;

pub(crate) type Segments<'a> = SmallVec<[&'a str; 8]>;

/// Split a raw field name into path segments.
///
/// Bracket tokens (`prefix[index]`) emit their index as one segment, even
/// when empty; bracket contents are never split further. Plain spans outside
/// brackets are split by `separator`. A name that produces no segments
/// degenerates to a single segment equal to the whole name.
pub(crate) fn split_name(name: &str, separator: char) -> Segments<'_> {
    let mut segments = Segments::new();
    let bytes = name.as_bytes();
    let mut pos = 0;
    let mut after_bracket = false;

    loop {
        let Some(open) = memchr(b'[', &bytes[pos..]).map(|off| pos + off) else {
            break;
        };
        let Some(close) = memchr(b']', &bytes[open + 1..]).map(|off| open + 1 + off) else {
            // unmatched `[`: the rest is one plain span
            break;
        };
        push_plain(
            &mut segments,
            &name[pos..open],
            separator,
            after_bracket,
            true,
        );
        segments.push(&name[open + 1..close]);
        pos = close + 1;
        after_bracket = true;
    }

    push_plain(&mut segments, &name[pos..], separator, after_bracket, false);

    if segments.is_empty() {
        segments.push(name);
    }
    segments
}

/// Split one plain span by the separator, keeping interior empty pieces.
///
/// A single separator abutting a bracket token is swallowed so that
/// `a[0].b` yields `a`, `0`, `b` rather than an empty segment between
/// the index and the key.
fn push_plain<'a>(
    segments: &mut Segments<'a>,
    span: &'a str,
    separator: char,
    follows_bracket: bool,
    precedes_bracket: bool,
) {
    let mut span = span;
    if follows_bracket {
        if let Some(stripped) = span.strip_prefix(separator) {
            span = stripped;
        }
    }
    if precedes_bracket {
        if let Some(stripped) = span.strip_suffix(separator) {
            span = stripped;
        }
    }
    if span.is_empty() {
        return;
    }
    segments.extend(span.split(separator));
}

/// Parse a segment as a base-10 array index. Anything that is not all
/// ASCII digits (or that overflows `usize`) is treated as a plain key.
pub(crate) fn parse_index(segment: &str) -> Option<usize> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}
