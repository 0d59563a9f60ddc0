//! Source-annotated diagnostics for parameter files.

use std::ops::Range;

use ariadne::{Config, IndexType, Label, Report, ReportKind, Source};

use crate::error::SfxError;

/// Render `err` as a report pointing into `source`, the contents of the
/// parameter file `name`. Errors unrelated to the file's contents render as
/// their plain message.
pub fn render_report(err: &SfxError, name: &str, source: &str, color: bool) -> String {
    let (span, label) = match err {
        SfxError::Preset(e) => (json_error_span(e, source), e.to_string()),
        SfxError::InvalidParameter(p) => (field_span(p.field(), source), p.to_string()),
        other => return other.to_string(),
    };

    let mut out = Vec::new();
    let written = Report::build(ReportKind::Error, (name, span.clone()))
        .with_config(Config::default().with_color(color).with_index_type(IndexType::Byte))
        .with_message(err.to_string())
        .with_label(Label::new((name, span)).with_message(label))
        .finish()
        .write((name, Source::from(source)), &mut out);

    match written {
        Ok(()) => String::from_utf8_lossy(&out).into_owned(),
        Err(_) => err.to_string(),
    }
}

/// Byte span of a serde_json error position (1-based line and column).
fn json_error_span(e: &serde_json::Error, source: &str) -> Range<usize> {
    let line_start: usize = source
        .split_inclusive('\n')
        .take(e.line().saturating_sub(1))
        .map(str::len)
        .sum();
    let mut at = (line_start + e.column().saturating_sub(1)).min(source.len());
    while !source.is_char_boundary(at) {
        at -= 1;
    }
    let end = source[at..].chars().next().map_or(at, |c| at + c.len_utf8());
    at..end
}

/// Byte span of `"field": value` in `source`, or the start of the file when
/// the key is absent.
fn field_span(field: &str, source: &str) -> Range<usize> {
    let key = format!("\"{field}\"");
    let Some(start) = source.find(&key) else {
        return 0..0;
    };
    let end = source[start..]
        .find([',', '}', '\n'])
        .map_or(source.len(), |off| start + off);
    start..source[..end].trim_end().len().max(start + key.len())
}
