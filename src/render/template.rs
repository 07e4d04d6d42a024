//! A small logic-less template language over entry fields.
//!
//! - `{{name}}` inserts a field, `{{name|filter}}` formats it first
//!   (`round`, `int`, `euro`). Unknown fields insert nothing.
//! - `{{#name}}…{{/name}}` keeps its body only when the field is truthy;
//!   `{{#name}}…{{else}}…{{/name}}` renders the second branch otherwise.
//!   Sections nest, including sections over the same field.

use crate::errors::{AppError, AppResult};
use crate::models::entry::{Entry, FieldValue};
use crate::utils::formatting::{euro, round0, truncate};
use regex::Regex;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";
const ELSE: &str = "else";

/// Next `{{…}}` tag in `text`: its offset, trimmed contents and the text after it.
fn next_tag(text: &str) -> AppResult<Option<(usize, &str, &str)>> {
    let Some(start) = text.find(OPEN) else {
        return Ok(None);
    };
    let after_open = &text[start + OPEN.len()..];
    let end = after_open
        .find(CLOSE)
        .ok_or_else(|| AppError::Template("unclosed '{{' tag".to_string()))?;
    Ok(Some((
        start,
        after_open[..end].trim(),
        &after_open[end + CLOSE.len()..],
    )))
}

/// The branches of one `{{#name}}` section and the text after its closing tag.
struct Section<'a> {
    body: &'a str,
    otherwise: &'a str,
    rest: &'a str,
}

impl<'a> Section<'a> {
    /// Split `text`, which starts right after `{{#name}}`, at the matching
    /// `{{/name}}`. Tags of nested sections are skipped by depth.
    fn find(text: &'a str, name: &str) -> AppResult<Self> {
        let mut depth = 0usize;
        let mut else_at: Option<(usize, usize)> = None;
        let mut pos = 0;

        while let Some((start, tag, after_tag)) = next_tag(&text[pos..])? {
            let tag_start = pos + start;
            let tag_end = text.len() - after_tag.len();

            if tag.starts_with('#') {
                depth += 1;
            } else if let Some(closing) = tag.strip_prefix('/') {
                let closing = closing.trim();
                if depth == 0 {
                    if closing != name {
                        return Err(AppError::Template(format!(
                            "section '{name}' closed by '{closing}'"
                        )));
                    }
                    let (body, otherwise) = match else_at {
                        Some((s, e)) => (&text[..s], &text[e..tag_start]),
                        None => (&text[..tag_start], ""),
                    };
                    return Ok(Self {
                        body,
                        otherwise,
                        rest: after_tag,
                    });
                }
                depth -= 1;
            } else if tag == ELSE && depth == 0 {
                if else_at.is_some() {
                    return Err(AppError::Template(format!(
                        "section '{name}' has more than one '{{{{else}}}}'"
                    )));
                }
                else_at = Some((tag_start, tag_end));
            }
            pos = tag_end;
        }

        Err(AppError::Template(format!("section '{name}' is never closed")))
    }
}

pub struct Template {
    source: String,
    variable: Regex,
}

impl Template {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            variable: Regex::new(r"^\s*([A-Za-z_][A-Za-z0-9_]*)\s*(?:\|\s*([a-z]+)\s*)?$")
                .expect("static regex"),
        }
    }

    pub fn render(&self, entry: &Entry) -> AppResult<String> {
        let mut out = String::with_capacity(self.source.len());
        self.render_into(&self.source, entry, &mut out)?;
        Ok(out)
    }

    fn render_into(&self, mut rest: &str, entry: &Entry, out: &mut String) -> AppResult<()> {
        while let Some((start, tag, after_tag)) = next_tag(rest)? {
            out.push_str(&rest[..start]);

            if let Some(name) = tag.strip_prefix('#') {
                let name = name.trim();
                let section = Section::find(after_tag, name)?;
                let branch = if entry.field(name).is_some_and(|v| v.is_truthy()) {
                    section.body
                } else {
                    section.otherwise
                };
                self.render_into(branch, entry, out)?;
                rest = section.rest;
            } else if let Some(name) = tag.strip_prefix('/') {
                return Err(AppError::Template(format!(
                    "unexpected closing tag for '{}'",
                    name.trim()
                )));
            } else if tag == ELSE {
                return Err(AppError::Template("'{{else}}' outside a section".to_string()));
            } else {
                out.push_str(&self.variable(tag, entry)?);
                rest = after_tag;
            }
        }
        out.push_str(rest);
        Ok(())
    }

    fn variable(&self, tag: &str, entry: &Entry) -> AppResult<String> {
        let caps = self
            .variable
            .captures(tag)
            .ok_or_else(|| AppError::Template(format!("invalid tag '{{{{{tag}}}}}'")))?;
        let name = &caps[1];
        let Some(value) = entry.field(name) else {
            return Ok(String::new());
        };

        let Some(filter) = caps.get(2) else {
            return Ok(value.to_string());
        };
        apply_filter(filter.as_str(), &value)
    }
}

fn apply_filter(filter: &str, value: &FieldValue) -> AppResult<String> {
    let format: fn(f64) -> String = match filter {
        "round" => round0,
        "int" => truncate,
        "euro" => euro,
        other => return Err(AppError::Template(format!("unknown filter '{other}'"))),
    };
    Ok(value.as_f64().map(format).unwrap_or_else(|| value.to_string()))
}
