use scraper::{Html, Selector};
use tracing::info;

use crate::errors::WorkerwatchError;

/// Parse captured page markup and pull the worker count out of the single
/// element matching `selector`.
///
/// Zero matches and multiple matches are both terminal: the count is only
/// meaningful when the selector identifies exactly one element.
pub fn worker_count(html: &str, selector: &str) -> Result<i64, WorkerwatchError> {
    info!("parsing page content");
    let document = Html::parse_document(html);
    let parsed = Selector::parse(selector)
        .map_err(|_| WorkerwatchError::InvalidSelector(selector.to_string()))?;

    info!("finding element");
    let matches: Vec<_> = document.select(&parsed).collect();
    if matches.len() != 1 {
        return Err(WorkerwatchError::SelectorMismatch {
            selector: selector.to_string(),
            count: matches.len(),
        });
    }

    let text: String = matches[0].text().collect();
    parse_leading_int(&text).ok_or_else(|| WorkerwatchError::CountNotNumeric {
        text: text.trim().to_string(),
    })
}

/// Parse the leading base-10 integer out of `text`: skip leading whitespace,
/// take an optional sign and the run of digits that follows, ignore the rest.
fn parse_leading_int(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..end];
    if digits.is_empty() {
        return None;
    }

    let value: i64 = digits.parse().ok()?;
    Some(if negative { -value } else { value })
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod extract_test;
