// src/core/html.rs
use scraper::{ElementRef, Html, Selector};

use super::error::FetchError;

pub fn parse(doc: &str) -> Html {
    Html::parse_document(doc)
}

/// Compile a CSS selector from the locator tables.
pub fn selector(css: &'static str) -> Result<Selector, FetchError> {
    Selector::parse(css).map_err(|e| FetchError::Selector { selector: css, reason: e.to_string() })
}

/// Text of an element the way a "get text, strip" pass reads it:
/// every text node trimmed, empty ones dropped, the rest glued together.
pub fn stripped_text(el: ElementRef<'_>) -> String {
    el.text().map(str::trim).filter(|t| !t.is_empty()).collect()
}

/// First non-empty text under `scope`, trying each selector in order.
pub fn first_text(scope: ElementRef<'_>, selectors: &[Selector]) -> Option<String> {
    selectors.iter().find_map(|sel| {
        scope
            .select(sel)
            .map(stripped_text)
            .find(|t| !t.is_empty())
    })
}

/// Direct `<td>` children of a row (nested tables don't leak cells upward).
pub fn cells(row: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    row.children()
        .filter_map(ElementRef::wrap)
        .filter(|el| el.value().name().eq_ignore_ascii_case("td"))
        .collect()
}
