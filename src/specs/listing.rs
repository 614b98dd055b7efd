// src/specs/listing.rs
//! Scraping *spec* for the CoinMarketCap front-page listing.
//!
//! Every selector the scraper depends on lives in this file. When the site
//! reshuffles its markup, the tables below change and `scrape::extract` does not.
//!
//! Page shape (as of writing):
//! - `<table class="cmc-table">`, first `<tr>` is the header row, then one row per rank.
//! - Ranks 1..10 render fully: name in a `<p>`, price in a hashed-class `<div>`,
//!   market cap in a `<span>`, 24h volume in a hashed-class `<p>`.
//! - Ranks past the first screen are lazy rows: name and price only, in plain spans.

/// Marker for the main ranking table.
pub const TABLE: &str = "table.cmc-table";

/// Rows of that table, header included (index 0).
pub const ROW: &str = "tr";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Price,
    Volume,
    MarketCap,
}

/// Where one field lives: the `cell`-th `<td>` of the row, then the first
/// selector (in order) that yields non-empty text.
pub struct FieldRule {
    pub field: Field,
    pub cell: usize,
    pub selectors: &'static [&'static str],
}

/// A row shape. Rows with fewer than `min_cells` cells are skipped outright.
pub struct RowLayout {
    pub name: &'static str,
    pub min_cells: usize,
    pub fields: &'static [FieldRule],
}

const PRICE_DIV: &str = "div.sc-a093f09c-0.gPTgRa";
const VOLUME_P: &str = "p.sc-71024e3e-0.bbHOdE.font_weight_500";

/// Fully rendered rows at the top of the listing.
pub const TOP_ROWS: RowLayout = RowLayout {
    name: "top",
    min_cells: 7,
    fields: &[
        FieldRule { field: Field::Name,      cell: 2, selectors: &["p"] },
        FieldRule { field: Field::Price,     cell: 3, selectors: &[PRICE_DIV, "span"] },
        FieldRule { field: Field::MarketCap, cell: 7, selectors: &["span"] },
        FieldRule { field: Field::Volume,    cell: 8, selectors: &[VOLUME_P, "p"] },
    ],
};

/// Deeper rank window: name and price are all the lazy rows reliably expose.
pub const RANGE_ROWS: RowLayout = RowLayout {
    name: "range",
    min_cells: 4,
    fields: &[
        FieldRule { field: Field::Name,  cell: 2, selectors: &["p", "a span:not(.crypto-symbol)"] },
        FieldRule { field: Field::Price, cell: 3, selectors: &[PRICE_DIV, "span"] },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::html::selector;

    #[test]
    fn every_selector_compiles() {
        selector(TABLE).unwrap();
        selector(ROW).unwrap();
        for layout in [&TOP_ROWS, &RANGE_ROWS] {
            for rule in layout.fields {
                for css in rule.selectors {
                    selector(*css).unwrap();
                }
            }
        }
    }

    #[test]
    fn rules_fit_inside_declared_rows() {
        // min_cells may be lower than the deepest cell (a short row just fails
        // that rule), but name and price must always be reachable.
        for layout in [&TOP_ROWS, &RANGE_ROWS] {
            for rule in layout.fields.iter().filter(|r| matches!(r.field, Field::Name | Field::Price)) {
                assert!(rule.cell < layout.min_cells, "{} {:?}", layout.name, rule.field);
            }
        }
    }
}
