// src/scrape/extract.rs
//
// Layout-agnostic walk: table → rows in a rank window → fields → records.
// All page knowledge comes in through `specs::listing`.

use std::ops::RangeInclusive;

use scraper::{ElementRef, Html, Selector};

use crate::core::error::FetchError;
use crate::core::html::{self, selector};
use crate::data::MarketRecord;
use crate::specs::listing::{self, Field, RowLayout};

/// A `RowLayout` with its selectors compiled.
pub struct CompiledLayout {
    name: &'static str,
    min_cells: usize,
    rules: Vec<(Field, usize, Vec<Selector>)>,
}

impl CompiledLayout {
    pub fn compile(layout: &RowLayout) -> Result<Self, FetchError> {
        let mut rules = Vec::with_capacity(layout.fields.len());
        for rule in layout.fields {
            let sels = rule.selectors.iter().map(|css| selector(*css)).collect::<Result<Vec<_>, _>>()?;
            rules.push((rule.field, rule.cell, sels));
        }
        Ok(Self { name: layout.name, min_cells: layout.min_cells, rules })
    }
}

/// Compiled table/row markers plus both row layouts.
pub struct ListingSpec {
    table: Selector,
    row: Selector,
    pub top: CompiledLayout,
    pub range: CompiledLayout,
}

impl ListingSpec {
    pub fn compile() -> Result<Self, FetchError> {
        Ok(Self {
            table: selector(listing::TABLE)?,
            row: selector(listing::ROW)?,
            top: CompiledLayout::compile(&listing::TOP_ROWS)?,
            range: CompiledLayout::compile(&listing::RANGE_ROWS)?,
        })
    }

    /// Parse `doc` and extract the rows whose table index falls in `window`
    /// (index 0 is the header, so index == rank).
    /// `None` means the listing table itself is missing.
    pub fn extract(
        &self,
        doc: &str,
        layout: &CompiledLayout,
        window: RangeInclusive<usize>,
    ) -> Option<Vec<MarketRecord>> {
        let tree = html::parse(doc);
        self.extract_from(&tree, layout, window)
    }

    fn extract_from(
        &self,
        tree: &Html,
        layout: &CompiledLayout,
        window: RangeInclusive<usize>,
    ) -> Option<Vec<MarketRecord>> {
        let table = tree.select(&self.table).next()?;

        let (first, last) = (*window.start(), *window.end());
        if first > last {
            return Some(Vec::new());
        }

        let mut out = Vec::new();
        let rows = table.select(&self.row).enumerate().skip(first).take_while(|(idx, _)| *idx <= last);
        for (idx, row) in rows {
            match extract_row(row, layout) {
                Ok(rec) => out.push(rec),
                Err(why) => logd!("{} row {idx} skipped: {why}", layout.name),
            }
        }
        Some(out)
    }
}

/// Pull one record out of a row, or say why the row doesn't qualify.
fn extract_row(row: ElementRef<'_>, layout: &CompiledLayout) -> Result<MarketRecord, String> {
    let cells = html::cells(row);
    if cells.len() < layout.min_cells {
        return Err(format!("{} cells, need {}", cells.len(), layout.min_cells));
    }

    let mut name = None;
    let mut price = None;
    let mut volume = None;
    let mut market_cap = None;

    for (field, cell, sels) in &layout.rules {
        let td = cells.get(*cell).ok_or_else(|| format!("no cell {cell} for {field:?}"))?;
        let text = html::first_text(*td, sels).ok_or_else(|| format!("{field:?} not found in cell {cell}"))?;
        match field {
            Field::Name => name = Some(text),
            Field::Price => price = Some(text),
            Field::Volume => volume = Some(text),
            Field::MarketCap => market_cap = Some(text),
        }
    }

    let (Some(name), Some(price)) = (name, price) else {
        return Err(s!("layout lacks name or price"));
    };
    Ok(MarketRecord { name, price, volume, market_cap })
}
