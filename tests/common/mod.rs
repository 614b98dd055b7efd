// tests/common/mod.rs
#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use coin_scrape::Fetcher;
use coin_scrape::core::{FetchError, PageSource, StaticPage};

pub const FIXTURE_URL: &str = "https://coinmarketcap.com/";

pub fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("read {}: {e}", path.display()))
}

pub fn fetcher_over(html: impl Into<String>) -> Fetcher {
    Fetcher::with_source(Box::new(StaticPage::new(html)), FIXTURE_URL).unwrap()
}

/// A source that always fails like a dead network.
pub struct DownSource;

impl PageSource for DownSource {
    fn get(&self, url: &str) -> Result<String, FetchError> {
        Err(FetchError::Status { status: 503, url: url.to_string() })
    }
}

pub fn fetcher_down() -> Fetcher {
    Fetcher::with_source(Box::new(DownSource), FIXTURE_URL).unwrap()
}

/// Fully rendered row (ranks on the first screen).
pub fn top_row(rank: usize, name: &str, price: &str) -> String {
    format!(
        r#"<tr><td></td><td><p>{rank}</p></td><td><a><p class="coin-item-name">{name}</p><p class="coin-item-symbol">X</p></a></td>
           <td><div class="sc-a093f09c-0 gPTgRa"><span>{price}</span></div></td>
           <td>0%</td><td>0%</td><td>0%</td><td><p><span>$1B</span></p></td>
           <td><p class="sc-71024e3e-0 bbHOdE font_weight_500">$2M</p></td><td></td><td></td></tr>"#
    )
}

/// Lazy row further down the listing: name and price in plain spans.
pub fn lazy_row(rank: usize, name: &str, price: &str) -> String {
    format!(
        r#"<tr><td></td><td>{rank}</td><td><a href="/currencies/x/"><span class="circle"></span><span>{name}</span><span class="crypto-symbol">SYM</span></a></td>
           <td><span>{price}</span></td><td></td><td></td><td></td><td></td><td></td><td></td><td></td></tr>"#
    )
}

pub fn page(rows: &[String]) -> String {
    format!(
        r#"<!DOCTYPE html><html><body><table class="cmc-table"><thead><tr><th>#</th><th>Name</th><th>Price</th></tr></thead>
           <tbody>{}</tbody></table></body></html>"#,
        rows.concat()
    )
}

/// Ranks 1..=10 fully rendered, 11..=100 lazy, named "Coin <rank>" unless overridden.
pub fn hundred_page(named: &[(usize, &str)]) -> String {
    let rows: Vec<String> = (1..=100)
        .map(|rank| {
            let name = named
                .iter()
                .find(|(r, _)| *r == rank)
                .map(|(_, n)| n.to_string())
                .unwrap_or_else(|| format!("Coin {rank}"));
            let price = format!("${rank}.00");
            if rank <= 10 { top_row(rank, &name, &price) } else { lazy_row(rank, &name, &price) }
        })
        .collect();
    page(&rows)
}

pub fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("coin_it_{}_{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}
