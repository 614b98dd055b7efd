// src/cli.rs
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};

use crate::bot::{Dispatcher, Incoming, Reply};
use crate::config::consts::{DEFAULT_LIMIT, RANGE_END, RANGE_START, SEARCH_TOP_LIMIT};
use crate::config::options::AppOptions;
use crate::csv::to_export_string;
use crate::data::{self, MarketRecord};
use crate::notify::{self, LogNotifier};
use crate::schedule::Scheduler;
use crate::scrape::Fetcher;
use crate::store::{SubscriberStore, UserId};

#[derive(Parser, Debug)]
#[command(name = "coin_scrape", version, about = "CoinMarketCap listing scraper and digest bot")]
pub struct Cli {
    /// Listing page URL (overrides COIN_SOURCE_URL)
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// Request timeout in seconds (overrides COIN_TIMEOUT_SECS)
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Store directory for subscribers and logs (overrides COIN_STORE_DIR)
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Cmd,
}

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// Print the top of the listing
    Prices {
        #[arg(short, long, default_value_t = DEFAULT_LIMIT)]
        limit: usize,
        #[arg(short, long, value_enum, default_value_t = ExportFormat::Text)]
        format: ExportFormat,
        /// Emit a header line (csv/tsv)
        #[arg(long)]
        headers: bool,
        /// Write to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Look a coin up by name within the top N
    Search {
        name: String,
        #[arg(short, long, default_value_t = SEARCH_TOP_LIMIT)]
        limit: usize,
    },
    /// Look a coin up by name within a rank window (name and price only)
    SearchRange {
        name: String,
        #[arg(long, default_value_t = RANGE_START)]
        start: usize,
        #[arg(long, default_value_t = RANGE_END)]
        end: usize,
    },
    /// Add a subscriber id (group chats have negative ids)
    Subscribe {
        #[arg(allow_negative_numbers = true)]
        id: UserId,
    },
    /// Remove a subscriber id
    Unsubscribe {
        #[arg(allow_negative_numbers = true)]
        id: UserId,
    },
    /// List subscriber ids
    Subscribers,
    /// Send the digest to all subscribers once
    Digest,
    /// Send the digest periodically until stdin closes
    Watch {
        /// Interval in seconds (overrides COIN_DIGEST_INTERVAL_SECS)
        #[arg(long)]
        every: Option<u64>,
    },
    /// Talk to the bot on stdin as the given user (`:tap <data>` presses a button)
    Chat {
        #[arg(long, default_value_t = 1)]
        user: UserId,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Text,
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn delim(&self) -> Option<char> {
        match self {
            ExportFormat::Text => None,
            ExportFormat::Csv => Some(','),
            ExportFormat::Tsv => Some('\t'),
        }
    }
}

/// Apply flags over env/defaults.
fn resolve_options(cli: &Cli) -> Result<AppOptions, Box<dyn Error>> {
    let mut opts = AppOptions::from_env()?;
    if let Some(url) = &cli.url {
        opts.source.url = url.clone();
    }
    if let Some(secs) = cli.timeout {
        if secs == 0 { return Err("--timeout must be greater than zero".into()); }
        opts.source.timeout = Duration::from_secs(secs);
    }
    if let Some(dir) = &cli.store {
        opts.store.dir = dir.clone();
    }
    if let Cmd::Watch { every: Some(secs) } = cli.command {
        if secs == 0 { return Err("--every must be greater than zero".into()); }
        opts.digest.interval = Duration::from_secs(secs);
    }
    Ok(opts)
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let opts = resolve_options(&cli)?;
    crate::log::init(&opts.store.dir)?;

    let fetcher = Arc::new(Fetcher::from_options(&opts.source)?);

    match cli.command {
        Cmd::Prices { limit, format, headers, out } => {
            let records = fetcher.fetch_top(limit)?;
            if records.is_empty() {
                return Err(crate::bot::replies::NO_DATA.into());
            }
            let text = render(&records, format, headers);
            match out {
                Some(path) => {
                    crate::file::write_export(&path, &text)?;
                    println!("Wrote {} records to {}", records.len(), path.display());
                }
                None => print!("{text}"),
            }
        }
        Cmd::Search { name, limit } => match fetcher.find_by_name_in_top(&name, limit)? {
            Some(r) => println!("{}", crate::bot::replies::search_hit(&r)),
            None => println!("{name} not found in the top {limit}."),
        },
        Cmd::SearchRange { name, start, end } => match fetcher.find_by_name_in_range(&name, start, end)? {
            Some(r) => println!("{}", crate::bot::replies::range_hit(&r)),
            None => println!("{name} not found in ranks {start}-{end}."),
        },
        Cmd::Subscribe { id } => {
            let store = SubscriberStore::open(&opts.store.dir)?;
            let added = store.add(id)?;
            println!("{}", if added { "Subscribed." } else { "Already subscribed." });
        }
        Cmd::Unsubscribe { id } => {
            let store = SubscriberStore::open(&opts.store.dir)?;
            let removed = store.remove(id)?;
            println!("{}", if removed { "Unsubscribed." } else { "Not subscribed." });
        }
        Cmd::Subscribers => {
            let store = SubscriberStore::open(&opts.store.dir)?;
            for id in store.list()? {
                println!("{id}");
            }
        }
        Cmd::Digest => {
            let store = SubscriberStore::open(&opts.store.dir)?;
            let report = notify::send_digest(&fetcher, &store, &LogNotifier::stdout());
            println!(
                "Digest: {} subscribers, {} delivered, {} failed{}",
                report.subscribers,
                report.delivered,
                report.failed,
                if report.skipped { " (no data, skipped)" } else { "" }
            );
        }
        Cmd::Watch { .. } => {
            let store = Arc::new(SubscriberStore::open(&opts.store.dir)?);
            let job_fetcher = Arc::clone(&fetcher);
            let job_store = Arc::clone(&store);
            let notifier = LogNotifier::stdout();

            let rt = tokio::runtime::Builder::new_multi_thread().enable_all().build()?;
            let sched = rt.block_on(Scheduler::start(opts.digest.interval, move || {
                notify::send_digest(&job_fetcher, &job_store, &notifier);
            }))?;
            eprintln!("Sending digest every {:?}. Close stdin (Ctrl-D) to stop.", opts.digest.interval);

            // Runtime workers keep ticking while this thread waits for EOF.
            let mut sink = String::new();
            let stdin = io::stdin();
            while stdin.lock().read_line(&mut sink)? > 0 {
                sink.clear();
            }
            rt.block_on(sched.shutdown())?;
        }
        Cmd::Chat { user } => {
            let store = Arc::new(SubscriberStore::open(&opts.store.dir)?);
            let dispatcher = Dispatcher::new(fetcher, store);
            chat_loop(&dispatcher, user, io::stdin().lock(), io::stdout().lock())?;
        }
    }
    Ok(())
}

fn render(records: &[MarketRecord], format: ExportFormat, headers: bool) -> String {
    match format.delim() {
        Some(sep) => {
            let hdr = data::headers();
            let rows: Vec<Vec<String>> = records.iter().map(MarketRecord::to_row).collect();
            to_export_string(headers.then_some(hdr.as_slice()), &rows, sep)
        }
        None => crate::bot::replies::price_list(records),
    }
}

/// Feed lines into the dispatcher and print replies.
pub fn chat_loop<R: BufRead, W: Write>(
    dispatcher: &Dispatcher,
    user: UserId,
    input: R,
    mut output: W,
) -> io::Result<()> {
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let incoming = match line.trim().strip_prefix(":tap ") {
            Some(data) => Incoming::Callback { user, data: s!(data.trim()) },
            None => Incoming::Message { user, text: line },
        };
        write_reply(&mut output, &dispatcher.handle(incoming))?;
    }
    Ok(())
}

fn write_reply<W: Write>(out: &mut W, reply: &Reply) -> io::Result<()> {
    writeln!(out, "{}", reply.text.trim_end())?;
    for b in &reply.buttons {
        writeln!(out, "  [{}]  :tap {}", b.text, b.data)?;
    }
    writeln!(out)
}
