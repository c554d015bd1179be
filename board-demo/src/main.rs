//! Runs a token board session against the simulated price feed.
//!
//! The board is bootstrapped with synthetic tokens after the configured delay,
//! then the random-walk feed moves prices while this binary logs the top of
//! each derived column on a fixed interval. Stops on Ctrl-C or after
//! `--duration-secs`.

use anyhow::Result;
use board::prelude::*;
use board_core::{AppState, BoardConfig, Session, StoreEvent, ViewEngine};
use clap::Parser;
use log::{debug, info, warn};
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::broadcast::error::RecvError;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Column order: recency, change or volume
    #[arg(long)]
    sort: Option<SortKey>,

    /// Case-insensitive substring matched against symbol or name
    #[arg(long)]
    filter: Option<String>,

    /// Token id to put under inspection (e.g. "mig-3")
    #[arg(long)]
    select: Option<String>,

    /// Stop after this many seconds instead of waiting for Ctrl-C
    #[arg(long)]
    duration_secs: Option<u64>,

    /// Interval between column reports
    #[arg(long, default_value_t = 1000)]
    report_every_ms: u64,

    /// Rows shown per column
    #[arg(long, default_value_t = 3)]
    rows: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let config = BoardConfig::load(args.config.as_deref())?;
    info!("=== Token Board Starting === {:?}", config);

    // 1. Session (store, bootstrap, feed)
    let session = Session::start(&config)?;
    let handle = session.handle().clone();

    // 2. User intents from the command line
    if let Some(sort) = args.sort {
        handle.dispatch(Intent::SetSortKey(sort)).await?;
    }
    if let Some(filter) = args.filter.clone() {
        handle.dispatch(Intent::SetFilterText(filter)).await?;
    }
    if let Some(id) = args.select.clone() {
        handle.dispatch(Intent::select(id)).await?;
    }

    // 3. Event log
    let mut events = handle.events();
    let event_log = tokio::spawn(async move {
        loop {
            match events.recv().await {
                Ok(StoreEvent::PriceChanged {
                    bucket,
                    id,
                    previous,
                    current,
                }) => debug!(
                    "{} {} {:?} {} -> {}",
                    bucket,
                    id,
                    PriceMove::from_prices(previous, current),
                    format_currency(previous),
                    format_currency(current)
                ),
                Ok(event) => {
                    let columns: Vec<&str> = TokenStatus::ALL
                        .into_iter()
                        .filter(|&bucket| event.touches(bucket))
                        .map(TokenStatus::as_str)
                        .collect();
                    info!("Board event: {:?} (columns: [{}])", event, columns.join(", "));
                }
                Err(RecvError::Lagged(skipped)) => warn!("Event log skipped {} events", skipped),
                Err(RecvError::Closed) => break,
            }
        }
    });

    // 4. Report loop
    let mut views = ViewEngine::new();
    let mut ticker = tokio::time::interval(Duration::from_millis(args.report_every_ms.max(1)));
    let deadline = async {
        match args.duration_secs {
            Some(secs) => tokio::time::sleep(Duration::from_secs(secs)).await,
            None => std::future::pending::<()>().await,
        }
    };
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(deadline, ctrl_c);

    loop {
        tokio::select! {
            _ = &mut ctrl_c => {
                info!("Ctrl-C received");
                break;
            }
            _ = &mut deadline => {
                info!("Run duration elapsed");
                break;
            }
            _ = ticker.tick() => report(&mut views, &handle.snapshot(), args.rows),
        }
    }

    let summary = session.shutdown().await;
    event_log.abort();
    info!("Session finished: {:?}", summary);
    Ok(())
}

fn report(views: &mut ViewEngine, state: &AppState, rows: usize) {
    if !state.is_ready() {
        info!("Waiting for bootstrap...");
        return;
    }

    let model = views.read_model(state);
    info!(
        "sort={} filter={:?}",
        model.sort_key(),
        model.filter_text()
    );
    for bucket in TokenStatus::ALL {
        let column = model.column(bucket);
        let top: Vec<String> = column
            .iter()
            .take(rows)
            .map(|t| {
                format!(
                    "{} {} vol {} ({:+.2}%)",
                    t.symbol(),
                    format_currency(t.price()),
                    format_compact(t.volume().unwrap_or(0.0)),
                    t.change_24h()
                )
            })
            .collect();
        info!("[{:>8}] {:>2} shown | {}", bucket.as_str(), column.len(), top.join(" | "));
    }

    if let Some(selected) = model.selected() {
        let t = selected.token();
        info!(
            "Selected {} ({}...) {} in {} | mcap {} liq {} holders {} progress {}%",
            t.name(),
            t.short_id(),
            format_currency(t.price()),
            selected.bucket(),
            format_compact(t.mcap()),
            format_compact(t.liquidity()),
            t.holders(),
            t.progress()
        );
    }
}
