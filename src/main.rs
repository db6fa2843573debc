use anyhow::{Context, Result};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use newsglance::{config::Config, fetcher, service::hacker_news::Client, sink, stats};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let config = Config::from_env()?;
    let client = Client::new(&config)?;

    // The ranked list is the only fatal fetch; everything after it is
    // best-effort per fetch unit.
    let ids = fetcher::item::list_top_ids(&client, config.top_items)
        .await
        .context("fetching the ranked story list")?;
    info!(count = ids.len(), "fetched ranked story ids");

    let items = fetcher::item::fetch_all(&client, &ids, config.item_permits).await?;
    let comments = fetcher::comment::fetch_all(
        &client,
        &items,
        config.comment_item_permits,
        config.comment_child_permits,
    )
    .await?;

    let statistics = stats::compute_statistics(&items);
    let hours = stats::hour_histogram(&comments);
    info!(
        average_score = statistics.average_score,
        average_comments = statistics.average_comments,
        max_direct_children = statistics.max_direct_children,
        "computed statistics"
    );

    sink::table::write_items(&config.items_path, &items)?;
    sink::table::write_statistics(&config.statistics_path, &statistics)?;
    info!(items = %config.items_path, statistics = %config.statistics_path, "wrote tables");

    // Charts are surfaced but never fail the run.
    if let Err(e) = sink::chart::render_averages(&config.averages_chart_path, &statistics) {
        error!(error = %e, "failed to render averages chart");
    }
    if let Err(e) = sink::chart::render_hour_histogram(&config.hours_chart_path, &hours) {
        error!(error = %e, "failed to render hour histogram");
    }
    Ok(())
}
