//! The single lookup the binary performs.

use std::io::Write;

use backer_track_business::{
    Credentials, OrderTracker, TrackError, TrackedOrder, TrackerConfig,
};
use tracing::{error, info, instrument, warn};

use crate::cli::Cli;
use crate::output::Output;
use crate::rows::{OrderRow, sku_summary};
use crate::table::render_table;

/// Runs one lookup and returns the process exit code.
///
/// Every message, including errors, is written through `out`.
pub async fn run<W: Write, E: Write>(args: &Cli, out: &mut Output<W, E>) -> i32 {
    let result = track(args, out).await;
    let code = match result {
        Ok(()) => 0,
        Err(err) => {
            if err.is_configuration() {
                warn!("{err}");
            } else {
                error!("{err}");
            }
            out.error(&err);
            1
        }
    };
    out.flush();
    code
}

#[instrument(skip_all, name = "track", fields(sku = %args.sku, json = args.json))]
async fn track<W: Write, E: Write>(args: &Cli, out: &mut Output<W, E>) -> Result<(), TrackError> {
    let credentials = Credentials::new(args.email.as_deref(), args.backer.as_deref())?;

    let config = args
        .url
        .as_deref()
        .map(TrackerConfig::new)
        .unwrap_or_default();
    let tracker = OrderTracker::new(config);
    info!(endpoint = %tracker.config().endpoint_url, "Looking up order");

    let TrackedOrder { raw, response } = tracker.fetch(&credentials).await?;

    if args.json {
        let json =
            serde_json::to_string_pretty(&raw).map_err(|e| TrackError::Decode(e.to_string()))?;
        out.print(json);
        // The body is printed as received; the exit code still reflects `success`.
        response.ensure_success()?;
        return Ok(());
    }

    let items = response.ensure_success()?;
    if items.is_empty() {
        out.info("No order items found for this backer.");
        return Ok(());
    }

    match response.find_sku(&args.sku) {
        Some(item) => out.print(sku_summary(&args.sku, item)),
        None => out.warning(format!("SKU {} not found in this order.", args.sku)),
    }
    out.newline();

    let rows: Vec<OrderRow> = items
        .iter()
        .map(|item| OrderRow::new(item, &args.sku))
        .collect();
    out.table(&render_table(&rows));

    Ok(())
}
