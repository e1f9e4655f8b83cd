use order_queue::lifecycle::{setup_tracing, Restaurant, RestaurantConfig};
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() {
    setup_tracing();

    // A failed service can leave cooks parked on the blocking pool, and
    // dropping the runtime would wait on them forever.
    if let Err(e) = run().await {
        error!(error = %e, "Service failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    let config = RestaurantConfig::from_env().map_err(|e| e.to_string())?;
    info!(?config, "Starting service");

    let restaurant = Restaurant::open(config).map_err(|e| e.to_string())?;

    let span = tracing::info_span!("service");
    let report = async { restaurant.close().await }
        .instrument(span)
        .await
        .map_err(|e| e.to_string())?;

    for shift in &report.cook_shifts {
        info!(cook_id = %shift.cook_id, fulfilled = shift.fulfilled.len(), "Cook summary");
    }
    info!(
        placed = report.orders_placed(),
        fulfilled = report.orders_fulfilled(),
        "Service completed successfully"
    );
    Ok(())
}
