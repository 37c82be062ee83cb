// backend/services/temperature/workers/house-replicator/src/main.rs

use shared_kernel::errors::AppResult;
use temperature::infrastructure::run_house_replicator;

#[tokio::main]
async fn main() -> AppResult<()> {
    run_house_replicator(
        "house.events",
        "temperature-replica-group",
    ).await
}
