// backend/services/house/workers/outbox-processor/src/main.rs

use shared_kernel::errors::AppResult;
use shared_kernel::infrastructure::bootstrap::run_outbox_relay;

#[tokio::main]
async fn main() -> AppResult<()> {
    run_outbox_relay(
        "House",
        "house.events",
    ).await
}
