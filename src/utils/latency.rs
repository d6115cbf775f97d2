use std::time::Duration;

/// Wait out a simulated network round trip. Always completes.
pub async fn simulate_latency(operation: &str, delay: Duration) {
    if delay.is_zero() {
        return;
    }
    tracing::debug!(operation, delay_ms = delay.as_millis() as u64, "Simulating latency");
    tokio::time::sleep(delay).await;
}
