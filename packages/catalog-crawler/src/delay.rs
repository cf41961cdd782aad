use std::time::Duration;

/// Jittered pause length: `base` plus up to another `base`.
pub fn jittered(base_ms: u64) -> Duration {
    if base_ms == 0 {
        return Duration::ZERO;
    }
    Duration::from_millis(base_ms + fastrand::u64(0..=base_ms))
}

/// Sleep for a human-looking interval between requests. No-op for zero.
pub async fn human_delay(base_ms: u64) {
    let pause = jittered(base_ms);
    if !pause.is_zero() {
        tokio::time::sleep(pause).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jitter_bounds() {
        assert_eq!(jittered(0), Duration::ZERO);
        for _ in 0..100 {
            let pause = jittered(500);
            assert!(pause >= Duration::from_millis(500));
            assert!(pause <= Duration::from_millis(1000));
        }
    }

    #[tokio::test]
    async fn test_zero_delay_returns_immediately() {
        let start = std::time::Instant::now();
        human_delay(0).await;
        assert!(start.elapsed() < Duration::from_millis(50));
    }
}
