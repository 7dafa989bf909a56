use std::sync::atomic::{AtomicI64, Ordering};

/// Current UTC timestamp in milliseconds.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Generate a time-derived string ID for menu items.
///
/// Millisecond timestamp plus 12 random bits, strictly increasing even when
/// two IDs are requested inside the same millisecond. Never reused.
pub fn item_id() -> String {
    use rand::Rng;
    static LAST: AtomicI64 = AtomicI64::new(0);

    let mut ts = now_millis();
    // Bump forward if the clock has not advanced since the last ID.
    loop {
        let last = LAST.load(Ordering::Relaxed);
        if ts <= last {
            ts = last + 1;
        }
        if LAST
            .compare_exchange(last, ts, Ordering::Relaxed, Ordering::Relaxed)
            .is_ok()
        {
            break;
        }
    }

    let rand_bits: u16 = rand::thread_rng().gen_range(0..0x1000);
    format!("{ts}{rand_bits:03x}")
}

/// Generate a correlation ID grouping the actions of one multi-step
/// batch operation.
pub fn batch_id() -> String {
    use rand::Rng;
    let suffix: u32 = rand::thread_rng().r#gen();
    format!("batch_{}_{:08x}", now_millis(), suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn item_ids_are_unique_and_increasing() {
        let ids: Vec<String> = (0..200).map(|_| item_id()).collect();
        let unique: HashSet<&String> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn batch_ids_carry_prefix() {
        assert!(batch_id().starts_with("batch_"));
    }
}
