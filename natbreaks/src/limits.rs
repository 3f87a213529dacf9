// Centralized caps to harden against untrusted input (CSV/JSON) and quadratic blow-up

// Classification caps. The DP tables are (N+1)*(K+1) and the relaxation is O(N^2 K).
pub const MAX_OBSERVATIONS: usize = 20_000;
pub const MAX_CLASSES: usize = 64;
pub const DEFAULT_CLASSES: usize = 6;
// Upper bound on N*N*K relaxation steps, well under a second in a browser tab
pub const MAX_DP_STEPS: usize = 400_000_000;

// Table caps
pub const MAX_CSV_BYTES: usize = 16 * 1024 * 1024;
pub const MAX_TABLE_ROWS: usize = 100_000;
pub const MAX_TABLE_COLUMNS: usize = 1_024;
pub const MAX_LABEL_LEN: usize = 256;

// Memoized partitions kept by BreaksCache
pub const CACHE_CAPACITY: usize = 32;

#[inline]
pub fn in_class_bounds(k: usize) -> bool { (2..=MAX_CLASSES).contains(&k) }

#[inline]
pub fn in_label_bounds(s: &str) -> bool { !s.is_empty() && s.len() <= MAX_LABEL_LEN }

/// Largest N accepted for `k` classes: `N*N*k <= MAX_DP_STEPS`, never above `MAX_OBSERVATIONS`.
pub fn max_observations_for(k: usize) -> usize {
    let per_class = MAX_DP_STEPS / k.max(1);
    let mut n = (per_class as f64).sqrt() as usize;
    // float sqrt can be off by one either way
    while n > 0 && n.saturating_mul(n) > per_class {
        n -= 1;
    }
    while (n + 1).saturating_mul(n + 1) <= per_class {
        n += 1;
    }
    n.min(MAX_OBSERVATIONS)
}
