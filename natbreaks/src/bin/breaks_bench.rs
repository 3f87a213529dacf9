use natbreaks::compute_breaks;
use std::time::Instant;

// Deterministic skewed values in roughly the range of state home prices.
fn build_values(n: usize, seed: &mut u64) -> Vec<f64> {
    (0..n)
        .map(|_| {
            *seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
            let u = ((*seed >> 24) & 0xFFFF_FFFF) as f64 / u32::MAX as f64;
            80_000.0 + 900_000.0 * u * u
        })
        .collect()
}

// Nearest-rank percentile of an ascending sample.
fn percentile(sorted: &[f64], p: f64) -> f64 {
    match sorted.len() {
        0 => 0.0,
        len => sorted[(((len - 1) as f64 * p).round() as usize).min(len - 1)],
    }
}

fn flag<T: std::str::FromStr>(arg: &str, name: &str) -> Option<T> {
    arg.strip_prefix(name)?.strip_prefix('=')?.parse().ok()
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let mut n = 500usize;
    let mut k = 6usize;
    let mut runs = 50usize;
    let mut assert_ms: Option<f64> = None;
    for a in &args[1..] {
        if let Some(v) = flag(a, "--n") {
            n = v;
        } else if let Some(v) = flag(a, "--k") {
            k = v;
        } else if let Some(v) = flag(a, "--runs") {
            runs = v;
        } else if let Some(v) = flag(a, "--assert-ms") {
            assert_ms = Some(v);
        } else {
            eprintln!("ignoring unknown argument {}", a);
        }
    }

    let mut seed: u64 = 0x1234_5678_ABCD_EF01;
    let mut times_ms: Vec<f64> = Vec::with_capacity(runs);
    let start_all = Instant::now();
    for _ in 0..runs {
        let values = build_values(n, &mut seed);
        let t0 = Instant::now();
        if let Err(e) = compute_breaks(&values, k) {
            eprintln!("FAIL: {}", e);
            std::process::exit(1);
        }
        times_ms.push(t0.elapsed().as_secs_f64() * 1000.0);
    }
    let dur_all = start_all.elapsed().as_secs_f64() * 1000.0;
    times_ms.sort_by(f64::total_cmp);
    let med = percentile(&times_ms, 0.5);
    let p90 = percentile(&times_ms, 0.9);
    // cost model is n^2 * k; report time per million cells so runs at different n compare
    let cells = (n * n * k) as f64 / 1e6;
    println!(
        "n={} k={} runs={} total_ms={:.3} median_ms={:.4} p90_ms={:.4} ms_per_mcell={:.4}",
        n,
        k,
        runs,
        dur_all,
        med,
        p90,
        med / cells.max(1e-9)
    );
    if let Some(th) = assert_ms.filter(|&th| med > th) {
        eprintln!("FAIL: median {:.4} ms > threshold {:.3} ms", med, th);
        std::process::exit(1);
    }
}
