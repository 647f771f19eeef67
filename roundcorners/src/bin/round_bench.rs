use roundcorners::{round_path, Method, Path, RoundOptions, SelectionKey, Subpath, Vec2};
use std::time::Instant;

/// Closed star with `points` tips: alternating outer and inner radius, so
/// every other corner is concave.
fn build_star(points: usize) -> Path {
    let n = points.max(3) * 2;
    let pts: Vec<Vec2> = (0..n)
        .map(|i| {
            let t = i as f64 / n as f64 * std::f64::consts::TAU;
            let r = if i % 2 == 0 { 100.0 } else { 60.0 };
            Vec2::new(r * t.cos(), r * t.sin())
        })
        .collect();
    Path::new(vec![Subpath::polygon(&pts, true)])
}

fn percentile(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() { return 0.0; }
    let idx = ((sorted.len() as f64 - 1.0) * p).round() as usize;
    sorted[idx.min(sorted.len() - 1)]
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let mut points = 200usize;
    let mut iters = 200usize;
    let mut radius = 1.0f64;
    let mut method = Method::Arc;
    let mut assert_ms: Option<f64> = None;
    for a in &args[1..] {
        if let Some(val) = a.strip_prefix("--points=") { if let Ok(v) = val.parse() { points = v; } }
        else if let Some(val) = a.strip_prefix("--iters=") { if let Ok(v) = val.parse() { iters = v; } }
        else if let Some(val) = a.strip_prefix("--radius=") { if let Ok(v) = val.parse() { radius = v; } }
        else if let Some(val) = a.strip_prefix("--method=") { if let Ok(v) = val.parse() { method = v; } }
        else if let Some(val) = a.strip_prefix("--assert-ms=") { if let Ok(v) = val.parse() { assert_ms = Some(v); } }
    }

    let star = build_star(points);
    let corners = star.subpaths[0].len() - 1;
    let keys: Vec<SelectionKey> = (0..corners).map(|i| SelectionKey::new("star", 0, i)).collect();
    let opts = RoundOptions::new(radius, method);

    let mut times_ms: Vec<f64> = Vec::with_capacity(iters);
    let mut inserted = 0usize;
    let start_all = Instant::now();
    for _ in 0..iters {
        let mut path = star.clone();
        let t0 = Instant::now();
        match round_path(&mut path, &keys, &opts) {
            Ok(d) => inserted = d.inserted,
            Err(e) => { eprintln!("error: {}", e); std::process::exit(1); }
        }
        times_ms.push(t0.elapsed().as_secs_f64() * 1000.0);
    }
    let dur_all = start_all.elapsed().as_secs_f64() * 1000.0;
    times_ms.sort_by(|a, b| a.total_cmp(b));
    let med = percentile(&times_ms, 0.5);
    let p90 = percentile(&times_ms, 0.9);
    let p99 = percentile(&times_ms, 0.99);
    println!("corners={} iters={} radius={} method={} inserted={} total_ms={:.3} median_ms={:.4} p90_ms={:.4} p99_ms={:.4}", corners, iters, radius, method.as_str(), inserted, dur_all, med, p90, p99);
    if let Some(th) = assert_ms { if med > th { eprintln!("FAIL: median {:.4} ms > threshold {:.3} ms", med, th); std::process::exit(1); } }
}
