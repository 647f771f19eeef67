use roundcorners::selection::parse_keys;
use roundcorners::{round_path, svg, Method, RoundError, RoundOptions};
use std::io::Read;

fn run() -> Result<(), RoundError> {
    let args: Vec<String> = std::env::args().collect();
    let mut opts = RoundOptions::default();
    let mut select: Vec<String> = Vec::new();
    let mut data: Option<String> = None;
    for a in &args[1..] {
        if let Some(val) = a.strip_prefix("--radius=") {
            opts.radius = val.parse().map_err(|_| RoundError::InvalidRadius(f64::NAN))?;
        } else if let Some(val) = a.strip_prefix("--method=") {
            opts.method = val.parse::<Method>()?;
        } else if let Some(val) = a.strip_prefix("--select=") {
            select.extend(val.split(',').filter(|s| !s.is_empty()).map(str::to_string));
        } else {
            data = Some(a.clone());
        }
    }
    let d = match data {
        Some(d) => d,
        None => {
            let mut s = String::new();
            std::io::stdin()
                .read_to_string(&mut s)
                .map_err(|e| RoundError::PathSyntax { pos: 0, message: e.to_string() })?;
            s
        }
    };

    let keys = parse_keys(&select)?;
    let mut path = svg::parse_path(d.trim())?;
    let diag = round_path(&mut path, &keys, &opts)?;
    println!("{}", svg::to_path_data(&path));
    eprintln!("{}", serde_json::to_string(&diag)?);
    for w in diag.warnings() {
        eprintln!("{}", w);
    }
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
