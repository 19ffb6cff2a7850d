// Run with: WOORD_EMAIL=... WOORD_PASSWORD=... cargo run --example debug_fetch -- Russisch
// Registered in woord-core/Cargo.toml: [[example]] name = "debug_fetch" path = "../debug_fetch.rs"

use std::time::Instant;

use woord_core::{ApiConfig, Credentials, FetchMessage, Fetcher, WrtsClient, format_header};

fn main() {
    let term = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "Russisch".to_string());

    let (Ok(email), Ok(password)) = (
        std::env::var("WOORD_EMAIL"),
        std::env::var("WOORD_PASSWORD"),
    ) else {
        eprintln!("Set WOORD_EMAIL and WOORD_PASSWORD");
        std::process::exit(2);
    };

    let client = match WrtsClient::new(ApiConfig::default()) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Could not build client: {e}");
            std::process::exit(1);
        }
    };

    println!("Fetching official lists for {term:?}");
    let start = Instant::now();
    let (rx, handle) = Fetcher::new(client, Credentials { email, password }, term).fetch();

    for msg in rx {
        let elapsed = start.elapsed().as_secs_f64();
        match msg {
            FetchMessage::Progress(p) => {
                if let Some(id) = &p.current {
                    println!("[{elapsed:6.2}s] {}/{} fetching {id}", p.done() + 1, p.total);
                }
            }
            FetchMessage::ListFailed { id, error } => {
                println!("[{elapsed:6.2}s] FAILED {id}: {error}");
            }
            other => println!("[{elapsed:6.2}s] {other:?}"),
        }
    }

    match handle.join() {
        Ok(Ok(report)) => {
            for list in &report.lists {
                println!(
                    "{:>10}  {:<40} {:>5} words  {}",
                    list.id(),
                    list.name(),
                    list.pair_count(),
                    format_header(list, true)
                );
            }
            println!(
                "{} lists, {} failed, {} records skipped in {:.2}s",
                report.lists.len(),
                report.failures.len(),
                report.skipped_records,
                start.elapsed().as_secs_f64()
            );
        }
        Ok(Err(e)) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
        Err(_) => {
            eprintln!("Fetch thread panicked");
            std::process::exit(1);
        }
    }
}
