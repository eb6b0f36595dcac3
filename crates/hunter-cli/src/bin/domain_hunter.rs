// domain-hunter: Print the best-scoring domain names for a configuration.
//
// Usage:
//   domain-hunter [-c CONFIG] [OPTIONS]
//
// Options:
//   -c, --config PATH    Config file (TOML)
//   -n, --count N        Number of domains to print (default: 250)
//   -w, --words FILE     Extra word file, one word per line (repeatable)
//       --json           Print one JSON object per domain
//   -v, --verbose        Debug logging on stderr
//   -h, --help           Print help

use std::io::{self, Write};

use hunter_cli::{fatal, format_combo};

const DEFAULT_COUNT: usize = 250;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (config_path, args) = hunter_cli::parse_config_path(&args);

    if hunter_cli::wants_help(&args) {
        println!("domain-hunter: Print the best-scoring domain names.");
        println!();
        println!("Usage: domain-hunter [-c CONFIG] [OPTIONS]");
        println!();
        println!("Without -c, the config is looked up in $HUNTER_CONFIG,");
        println!("~/.domain-hunter/config.toml and ./hunter.toml.");
        println!();
        println!("Options:");
        println!("  -c, --config PATH   Config file (TOML)");
        println!("  -n, --count N       Number of domains to print (default: {DEFAULT_COUNT})");
        println!("  -w, --words FILE    Extra word file, one word per line (repeatable)");
        println!("      --json          Print one JSON object per domain");
        println!("  -v, --verbose       Debug logging on stderr");
        println!("  -h, --help          Print this help");
        return;
    }

    let mut count = DEFAULT_COUNT;
    let mut word_files: Vec<String> = Vec::new();
    let mut json = false;
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        match arg.as_str() {
            "-n" | "--count" => {
                count = hunter_cli::parse_count(args.get(i + 1)).unwrap_or_else(|e| fatal(&e));
                skip_next = true;
            }
            "-w" | "--words" => {
                let file = args
                    .get(i + 1)
                    .unwrap_or_else(|| fatal("--words requires a value"));
                word_files.push(file.clone());
                skip_next = true;
            }
            "--json" => json = true,
            "-v" | "--verbose" => {}
            other => fatal(&format!("unknown argument: {other}")),
        }
    }

    hunter_cli::init_logging(hunter_cli::wants_verbose(&args));

    let hunter = hunter_cli::load_hunter(config_path.as_deref(), &word_files)
        .unwrap_or_else(|e| fatal(&e));
    let domains = hunter.domains().unwrap_or_else(|e| fatal(&e.to_string()));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for domain in domains.take(count) {
        let line = if json {
            serde_json::to_string(&domain).unwrap_or_else(|e| fatal(&e.to_string()))
        } else {
            format_combo(&domain)
        };
        if writeln!(out, "{line}").is_err() {
            // stdout closed (e.g. piped into head)
            return;
        }
    }
    let _ = out.flush();
}
