// hunter-chain: Print the ranked word chain (or TLD chain) of a configuration.
//
// Useful for checking how sources, filters and biases rank the parts before
// they are combined into domains.
//
// Usage:
//   hunter-chain [-c CONFIG] [OPTIONS]
//
// Options:
//   -c, --config PATH    Config file (TOML)
//   -n, --count N        Number of combos to print (default: 25)
//       --tlds           Print the TLD chain instead of the word chain
//   -v, --verbose        Debug logging on stderr
//   -h, --help           Print help

use std::io::{self, Write};

use hunter_cli::{fatal, format_combo};

const DEFAULT_COUNT: usize = 25;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (config_path, args) = hunter_cli::parse_config_path(&args);

    if hunter_cli::wants_help(&args) {
        println!("hunter-chain: Print the ranked word or TLD chain.");
        println!();
        println!("Usage: hunter-chain [-c CONFIG] [OPTIONS]");
        println!();
        println!("Options:");
        println!("  -c, --config PATH   Config file (TOML)");
        println!("  -n, --count N       Number of combos to print (default: {DEFAULT_COUNT})");
        println!("      --tlds          Print the TLD chain instead of the word chain");
        println!("  -v, --verbose       Debug logging on stderr");
        println!("  -h, --help          Print this help");
        return;
    }

    let mut count = DEFAULT_COUNT;
    let mut tlds = false;
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
            "--tlds" => tlds = true,
            "-v" | "--verbose" => {}
            other => fatal(&format!("unknown argument: {other}")),
        }
    }

    hunter_cli::init_logging(hunter_cli::wants_verbose(&args));

    let hunter = hunter_cli::load_hunter(config_path.as_deref(), &[]).unwrap_or_else(|e| fatal(&e));
    let chain = if tlds { hunter.tlds() } else { hunter.words() };
    let chain = chain.unwrap_or_else(|e| fatal(&e.to_string()));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    for combo in chain.take(count) {
        if writeln!(out, "{}", format_combo(&combo)).is_err() {
            return;
        }
    }
    let _ = out.flush();
}
