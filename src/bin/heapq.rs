/// heapq – print integers in heap extraction order.
///
///   heapq 5 1 8 3       → 8 5 3 1, one per line
///   heapq -m 5 1 8 3    → 1 3 5 8 (min-heap)
///   heapq -k 2 5 1 8 3  → 8 5
///   seq 100 | heapq -k3 → top three values from stdin
use std::env;
use std::io::{self, BufWriter, Read, Write};
use std::process::{self, ExitCode};
use std::time::Instant;

use heapq::{BinaryHeap, Compare, Max, Min};

fn usage() {
    eprintln!("heapq - print integers in priority order using a binary heap");
    eprintln!();
    eprintln!("Usage: heapq [OPTIONS] [NUMBER]...");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -m, --min          Min-heap ordering (default: max-heap)");
    eprintln!("  -k, --top N        Print only the first N extracted values");
    eprintln!("  -q, --quiet        Suppress warnings");
    eprintln!("  -v, --verbose      Verbose output");
    eprintln!("  -h, --help         Show this help");
    eprintln!();
    eprintln!("If no NUMBER is given, reads whitespace-separated integers from stdin.");
}

#[derive(Debug)]
struct Opts {
    min: bool,
    top: Option<usize>,
    verbose: bool,
    quiet: bool,
    values: Vec<i64>,
}

fn parse_count(s: &str) -> usize {
    match s.parse::<usize>() {
        Ok(n) => n,
        Err(_) => {
            eprintln!("heapq: invalid count '{s}'");
            process::exit(1);
        }
    }
}

fn parse_args() -> Opts {
    let args: Vec<String> = env::args().skip(1).collect();
    let mut opts = Opts {
        min: false,
        top: None,
        verbose: false,
        quiet: false,
        values: Vec::new(),
    };

    let mut i = 0;
    let mut only_values = false;
    while i < args.len() {
        let arg = &args[i];
        // Negative numbers look like flags.
        if let Ok(v) = arg.parse::<i64>() {
            opts.values.push(v);
            i += 1;
            continue;
        }
        if only_values {
            eprintln!("heapq: invalid number '{arg}'");
            process::exit(1);
        }
        match arg.as_str() {
            "--" => only_values = true,
            "-m" | "--min" => opts.min = true,
            "-v" | "--verbose" => opts.verbose = true,
            "-q" | "--quiet" => opts.quiet = true,
            "-h" | "--help" => {
                usage();
                process::exit(0);
            }
            "-k" | "--top" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("heapq: missing argument for -k");
                    process::exit(1);
                }
                opts.top = Some(parse_count(&args[i]));
            }
            s if s.starts_with("-k") => opts.top = Some(parse_count(&s[2..])),
            // Handle combined short flags like -mv.
            s if s.starts_with('-') && !s.starts_with("--") && s.len() > 2 => {
                for ch in s[1..].chars() {
                    match ch {
                        'm' => opts.min = true,
                        'v' => opts.verbose = true,
                        'q' => opts.quiet = true,
                        _ => {
                            eprintln!("heapq: unknown flag '-{ch}'");
                            process::exit(1);
                        }
                    }
                }
            }
            _ => {
                eprintln!("heapq: invalid number '{arg}'");
                eprintln!("heapq: run 'heapq --help' for usage");
                process::exit(1);
            }
        }
        i += 1;
    }

    opts
}

/// Parse whitespace-separated integers, warning about anything else.
fn parse_values(text: &str, quiet: bool) -> Vec<i64> {
    let mut values = Vec::new();
    for token in text.split_whitespace() {
        match token.parse::<i64>() {
            Ok(v) => values.push(v),
            Err(_) => {
                if !quiet {
                    eprintln!("heapq: warning: skipping '{token}'");
                }
            }
        }
    }
    values
}

fn emit<C: Compare<i64> + Default>(opts: &Opts, values: Vec<i64>) -> Result<(), String> {
    let n = values.len();
    let start = Instant::now();
    let heap: BinaryHeap<i64, C> = BinaryHeap::from_vec(values);
    if opts.verbose {
        eprintln!(
            "heapq: heapified {n} values in {:.3} ms",
            start.elapsed().as_secs_f64() * 1000.0
        );
    }

    let take = opts.top.unwrap_or(n).min(n);
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for v in heap.into_iter_sorted().take(take) {
        writeln!(out, "{v}").map_err(|e| format!("stdout: {e}"))?;
    }
    out.flush().map_err(|e| format!("stdout: {e}"))?;

    if opts.verbose {
        eprintln!("heapq: emitted {take} of {n} values");
    }
    Ok(())
}

fn run() -> Result<(), String> {
    let mut opts = parse_args();

    if opts.values.is_empty() {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .map_err(|e| format!("stdin: {e}"))?;
        opts.values = parse_values(&text, opts.quiet);
    }

    let values = std::mem::take(&mut opts.values);
    if opts.min {
        emit::<Min>(&opts, values)
    } else {
        emit::<Max>(&opts, values)
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("heapq: error: {e}");
            ExitCode::FAILURE
        }
    }
}
