//! Newline-delimited batch front end: one SMILES per input line, one JSON
//! result object per output line, in input order.

use std::fs;
use std::io::{self, BufWriter, Read, Write};
use std::process::ExitCode;

use molprobe::analyze_batch;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    if args.len() > 2 || args.get(1).map(String::as_str) == Some("--help") {
        eprintln!("usage: molprobe [FILE]   (reads stdin when FILE is absent)");
        return ExitCode::from(2);
    }

    let text = match read_input(args.get(1).map(String::as_str)) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("molprobe: {e}");
            return ExitCode::from(2);
        }
    };

    let inputs: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let results = analyze_batch(&inputs);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for result in &results {
        match serde_json::to_string(result) {
            Ok(json) => {
                if writeln!(out, "{json}").is_err() {
                    return ExitCode::from(2);
                }
            }
            Err(e) => {
                eprintln!("molprobe: {e}");
                return ExitCode::from(2);
            }
        }
    }
    if out.flush().is_err() {
        return ExitCode::from(2);
    }

    // Individual invalid molecules are reported in the JSON, not the exit
    // code: a batch never aborts.
    ExitCode::SUCCESS
}

fn read_input(path: Option<&str>) -> io::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}
