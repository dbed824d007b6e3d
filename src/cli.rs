// src/cli.rs
use std::{env, fs, path::PathBuf};

use rand::rngs::StdRng;
use rand::{thread_rng, SeedableRng};

use crate::config::options::ExportFormat;
use crate::params::{Params, DEFAULT_REPORT_FILENAME};
use crate::{file, import, sample, specs::retailers, view};

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut params = Params::new();
    parse_cli(&mut params)?;

    if params.list_retailers {
        for label in retailers::LABELS {
            println!("{}", label);
        }
        return Ok(());
    }

    let input = params.input.clone().ok_or("Missing --in <file.csv> (see --help)")?;
    let text = fs::read_to_string(&input)?;
    let records = import::parse_products(&text);
    logf!("CLI: {} → {} record(s)", input.display(), records.len());

    // Whole batch unless a sample was requested; scripted exports should
    // not silently drop rows.
    let row_ix: Vec<usize> = match params.sample {
        Some(n) => {
            let mut ix = match params.seed {
                Some(seed) => sample::sample_indices(records.len(), n, &mut StdRng::seed_from_u64(seed)),
                None => sample::sample_indices(records.len(), n, &mut thread_rng()),
            };
            ix.sort_unstable();
            ix
        }
        None => (0..records.len()).collect(),
    };

    let table = view::build_table(&records, &row_ix);
    let source = input
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut export = crate::config::options::ExportOptions::default();
    export.format = params.format.clone();
    export.include_headers = params.include_headers;

    if params.print_stdout {
        print!("{}", file::export_contents(&export, &source, &table));
        return Ok(());
    }

    let out_hint = params
        .out
        .as_ref()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_default();
    let default_name = match params.format {
        ExportFormat::Html => DEFAULT_REPORT_FILENAME.to_string(),
        _ => format!("market_report.{}", params.format.ext()),
    };
    let path = file::resolve_single_out_path(&out_hint, &default_name)?;
    fs::write(&path, file::export_contents(&export, &source, &table))?;

    eprintln!("Wrote {} ({} row(s))", path.display(), table.rows.len());
    Ok(())
}

fn parse_cli(params: &mut Params) -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "-i" | "--in" => {
                let v = args.next().ok_or("Missing value for --in")?;
                params.input = Some(PathBuf::from(v));}
            "-o" | "--out" => params.out = Some(PathBuf::from(args.next().ok_or("Missing output path")?)),
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                params.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => ExportFormat::Csv,
                    "tsv" => ExportFormat::Tsv,
                    "html" => ExportFormat::Html,
                    other => return Err(format!("Unknown format: {}", other).into()),
                };}
            "--sample" => {
                let v: usize = args.next().ok_or("Missing value for --sample")?.parse()?;
                if v == 0 { return Err("Sample size must be at least 1".into()); }
                params.sample = Some(v);}
            "--seed" => {
                let v: u64 = args.next().ok_or("Missing value for --seed")?.parse()?;
                params.seed = Some(v);}
            "--no-headers" => params.include_headers = false,
            "--stdout" => params.print_stdout = true,
            "--list-retailers" => params.list_retailers = true,
            "-h" | "--help" => {
                eprintln!("{}", include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(())
}
