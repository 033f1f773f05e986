use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use console::style;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use orfscan_core::{classify, find_all_orfs, find_first_orf, Classification, Orf, Sequence};

mod report;

use report::ReportDto;

#[derive(Parser)]
#[command(name = "orfscan")]
#[command(about = "Classify a nucleotide sequence and list its open reading frames", long_about = None)]
#[command(version)]
struct Cli {
    /// Plain-text file holding a single sequence
    sequence_file: PathBuf,

    /// Emit one JSON report instead of human-readable text
    #[arg(long)]
    json: bool,

    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err:#}", style("error:").red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    debug!(path = %cli.sequence_file.display(), "loading sequence");
    let seq = orfscan_io::load_sequence(&cli.sequence_file)?;

    let verdict = classify(&seq.residues);
    debug!(%verdict, length = seq.len(), "classified");

    // The scanners only ever see sequences that classified as DNA.
    let (first_orf, orfs) = if verdict == Classification::Dna {
        (find_first_orf(&seq.residues), find_all_orfs(&seq.residues))
    } else {
        (None, Vec::new())
    };

    if cli.json {
        let report = ReportDto::new(&seq, verdict, first_orf.as_ref(), &orfs);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&seq, verdict, first_orf.as_ref(), &orfs);
    }

    match verdict {
        Classification::Dna => Ok(()),
        Classification::Rna => anyhow::bail!(
            "`{}` is an RNA sequence, not DNA; stopping before the ORF scan",
            seq.name
        ),
        Classification::Invalid => anyhow::bail!(
            "`{}` contains characters outside the DNA alphabet; stopping before the ORF scan",
            seq.name
        ),
    }
}

fn print_report(seq: &Sequence, verdict: Classification, first_orf: Option<&Orf>, orfs: &[Orf]) {
    println!("{}", seq.residues);

    // Non-DNA verdicts are reported as the run's error by the caller.
    if verdict != Classification::Dna {
        return;
    }

    println!("Classification: {}", style(verdict).green());
    println!("Length: {} bases", seq.len());

    match first_orf {
        Some(orf) => println!("First ORF at {}..{}: {}", orf.start, orf.end, orf.sequence),
        None => println!("No open reading frame from the first start codon."),
    }

    if orfs.is_empty() {
        println!("No ORFs found in the sequence.");
    } else {
        println!("All ORFs:");
        for orf in orfs {
            println!("  {:>6}  {}", orf.start, orf.sequence);
        }
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
