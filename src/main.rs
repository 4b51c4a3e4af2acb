use aig2cnf::{
    Assignments,
    constants::{DEFAULT_CNF_PATH, DEFAULT_MAPPING_PATH},
    parse_aag, translate,
};
use clap::Parser;
use log::{debug, info};
use memmap2::Mmap;
use num_format::{Locale, ToFormattedString};
use std::{error::Error, fs::File, path::PathBuf};

mod cli;

/// Translate an ASCII AIGER circuit into DIMACS CNF, keeping the signal names.
#[derive(Parser, Debug)]
#[command(author, version, long_about = None)]
struct Args {
    /// ASCII AIGER (.aag) circuit to translate
    #[arg(value_name = "CIRCUIT")]
    circuit: PathBuf,

    /// Signals to fix before encoding, e.g. `a=1 b=0`. Arguments without `=` are ignored.
    #[arg(value_name = "SIGNAL=VALUE", allow_hyphen_values = true)]
    assignments: Vec<String>,

    /// Where to write the DIMACS CNF
    #[arg(long, value_name = "PATH", default_value = DEFAULT_CNF_PATH)]
    cnf: PathBuf,

    /// Where to write the variable/signal mapping
    #[arg(long, value_name = "PATH", default_value = DEFAULT_MAPPING_PATH)]
    mapping: PathBuf,

    /// Print the variable/signal mapping as a table
    #[arg(long)]
    print_mapping: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    cli::init_logging();

    let assignments = Assignments::from_args(&args.assignments)?;

    let circuit = {
        let file = File::open(&args.circuit)?;
        // SAFETY: mapping a file is safe as long as the file isn't modified concurrently.
        let mmap = unsafe { Mmap::map(&file)? };
        parse_aag(&mmap)?
    };
    debug!("Circuit header: {}", circuit.header);

    let translation = translate(&circuit, &assignments)?;
    translation.render()?.write(&args.cnf, &args.mapping)?;

    info!(
        "Wrote {} with {} vars, {} clauses",
        args.cnf.display(),
        translation.cnf.num_vars.to_formatted_string(&Locale::en),
        translation.cnf.num_clauses().to_formatted_string(&Locale::en)
    );
    info!("Mapping saved to {}", args.mapping.display());
    if !assignments.is_empty() {
        info!("Applied assignments: {}", assignments);
    }

    if args.print_mapping {
        println!("{}", cli::mapping_table(&translation.signals));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hyphen_arguments_reach_assignments() {
        let args = Args::try_parse_from(["aig2cnf", "c.aag", "-x", "a=1", "--flag"]).unwrap();

        assert_eq!(args.circuit, PathBuf::from("c.aag"));
        assert_eq!(args.assignments, vec!["-x", "a=1", "--flag"]);
        assert_eq!(
            Assignments::from_args(&args.assignments).unwrap().to_string(),
            "a=1"
        );
    }

    #[test]
    fn test_options_before_circuit() {
        let args =
            Args::try_parse_from(["aig2cnf", "--cnf", "out.cnf", "c.aag", "-y", "b=0"]).unwrap();

        assert_eq!(args.cnf, PathBuf::from("out.cnf"));
        assert_eq!(args.mapping, PathBuf::from(DEFAULT_MAPPING_PATH));
        assert_eq!(args.assignments, vec!["-y", "b=0"]);
    }

    #[test]
    fn test_missing_circuit_is_usage_error() {
        assert!(Args::try_parse_from(["aig2cnf"]).is_err());
    }
}
