use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "assetscout",
    version,
    about = "ETL asset discovery and migration triage"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Discover and classify every ETL asset under the given roots
    Scan {
        /// Directories to walk (overrides `[discovery] roots`)
        roots: Vec<PathBuf>,
        /// Config file (defaults to ./assetscout.toml when present)
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
        /// Extension allow-list, dot-prefixed (overrides `[discovery] extensions`)
        #[arg(long = "ext", value_name = "EXT", num_args = 1..)]
        extensions: Vec<String>,
        /// Report location (overrides `[report] output`)
        #[arg(long, short, value_name = "FILE")]
        output: Option<PathBuf>,
        /// Don't write the JSON report
        #[arg(long)]
        no_save: bool,
        /// Print the inventory as JSON instead of the summary tables
        #[arg(long)]
        json: bool,
        /// Worker threads
        #[arg(long, short, value_name = "N")]
        jobs: Option<usize>,
        #[arg(long, short)]
        verbose: bool,
    },
    /// Classify a single file and print the asset as JSON
    Classify {
        file: PathBuf,
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
}

impl Commands {
    #[must_use]
    pub fn verbose(&self) -> bool {
        matches!(self, Self::Scan { verbose: true, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_parses_overrides() {
        let cli = Cli::try_parse_from([
            "assetscout", "scan", "etl", "jobs", "--ext", ".sql", ".py", "--no-save", "-j", "2",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Scan {
                roots,
                extensions,
                no_save,
                jobs,
                ..
            }) => {
                assert_eq!(roots, vec![PathBuf::from("etl"), PathBuf::from("jobs")]);
                assert_eq!(extensions, vec![".sql", ".py"]);
                assert!(no_save);
                assert_eq!(jobs, Some(2));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn classify_requires_a_file() {
        assert!(Cli::try_parse_from(["assetscout", "classify"]).is_err());
    }
}
