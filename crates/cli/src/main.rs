//! CLI du codec de stockage sur ADN.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};

mod commands;

use commands::{decode, dump, encode, fasta, OligoFormat};

#[derive(Parser)]
#[command(name = "adn")]
#[command(about = "Encode des fichiers en oligos ADN, et les décode en retour", long_about = None)]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbosité: -v pour info, -vv pour debug.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode un fichier en une liste ordonnée d'oligos ADN.
    Encode {
        /// Fichier d'entrée à encoder.
        #[arg(short, long)]
        input: PathBuf,

        /// Chemin de sortie pour la liste d'oligos.
        #[arg(short, long)]
        output: PathBuf,

        /// Format de sérialisation de la liste d'oligos.
        #[arg(short, long, value_enum, default_value = "dump")]
        format: WireFormat,

        /// Fichier JSON surchargeant les paramètres de codec par défaut.
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Décode une liste d'oligos pour retrouver le fichier d'origine.
    Decode {
        /// Liste d'oligos d'entrée.
        #[arg(short, long)]
        input: PathBuf,

        /// Chemin de sortie pour le fichier recouvré.
        #[arg(short, long)]
        output: PathBuf,

        /// Format de sérialisation de la liste d'oligos d'entrée.
        #[arg(short, long, value_enum, default_value = "dump")]
        format: WireFormat,
    },

    /// Convertit une liste d'oligos du format FASTA vers le dump brut.
    Dump {
        #[arg(short, long)]
        input: PathBuf,
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Convertit une liste d'oligos du dump brut vers le format FASTA.
    Fasta {
        #[arg(short, long)]
        input: PathBuf,
        #[arg(short, long)]
        output: PathBuf,
    },
}

#[derive(clap::ValueEnum, Clone, Copy)]
enum WireFormat {
    Dump,
    Fasta,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    adn_core::logging::init_logging(default_filter);

    match cli.command {
        Commands::Encode {
            input,
            output,
            format,
            config,
        } => encode::run(input, output, format.into(), config)?,
        Commands::Decode {
            input,
            output,
            format,
        } => decode::run(input, output, format.into())?,
        Commands::Dump { input, output } => dump::run(input, output)?,
        Commands::Fasta { input, output } => fasta::run(input, output)?,
    }

    Ok(())
}

impl From<WireFormat> for OligoFormat {
    fn from(f: WireFormat) -> Self {
        match f {
            WireFormat::Dump => OligoFormat::Dump,
            WireFormat::Fasta => OligoFormat::Fasta,
        }
    }
}

pub(crate) fn create_progress_bar(length: u64, msg: &str) -> ProgressBar {
    let pb = ProgressBar::new(length);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("##-"),
    );
    pb.set_message(msg.to_string());
    pb
}

pub(crate) fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap(),
    );
    pb.set_message(msg.to_string());
    pb
}
