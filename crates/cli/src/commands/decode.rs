use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use console::style;

use crate::{create_spinner, OligoFormat};

pub fn run(input: PathBuf, output: PathBuf, format: OligoFormat) -> Result<()> {
    println!("🧬 {} {}", style("Décodage de:").bold().green(), input.display());

    let spinner = create_spinner("Lecture des oligos...");
    let text = std::fs::read_to_string(&input).with_context(|| format!("lecture de {}", input.display()))?;
    let oligos = format.read(&text);
    spinner.finish_with_message(format!("{} oligos lus", oligos.len()));

    let spinner = create_spinner("Décodage...");
    let (ok, data) = adn_core::decode_sequences(&oligos);
    if !ok {
        bail!("échec du décodage: désaccord de checksum ou en-tête non récupérable");
    }
    spinner.finish_with_message(format!("{} octets recouvrés", data.len()));

    std::fs::write(&output, &data).with_context(|| format!("écriture de {}", output.display()))?;
    println!("✅ {} écrit dans {}", style("Terminé:").bold().green(), output.display());
    Ok(())
}
