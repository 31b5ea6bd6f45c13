use std::path::PathBuf;

use anyhow::{Context, Result};

/// Convertit une liste d'oligos dump brut vers le format FASTA.
pub fn run(input: PathBuf, output: PathBuf) -> Result<()> {
    let text = std::fs::read_to_string(&input).with_context(|| format!("lecture de {}", input.display()))?;
    let oligos = adn_core::io::read_dump(&text);
    std::fs::write(&output, adn_core::io::write_fasta(&oligos))
        .with_context(|| format!("écriture de {}", output.display()))?;
    println!("{} oligos convertis en FASTA", oligos.len());
    Ok(())
}
