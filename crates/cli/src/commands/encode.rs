use std::path::PathBuf;

use anyhow::{Context, Result};
use console::style;

use crate::{create_progress_bar, create_spinner, OligoFormat};
use adn_core::CodecParams;

pub fn run(input: PathBuf, output: PathBuf, format: OligoFormat, config: Option<PathBuf>) -> Result<()> {
    println!("🧬 {} {}", style("Encodage de:").bold().green(), input.display());

    let params = match config {
        Some(path) => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("lecture du fichier de config {}", path.display()))?;
            serde_json::from_str(&text).with_context(|| "analyse des paramètres du codec")?
        }
        None => CodecParams::default(),
    };

    let spinner = create_spinner("Lecture du fichier d'entrée...");
    let data = std::fs::read(&input).with_context(|| format!("lecture de {}", input.display()))?;
    spinner.finish_with_message(format!("{} octets lus", data.len()));

    let pb = create_progress_bar(data.len() as u64, "Encodage en oligos...");
    let oligos = adn_core::encoder::encode(&data, &params)?;
    pb.finish_with_message(format!("{} oligos générés", oligos.len()));

    let text = format.write(&oligos);
    std::fs::write(&output, text).with_context(|| format!("écriture de {}", output.display()))?;

    println!(
        "✅ {} {} oligos écrits dans {}",
        style("Terminé:").bold().green(),
        oligos.len(),
        output.display()
    );
    Ok(())
}
