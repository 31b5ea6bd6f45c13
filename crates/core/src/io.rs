//! Formats de sérialisation FASTA et dump brut pour une liste d'oligos
//! produite, selon `spec.md` §6: "sortie FASTA (optionnelle)" et "dump brut".

/// Rend `oligos` en enregistrements FASTA: `>oligo_{i}\n{sequence}\n`.
pub fn write_fasta(oligos: &[String]) -> String {
    let mut out = String::new();
    for (i, oligo) in oligos.iter().enumerate() {
        out.push_str(&format!(">oligo_{i}\n{oligo}\n"));
    }
    out
}

/// Analyse un document FASTA pour en retrouver les lignes de séquence,
/// dans l'ordre. Les séquences multi-lignes sont concaténées; les lignes
/// d'en-tête sont écartées.
pub fn read_fasta(text: &str) -> Vec<String> {
    let mut oligos = Vec::new();
    let mut current = String::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.starts_with('>') {
            if !current.is_empty() {
                oligos.push(std::mem::take(&mut current));
            }
        } else {
            current.push_str(line);
        }
    }
    if !current.is_empty() {
        oligos.push(current);
    }
    oligos
}

/// Rend `oligos` une par ligne, en majuscules.
pub fn write_dump(oligos: &[String]) -> String {
    let mut out = String::new();
    for oligo in oligos {
        out.push_str(&oligo.to_uppercase());
        out.push('\n');
    }
    out
}

/// Analyse un dump brut: un oligo par ligne. Toute ligne (après
/// élagage des espaces) contenant un caractère hors {A,C,G,T} est
/// silencieusement écartée, pas une erreur.
pub fn read_dump(text: &str) -> Vec<String> {
    text.lines()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .filter(|l| l.chars().all(|c| matches!(c, 'A' | 'C' | 'G' | 'T')))
        .map(|l| l.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fasta_roundtrip() {
        let oligos = vec!["AGAACGT".to_string(), "AGCCGTA".to_string()];
        let text = write_fasta(&oligos);
        assert_eq!(text, ">oligo_0\nAGAACGT\n>oligo_1\nAGCCGTA\n");
        assert_eq!(read_fasta(&text), oligos);
    }

    #[test]
    fn dump_roundtrip() {
        let oligos = vec!["AGAACGT".to_string(), "AGCCGTA".to_string()];
        let text = write_dump(&oligos);
        assert_eq!(text, "AGAACGT\nAGCCGTA\n");
        assert_eq!(read_dump(&text), oligos);
    }

    #[test]
    fn dump_rejects_non_acgt_lines_silently() {
        let text = "AGCT\nagct\nACGX\n  \nACGT\n";
        assert_eq!(read_dump(text), vec!["AGCT".to_string(), "ACGT".to_string()]);
    }

    #[test]
    fn dump_uppercases_on_write() {
        let text = write_dump(&["agct".to_string()]);
        assert_eq!(text, "AGCT\n");
    }
}
