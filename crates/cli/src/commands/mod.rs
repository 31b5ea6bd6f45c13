pub mod decode;
pub mod dump;
pub mod encode;
pub mod fasta;

/// La représentation sur disque de la liste d'oligos qu'une commande lit ou écrit.
#[derive(Clone, Copy)]
pub enum OligoFormat {
    Dump,
    Fasta,
}

impl OligoFormat {
    pub fn write(self, oligos: &[String]) -> String {
        match self {
            OligoFormat::Dump => adn_core::io::write_dump(oligos),
            OligoFormat::Fasta => adn_core::io::write_fasta(oligos),
        }
    }

    pub fn read(self, text: &str) -> Vec<String> {
        match self {
            OligoFormat::Dump => adn_core::io::read_dump(text),
            OligoFormat::Fasta => adn_core::io::read_fasta(text),
        }
    }
}
