//! Un codec de stockage de données sur ADN autonome: convertit un fichier
//! d'octets arbitraire en une liste ordonnée de chaînes d'oligos ADN, et
//! reconstruit les octets d'origine à partir d'un multiset de telles
//! chaînes potentiellement bruité, réordonné et partiellement perdu.
//!
//! Les deux points d'entrée de la bibliothèque sont [`encode_file`] et
//! [`decode_sequences`]; tout le reste est un détail d'implémentation
//! exposé pour les tests et pour le binaire `adn-cli`.

pub mod bits;
pub mod consensus;
pub mod constraints;
pub mod crc;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod goldman;
pub mod header;
pub mod io;
pub mod logging;
pub mod prefix;
pub mod rs;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use error::{DnaError, Result};

/// Paramètres de construction pour une exécution d'encodage. Les valeurs
/// par défaut correspondent à `spec.md` §6.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CodecParams {
    pub chunk_size: usize,
    pub redundancy: usize,
    pub nsym: usize,
    pub segment_nt: usize,
    /// Informatif: la recherche par re-semis que ce codec ne lance
    /// délibérément jamais dans le pipeline livré (voir
    /// `constraints::reseed_search`).
    pub reseed_attempts: usize,
}

impl Default for CodecParams {
    fn default() -> Self {
        CodecParams {
            chunk_size: 100,
            redundancy: 3,
            nsym: 10,
            segment_nt: 120,
            reseed_attempts: 4,
        }
    }
}

impl CodecParams {
    /// Valide l'invariant `chunk_size + 4 + nsym <= 255` immédiatement,
    /// pour que les erreurs de construction échouent avant tout
    /// traitement de données.
    pub fn validated(self) -> Result<Self> {
        header::validate_params(self.chunk_size, self.nsym)?;
        Ok(self)
    }
}

/// Lit `path` entièrement et l'encode dans la liste d'oligos ordonnée
/// décrite par `spec.md` §4.7, en utilisant les [`CodecParams`] par défaut.
pub fn encode_file(path: impl AsRef<Path>) -> Result<Vec<String>> {
    encode_file_with_params(path, CodecParams::default())
}

/// Comme [`encode_file`], avec des paramètres explicites.
pub fn encode_file_with_params(path: impl AsRef<Path>, params: CodecParams) -> Result<Vec<String>> {
    let data = std::fs::read(path)?;
    encoder::encode(&data, &params)
}

/// Reconstruit les octets d'origine à partir de `reads`, selon
/// `spec.md` §4.8. Retourne `(true, bytes)` pour une reconstruction
/// vérifiée, `(false, [])` sinon.
pub fn decode_sequences(reads: &[String]) -> (bool, Vec<u8>) {
    decoder::decode(reads)
}
