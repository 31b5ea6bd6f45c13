//! Types d'erreurs pour le codec de stockage sur ADN.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DnaError {
    #[error("paramètres invalides: chunk_size + 4 + nsym doit être <= 255 (obtenu {chunk_size} + 4 + {nsym} = {total})")]
    InvalidParameters {
        chunk_size: usize,
        nsym: usize,
        total: usize,
    },

    #[error("champ hors plage: {field} = {value} dépasse la largeur de {bits} bits")]
    FieldOutOfRange {
        field: &'static str,
        value: u64,
        bits: u32,
    },

    #[error("le chunk {chunk_idx} a produit {count} segments, ce qui dépasse la limite de 256 segments")]
    TooManySegments { chunk_idx: u32, count: usize },

    #[error("en-tête irrécupérable: {0}")]
    HeaderUnrecoverable(String),

    #[error("transition Goldman invalide: {last} -> {next}")]
    TransitionInvalid { last: char, next: char },

    #[error("échec du décodage Reed-Solomon: capacité de correction de {0} erreurs de symbole dépassée")]
    RSDecodeFailure(usize),

    #[error("erreur d'E/S: {0}")]
    Io(#[from] std::io::Error),

    #[error("erreur de sérialisation: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("erreur d'encodage: {0}")]
    Encoding(String),

    #[error("erreur de décodage: {0}")]
    Decoding(String),
}

pub type Result<T> = std::result::Result<T, DnaError>;
