//! L'en-tête de fichier de 22 octets porté par l'oligo d'en-tête dédié: la
//! taille du fichier original, les paramètres du codec nécessaires pour
//! décoder tous les autres oligos, et deux couches de vérification
//! d'intégrité (un SHA-256 tronqué sur le fichier entier, et un CRC-16 sur
//! l'en-tête lui-même).
//!
//! Fondé sur `spec.md` §3/§4.4.

use sha2::{Digest, Sha256};

use crate::crc::crc16_ccitt;
use crate::error::{DnaError, Result};

/// Longueur de l'en-tête encodé en octets: 8 (file_size) + 2 (chunk_size)
/// + 1 (nsym) + 1 (réservé) + 8 (checksum8) + 2 (crc16).
pub const HEADER_LEN: usize = 22;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileHeader {
    pub file_size: u64,
    pub chunk_size: u16,
    pub nsym: u8,
    pub checksum8: [u8; 8],
}

/// Les 8 premiers octets du condensé SHA-256 de `data`.
pub fn file_checksum(data: &[u8]) -> [u8; 8] {
    let digest = Sha256::digest(data);
    let mut out = [0u8; 8];
    out.copy_from_slice(&digest[..8]);
    out
}

impl FileHeader {
    pub fn new(file_size: u64, chunk_size: u16, nsym: u8, checksum8: [u8; 8]) -> Result<Self> {
        validate_params(chunk_size as usize, nsym as usize)?;
        Ok(FileHeader {
            file_size,
            chunk_size,
            nsym,
            checksum8,
        })
    }

    /// Sérialise l'en-tête dans sa forme fil de 22 octets, en ajoutant le
    /// CRC-16 final sur tout ce qui le précède.
    pub fn encode(&self) -> [u8; HEADER_LEN] {
        let mut buf = [0u8; HEADER_LEN];
        buf[0..8].copy_from_slice(&self.file_size.to_le_bytes());
        buf[8..10].copy_from_slice(&self.chunk_size.to_le_bytes());
        buf[10] = self.nsym;
        buf[11] = 0; // réservé
        buf[12..20].copy_from_slice(&self.checksum8);
        let crc = crc16_ccitt(&buf[0..20]);
        buf[20..22].copy_from_slice(&crc.to_le_bytes());
        buf
    }

    /// Analyse et valide un en-tête de 22 octets, en vérifiant le CRC-16
    /// final et l'invariant de paramètres chunk_size/nsym.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != HEADER_LEN {
            return Err(DnaError::HeaderUnrecoverable(format!(
                "attendu {HEADER_LEN} octets d'en-tête, obtenu {}",
                bytes.len()
            )));
        }
        let expected_crc = u16::from_le_bytes([bytes[20], bytes[21]]);
        let actual_crc = crc16_ccitt(&bytes[0..20]);
        if expected_crc != actual_crc {
            return Err(DnaError::HeaderUnrecoverable(
                "désaccord CRC-16".to_string(),
            ));
        }

        let file_size = u64::from_le_bytes(bytes[0..8].try_into().unwrap());
        let chunk_size = u16::from_le_bytes([bytes[8], bytes[9]]);
        let nsym = bytes[10];
        let mut checksum8 = [0u8; 8];
        checksum8.copy_from_slice(&bytes[12..20]);

        validate_params(chunk_size as usize, nsym as usize)?;
        Ok(FileHeader {
            file_size,
            chunk_size,
            nsym,
            checksum8,
        })
    }
}

/// Chaque charge utile de chunk fait `chunk_size` octets plus un CRC-32 de
/// 4 octets, et le mot de code RS résultant (`chunk_size + 4 + nsym`) doit
/// tenir dans un index de symbole GF(256), donc ne peut jamais dépasser
/// 255 octets.
pub fn validate_params(chunk_size: usize, nsym: usize) -> Result<()> {
    let total = chunk_size + 4 + nsym;
    if total > 255 {
        return Err(DnaError::InvalidParameters {
            chunk_size,
            nsym,
            total,
        });
    }
    Ok(())
}
