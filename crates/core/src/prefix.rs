//! Préfixe d'oligo auto-synchronisant de 80 bases: SYNC + TYPE + champs
//! CT-codés + CRC-8, per `spec.md` §3/§4.6.
//!
//! Le "CT-coding" associe le bit `1` à la base `C` et le bit `0` à la base
//! `T`, si bien que les régions champs et CRC-8 de tout oligo valide ne
//! contiennent que des `C`/`T`: une signature syntaxique forte qui permet
//! à [`parse_prefix`] de rejeter les déchets à bas coût.

use crate::bits::{int_to_bits, pack_bits};
use crate::crc::crc8;
use crate::error::{DnaError, Result};

pub const SYNC: &str = "AG";
pub const PREFIX_LEN: usize = 80;

const CHUNK_IDX_BITS: u32 = 24;
const TOTAL_CHUNKS_BITS: u32 = 24;
const SEQ_IDX_BITS: u32 = 10;
const TOTAL_SEQS_BITS: u32 = 10;
const FIELD_BITS: usize =
    (CHUNK_IDX_BITS + TOTAL_CHUNKS_BITS + SEQ_IDX_BITS + TOTAL_SEQS_BITS) as usize; // 68
const CRC_BITS: usize = 8;

/// Les trois rôles d'oligo: Header, Data, Parity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeqType {
    Header,
    Data,
    Parity,
}

impl SeqType {
    fn code(self) -> &'static str {
        match self {
            SeqType::Header => "AA",
            SeqType::Data => "CC",
            SeqType::Parity => "GG",
        }
    }

    fn from_code(code: &str) -> Option<Self> {
        match code {
            "AA" => Some(SeqType::Header),
            "CC" => Some(SeqType::Data),
            "GG" => Some(SeqType::Parity),
            _ => None,
        }
    }
}

/// Le contenu analysé d'un préfixe de 80 bases valide, plus les bases de
/// charge utile qui suivaient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixInfo {
    pub seq_type: SeqType,
    pub chunk_idx: u32,
    pub total_chunks: u32,
    pub seq_idx: u16,
    pub total_seqs: u16,
    pub payload: String,
}

fn ct_encode(bits: &str) -> String {
    bits.chars().map(|c| if c == '1' { 'C' } else { 'T' }).collect()
}

/// Décode une région CT-codée pour retrouver une chaîne de bits. Tout
/// caractère autre que `C`/`T` invalide la région.
fn ct_decode(bases: &str) -> Option<String> {
    bases
        .chars()
        .map(|c| match c {
            'C' => Some('1'),
            'T' => Some('0'),
            _ => None,
        })
        .collect()
}

fn field_bits(chunk_idx: u32, total_chunks: u32, seq_idx: u16, total_seqs: u16) -> Result<String> {
    if chunk_idx >= 1 << CHUNK_IDX_BITS {
        return Err(DnaError::FieldOutOfRange {
            field: "chunk_idx",
            value: chunk_idx as u64,
            bits: CHUNK_IDX_BITS,
        });
    }
    if total_chunks >= 1 << TOTAL_CHUNKS_BITS {
        return Err(DnaError::FieldOutOfRange {
            field: "total_chunks",
            value: total_chunks as u64,
            bits: TOTAL_CHUNKS_BITS,
        });
    }
    if seq_idx as u32 >= 1 << SEQ_IDX_BITS {
        return Err(DnaError::FieldOutOfRange {
            field: "seq_idx",
            value: seq_idx as u64,
            bits: SEQ_IDX_BITS,
        });
    }
    if total_seqs as u32 >= 1 << TOTAL_SEQS_BITS {
        return Err(DnaError::FieldOutOfRange {
            field: "total_seqs",
            value: total_seqs as u64,
            bits: TOTAL_SEQS_BITS,
        });
    }
    let mut bits = String::with_capacity(FIELD_BITS);
    bits.push_str(&int_to_bits(chunk_idx as u64, CHUNK_IDX_BITS)?);
    bits.push_str(&int_to_bits(total_chunks as u64, TOTAL_CHUNKS_BITS)?);
    bits.push_str(&int_to_bits(seq_idx as u64, SEQ_IDX_BITS)?);
    bits.push_str(&int_to_bits(total_seqs as u64, TOTAL_SEQS_BITS)?);
    Ok(bits)
}

/// Assemble le préfixe de cadrage de 80 bases pour un oligo.
pub fn create_prefix(
    chunk_idx: u32,
    total_chunks: u32,
    seq_type: SeqType,
    seq_idx: u16,
    total_seqs: u16,
) -> Result<String> {
    let bits = field_bits(chunk_idx, total_chunks, seq_idx, total_seqs)?;
    let packed = pack_bits(&bits);
    let crc = crc8(&packed);
    let crc_bits = int_to_bits(crc as u64, CRC_BITS as u32)?;

    let mut prefix = String::with_capacity(PREFIX_LEN);
    prefix.push_str(SYNC);
    prefix.push_str(seq_type.code());
    prefix.push_str(&ct_encode(&bits));
    prefix.push_str(&ct_encode(&crc_bits));

    debug_assert_eq!(prefix.len(), PREFIX_LEN);
    Ok(prefix)
}

/// Analyse et valide le préfixe d'un oligo. Retourne `None` (jamais une
/// erreur) pour toute violation de cadrage: trop court, mauvais SYNC,
/// TYPE non reconnu, région champ/CRC non-CT, ou désaccord CRC-8. Selon
/// `spec.md` §4.6, ce sont toutes des conditions silencieusement
/// abandonnées, pas des échecs de décodage.
pub fn parse_prefix(oligo: &str) -> Option<PrefixInfo> {
    if oligo.len() < PREFIX_LEN || !oligo.is_char_boundary(PREFIX_LEN) {
        return None;
    }
    if &oligo[0..2] != SYNC {
        return None;
    }
    let seq_type = SeqType::from_code(&oligo[2..4])?;

    let field_region = &oligo[4..4 + FIELD_BITS];
    let crc_region = &oligo[4 + FIELD_BITS..PREFIX_LEN];

    let field_bits_str = ct_decode(field_region)?;
    let crc_bits_str = ct_decode(crc_region)?;

    let packed = pack_bits(&field_bits_str);
    let expected_crc = crc8(&packed);
    let actual_crc = u8::from_str_radix(&crc_bits_str, 2).ok()?;
    if expected_crc != actual_crc {
        return None;
    }

    let chunk_idx = u32::from_str_radix(&field_bits_str[0..24], 2).ok()?;
    let total_chunks = u32::from_str_radix(&field_bits_str[24..48], 2).ok()?;
    let seq_idx = u16::from_str_radix(&field_bits_str[48..58], 2).ok()?;
    let total_seqs = u16::from_str_radix(&field_bits_str[58..68], 2).ok()?;

    Some(PrefixInfo {
        seq_type,
        chunk_idx,
        total_chunks,
        seq_idx,
        total_seqs,
        payload: oligo[PREFIX_LEN..].to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn exact_length() {
        let p = create_prefix(1, 5, SeqType::Data, 0, 3).unwrap();
        assert_eq!(p.len(), PREFIX_LEN);
        assert!(p.starts_with(SYNC));
    }

    #[test]
    fn roundtrip_basic() {
        let p = create_prefix(7, 42, SeqType::Parity, 3, 9).unwrap() + "ACGTACGT";
        let info = parse_prefix(&p).unwrap();
        assert_eq!(info.seq_type, SeqType::Parity);
        assert_eq!(info.chunk_idx, 7);
        assert_eq!(info.total_chunks, 42);
        assert_eq!(info.seq_idx, 3);
        assert_eq!(info.total_seqs, 9);
        assert_eq!(info.payload, "ACGTACGT");
    }

    #[test]
    fn rejects_too_short() {
        assert!(parse_prefix("AG").is_none());
    }

    #[test]
    fn rejects_bad_sync() {
        let mut p: Vec<char> = create_prefix(0, 1, SeqType::Header, 0, 1).unwrap().chars().collect();
        p[0] = 'C';
        let s: String = p.into_iter().collect();
        assert!(parse_prefix(&s).is_none());
    }

    #[test]
    fn rejects_bad_type() {
        let mut p: Vec<char> = create_prefix(0, 1, SeqType::Header, 0, 1).unwrap().chars().collect();
        p[2] = 'A';
        p[3] = 'T'; // "AT" n'est pas un code TYPE valide
        let s: String = p.into_iter().collect();
        assert!(parse_prefix(&s).is_none());
    }

    #[test]
    fn rejects_crc_mismatch() {
        let mut p: Vec<char> = create_prefix(123, 456, SeqType::Data, 1, 2).unwrap().chars().collect();
        // Inverse un bit dans la région champ; le CRC ne correspondra plus.
        let idx = 10;
        p[idx] = if p[idx] == 'C' { 'T' } else { 'C' };
        let s: String = p.into_iter().collect();
        assert!(parse_prefix(&s).is_none());
    }

    #[test]
    fn rejects_out_of_range_fields() {
        assert!(create_prefix(1 << 24, 1, SeqType::Data, 0, 1).is_err());
        assert!(create_prefix(0, 1 << 24, SeqType::Data, 0, 1).is_err());
        assert!(create_prefix(0, 1, SeqType::Data, 1024, 1).is_err());
        assert!(create_prefix(0, 1, SeqType::Data, 0, 1024).is_err());
    }

    proptest! {
        #[test]
        fn roundtrip_any_valid_fields(
            chunk_idx in 0u32..(1 << 24),
            total_chunks in 0u32..(1 << 24),
            seq_idx in 0u16..1024,
            total_seqs in 0u16..1024,
            type_idx in 0..3usize,
        ) {
            let seq_type = [SeqType::Header, SeqType::Data, SeqType::Parity][type_idx];
            let prefix = create_prefix(chunk_idx, total_chunks, seq_type, seq_idx, total_seqs).unwrap();
            let info = parse_prefix(&prefix).unwrap();
            prop_assert_eq!(info.chunk_idx, chunk_idx);
            prop_assert_eq!(info.total_chunks, total_chunks);
            prop_assert_eq!(info.seq_idx, seq_idx);
            prop_assert_eq!(info.total_seqs, total_seqs);
            prop_assert_eq!(info.seq_type, seq_type);
        }
    }
}
