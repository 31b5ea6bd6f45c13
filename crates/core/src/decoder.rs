//! Le pipeline de décodage: un multiset non ordonné, potentiellement
//! bruité, de lectures d'oligos, ramené aux octets d'origine (ou à un
//! échec explicite).
//!
//! Fondé sur `spec.md` §4.8; la forme structurelle suit le
//! `codec/decoder.rs` de référence (une fonction de pipeline en étapes
//! avec un résultat `(ok, bytes)` explicite), même si la logique de
//! propagation de croyance/décodage fountain qui s'y trouve est
//! entièrement remplacée par consensus + décodage RS.

use std::collections::BTreeMap;

use sha2::{Digest, Sha256};

use crate::consensus::consensus;
use crate::crc::crc32;
use crate::goldman::dna_to_bytes;
use crate::header::{FileHeader, HEADER_LEN};
use crate::prefix::{parse_prefix, PrefixInfo, SeqType};
use crate::rs;

const GOLDMAN_START: char = 'A';

struct ChunkGroup {
    data: BTreeMap<u16, Vec<String>>,
    parity: BTreeMap<u16, Vec<String>>,
}

/// Décode `reads` pour retrouver les octets du fichier d'origine, selon
/// le pipeline en trois étapes de `spec.md` §4.8. Chaque échec
/// récupérable (préfixe invalide, chunk non corrigible, chunk perdu) se
/// réduit à l'abandon de l'enregistrement concerné; seuls un désaccord
/// SHA-256 final ou un en-tête manquant sont rapportés, sous la forme
/// `(false, vec![])`.
pub fn decode(reads: &[String]) -> (bool, Vec<u8>) {
    // Étape A: validation du préfixe.
    let parsed: Vec<PrefixInfo> = reads.iter().filter_map(|r| parse_prefix(r)).collect();

    // Étape B: reconstruction de l'en-tête.
    let (header, num_chunks) = crate::trace_stage!("decode_header", {
        let header_payloads: Vec<String> = parsed
            .iter()
            .filter(|p| p.seq_type == SeqType::Header && p.chunk_idx == 0)
            .map(|p| p.payload.clone())
            .collect();
        if header_payloads.is_empty() {
            return (false, Vec::new());
        }
        let header_dna = consensus(&header_payloads);
        let header_bytes = match dna_to_bytes(&header_dna, GOLDMAN_START) {
            Ok(b) => b,
            Err(_) => return (false, Vec::new()),
        };
        if header_bytes.len() < HEADER_LEN {
            return (false, Vec::new());
        }
        let header = match FileHeader::decode(&header_bytes[..HEADER_LEN]) {
            Ok(h) => h,
            Err(_) => return (false, Vec::new()),
        };
        let num_chunks = if header.file_size == 0 {
            0
        } else {
            (header.file_size as usize + header.chunk_size as usize - 1) / header.chunk_size as usize
        };
        (header, num_chunks)
    });

    // Étape C: reconstruction des chunks.
    let mut chunks: BTreeMap<u32, ChunkGroup> = BTreeMap::new();
    for p in &parsed {
        if p.chunk_idx == 0 || p.chunk_idx as usize > num_chunks {
            continue;
        }
        let group = chunks.entry(p.chunk_idx).or_insert_with(|| ChunkGroup {
            data: BTreeMap::new(),
            parity: BTreeMap::new(),
        });
        match p.seq_type {
            SeqType::Data => group.data.entry(p.seq_idx).or_default().push(p.payload.clone()),
            SeqType::Parity => group
                .parity
                .entry(p.seq_idx)
                .or_default()
                .push(p.payload.clone()),
            SeqType::Header => {}
        }
    }

    let mut buffer = Vec::new();
    for chunk_idx in 1..=num_chunks as u32 {
        let Some(group) = chunks.get(&chunk_idx) else {
            continue;
        };

        let recovered = crate::trace_stage!("decode_chunk", {
            (|| -> Option<Vec<u8>> {
                let data_dna: String = group.data.values().map(|reads| consensus(reads)).collect();
                let parity_dna: String =
                    group.parity.values().map(|reads| consensus(reads)).collect();

                let data_bytes = dna_to_bytes(&data_dna, GOLDMAN_START).ok()?;
                let parity_bytes = dna_to_bytes(&parity_dna, GOLDMAN_START).ok()?;

                let mut codeword = data_bytes.clone();
                codeword.extend_from_slice(&parity_bytes);

                let decoded = match rs::decode(&codeword, header.nsym as usize) {
                    Ok((message, _corrected)) => message,
                    Err(_) => data_bytes,
                };

                if decoded.len() < 4 {
                    return None;
                }
                let (payload, crc_bytes) = decoded.split_at(decoded.len() - 4);
                let expected_crc = u32::from_le_bytes(crc_bytes.try_into().unwrap());
                if crc32(payload) != expected_crc {
                    return None;
                }

                Some(payload.to_vec())
            })()
        });
        let Some(payload) = recovered else {
            continue;
        };

        buffer.extend_from_slice(&payload);
    }

    buffer.truncate(header.file_size as usize);
    let digest = Sha256::digest(&buffer);
    if digest[..8] == header.checksum8 {
        (true, buffer)
    } else {
        (false, Vec::new())
    }
}
