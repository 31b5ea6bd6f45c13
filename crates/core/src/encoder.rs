//! Le pipeline d'encodage: octets de fichier -> liste d'oligos cadrés et
//! répliqués.
//!
//! Fondé sur `spec.md` §4.7; la forme structurelle (une petite struct de
//! paramètres pilotant une fonction de pipeline linéaire) suit le
//! `codec/encoder.rs` de référence, même si la logique fountain-code/degré
//! LT qui s'y trouve n'a aucun équivalent ici: ce pipeline est du RS à
//! débit fixe plus réplication.

use crate::constraints::{self, DEFAULT_GC_MAX, DEFAULT_GC_MIN, DEFAULT_MAX_RUN};
use crate::crc::crc32;
use crate::goldman::bytes_to_dna;
use crate::header::{file_checksum, validate_params, FileHeader};
use crate::prefix::{create_prefix, SeqType};
use crate::rs;
use crate::CodecParams;
use crate::error::{DnaError, Result};

const GOLDMAN_START: char = 'A';

/// Encode `data` avec le codec de transition Goldman, `start` fixé à
/// `'A'` selon la résolution de l'ouverture sur l'ambiguïté du départ
/// (le décodeur n'apprend jamais quel `start` a été choisi, donc il doit
/// toujours supposer `'A'`; voir `DESIGN.md`). Ceci écarte
/// `constraints::reseed_search`, qui essaierait sinon les quatre départs.
/// Le prédicat de contrainte participe tout de même ici en tant que
/// vérification best-effort: un écart hors bande GC est journalisé, pas
/// retenté ni traité comme un échec d'encodage.
fn encode_with_constraints(data: &[u8]) -> String {
    let dna = bytes_to_dna(data, GOLDMAN_START);
    if !constraints::passes(&dna, DEFAULT_MAX_RUN, DEFAULT_GC_MIN, DEFAULT_GC_MAX) {
        ::tracing::warn!(
            gc_content = constraints::gc_content(&dna),
            "segment encodé hors de la bande GC; le départ est fixe, donc pas de nouvelle tentative"
        );
    }
    dna
}

fn segment(dna: &str, segment_nt: usize) -> Vec<&str> {
    if dna.is_empty() {
        return Vec::new();
    }
    let bytes = dna.as_bytes();
    bytes
        .chunks(segment_nt)
        .map(|c| std::str::from_utf8(c).expect("DNA strings are ASCII"))
        .collect()
}

/// Encode `data` dans la liste ordonnée d'oligos décrite dans
/// `spec.md` §4.7: un oligo d'en-tête répliqué suivi, pour chaque
/// chunk, de ses segments de données et de parité répliqués.
pub fn encode(data: &[u8], params: &CodecParams) -> Result<Vec<String>> {
    validate_params(params.chunk_size, params.nsym)?;

    let file_size = data.len() as u64;
    let checksum8 = file_checksum(data);
    let num_chunks = if data.is_empty() {
        0
    } else {
        (data.len() + params.chunk_size - 1) / params.chunk_size
    };

    let mut oligos = Vec::new();

    let header_oligo = crate::trace_stage!("encode_header", {
        let header =
            FileHeader::new(file_size, params.chunk_size as u16, params.nsym as u8, checksum8)?;
        let header_dna = bytes_to_dna(&header.encode(), GOLDMAN_START);
        let header_prefix = create_prefix(0, num_chunks as u32, SeqType::Header, 0, 1)?;
        Ok::<_, DnaError>(format!("{header_prefix}{header_dna}"))
    })?;
    for _ in 0..(2 * params.redundancy) {
        oligos.push(header_oligo.clone());
    }

    for chunk_idx in 1..=num_chunks {
        crate::trace_stage!("encode_chunk", {
            let start = (chunk_idx - 1) * params.chunk_size;
            let end = (start + params.chunk_size).min(data.len());
            let chunk = &data[start..end];

            let mut payload = chunk.to_vec();
            payload.extend_from_slice(&crc32(chunk).to_le_bytes());

            let codeword = rs::encode(&payload, params.nsym)?;
            let (data_rs, parity_rs) = codeword.split_at(payload.len());

            let data_dna = encode_with_constraints(data_rs);
            let parity_dna = encode_with_constraints(parity_rs);

            let data_segments = segment(&data_dna, params.segment_nt);
            let parity_segments = segment(&parity_dna, params.segment_nt);

            let total_seqs = data_segments.len() + parity_segments.len();
            if total_seqs >= 256 {
                return Err(DnaError::TooManySegments {
                    chunk_idx: chunk_idx as u32,
                    count: total_seqs,
                });
            }

            for (i, seg) in data_segments.iter().enumerate() {
                let prefix = create_prefix(
                    chunk_idx as u32,
                    num_chunks as u32,
                    SeqType::Data,
                    i as u16,
                    total_seqs as u16,
                )?;
                let oligo = format!("{prefix}{seg}");
                for _ in 0..params.redundancy {
                    oligos.push(oligo.clone());
                }
            }

            for (j, seg) in parity_segments.iter().enumerate() {
                let seq_idx = data_segments.len() + j;
                let prefix = create_prefix(
                    chunk_idx as u32,
                    num_chunks as u32,
                    SeqType::Parity,
                    seq_idx as u16,
                    total_seqs as u16,
                )?;
                let oligo = format!("{prefix}{seg}");
                for _ in 0..params.redundancy {
                    oligos.push(oligo.clone());
                }
            }
            Ok::<_, DnaError>(())
        })?;
    }

    Ok(oligos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::decode;

    #[test]
    fn every_oligo_starts_with_sync_and_is_bounded() {
        let params = CodecParams::default();
        let oligos = encode(b"Hello DNA Storage!\nThis is a test file.", &params).unwrap();
        assert!(!oligos.is_empty());
        for o in &oligos {
            assert!(o.starts_with("AG"));
            assert!(o.len() <= 80 + params.segment_nt);
        }
    }

    #[test]
    fn header_oligo_replicated_twice_redundancy() {
        let params = CodecParams::default();
        let oligos = encode(b"x", &params).unwrap();
        let header_count = oligos.iter().filter(|o| &o[2..4] == "AA").count();
        assert_eq!(header_count, 2 * params.redundancy);
    }

    #[test]
    fn roundtrips_through_decode() {
        let params = CodecParams::default();
        let data = b"Hello DNA Storage!\nThis is a test file.".to_vec();
        let oligos = encode(&data, &params).unwrap();
        let (ok, decoded) = decode(&oligos);
        assert!(ok);
        assert_eq!(decoded, data);
    }

    #[test]
    fn rejects_invalid_parameters() {
        let mut params = CodecParams::default();
        params.chunk_size = 250;
        params.nsym = 10;
        assert!(encode(b"data", &params).is_err());
    }

    #[test]
    fn empty_input_encodes_header_only() {
        let params = CodecParams::default();
        let oligos = encode(b"", &params).unwrap();
        assert_eq!(oligos.len(), 2 * params.redundancy);
    }
}
