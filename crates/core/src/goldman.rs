//! Codec de transition Goldman: un mapping octet<->ADN sans homopolymère
//! par construction, puisque chaque base émise diffère toujours de la
//! précédente.
//!
//! Fondé sur les tables de transition `GOLDMAN_ENCODE`/`GOLDMAN_DECODE` de
//! la source originale (`original_source/utils/functions/converts.py`).

use crate::bits::{byte_to_trits, trits_to_bytes};
use crate::error::{DnaError, Result};

/// Les quatre bases standard, dans l'ordre fixe utilisé dans tout le codec.
pub const BASES: [char; 4] = ['A', 'C', 'G', 'T'];

fn base_index(b: char) -> Option<usize> {
    BASES.iter().position(|&x| x == b)
}

/// Table de transition: `ENCODE[last][trit]` est la base suivante.
const ENCODE: [[char; 3]; 4] = [
    ['C', 'G', 'T'], // last = A
    ['G', 'T', 'A'], // last = C
    ['T', 'A', 'C'], // last = G
    ['A', 'C', 'G'], // last = T
];

fn encode_step(last: char, trit: u8) -> char {
    ENCODE[base_index(last).expect("last is always one of ACGT")][trit as usize]
}

fn decode_step(last: char, next: char) -> Result<u8> {
    let row = ENCODE[base_index(last).expect("last is always one of ACGT")];
    row.iter()
        .position(|&b| b == next)
        .map(|p| p as u8)
        .ok_or(DnaError::TransitionInvalid { last, next })
}

/// Encode un flux d'octets en chaîne ADN. Chaque octet se déplie en six
/// trits (§4.1), chaque trit en une base via la table de transition, à
/// partir de `start`.
pub fn bytes_to_dna(data: &[u8], start: char) -> String {
    let mut last = start;
    let mut dna = String::with_capacity(data.len() * 6);
    for &byte in data {
        for &trit in byte_to_trits(byte).iter() {
            let next = encode_step(last, trit);
            dna.push(next);
            last = next;
        }
    }
    dna
}

/// Décode une chaîne ADN produite par [`bytes_to_dna`] pour retrouver les
/// octets. Échoue avec [`DnaError::TransitionInvalid`] si deux bases
/// consécutives sont identiques (une transition que la table ne produit
/// jamais).
pub fn dna_to_bytes(dna: &str, start: char) -> Result<Vec<u8>> {
    let mut last = start;
    let mut trits = Vec::with_capacity(dna.len());
    for next in dna.chars() {
        trits.push(decode_step(last, next)?);
        last = next;
    }
    trits_to_bytes(&trits, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn no_homopolymers() {
        for start in BASES {
            let data: Vec<u8> = (0..=255).collect();
            let dna = bytes_to_dna(&data, start);
            for w in dna.as_bytes().windows(2) {
                assert_ne!(w[0], w[1], "homopolymer at start={start}");
            }
        }
    }

    #[test]
    fn roundtrip_known_bytes() {
        for start in BASES {
            let data = b"Hello DNA Storage!\nThis is a test file.".to_vec();
            let dna = bytes_to_dna(&data, start);
            let back = dna_to_bytes(&dna, start).unwrap();
            assert_eq!(back, data);
        }
    }

    #[test]
    fn decode_rejects_same_base_repeat() {
        // "AA" n'est jamais émis par l'encodeur, donc doit être rejeté.
        assert!(dna_to_bytes("AA", 'A').is_err());
    }

    proptest! {
        #[test]
        fn bijection_for_any_bytes(data in proptest::collection::vec(any::<u8>(), 0..256), start_idx in 0..4usize) {
            let start = BASES[start_idx];
            let dna = bytes_to_dna(&data, start);
            let back = dna_to_bytes(&dna, start).unwrap();
            prop_assert_eq!(back, data);
        }

        #[test]
        fn encoded_dna_never_repeats_a_base(data in proptest::collection::vec(any::<u8>(), 0..256), start_idx in 0..4usize) {
            let start = BASES[start_idx];
            let dna = bytes_to_dna(&data, start);
            for w in dna.as_bytes().windows(2) {
                prop_assert_ne!(w[0], w[1]);
            }
        }
    }
}
