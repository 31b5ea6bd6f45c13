//! Tests d'aller-retour sur un éventail de formes de fichiers.
//!
//! Ceux-ci exercent `encode_file`/`decode_sequences` de bout en bout
//! plutôt qu'un composant individuel.

use adn_core::{decode_sequences, encoder::encode, CodecParams};

fn roundtrip(data: &[u8]) {
    let params = CodecParams::default();
    let oligos = encode(data, &params).unwrap();
    let (ok, recovered) = decode_sequences(&oligos);
    assert!(ok, "échec de décodage rapporté pour une entrée de {} octets", data.len());
    assert_eq!(recovered, data);
}

#[test]
fn roundtrip_text_file() {
    roundtrip(b"Hello DNA Storage!\nThis is a test file.");
}

#[test]
fn roundtrip_json_file() {
    roundtrip(br#"{"key": "value", "number": 42}"#);
}

#[test]
fn roundtrip_binary_file() {
    let data: Vec<u8> = (0..100).map(|i| ((i * 7) % 256) as u8).collect();
    roundtrip(&data);
}

#[test]
fn roundtrip_large_file() {
    let data: Vec<u8> = (0..5000).map(|i| (i * 17 % 256) as u8).collect();
    roundtrip(&data);
}

#[test]
fn roundtrip_repetitive_data() {
    roundtrip(b"ABCABCABCABCABC");
}

#[test]
fn roundtrip_random_data() {
    let data: Vec<u8> = (0..500).map(|i| ((i * 17 + 42) % 256) as u8).collect();
    roundtrip(&data);
}

#[test]
fn roundtrip_empty_file() {
    roundtrip(b"");
}

#[test]
fn roundtrip_multichunk_file() {
    // 250 octets avec le chunk_size=100 par défaut s'étendent sur trois chunks.
    let data: Vec<u8> = (0..250u32).map(|i| (i % 256) as u8).collect();
    roundtrip(&data);
}

#[test]
fn roundtrip_exact_chunk_boundary() {
    // Exactement deux chunks, pas de chunk final court.
    let data: Vec<u8> = (0..200u32).map(|i| (i % 256) as u8).collect();
    roundtrip(&data);
}
