//! Primitives de packing de chaînes de bits et de trits.
//!
//! Le framer de préfixe travaille en chaînes de bits `'0'`/`'1'` (pour que
//! les champs à largeur fixe puissent être concaténés sans trou avant le
//! CT-coding), tandis que le codec Goldman travaille en chiffres base-3
//! ("trits") par octet.

use crate::error::{DnaError, Result};

/// Compacte une chaîne de bits (caractères `'0'`/`'1'`, MSB en premier dans
/// chaque octet de sortie) en octets, alignée à gauche avec bourrage de
/// zéros en fin.
pub fn pack_bits(bits: &str) -> Vec<u8> {
    if bits.is_empty() {
        return Vec::new();
    }
    let pad = (8 - bits.len() % 8) % 8;
    let padded: String = bits.chars().chain(std::iter::repeat('0').take(pad)).collect();
    padded
        .as_bytes()
        .chunks(8)
        .map(|chunk| {
            chunk.iter().fold(0u8, |acc, &c| (acc << 1) | (c - b'0'))
        })
        .collect()
}

/// Restitue `x` sur exactement `n` bits, MSB en premier. Échoue si `x` ne
/// tient pas dans `n` bits.
pub fn int_to_bits(x: u64, n: u32) -> Result<String> {
    if n < 64 && x >= (1u64 << n) {
        return Err(DnaError::Encoding(format!(
            "la valeur {x} ne tient pas sur {n} bits"
        )));
    }
    Ok(format!("{:0width$b}", x, width = n as usize))
}

/// Émet les six chiffres base-3 d'un octet, trit le moins significatif en
/// premier: `v, r = divmod(v, 3)` appliqué six fois.
pub fn byte_to_trits(b: u8) -> [u8; 6] {
    let mut v = b as u32;
    let mut trits = [0u8; 6];
    for t in trits.iter_mut() {
        *t = (v % 3) as u8;
        v /= 3;
    }
    trits
}

/// Inverse [`byte_to_trits`] sur un flux aplati: regroupe les trits par 6,
/// pondère par `3^0..3^5`, chaque valeur d'octet doit tomber dans
/// `0..=255`. Les trits de fin qui ne complètent pas un groupe de 6 sont
/// ignorés. `len` tronque optionnellement le résultat.
pub fn trits_to_bytes(trits: &[u8], len: Option<usize>) -> Result<Vec<u8>> {
    let n = (trits.len() / 6) * 6;
    let mut out = Vec::with_capacity(n / 6);
    for group in trits[..n].chunks(6) {
        let mut val: u32 = 0;
        for (j, &t) in group.iter().enumerate() {
            if t > 2 {
                return Err(DnaError::Decoding(format!("valeur de trit invalide {t}")));
            }
            val += (t as u32) * 3u32.pow(j as u32);
        }
        if val > 255 {
            return Err(DnaError::Decoding(format!(
                "le groupe de trits corrompu vaut {val}, ce qui dépasse un octet"
            )));
        }
        out.push(val as u8);
    }
    if let Some(len) = len {
        out.truncate(len);
    }
    Ok(out)
}
