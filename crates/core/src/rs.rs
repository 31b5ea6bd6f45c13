//! Reed-Solomon systématique sur GF(256), polynôme primitif `0x11D`,
//! générateur `α = 2`. Produit des mots de code `[message ‖ parité]` et
//! corrige jusqu'à `⌊nsym/2⌋` erreurs de symbole à position inconnue via
//! Berlekamp-Massey, la recherche de Chien et l'algorithme de Forney.
//!
//! Fondé sur `spec.md` §4.5. Le `codec/reed_solomon.rs` de référence
//! enveloppait la crate externe `reed-solomon`, qui n'expose ni le nombre
//! d'erreurs corrigées ni l'accès à l'arithmétique de corps sous-jacente;
//! ce module réimplémente l'algorithme directement pour que le codec
//! reste autonome et que `decode` puisse rapporter combien d'erreurs il a
//! corrigées (voir `DESIGN.md`).

use crate::error::{DnaError, Result};

const FIELD_SIZE: usize = 256;
const PRIM_POLY: u16 = 0x11D;

struct Gf {
    exp: [u8; FIELD_SIZE * 2],
    log: [u8; FIELD_SIZE],
}

impl Gf {
    fn new() -> Self {
        let mut exp = [0u8; FIELD_SIZE * 2];
        let mut log = [0u8; FIELD_SIZE];
        let mut x: u16 = 1;
        for i in 0..FIELD_SIZE - 1 {
            exp[i] = x as u8;
            log[x as usize] = i as u8;
            x <<= 1;
            if x & 0x100 != 0 {
                x ^= PRIM_POLY;
            }
        }
        for i in (FIELD_SIZE - 1)..(FIELD_SIZE * 2) {
            exp[i] = exp[i - (FIELD_SIZE - 1)];
        }
        Gf { exp, log }
    }

    fn mul(&self, a: u8, b: u8) -> u8 {
        if a == 0 || b == 0 {
            return 0;
        }
        self.exp[self.log[a as usize] as usize + self.log[b as usize] as usize]
    }

    fn div(&self, a: u8, b: u8) -> u8 {
        assert!(b != 0, "division par zéro dans GF(256)");
        if a == 0 {
            return 0;
        }
        let idx = self.log[a as usize] as isize - self.log[b as usize] as isize + 255;
        self.exp[idx as usize]
    }

    fn pow(&self, a: u8, power: i32) -> u8 {
        if a == 0 {
            return 0;
        }
        let l = self.log[a as usize] as i32;
        let idx = (l * power).rem_euclid(255);
        self.exp[idx as usize]
    }

    fn inverse(&self, a: u8) -> u8 {
        self.exp[(255 - self.log[a as usize] as i32) as usize]
    }

    /// Multiplie deux polynômes (coefficients du plus haut degré en premier).
    fn poly_mul(&self, p: &[u8], q: &[u8]) -> Vec<u8> {
        let mut out = vec![0u8; p.len() + q.len() - 1];
        for (i, &pc) in p.iter().enumerate() {
            if pc == 0 {
                continue;
            }
            for (j, &qc) in q.iter().enumerate() {
                out[i + j] ^= self.mul(pc, qc);
            }
        }
        out
    }

    /// Évalue le polynôme `p` (plus haut degré en premier) en `x` via la
    /// méthode de Horner.
    fn poly_eval(&self, p: &[u8], x: u8) -> u8 {
        let mut y = p[0];
        for &c in &p[1..] {
            y = self.mul(y, x) ^ c;
        }
        y
    }

    fn generator_poly(&self, nsym: usize) -> Vec<u8> {
        let mut g = vec![1u8];
        for i in 0..nsym {
            g = self.poly_mul(&g, &[1, self.pow(2, i as i32)]);
        }
        g
    }
}

/// Encode `message` en un mot de code systématique de longueur
/// `message.len() + nsym`.
pub fn encode(message: &[u8], nsym: usize) -> Result<Vec<u8>> {
    if message.len() + nsym > 255 {
        return Err(DnaError::Encoding(format!(
            "la longueur du mot de code RS {} dépasse la limite de 255 de GF(256)",
            message.len() + nsym
        )));
    }
    let gf = Gf::new();
    let generator = gf.generator_poly(nsym);

    // Division polynomiale longue: reste de message * x^nsym divisé par
    // le polynôme générateur.
    let mut remainder = message.to_vec();
    remainder.resize(message.len() + nsym, 0);
    for i in 0..message.len() {
        let coef = remainder[i];
        if coef == 0 {
            continue;
        }
        for (j, &g) in generator.iter().enumerate() {
            remainder[i + j] ^= gf.mul(g, coef);
        }
    }

    let mut codeword = message.to_vec();
    codeword.extend_from_slice(&remainder[message.len()..]);
    Ok(codeword)
}

/// Calcule les `nsym` syndromes de `codeword`. Tous nuls si et seulement
/// si `codeword` n'a aucune erreur.
fn syndromes(gf: &Gf, codeword: &[u8], nsym: usize) -> Vec<u8> {
    (0..nsym)
        .map(|i| gf.poly_eval(codeword, gf.pow(2, i as i32)))
        .collect()
}

/// Berlekamp-Massey: trouve le polynôme localisateur d'erreurs à partir
/// des syndromes.
fn error_locator(gf: &Gf, synd: &[u8]) -> Vec<u8> {
    let mut err_loc = vec![1u8];
    let mut old_loc = vec![1u8];

    for i in 0..synd.len() {
        old_loc.push(0);
        let mut delta = synd[i];
        for j in 1..err_loc.len() {
            delta ^= gf.mul(err_loc[err_loc.len() - 1 - j], synd[i - j]);
        }
        if delta != 0 {
            if old_loc.len() > err_loc.len() {
                let new_loc = gf.poly_scale(&old_loc, delta);
                old_loc = gf.poly_scale(&err_loc, gf.inverse(delta));
                err_loc = new_loc;
            }
            let scaled = gf.poly_scale(&old_loc, delta);
            err_loc = gf.poly_add(&err_loc, &scaled);
        }
    }

    while !err_loc.is_empty() && err_loc[0] == 0 {
        err_loc.remove(0);
    }
    err_loc
}

impl Gf {
    fn poly_scale(&self, p: &[u8], x: u8) -> Vec<u8> {
        p.iter().map(|&c| self.mul(c, x)).collect()
    }

    fn poly_add(&self, p: &[u8], q: &[u8]) -> Vec<u8> {
        let len = p.len().max(q.len());
        let mut out = vec![0u8; len];
        for (i, &c) in p.iter().rev().enumerate() {
            out[len - 1 - i] ^= c;
        }
        for (i, &c) in q.iter().rev().enumerate() {
            out[len - 1 - i] ^= c;
        }
        out
    }
}

/// Recherche de Chien: trouve les racines du polynôme localisateur
/// d'erreurs, retournant les positions d'erreur en indices depuis le
/// début de `codeword`.
fn find_errors(gf: &Gf, err_loc: &[u8], codeword_len: usize) -> Option<Vec<usize>> {
    let errs = err_loc.len() - 1;
    let mut positions = Vec::new();
    for i in 0..codeword_len {
        if gf.poly_eval(err_loc, gf.pow(2, i as i32)) == 0 {
            positions.push(codeword_len - 1 - i);
        }
    }
    if positions.len() != errs {
        return None;
    }
    Some(positions)
}

/// Algorithme de Forney: calcule les magnitudes d'erreur aux `positions`
/// et retourne le mot de code corrigé.
fn correct_errors(
    gf: &Gf,
    codeword: &[u8],
    synd: &[u8],
    err_loc: &[u8],
    positions: &[usize],
) -> Vec<u8> {
    let codeword_len = codeword.len();
    // Polynôme de syndrome, plus haut degré en premier (inverse de `synd`).
    let synd_rev: Vec<u8> = synd.iter().rev().copied().collect();
    let err_eval = {
        let full = gf.poly_mul(&synd_rev, err_loc);
        let nsym = synd.len();
        full[full.len() - nsym..].to_vec()
    };

    let mut result = codeword.to_vec();
    let xs: Vec<u8> = positions
        .iter()
        .map(|&p| gf.pow(2, (codeword_len - 1 - p) as i32))
        .collect();

    for (i, &pos) in positions.iter().enumerate() {
        let xi_inv = gf.inverse(xs[i]);
        let mut err_loc_prime = 1u8;
        for (j, &xj) in xs.iter().enumerate() {
            if j != i {
                err_loc_prime = gf.mul(err_loc_prime, 1 ^ gf.mul(xj, xi_inv));
            }
        }
        if err_loc_prime == 0 {
            continue;
        }
        let y = gf.mul(xs[i], gf.poly_eval(&err_eval, xi_inv));
        let magnitude = gf.div(y, err_loc_prime);
        result[pos] ^= magnitude;
    }
    result
}

/// Tente de décoder et corriger `codeword`, retournant le préfixe de
/// message systématique et le nombre d'erreurs de symbole corrigées.
/// Échoue avec [`DnaError::RSDecodeFailure`] quand le nombre d'erreurs
/// dépasse `⌊nsym/2⌋`.
pub fn decode(codeword: &[u8], nsym: usize) -> Result<(Vec<u8>, usize)> {
    if codeword.len() < nsym {
        return Err(DnaError::RSDecodeFailure(nsym / 2));
    }
    let gf = Gf::new();
    let synd = syndromes(&gf, codeword, nsym);
    if synd.iter().all(|&s| s == 0) {
        return Ok((codeword[..codeword.len() - nsym].to_vec(), 0));
    }

    let err_loc = error_locator(&gf, &synd);
    let num_errors = err_loc.len() - 1;
    if num_errors == 0 || num_errors > nsym / 2 {
        return Err(DnaError::RSDecodeFailure(nsym / 2));
    }

    let positions = match find_errors(&gf, &err_loc, codeword.len()) {
        Some(p) => p,
        None => return Err(DnaError::RSDecodeFailure(nsym / 2)),
    };

    let corrected = correct_errors(&gf, codeword, &synd, &err_loc, &positions);

    // Vérification: les syndromes recalculés du mot de code corrigé doivent s'annuler.
    let check = syndromes(&gf, &corrected, nsym);
    if !check.iter().all(|&s| s == 0) {
        return Err(DnaError::RSDecodeFailure(nsym / 2));
    }

    Ok((
        corrected[..corrected.len() - nsym].to_vec(),
        positions.len(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_produces_expected_length() {
        let msg = b"Hello, Reed-Solomon!";
        let codeword = encode(msg, 10).unwrap();
        assert_eq!(codeword.len(), msg.len() + 10);
        assert_eq!(&codeword[..msg.len()], msg);
    }

    #[test]
    fn clean_codeword_decodes_with_zero_corrections() {
        let msg = b"no errors here".to_vec();
        let codeword = encode(&msg, 10).unwrap();
        let (decoded, corrected) = decode(&codeword, 10).unwrap();
        assert_eq!(decoded, msg);
        assert_eq!(corrected, 0);
    }

    #[test]
    fn corrects_up_to_floor_nsym_over_2_errors() {
        let msg: Vec<u8> = (0..50u8).collect();
        let nsym = 10;
        let mut codeword = encode(&msg, nsym).unwrap();
        let max_errors = nsym / 2;
        for i in 0..max_errors {
            codeword[i * 3] ^= 0xFF;
        }
        let (decoded, corrected) = decode(&codeword, nsym).unwrap();
        assert_eq!(decoded, msg);
        assert_eq!(corrected, max_errors);
    }

    #[test]
    fn fails_past_correction_capacity() {
        let msg: Vec<u8> = (0..50u8).collect();
        let nsym = 10;
        let mut codeword = encode(&msg, nsym).unwrap();
        // nsym/2 + 1 erreurs dépasse la capacité de correction.
        for i in 0..(nsym / 2 + 1) {
            codeword[i * 2] ^= 0xFF;
        }
        assert!(decode(&codeword, nsym).is_err());
    }

    #[test]
    fn rejects_codeword_longer_than_255() {
        let msg = vec![0u8; 250];
        assert!(encode(&msg, 10).is_err());
    }

    #[test]
    fn gf_arithmetic_basic_properties() {
        let gf = Gf::new();
        for a in 1..=255u8 {
            assert_eq!(gf.mul(a, gf.inverse(a)), 1, "a={a}");
        }
        assert_eq!(gf.mul(0, 200), 0);
        assert_eq!(gf.div(0, 200), 0);
    }
}
