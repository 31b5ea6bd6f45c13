//! Vote majoritaire colonne par colonne sur des lectures répliquées de
//! longueur variable.
//!
//! Fondé sur `original_source/utils/functions/consensus.py`: pas de score
//! de qualité, les lectures de longueur inégale contribuent simplement à
//! moins de colonnes, et les égalités se résolvent en faveur de la base vue
//! en premier à cette colonne (reproduisant le départage par ordre
//! d'insertion de `Counter.most_common` en Python).

/// Construit une séquence consensus à partir de `reads` par vote
/// majoritaire colonne par colonne. Retourne la chaîne vide s'il n'y a
/// aucune lecture, et la lecture unique telle quelle s'il n'y en a qu'une.
pub fn consensus(reads: &[String]) -> String {
    match reads.len() {
        0 => return String::new(),
        1 => return reads[0].clone(),
        _ => {}
    }

    let columns: Vec<Vec<char>> = reads.iter().map(|s| s.chars().collect()).collect();
    let max_len = columns.iter().map(|c| c.len()).max().unwrap_or(0);

    let mut out = String::with_capacity(max_len);
    for i in 0..max_len {
        let mut order: Vec<char> = Vec::new();
        let mut counts: Vec<usize> = Vec::new();
        for col in &columns {
            if i >= col.len() {
                continue;
            }
            let c = col[i];
            match order.iter().position(|&x| x == c) {
                Some(idx) => counts[idx] += 1,
                None => {
                    order.push(c);
                    counts.push(1);
                }
            }
        }
        if order.is_empty() {
            continue;
        }
        let best = counts
            .iter()
            .enumerate()
            .max_by_key(|&(idx, &count)| (count, std::cmp::Reverse(idx)))
            .map(|(idx, _)| idx)
            .unwrap();
        out.push(order[best]);
    }
    out
}
