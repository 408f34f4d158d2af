// src/noyau/format.rs
//
// Arrondi "calculatrice" + repli exponentiel.
// Le budget de chiffres borne à la fois la saisie (machine) et l'affichage
// du résultat ; ici on ne traite que le côté résultat.

/// Arrondi à `limite_chiffres` chiffres significatifs décimaux :
/// round(v * 10^(limite-1)) / 10^(limite-1).
/// Gomme la poussière binaire des f64 (0.1 + 0.2 -> 0.3).
pub fn arrondi(valeur: f64, limite_chiffres: usize) -> f64 {
    let base = 10f64.powi(limite_chiffres.saturating_sub(1) as i32);
    (valeur * base).round() / base
}

/// Compte les chiffres affichés d'un littéral (signe et point exclus).
pub fn compte_chiffres(texte: &str) -> usize {
    let sans_signe = texte.strip_prefix('-').unwrap_or(texte);
    if sans_signe.contains('.') {
        sans_signe.chars().count() - 1
    } else {
        sans_signe.chars().count()
    }
}

/// Arrondit puis formate : décimal si le budget de chiffres tient,
/// sinon notation exponentielle à 2 décimales.
pub fn formate_resultat(valeur: f64, limite_chiffres: usize) -> String {
    let arrondi_v = arrondi(valeur, limite_chiffres);
    let texte = arrondi_v.to_string();

    if compte_chiffres(&texte) > limite_chiffres {
        format!("{arrondi_v:.2e}")
    } else {
        texte
    }
}
