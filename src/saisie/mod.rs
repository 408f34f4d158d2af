//! Machine de saisie (état de session + une opération par action)
//!
//! Organisation interne :
//! - etat.rs    : valeur d'état de session (expression, notation,
//!   historique, drapeau résultat)
//! - machine.rs : opérations totales touche par touche ; seul
//!   calcule_resultat appelle le noyau

pub mod etat;
pub mod machine;

#[cfg(test)]
mod tests_scenarios;

// API publique minimale
pub use etat::EtatSaisie;
pub use machine::{MachineSaisie, Modificateur, LIMITE_CHIFFRES_DEFAUT};
