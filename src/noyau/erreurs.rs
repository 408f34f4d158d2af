// src/noyau/erreurs.rs
//
// Taxonomie d'erreurs du pipeline (jetons -> RPN -> évaluation).
// Le noyau retourne l'erreur comme valeur ; la machine de saisie la projette
// en "ERROR" côté affichage au moment du résultat.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurNoyau {
    /// Entrée illisible : caractère interdit, nombre mal formé,
    /// opérateurs mal placés.
    #[error("jetons invalides: {0}")]
    Jetons(String),

    /// Parenthèses non appariées ou jeton impossible à placer.
    #[error("syntaxe invalide: {0}")]
    Syntaxe(String),

    #[error("division par zéro")]
    DivisionParZero,

    /// RPN incohérente (mauvais compte d'opérandes sur la pile).
    #[error("RPN mal formée: {0}")]
    RpnMalFormee(String),
}
