//! src/saisie/etat.rs
//!
//! État de session de la machine de saisie (aucune évaluation ici).
//!
//! Contrats :
//! - Valeur pure : chaque opération de machine.rs produit un nouvel état,
//!   l'hôte peut donc rejouer ou cloner la session sans précaution.
//! - `notation` porte la dernière valeur atomique saisie ou calculée.
//! - `expression` se termine textuellement par `notation`, éventuellement
//!   sous forme négative parenthésée, ex: "(-4.5)".
//! - le compte de chiffres de `notation` (signe et point exclus) ne dépasse
//!   jamais la limite de la machine.

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EtatSaisie {
    /// Formule complète, éventuellement incomplète (peut finir sur un opérateur).
    pub expression: String,

    /// Valeur en cours d'édition, ou la sentinelle "0", ou "ERROR".
    pub notation: String,

    /// Notations engagées + résultats calculés, dans l'ordre, jamais retirés.
    /// Sert à reprendre l'édition après un résultat.
    pub historique: Vec<String>,

    /// Vrai juste après un résultat : la prochaine édition repart à neuf,
    /// le résultat restant visible jusqu'à être recouvert.
    pub resultat_affiche: bool,
}

impl Default for EtatSaisie {
    fn default() -> Self {
        Self {
            expression: String::new(),
            notation: "0".to_string(),
            historique: Vec::new(),
            resultat_affiche: false,
        }
    }
}
