//! Noyau — évaluation (pipeline réel)
//!
//! tokenise -> RPN -> évaluation par pile -> f64
//!
//! Remarque : l'arrondi d'affichage (format.rs) reste à la charge de
//! l'appelant, c'est la machine de saisie qui porte le budget de chiffres.

use super::erreurs::ErreurNoyau;
use super::jetons::{tokenise, Jeton};
use super::rpn::en_rpn;

/// Évalue une RPN avec une pile de valeurs.
///
/// Un opérateur dépile deux opérandes (la première dépilée est l'opérande
/// droite), applique l'opération et rempile le résultat. À la fin, la pile
/// doit contenir exactement une valeur.
pub fn eval_rpn(rpn: &[Jeton]) -> Result<f64, ErreurNoyau> {
    let mut pile: Vec<f64> = Vec::new();

    for jeton in rpn {
        match jeton {
            Jeton::Nombre(v, _) => pile.push(*v),

            Jeton::Plus | Jeton::Moins | Jeton::Etoile | Jeton::Barre => {
                let b = pile
                    .pop()
                    .ok_or_else(|| ErreurNoyau::RpnMalFormee("opérande manquante".to_string()))?;
                let a = pile
                    .pop()
                    .ok_or_else(|| ErreurNoyau::RpnMalFormee("opérande manquante".to_string()))?;

                let r = match jeton {
                    Jeton::Plus => a + b,
                    Jeton::Moins => a - b,
                    Jeton::Etoile => a * b,
                    Jeton::Barre => {
                        if b == 0.0 {
                            return Err(ErreurNoyau::DivisionParZero);
                        }
                        a / b
                    }
                    _ => unreachable!(),
                };

                pile.push(r);
            }

            Jeton::ParG | Jeton::ParD => {
                return Err(ErreurNoyau::RpnMalFormee(
                    "parenthèse inattendue en RPN".to_string(),
                ))
            }
        }
    }

    if pile.len() != 1 {
        return Err(ErreurNoyau::RpnMalFormee(
            "opérandes restantes sur la pile".to_string(),
        ));
    }
    Ok(pile[0])
}

/// API publique : texte brut -> résultat numérique ou erreur typée.
pub fn eval_expression(expr: &str) -> Result<f64, ErreurNoyau> {
    let s = expr.trim();
    if s.is_empty() {
        return Err(ErreurNoyau::Jetons("entrée vide".to_string()));
    }

    let jetons = tokenise(s)?;
    if jetons.is_empty() {
        return Err(ErreurNoyau::Jetons("entrée vide".to_string()));
    }

    let rpn = en_rpn(&jetons)?;
    eval_rpn(&rpn)
}
