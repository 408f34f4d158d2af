// src/saisie/machine.rs
//
// Machine de saisie : une opération totale par type d'action utilisateur
// (chiffre, opérateur, modificateur, résultat) + remise à zéro.
//
// Règles:
// - Opérations pures : ancien état (+ touche) -> nouvel état, sans I/O.
// - Jamais d'échec : une saisie impossible (limite de chiffres atteinte,
//   second point décimal...) est un no-op silencieux sur le champ visé.
// - Seul calcule_resultat touche au noyau ; toute erreur du pipeline
//   s'affaisse en notation "ERROR", l'expression restant corrigeable.

use crate::noyau::eval_expression;
use crate::noyau::format::{compte_chiffres, formate_resultat};

use super::etat::EtatSaisie;

/// Budget de chiffres par défaut (borne la saisie ET l'arrondi du résultat).
pub const LIMITE_CHIFFRES_DEFAUT: usize = 12;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Modificateur {
    Decimal,
    Negatif,
}

#[derive(Clone, Debug)]
pub struct MachineSaisie {
    limite_chiffres: usize,
}

impl Default for MachineSaisie {
    fn default() -> Self {
        Self::new(LIMITE_CHIFFRES_DEFAUT)
    }
}

impl MachineSaisie {
    /// La limite est figée à la construction.
    pub fn new(limite_chiffres: usize) -> Self {
        Self { limite_chiffres }
    }

    pub fn limite_chiffres(&self) -> usize {
        self.limite_chiffres
    }

    /// État initial, identique quel que soit l'état antérieur.
    pub fn reinitialise(&self) -> EtatSaisie {
        EtatSaisie::default()
    }

    /// Insère un chiffre dans l'expression et la notation courantes.
    ///
    /// Cas traités, dans l'ordre :
    /// - après un résultat : on repart d'une session vierge
    /// - limite de chiffres atteinte : état inchangé (hors drapeau résultat)
    /// - notation sentinelle "0" : le chiffre remplace le '0' final
    /// - flottant négatif incomplet, ex "(-4.)" : insertion avant la ')'
    /// - sinon : ajout en queue des deux champs
    pub fn insere_chiffre(&self, etat: &EtatSaisie, touche: char) -> EtatSaisie {
        let (mut expression, mut notation) = depart(etat);

        let est_zero = notation == "0";
        let est_nb = est_nombre(&notation);
        let negatif_incomplet = flottant_incomplet_avant_parenthese(&expression);
        let nb_chiffres = if est_nb { compte_chiffres(&notation) } else { 0 };

        if nb_chiffres < self.limite_chiffres {
            expression = if !expression.is_empty() && est_zero {
                remplace_dernier_char(&expression, touche)
            } else if negatif_incomplet {
                insere_avant_parenthese(&expression, touche)
            } else {
                format!("{expression}{touche}")
            };

            notation = if !est_nb || est_zero {
                touche.to_string()
            } else {
                format!("{notation}{touche}")
            };
        }

        EtatSaisie {
            expression,
            notation,
            historique: etat.historique.clone(),
            resultat_affiche: false,
        }
    }

    /// Insère un opérateur binaire.
    ///
    /// - après un résultat : on repart de la dernière entrée d'historique
    ///   (le résultat), ce qui enchaîne les calculs
    /// - notation flottante incomplète ("5.") : l'opérateur remplace le point
    /// - notation déjà opérateur : remplacement sur place, sans consommer
    ///   d'opérande ni pousser d'historique
    pub fn insere_operateur(&self, etat: &EtatSaisie, touche: char) -> EtatSaisie {
        let expression = if etat.resultat_affiche {
            derniere_entree(&etat.historique)
        } else {
            etat.expression.clone()
        };

        let est_nb = est_nombre(&etat.notation);
        let flottant_incomplet = etat.notation.ends_with('.');

        if est_nb {
            let expression = if flottant_incomplet {
                remplace_dernier_char(&expression, touche)
            } else if expression.is_empty() {
                format!("0{touche}")
            } else {
                format!("{expression}{touche}")
            };

            let mut historique = etat.historique.clone();
            historique.push(etat.notation.clone());

            EtatSaisie {
                expression,
                notation: touche.to_string(),
                historique,
                resultat_affiche: false,
            }
        } else {
            EtatSaisie {
                expression: remplace_operateur_final(&expression, touche),
                notation: touche.to_string(),
                historique: etat.historique.clone(),
                resultat_affiche: false,
            }
        }
    }

    /// Applique un modificateur (point décimal ou bascule de signe).
    ///
    /// Juste après un résultat, tous les prédicats sont forcés à vrai :
    /// les deux modificateurs se réduisent alors à un départ à neuf.
    pub fn insere_modificateur(
        &self,
        etat: &EtatSaisie,
        modif: Modificateur,
        symbole: &str,
    ) -> EtatSaisie {
        let apres_resultat = etat.resultat_affiche;
        let (mut expression, mut notation) = depart(etat);

        let est_zero = apres_resultat || notation == "0";
        let est_nb = apres_resultat || est_nombre(&notation);
        let a_decimal = apres_resultat || notation.contains('.');
        let a_negatif = apres_resultat || notation.starts_with('-');

        match modif {
            // Un seul point par notation ; "0" préfixé quand on ouvre
            // une nouvelle opérande (après un opérateur, par exemple).
            Modificateur::Decimal if !a_decimal => {
                expression = if est_nb && !expression.is_empty() {
                    format!("{expression}{symbole}")
                } else {
                    format!("{expression}0{symbole}")
                };
                notation = if est_nb {
                    format!("{notation}{symbole}")
                } else {
                    format!("0{symbole}")
                };
            }

            // Bascule de signe sur la dernière occurrence de la notation
            // en queue d'expression : enveloppe "(-n)" ou déballe ; zéro
            // reste zéro.
            Modificateur::Negatif if est_nb => {
                let motif = if a_negatif {
                    format!("({notation})")
                } else {
                    notation.clone()
                };
                let inverse = if a_negatif {
                    notation.replacen('-', "", 1)
                } else if est_zero {
                    notation.clone()
                } else {
                    format!("-{notation}")
                };
                let expression_inversee = if a_negatif {
                    remplace_suffixe(&expression, &motif, &inverse)
                } else if est_zero {
                    expression.clone()
                } else {
                    remplace_suffixe(&expression, &motif, &format!("({inverse})"))
                };

                if !expression.is_empty() {
                    expression = expression_inversee;
                }
                if !expression.is_empty() && !est_zero {
                    notation = inverse;
                }
            }

            _ => {}
        }

        EtatSaisie {
            expression,
            notation,
            historique: etat.historique.clone(),
            resultat_affiche: false,
        }
    }

    /// Soumet l'expression au noyau et enchaîne le résultat dans la session.
    ///
    /// - après un résultat : on repart de la dernière entrée d'historique
    /// - une expression finissant en plein opérateur (ou point) est tronquée
    ///   d'un caractère avant soumission ; vide, elle devient "0"
    /// - toute erreur du noyau s'affaisse en notation "ERROR", l'expression
    ///   restant celle soumise, corrigeable
    /// - succès : "...=resultat" si un opérateur était présent, la notation
    ///   précédente et le résultat rejoignent l'historique
    pub fn calcule_resultat(&self, etat: &EtatSaisie, symbole_egal: &str) -> EtatSaisie {
        let expression = if etat.resultat_affiche {
            derniere_entree(&etat.historique)
        } else {
            etat.expression.clone()
        };
        let notation = etat.notation.clone();

        let expression_valide = if expression.is_empty() {
            "0".to_string()
        } else if notation
            .chars()
            .last()
            .is_some_and(|c| est_char_operateur(c) || c == '.')
        {
            tronque_operateur_final(&expression)
        } else {
            expression.clone()
        };

        let (resultat_final, en_erreur) = match eval_expression(&expression_valide) {
            Ok(valeur) => (formate_resultat(valeur, self.limite_chiffres), false),
            Err(_) => ("ERROR".to_string(), true),
        };

        // '=' + résultat seulement sur une expression complète (avec
        // opérateur) et réussie ; un littéral seul est réaffiché tel quel.
        let contient_operateur = expression.chars().any(est_char_operateur);
        let expression = if contient_operateur && !en_erreur {
            format!("{expression_valide}{symbole_egal}{resultat_final}")
        } else {
            expression_valide
        };

        let mut historique = etat.historique.clone();
        historique.push(notation);
        historique.push(resultat_final.clone());

        EtatSaisie {
            expression,
            notation: resultat_final,
            historique,
            resultat_affiche: true,
        }
    }
}

/* ------------------------ Prédicats et rouages texte ------------------------ */

fn est_char_operateur(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/')
}

/// Un littéral numérique fini ("5", "-4.", ".5"), ni opérateur ni "ERROR".
fn est_nombre(texte: &str) -> bool {
    texte.parse::<f64>().map(|v| v.is_finite()).unwrap_or(false)
}

/// Point de départ d'une édition : session vierge si un résultat est affiché.
fn depart(etat: &EtatSaisie) -> (String, String) {
    if etat.resultat_affiche {
        (String::new(), "0".to_string())
    } else {
        (etat.expression.clone(), etat.notation.clone())
    }
}

fn derniere_entree(historique: &[String]) -> String {
    historique.last().cloned().unwrap_or_default()
}

/// Queue d'expression en "littéral négatif flottant incomplet" :
/// un '.' puis d'éventuels chiffres juste avant une ')', ex "(-4.)".
fn flottant_incomplet_avant_parenthese(expression: &str) -> bool {
    let Some(avant) = expression.strip_suffix(')') else {
        return false;
    };
    avant
        .trim_end_matches(|c: char| c.is_ascii_digit())
        .ends_with('.')
}

fn insere_avant_parenthese(expression: &str, touche: char) -> String {
    match expression.strip_suffix(')') {
        Some(avant) => format!("{avant}{touche})"),
        None => expression.to_string(),
    }
}

// Toutes les queues manipulées ici sont ASCII (chiffres, opérateurs, point).
fn remplace_dernier_char(texte: &str, remplacement: char) -> String {
    if texte.is_empty() {
        return String::new();
    }
    format!("{}{remplacement}", &texte[..texte.len() - 1])
}

fn remplace_operateur_final(expression: &str, touche: char) -> String {
    match expression.chars().last() {
        Some(c) if est_char_operateur(c) => remplace_dernier_char(expression, touche),
        _ => expression.to_string(),
    }
}

fn tronque_operateur_final(expression: &str) -> String {
    match expression.chars().last() {
        Some(c) if est_char_operateur(c) || c == '.' => {
            expression[..expression.len() - 1].to_string()
        }
        _ => expression.to_string(),
    }
}

/// Remplace `motif` ancré en fin de chaîne ; sans ancrage, texte inchangé.
fn remplace_suffixe(texte: &str, motif: &str, remplacement: &str) -> String {
    match texte.strip_suffix(motif) {
        Some(avant) => format!("{avant}{remplacement}"),
        None => texte.to_string(),
    }
}
