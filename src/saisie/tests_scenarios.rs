//! Tests scénarios : la machine de saisie touche par touche.
//!
//! But : dérouler des sessions réalistes (saisie, bascule de signe,
//! enchaînements, erreurs) et vérifier les invariants d'état.
//! - chaque scénario part de l'état initial et rejoue une séquence
//! - l'alphabet du rejoueur : chiffres, + - * /, '.' (point décimal),
//!   '~' (bascule de signe), '=' (résultat)
//! - invariant clé : l'expression se termine toujours par la notation
//!   (éventuellement sous forme négative parenthésée)

use super::etat::EtatSaisie;
use super::machine::{MachineSaisie, Modificateur};

fn rejoue(machine: &MachineSaisie, sequence: &str) -> EtatSaisie {
    let mut etat = machine.reinitialise();
    for touche in sequence.chars() {
        etat = match touche {
            '0'..='9' => machine.insere_chiffre(&etat, touche),
            '+' | '-' | '*' | '/' => machine.insere_operateur(&etat, touche),
            '.' => machine.insere_modificateur(&etat, Modificateur::Decimal, "."),
            '~' => machine.insere_modificateur(&etat, Modificateur::Negatif, "±"),
            '=' => machine.calcule_resultat(&etat, "="),
            autre => panic!("touche inconnue dans le scénario: {autre:?}"),
        };
    }
    etat
}

fn machine() -> MachineSaisie {
    MachineSaisie::default()
}

/* ------------------------ Remise à zéro ------------------------ */

#[test]
fn reinitialise_idempotente() {
    let m = machine();
    let initial = m.reinitialise();

    assert_eq!(initial.expression, "");
    assert_eq!(initial.notation, "0");
    assert!(initial.historique.is_empty());
    assert!(!initial.resultat_affiche);

    // quel que soit l'état antérieur, la remise à zéro rend le même état
    let _pollue = rejoue(&m, "5+3=7*2");
    assert_eq!(m.reinitialise(), initial);
}

/* ------------------------ Saisie de chiffres ------------------------ */

#[test]
fn premier_chiffre_remplace_la_sentinelle() {
    let etat = rejoue(&machine(), "5");
    assert_eq!(etat.expression, "5");
    assert_eq!(etat.notation, "5");
}

#[test]
fn chiffres_successifs_s_ajoutent() {
    let etat = rejoue(&machine(), "507");
    assert_eq!(etat.expression, "507");
    assert_eq!(etat.notation, "507");
}

#[test]
fn limite_de_chiffres_refuse_le_surplus() {
    let m = MachineSaisie::new(3);
    let etat = rejoue(&m, "1234");
    assert_eq!(etat.notation, "123");
    assert_eq!(etat.expression, "123");
}

#[test]
fn la_limite_ne_bloque_pas_l_operande_suivante() {
    let m = MachineSaisie::new(3);
    let etat = rejoue(&m, "123+456");
    assert_eq!(etat.expression, "123+456");
    assert_eq!(etat.notation, "456");
}

/* ------------------------ Opérateurs ------------------------ */

#[test]
fn operateur_engage_la_notation_dans_l_historique() {
    let etat = rejoue(&machine(), "5+");
    assert_eq!(etat.expression, "5+");
    assert_eq!(etat.notation, "+");
    assert_eq!(etat.historique, vec!["5".to_string()]);
}

#[test]
fn operateur_sur_expression_vide_part_de_zero() {
    let etat = rejoue(&machine(), "+5");
    assert_eq!(etat.expression, "0+5");
    assert_eq!(etat.notation, "5");
}

#[test]
fn deux_operateurs_se_remplacent_sans_historique() {
    let etat = rejoue(&machine(), "5+*");
    assert_eq!(etat.expression, "5*");
    assert_eq!(etat.notation, "*");
    // un seul engagement : le remplacement ne consomme pas d'opérande
    assert_eq!(etat.historique, vec!["5".to_string()]);
}

#[test]
fn operateur_remplace_un_point_final() {
    let etat = rejoue(&machine(), "5.+");
    assert_eq!(etat.expression, "5+");
    assert_eq!(etat.notation, "+");
    assert_eq!(etat.historique, vec!["5.".to_string()]);
}

/* ------------------------ Modificateur décimal ------------------------ */

#[test]
fn point_decimal_unique_par_notation() {
    let etat = rejoue(&machine(), "5..3");
    assert_eq!(etat.expression, "5.3");
    assert_eq!(etat.notation, "5.3");
}

#[test]
fn point_decimal_ouvre_une_operande_avec_zero() {
    let etat = rejoue(&machine(), "5+.5");
    assert_eq!(etat.expression, "5+0.5");
    assert_eq!(etat.notation, "0.5");
}

#[test]
fn point_decimal_en_tete_de_session() {
    let etat = rejoue(&machine(), ".5");
    assert_eq!(etat.expression, "0.5");
    assert_eq!(etat.notation, "0.5");
}

/* ------------------------ Bascule de signe ------------------------ */

#[test]
fn negatif_enveloppe_puis_deballe() {
    let m = machine();
    let positif = rejoue(&m, "5");
    let negatif = m.insere_modificateur(&positif, Modificateur::Negatif, "±");
    assert_eq!(negatif.expression, "(-5)");
    assert_eq!(negatif.notation, "-5");

    // aller-retour : on retrouve l'état textuel d'origine
    let retour = m.insere_modificateur(&negatif, Modificateur::Negatif, "±");
    assert_eq!(retour.expression, positif.expression);
    assert_eq!(retour.notation, positif.notation);
}

#[test]
fn negatif_sur_zero_est_un_no_op() {
    let m = machine();
    let etat = m.insere_modificateur(&m.reinitialise(), Modificateur::Negatif, "±");
    assert_eq!(etat.expression, "");
    assert_eq!(etat.notation, "0");
}

#[test]
fn negatif_en_queue_d_expression_composee() {
    let etat = rejoue(&machine(), "5+3~");
    assert_eq!(etat.expression, "5+(-3)");
    assert_eq!(etat.notation, "-3");
}

#[test]
fn chiffre_dans_un_flottant_negatif_incomplet() {
    // "(-4.)" : le chiffre s'insère avant la parenthèse fermante
    let etat = rejoue(&machine(), "4.~5");
    assert_eq!(etat.expression, "(-4.5)");
    assert_eq!(etat.notation, "-4.5");
}

/* ------------------------ Résultat et enchaînement ------------------------ */

#[test]
fn calcul_enchaine_complet() {
    let m = machine();
    let etat = rejoue(&m, "5+3=");

    assert_eq!(etat.notation, "8");
    assert_eq!(etat.expression, "5+3=8");
    assert!(etat.resultat_affiche);
    assert_eq!(
        etat.historique,
        vec!["5".to_string(), "3".to_string(), "8".to_string()]
    );

    // l'opérateur suivant repart du résultat engagé en historique
    let suite = m.insere_operateur(&etat, '*');
    assert_eq!(suite.expression, "8*");
    assert_eq!(suite.notation, "*");
    assert!(!suite.resultat_affiche);
}

#[test]
fn precedence_respectee_au_resultat() {
    let etat = rejoue(&machine(), "3+4*2=");
    assert_eq!(etat.notation, "11");
    assert_eq!(etat.expression, "3+4*2=11");
}

#[test]
fn chiffre_apres_resultat_repart_a_neuf() {
    let etat = rejoue(&machine(), "5+3=7");
    assert_eq!(etat.expression, "7");
    assert_eq!(etat.notation, "7");
    // l'historique, lui, n'est jamais retiré
    assert_eq!(
        etat.historique,
        vec!["5".to_string(), "3".to_string(), "8".to_string()]
    );
}

#[test]
fn egal_sur_litteral_seul_reaffiche_tel_quel() {
    let etat = rejoue(&machine(), "5=");
    assert_eq!(etat.expression, "5");
    assert_eq!(etat.notation, "5");
    assert!(etat.resultat_affiche);
}

#[test]
fn egal_tolere_un_operateur_en_suspens() {
    let etat = rejoue(&machine(), "5+=");
    assert_eq!(etat.expression, "5=5");
    assert_eq!(etat.notation, "5");
}

#[test]
fn egal_sur_session_vierge_vaut_zero() {
    let etat = rejoue(&machine(), "=");
    assert_eq!(etat.expression, "0");
    assert_eq!(etat.notation, "0");
    assert!(etat.resultat_affiche);
}

#[test]
fn resultat_negatif_parenthese() {
    let etat = rejoue(&machine(), "5~=");
    assert_eq!(etat.notation, "-5");
    // le littéral négatif contient un '-' : le '=' est donc affiché
    assert_eq!(etat.expression, "(-5)=-5");
}

#[test]
fn division_par_zero_affiche_error() {
    let etat = rejoue(&machine(), "5/0=");
    assert_eq!(etat.notation, "ERROR");
    // l'expression soumise reste affichée, corrigeable
    assert_eq!(etat.expression, "5/0");
    assert!(etat.resultat_affiche);
}

#[test]
fn negatif_juste_apres_resultat_est_un_no_op() {
    // cas laissé ouvert par le modèle d'origine : on repart simplement
    // d'une session vierge, sans basculer le résultat
    let m = machine();
    let resultat = rejoue(&m, "5+3=");
    let etat = m.insere_modificateur(&resultat, Modificateur::Negatif, "±");
    assert_eq!(etat.expression, "");
    assert_eq!(etat.notation, "0");
    assert!(!etat.resultat_affiche);
}

/* ------------------------ Arrondi du résultat ------------------------ */

#[test]
fn poussiere_binaire_gommee() {
    let etat = rejoue(&machine(), ".1+.2=");
    assert_eq!(etat.notation, "0.3");
    assert_eq!(etat.expression, "0.1+0.2=0.3");
}

#[test]
fn depassement_de_budget_en_exponentiel() {
    let m = MachineSaisie::new(3);
    let etat = rejoue(&m, "999*999=");
    assert_eq!(etat.notation, "9.98e5");
    assert_eq!(etat.expression, "999*999=9.98e5");
}

/* ------------------------ Invariant de queue ------------------------ */

#[test]
fn l_expression_se_termine_par_la_notation() {
    let m = machine();
    for sequence in ["5", "507", "5+3", "5.3", "4.~5", "12*.5", "5+3=", "5+3=7"] {
        let etat = rejoue(&m, sequence);
        let forme_negative = format!("({})", etat.notation);
        assert!(
            etat.expression.ends_with(&etat.notation) || etat.expression.ends_with(&forme_negative),
            "séquence {sequence:?}: expression {:?} ne finit pas par {:?}",
            etat.expression,
            etat.notation
        );
    }
}
