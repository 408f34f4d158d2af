//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau direct).
//!
//! Rôle : envelopper la machine de saisie et son état de session, et porter
//! la table statique bouton -> rôle du pavé.
//!
//! Contrats :
//! - Aucune logique d'affichage ici.
//! - Toute mutation passe par les opérations pures de la machine
//!   (rejouables, donc testables sans UI).

use crate::saisie::{EtatSaisie, MachineSaisie, Modificateur};

/// Rôle d'une touche du pavé (bouton ou clavier).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoleTouche {
    Chiffre(char),
    Operateur(char),
    Decimal,
    Negatif,
    Egal,
    RemiseAZero,
}

/// Table statique bouton -> rôle, dans l'ordre d'affichage (4 colonnes).
pub const PAVE: &[(&str, RoleTouche)] = &[
    ("C", RoleTouche::RemiseAZero),
    ("±", RoleTouche::Negatif),
    ("÷", RoleTouche::Operateur('/')),
    ("×", RoleTouche::Operateur('*')),
    ("7", RoleTouche::Chiffre('7')),
    ("8", RoleTouche::Chiffre('8')),
    ("9", RoleTouche::Chiffre('9')),
    ("-", RoleTouche::Operateur('-')),
    ("4", RoleTouche::Chiffre('4')),
    ("5", RoleTouche::Chiffre('5')),
    ("6", RoleTouche::Chiffre('6')),
    ("+", RoleTouche::Operateur('+')),
    ("1", RoleTouche::Chiffre('1')),
    ("2", RoleTouche::Chiffre('2')),
    ("3", RoleTouche::Chiffre('3')),
    ("=", RoleTouche::Egal),
    ("0", RoleTouche::Chiffre('0')),
    (".", RoleTouche::Decimal),
];

#[derive(Clone, Debug)]
pub struct AppCalc {
    machine: MachineSaisie,
    pub saisie: EtatSaisie,
}

impl Default for AppCalc {
    fn default() -> Self {
        let machine = MachineSaisie::default();
        let saisie = machine.reinitialise();
        Self { machine, saisie }
    }
}

impl AppCalc {
    /// Route une touche (clic de bouton ou clavier) vers l'opération adaptée.
    pub fn applique(&mut self, role: RoleTouche) {
        self.saisie = match role {
            RoleTouche::Chiffre(c) => self.machine.insere_chiffre(&self.saisie, c),
            RoleTouche::Operateur(c) => self.machine.insere_operateur(&self.saisie, c),
            RoleTouche::Decimal => {
                self.machine
                    .insere_modificateur(&self.saisie, Modificateur::Decimal, ".")
            }
            RoleTouche::Negatif => {
                self.machine
                    .insere_modificateur(&self.saisie, Modificateur::Negatif, "±")
            }
            RoleTouche::Egal => self.machine.calcule_resultat(&self.saisie, "="),
            RoleTouche::RemiseAZero => self.machine.reinitialise(),
        };
    }

    /// Rôle associé à un caractère clavier, s'il existe.
    pub fn role_pour_char(c: char) -> Option<RoleTouche> {
        match c {
            '0'..='9' => Some(RoleTouche::Chiffre(c)),
            '+' | '-' | '*' | '/' => Some(RoleTouche::Operateur(c)),
            '.' => Some(RoleTouche::Decimal),
            '=' => Some(RoleTouche::Egal),
            _ => None,
        }
    }
}
