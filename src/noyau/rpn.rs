// src/noyau/rpn.rs
//
// Shunting-yard : infixe -> RPN (postfix)
// Règles:
// - nombres : sortie directe
// - opérateurs binaires + - * /, tous associatifs à gauche
//   (précédence : +,- = 1 ; *,/ = 2)
// - '(' empile ; ')' dépile jusqu'à '(' sinon erreur de syntaxe
// - '(' restante en fin de parcours => erreur de syntaxe

use super::erreurs::ErreurNoyau;
use super::jetons::Jeton;

fn precedence(j: &Jeton) -> i32 {
    match j {
        Jeton::Plus | Jeton::Moins => 1,
        Jeton::Etoile | Jeton::Barre => 2,
        _ => 0,
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   jetons: [3, +, 4, *, 2]
///   rpn:    [3, 4, 2, *, +]
pub fn en_rpn(jetons: &[Jeton]) -> Result<Vec<Jeton>, ErreurNoyau> {
    let mut sortie: Vec<Jeton> = Vec::new();
    let mut pile: Vec<Jeton> = Vec::new();

    for jeton in jetons.iter().cloned() {
        match jeton {
            Jeton::Nombre(_, _) => sortie.push(jeton),

            Jeton::Plus | Jeton::Moins | Jeton::Etoile | Jeton::Barre => {
                // dépile tant que:
                // - on n'est pas bloqué par '('
                // - et la précédence du sommet est >= celle du jeton entrant
                //   (associativité gauche)
                while let Some(sommet) = pile.last() {
                    if matches!(sommet, Jeton::ParG) {
                        break;
                    }
                    if precedence(sommet) >= precedence(&jeton) {
                        sortie.push(pile.pop().unwrap());
                    } else {
                        break;
                    }
                }
                pile.push(jeton);
            }

            Jeton::ParG => pile.push(jeton),

            Jeton::ParD => {
                // dépile jusqu'à '('
                let mut ouvrante_trouvee = false;
                while let Some(sommet) = pile.pop() {
                    if matches!(sommet, Jeton::ParG) {
                        ouvrante_trouvee = true;
                        break;
                    }
                    sortie.push(sommet);
                }
                if !ouvrante_trouvee {
                    return Err(ErreurNoyau::Syntaxe("parenthèses non appariées".to_string()));
                }
            }
        }
    }

    // vide la pile d'opérateurs
    while let Some(op) = pile.pop() {
        if matches!(op, Jeton::ParG) {
            return Err(ErreurNoyau::Syntaxe("parenthèse non fermée".to_string()));
        }
        sortie.push(op);
    }

    Ok(sortie)
}
