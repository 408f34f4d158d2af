// src/noyau/jetons.rs

use super::erreurs::ErreurNoyau;

#[derive(Clone, Debug, PartialEq)]
pub enum Jeton {
    // valeur + texte d'origine
    Nombre(f64, String),

    Plus,
    Moins,
    Etoile,
    Barre,

    ParG,
    ParD,
}

impl Jeton {
    pub fn est_operateur(&self) -> bool {
        matches!(
            self,
            Jeton::Plus | Jeton::Moins | Jeton::Etoile | Jeton::Barre
        )
    }
}

fn est_char_operateur(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/')
}

fn est_char_autorise(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | '*' | '/' | '(' | ')')
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - entiers et flottants (ex: 12, 4.5, .5, 4.)
/// - littéraux négatifs (le '-' de signe n'est accepté qu'en début
///   d'expression ou après un opérateur / une '(')
/// - opérateurs + - * /
/// - parenthèses ( )
///
/// Assainissement préalable (avant balayage) :
/// - blancs retirés
/// - caractère hors alphabet => refus
/// - deux opérateurs consécutifs, '*' ou '/' en tête,
///   opérateur en queue => refus (une ')' finale reste permise)
pub fn tokenise(s: &str) -> Result<Vec<Jeton>, ErreurNoyau> {
    let nettoye: String = s.chars().filter(|c| !c.is_whitespace()).collect();

    if let Some(c) = nettoye.chars().find(|c| !est_char_autorise(*c)) {
        return Err(ErreurNoyau::Jetons(format!("caractère interdit: '{c}'")));
    }

    let chars: Vec<char> = nettoye.chars().collect();

    if chars
        .windows(2)
        .any(|w| est_char_operateur(w[0]) && est_char_operateur(w[1]))
    {
        return Err(ErreurNoyau::Jetons(
            "deux opérateurs consécutifs".to_string(),
        ));
    }
    if matches!(chars.first(), Some('*') | Some('/')) {
        return Err(ErreurNoyau::Jetons(
            "expression commençant par '*' ou '/'".to_string(),
        ));
    }
    if chars.last().is_some_and(|c| est_char_operateur(*c)) {
        return Err(ErreurNoyau::Jetons(
            "expression terminée par un opérateur".to_string(),
        ));
    }

    let mut out: Vec<Jeton> = Vec::new();
    let mut i: usize = 0;

    // Un '-' en tête de nombre n'est un signe que si le jeton précédent
    // est un opérateur ou '(' (ou en tout début d'expression).
    let mut signe_permis = true;

    while i < chars.len() {
        if let Some((valeur, texte, fin)) = scanne_nombre(&chars, i, signe_permis) {
            out.push(Jeton::Nombre(valeur, texte));
            i = fin;
            signe_permis = false;
            continue;
        }

        let jeton = match chars[i] {
            '+' => Jeton::Plus,
            '-' => Jeton::Moins,
            '*' => Jeton::Etoile,
            '/' => Jeton::Barre,
            '(' => Jeton::ParG,
            ')' => Jeton::ParD,
            autre => {
                // seul '.' isolé peut arriver ici après l'assainissement
                return Err(ErreurNoyau::Jetons(format!("caractère imprévu: '{autre}'")));
            }
        };

        signe_permis = !matches!(jeton, Jeton::ParD);
        out.push(jeton);
        i += 1;
    }

    // Garde finale : pas d'opérateur en dernière position (')' tolérée).
    if out.len() > 1 && out.last().is_some_and(Jeton::est_operateur) {
        return Err(ErreurNoyau::Jetons(
            "expression terminée par un opérateur".to_string(),
        ));
    }

    Ok(out)
}

/// Balayage glouton du plus long littéral numérique à partir de `depart` :
/// `-? (chiffres[.chiffres] | .chiffres)`.
/// Renvoie (valeur, texte d'origine, position de fin) si un nombre est lu.
fn scanne_nombre(chars: &[char], depart: usize, signe_permis: bool) -> Option<(f64, String, usize)> {
    let mut j = depart;

    if j < chars.len() && chars[j] == '-' {
        if !signe_permis {
            return None;
        }
        j += 1;
    }

    if j < chars.len() && chars[j].is_ascii_digit() {
        // chiffres[.chiffres] ("4." est accepté, comme sur une calculatrice)
        while j < chars.len() && chars[j].is_ascii_digit() {
            j += 1;
        }
        if j < chars.len() && chars[j] == '.' {
            j += 1;
            while j < chars.len() && chars[j].is_ascii_digit() {
                j += 1;
            }
        }
    } else if j + 1 < chars.len() && chars[j] == '.' && chars[j + 1].is_ascii_digit() {
        // .chiffres
        j += 1;
        while j < chars.len() && chars[j].is_ascii_digit() {
            j += 1;
        }
    } else {
        return None;
    }

    let texte: String = chars[depart..j].iter().collect();
    let valeur = texte.parse::<f64>().ok()?;
    Some((valeur, texte, j))
}

/// Format utilitaire (debug) : liste de jetons en texte.
pub fn format_jetons(jetons: &[Jeton]) -> String {
    let mut out = Vec::new();
    for j in jetons {
        let s = match j {
            Jeton::Nombre(_, texte) => texte.clone(),

            Jeton::Plus => "+".to_string(),
            Jeton::Moins => "-".to_string(),
            Jeton::Etoile => "*".to_string(),
            Jeton::Barre => "/".to_string(),

            Jeton::ParG => "(".to_string(),
            Jeton::ParD => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
