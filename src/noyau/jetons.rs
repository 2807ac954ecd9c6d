// src/noyau/jetons.rs
//
// Découpage + classement des jetons.
// Entrée : texte SANS espaces (le nettoyage est fait par l’appelant).
//
// 1) découpage : un caractère opérateur/symbole coupe le tampon en cours
//    ('-' devient "(-)" quand il ne peut pas être binaire)
// 2) classement : le genre d’un jeton ne dépend que des tables
//    (opérateur > symbole > fonction > opérande)

use super::erreur::{extrait, ErreurEval};
use super::tables::{self, MOINS_UNAIRE};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    Operand,
    Operator,
    Function,
    Symbol,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub value: String,
    pub kind: TokenKind,
    /// Index (en caractères) du premier caractère source du jeton.
    pub pos: usize,
}

impl Token {
    pub fn est(&self, kind: TokenKind, value: &str) -> bool {
        self.kind == kind && self.value == value
    }
}

/// Découpe puis classe `texte`.
///
/// Erreurs :
/// - InvalidCharacter : ni chiffre, ni lettre, ni '.', ni opérateur, ni symbole
/// - MalformedNumber  : deuxième '.' dans une même suite chiffres/points
pub fn tokenize(texte: &str) -> Result<Vec<Token>, ErreurEval> {
    let bruts = decouper(texte)?;
    Ok(bruts
        .into_iter()
        .map(|(value, pos)| Token {
            kind: classer(&value),
            value,
            pos,
        })
        .collect())
}

/// Genre d’un jeton brut, par appartenance aux tables.
pub fn classer(brut: &str) -> TokenKind {
    if tables::est_operateur(brut) {
        TokenKind::Operator
    } else if tables::est_symbole(brut) {
        TokenKind::Symbol
    } else if tables::est_fonction(brut) {
        TokenKind::Function
    } else {
        TokenKind::Operand
    }
}

fn decouper(texte: &str) -> Result<Vec<(String, usize)>, ErreurEval> {
    let mut out: Vec<(String, usize)> = Vec::new();

    // tampon littéral/identifiant + position de son premier caractère
    let mut tampon = String::new();
    let mut debut_tampon = 0usize;

    // suivi des '.' dans la suite chiffres/points courante
    let mut point_vu = false;

    for (i, c) in texte.chars().enumerate() {
        if tables::est_caractere_special(c) {
            point_vu = false;

            let unaire = c == '-' && tampon.is_empty() && moins_est_unaire(&out);

            if !tampon.is_empty() {
                out.push((std::mem::take(&mut tampon), debut_tampon));
            }

            if unaire {
                out.push((MOINS_UNAIRE.to_string(), i));
            } else {
                out.push((c.to_string(), i));
            }
            continue;
        }

        match c {
            '.' => {
                if point_vu {
                    return Err(ErreurEval::MalformedNumber {
                        extrait: extrait(texte, i, 1),
                        position: i,
                    });
                }
                point_vu = true;
            }
            '0'..='9' => {}
            c if c.is_ascii_alphabetic() => point_vu = false,
            _ => {
                return Err(ErreurEval::InvalidCharacter {
                    caractere: c,
                    position: i,
                })
            }
        }

        if tampon.is_empty() {
            debut_tampon = i;
        }
        tampon.push(c);
    }

    if !tampon.is_empty() {
        out.push((tampon, debut_tampon));
    }

    Ok(out)
}

/// '-' est unaire (tampon vide) :
/// - en tête d’expression
/// - après un opérateur qui attend encore une opérande (pas après '!')
/// - après un ouvrant ou une virgule
fn moins_est_unaire(deja: &[(String, usize)]) -> bool {
    match deja.last() {
        None => true,
        Some((prec, _)) => {
            if let Some(op) = tables::operateur(prec) {
                !op.est_postfixe()
            } else {
                tables::est_ouvrant(prec) || prec == tables::SEPARATEUR
            }
        }
    }
}

/// Format utilitaire (debug/“démarche”) : valeurs des jetons séparées par un espace.
pub fn format_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| t.value.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
