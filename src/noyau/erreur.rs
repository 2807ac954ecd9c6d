// src/noyau/erreur.rs
//
// Taxonomie des erreurs du noyau.
// Chaque erreur interrompt l’appel `eval` en cours (aucun résultat partiel).
// Les positions sont des index de caractères dans le texte d’entrée.

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurEval {
    #[error("caractère invalide '{caractere}' à la position {position}")]
    InvalidCharacter { caractere: char, position: usize },

    #[error("nombre mal formé près de « {extrait} » (position {position})")]
    MalformedNumber { extrait: String, position: usize },

    #[error("opérateurs consécutifs près de « {extrait} » (position {position})")]
    ConsecutiveOperators { extrait: String, position: usize },

    #[error("opérande inconnue « {jeton} » près de « {extrait} » (position {position})")]
    UnknownOperand {
        jeton: String,
        extrait: String,
        position: usize,
    },

    #[error("opérateur inconnu « {jeton} » près de « {extrait} » (position {position})")]
    UnknownOperator {
        jeton: String,
        extrait: String,
        position: usize,
    },

    #[error("fonction inconnue « {jeton} » près de « {extrait} » (position {position})")]
    UnknownFunction {
        jeton: String,
        extrait: String,
        position: usize,
    },

    #[error("symbole inconnu « {jeton} » près de « {extrait} » (position {position})")]
    UnknownSymbol {
        jeton: String,
        extrait: String,
        position: usize,
    },

    #[error("variable inconnue « {nom} »")]
    UnknownVariable { nom: String },

    #[error("parenthèse ou crochet fermant sans ouvrant près de « {extrait} » (position {position})")]
    MismatchedClosingBracket { extrait: String, position: usize },

    #[error("parenthèse ou crochet ouvrant jamais fermé près de « {extrait} » (position {position})")]
    MismatchedOpeningBracket { extrait: String, position: usize },

    #[error("séparateur ',' hors d’un groupe près de « {extrait} » (position {position})")]
    MisplacedSeparator { extrait: String, position: usize },

    #[error("« {jeton} » attend {requis} opérande(s), {disponibles} disponible(s)")]
    StackUnderflow {
        jeton: String,
        requis: usize,
        disponibles: usize,
    },

    #[error("expression invalide : {restants} valeur(s) sur la pile au lieu d’une")]
    MalformedExpression { restants: usize },
}

/// Extrait quelques caractères autour d’une zone fautive (pour les messages).
///
/// On prend un caractère avant la zone et on déborde de deux après,
/// borné par la fin du texte.
pub fn extrait(texte: &str, position: usize, longueur: usize) -> String {
    texte
        .chars()
        .skip(position.saturating_sub(1))
        .take(longueur + 2 + usize::from(position > 0))
        .collect()
}
