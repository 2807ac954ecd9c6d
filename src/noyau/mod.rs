//! Noyau d’évaluation infixe
//!
//! Organisation interne :
//! - erreur.rs     : taxonomie des erreurs (position + extrait)
//! - tables.rs     : opérateurs, fonctions, groupements (constantes)
//! - operations.rs : implémentations numériques (factorielle exacte / Stirling)
//! - lecture.rs    : littéraux décimaux (lecture exacte puis f64)
//! - variables.rs  : registre nom -> cellule partagée
//! - jetons.rs     : découpage + classement
//! - validation.rs : contrôle de la suite infixe
//! - rpn.rs        : shunting-yard
//! - eval.rs       : pile d’opérandes + Evaluator
//! - format.rs     : affichage du résultat
//! - verif.rs      : auto-vérification + nettoyage d’entrée

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod lecture;
pub mod operations;
pub mod rpn;
pub mod tables;
pub mod validation;
pub mod variables;
pub mod verif;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::ErreurEval;
pub use eval::{evaluate, Evaluator, FormeCompilee};
pub use jetons::{Token, TokenKind};
pub use variables::{cellule, Cellule};
