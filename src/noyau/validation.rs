// src/noyau/validation.rs
//
// Validation de la suite infixe (un seul passage).
// Ne vérifie NI l’appariement des groupements (rpn.rs) NI les arités (eval.rs).

use super::erreur::{extrait, ErreurEval};
use super::jetons::{Token, TokenKind};
use super::lecture;
use super::tables::{self, MOINS_UNAIRE};
use super::variables::Registre;

/// Vérifie chaque jeton contre sa table et refuse deux opérateurs consécutifs.
///
/// Exceptions à « deux opérateurs consécutifs » :
/// - le second est un moins unaire "(-)" (déjà résolu au découpage)
/// - le premier est postfixe ('!') : il ferme une opérande
pub fn valider(tokens: &[Token], texte: &str, registre: &Registre) -> Result<(), ErreurEval> {
    let mut attend_operande = false;

    for tok in tokens {
        let largeur = tok.value.chars().count();

        match tok.kind {
            TokenKind::Operator => {
                let Some(op) = tables::operateur(&tok.value) else {
                    return Err(ErreurEval::UnknownOperator {
                        jeton: tok.value.clone(),
                        extrait: extrait(texte, tok.pos, largeur),
                        position: tok.pos,
                    });
                };

                if attend_operande && !tok.est(TokenKind::Operator, MOINS_UNAIRE) {
                    return Err(ErreurEval::ConsecutiveOperators {
                        extrait: extrait(texte, tok.pos.saturating_sub(1), 3),
                        position: tok.pos,
                    });
                }
                attend_operande = !op.est_postfixe();
            }

            TokenKind::Operand => {
                let connu = if lecture::ressemble_a_un_nombre(&tok.value) {
                    lecture::est_litteral(&tok.value)
                } else {
                    registre.contient(&tok.value)
                };
                if !connu {
                    return Err(ErreurEval::UnknownOperand {
                        jeton: tok.value.clone(),
                        extrait: extrait(texte, tok.pos, largeur),
                        position: tok.pos,
                    });
                }
                attend_operande = false;
            }

            TokenKind::Function => {
                if !tables::est_fonction(&tok.value) {
                    return Err(ErreurEval::UnknownFunction {
                        jeton: tok.value.clone(),
                        extrait: extrait(texte, tok.pos, largeur),
                        position: tok.pos,
                    });
                }
                attend_operande = false;
            }

            TokenKind::Symbol => {
                if !tables::est_symbole(&tok.value) {
                    return Err(ErreurEval::UnknownSymbol {
                        jeton: tok.value.clone(),
                        extrait: extrait(texte, tok.pos, largeur),
                        position: tok.pos,
                    });
                }
                attend_operande = false;
            }
        }
    }

    Ok(())
}
