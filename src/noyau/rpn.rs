// src/noyau/rpn.rs
//
// Shunting-yard : suite infixe validée -> RPN (postfix)
//
// Règles:
// - Opérande        : sortie directe
// - Fonction        : pile (elle sortira après la fermeture de son groupe)
// - Opérateur `op`  : dépile tant que le sommet est un opérateur
//                     plus prioritaire, ou de même priorité avec `op` associatif à gauche
// - ( [             : pile
// - ) ]             : dépile jusqu’à l’ouvrant du même genre, le jette,
//                     puis sort la fonction éventuelle au sommet
// - ,               : dépile jusqu’à l’ouvrant (qui reste en place)
//
// NOTE:
// - `^` et "(-)" sont associatifs à droite : 2^3^2 = 2^(3^2).

use super::erreur::{extrait, ErreurEval};
use super::jetons::{Token, TokenKind};
use super::tables::{self, Assoc};

/// Convertit une suite de jetons infixe en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [sin, (, pi, /, 2, )]
///   rpn:    [pi, 2, /, sin]
pub fn to_rpn(tokens: &[Token], texte: &str) -> Result<Vec<Token>, ErreurEval> {
    let mut out: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<&Token> = Vec::new();

    for tok in tokens {
        match tok.kind {
            TokenKind::Operand => out.push(tok.clone()),

            TokenKind::Function => ops.push(tok),

            TokenKind::Operator => {
                let (prec, assoc) = priorite(tok, texte)?;

                while let Some(top) = ops.last() {
                    if top.kind != TokenKind::Operator {
                        // ouvrant ou fonction : on ne traverse pas
                        break;
                    }
                    let (prec_top, _) = priorite(top, texte)?;
                    let doit_pop =
                        prec_top > prec || (prec_top == prec && assoc == Assoc::Gauche);
                    if !doit_pop {
                        break;
                    }
                    out.extend(ops.pop().cloned());
                }

                ops.push(tok);
            }

            TokenKind::Symbol if tables::est_ouvrant(&tok.value) => ops.push(tok),

            TokenKind::Symbol if tables::est_fermant(&tok.value) => {
                let attendu = tables::ouvrant_pour(&tok.value);

                loop {
                    match ops.pop() {
                        None => {
                            return Err(ErreurEval::MismatchedClosingBracket {
                                extrait: extrait(texte, tok.pos, 1),
                                position: tok.pos,
                            })
                        }
                        Some(top) if tables::est_ouvrant(&top.value) => {
                            // "(" fermée par "]" : refus
                            if Some(top.value.as_str()) != attendu {
                                return Err(ErreurEval::MismatchedClosingBracket {
                                    extrait: extrait(texte, tok.pos, 1),
                                    position: tok.pos,
                                });
                            }
                            break;
                        }
                        Some(top) => out.push(top.clone()),
                    }
                }

                // appel de fonction : la fonction sort juste après son groupe
                if ops.last().is_some_and(|t| t.kind == TokenKind::Function) {
                    out.extend(ops.pop().cloned());
                }
            }

            TokenKind::Symbol => {
                // séparateur d’arguments
                loop {
                    match ops.last() {
                        None => {
                            return Err(ErreurEval::MisplacedSeparator {
                                extrait: extrait(texte, tok.pos, 1),
                                position: tok.pos,
                            })
                        }
                        Some(top) if tables::est_ouvrant(&top.value) => break,
                        Some(_) => out.extend(ops.pop().cloned()),
                    }
                }
            }
        }
    }

    // vide la pile ops
    while let Some(top) = ops.pop() {
        if tables::est_ouvrant(&top.value) {
            return Err(ErreurEval::MismatchedOpeningBracket {
                extrait: extrait(texte, top.pos, 1),
                position: top.pos,
            });
        }
        out.push(top.clone());
    }

    Ok(out)
}

fn priorite(tok: &Token, texte: &str) -> Result<(u8, Assoc), ErreurEval> {
    tables::operateur(&tok.value)
        .map(|op| (op.precedence, op.assoc))
        .ok_or_else(|| ErreurEval::UnknownOperator {
            jeton: tok.value.clone(),
            extrait: extrait(texte, tok.pos, tok.value.chars().count()),
            position: tok.pos,
        })
}
