//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> valider -> to_rpn -> pile d’opérandes -> valeur
//!
//! Les jetons sont produits une seule fois : la suite validée est exactement
//! celle qui part dans le shunting-yard.

use super::erreur::{extrait, ErreurEval};
use super::jetons::{format_tokens, tokenize, Token, TokenKind};
use super::lecture::lire_litteral;
use super::rpn::to_rpn;
use super::tables::{self, Calcul, Fonction};
use super::validation::valider;
use super::variables::{Cellule, Registre};

/// Dernière compilation (introspection / démarche).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormeCompilee {
    pub infixe: Vec<Token>,
    pub rpn: Vec<Token>,
    pub texte_rpn: String,
}

#[derive(Clone, Debug)]
pub struct Evaluator {
    /// Précision plutôt qu’efficacité (factorielle exacte vs Stirling).
    aoe: bool,
    variables: Registre,
    derniere: Option<FormeCompilee>,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator {
    pub fn new() -> Self {
        Self::with_accuracy(true)
    }

    pub fn with_accuracy(aoe: bool) -> Self {
        Self {
            aoe,
            variables: Registre::default(),
            derniere: None,
        }
    }

    pub fn accuracy(&self) -> bool {
        self.aoe
    }

    pub fn set_accuracy(&mut self, aoe: bool) {
        self.aoe = aoe;
    }

    /// Lie `nom` à une cellule possédée (aussi) par l’appelant.
    pub fn register_variable(&mut self, nom: &str, cellule: Cellule) {
        self.variables.register(nom, cellule);
    }

    pub fn unregister_variable(&mut self, nom: &str) {
        self.variables.unregister(nom);
    }

    /// Noms connus, dans l’ordre d’enregistrement.
    pub fn variables(&self) -> &[String] {
        self.variables.noms()
    }

    pub fn last_compiled_form(&self) -> Option<&FormeCompilee> {
        self.derniere.as_ref()
    }

    /// Évalue `texte` (sans espaces).
    pub fn eval(&mut self, texte: &str) -> Result<f64, ErreurEval> {
        // 1) Jetons
        let infixe = tokenize(texte)?;

        // 2) Validation (sur la même suite)
        valider(&infixe, texte, &self.variables)?;

        // 3) RPN
        let rpn = to_rpn(&infixe, texte)?;
        let texte_rpn = format_tokens(&rpn);
        log::debug!("infixe : {}", format_tokens(&infixe));
        log::debug!("RPN    : {texte_rpn}");

        // gardée même si l’évaluation échoue ensuite
        let forme = self.derniere.insert(FormeCompilee {
            infixe,
            rpn,
            texte_rpn,
        });

        // 4) Pile d’opérandes
        evaluer_rpn(&forme.rpn, texte, &self.variables, self.aoe)
    }
}

/// Raccourci : évaluateur par défaut, un seul `eval`.
pub fn evaluate(texte: &str) -> Result<f64, ErreurEval> {
    Evaluator::new().eval(texte)
}

/// Réduit une suite RPN à une seule valeur.
///
/// - opérande : littéral, sinon variable du registre
/// - opérateur / fonction : dépile selon l’arité (le plus récent = opérande de droite)
/// - à la fin, la pile doit contenir exactement une valeur
///
/// `texte` est la source des jetons (extraits des messages d’erreur).
pub fn evaluer_rpn(
    rpn: &[Token],
    texte: &str,
    registre: &Registre,
    aoe: bool,
) -> Result<f64, ErreurEval> {
    let mut pile: Vec<f64> = Vec::with_capacity(rpn.len());

    for tok in rpn {
        match tok.kind {
            TokenKind::Operand => {
                let v = match lire_litteral(&tok.value) {
                    Some(v) => v,
                    None => registre.lookup(&tok.value)?,
                };
                pile.push(v);
            }

            TokenKind::Operator => {
                let op = tables::operateur(&tok.value).ok_or_else(|| {
                    ErreurEval::UnknownOperator {
                        jeton: tok.value.clone(),
                        extrait: extrait(texte, tok.pos, tok.value.chars().count()),
                        position: tok.pos,
                    }
                })?;
                let v = match op.calcul {
                    Calcul::Prefixe(f) | Calcul::Postfixe(f) => {
                        let [x] = depiler::<1>(&mut pile, tok)?;
                        f(x, aoe)
                    }
                    Calcul::Binaire(f) => {
                        let [a, b] = depiler::<2>(&mut pile, tok)?;
                        f(a, b, aoe)
                    }
                };
                pile.push(v);
            }

            TokenKind::Function => {
                let spec = tables::fonction(&tok.value).ok_or_else(|| {
                    ErreurEval::UnknownFunction {
                        jeton: tok.value.clone(),
                        extrait: extrait(texte, tok.pos, tok.value.chars().count()),
                        position: tok.pos,
                    }
                })?;
                let v = match spec.fonction {
                    Fonction::Arite1(f) => {
                        let [x] = depiler::<1>(&mut pile, tok)?;
                        f(x)
                    }
                    Fonction::Arite2(f) => {
                        let [a, b] = depiler::<2>(&mut pile, tok)?;
                        f(a, b)
                    }
                };
                pile.push(v);
            }

            // un groupement ne survit jamais au shunting-yard
            TokenKind::Symbol => {
                return Err(ErreurEval::MalformedExpression {
                    restants: pile.len(),
                })
            }
        }

        log::trace!("{} -> {:?}", tok.value, pile);
    }

    match pile.as_slice() {
        [v] => Ok(*v),
        _ => Err(ErreurEval::MalformedExpression {
            restants: pile.len(),
        }),
    }
}

/// Retire les N valeurs du sommet, dans l’ordre d’empilement.
fn depiler<const N: usize>(pile: &mut Vec<f64>, tok: &Token) -> Result<[f64; N], ErreurEval> {
    if pile.len() < N {
        return Err(ErreurEval::StackUnderflow {
            jeton: tok.value.clone(),
            requis: N,
            disponibles: pile.len(),
        });
    }
    let mut out = [0.0; N];
    out.copy_from_slice(&pile[pile.len() - N..]);
    pile.truncate(pile.len() - N);
    Ok(out)
}
