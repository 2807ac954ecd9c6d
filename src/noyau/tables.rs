// src/noyau/tables.rs
//
// Tables de symboles (constantes, écrites à la main).
// - opérateurs : précédence, associativité, arité + implémentation
// - fonctions  : nom + implémentation étiquetée par arité
// - symboles de groupement : ( ) [ ] ,
//
// Les recherches se font par clé ; l’ordre des tables n’a aucune importance.

use super::operations;

/// Pseudo-opérateur « moins unaire » produit par le découpage.
pub const MOINS_UNAIRE: &str = "(-)";

/// Séparateur d’arguments.
pub const SEPARATEUR: &str = ",";

pub const SYMBOLES: &[&str] = &["(", ")", "[", "]", SEPARATEUR];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Assoc {
    Gauche,
    Droite,
}

/// Implémentation d’un opérateur : l’arité et la position voyagent avec la fonction.
#[derive(Clone, Copy, Debug)]
pub enum Calcul {
    /// Unaire placé avant l’opérande (moins unaire).
    Prefixe(fn(f64, bool) -> f64),
    /// Unaire placé après l’opérande (factorielle).
    Postfixe(fn(f64, bool) -> f64),
    Binaire(fn(f64, f64, bool) -> f64),
}

impl Calcul {
    pub fn arite(&self) -> usize {
        match self {
            Calcul::Prefixe(_) | Calcul::Postfixe(_) => 1,
            Calcul::Binaire(_) => 2,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct OperatorSpec {
    pub symbole: &'static str,
    pub precedence: u8,
    pub assoc: Assoc,
    pub calcul: Calcul,
}

impl OperatorSpec {
    pub fn est_postfixe(&self) -> bool {
        matches!(self.calcul, Calcul::Postfixe(_))
    }
}

#[derive(Clone, Copy, Debug)]
pub enum Fonction {
    Arite1(fn(f64) -> f64),
    Arite2(fn(f64, f64) -> f64),
}

impl Fonction {
    pub fn arite(&self) -> usize {
        match self {
            Fonction::Arite1(_) => 1,
            Fonction::Arite2(_) => 2,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct FunctionSpec {
    pub nom: &'static str,
    pub fonction: Fonction,
}

pub const OPERATEURS: &[OperatorSpec] = &[
    OperatorSpec {
        symbole: MOINS_UNAIRE,
        precedence: 6,
        assoc: Assoc::Droite,
        calcul: Calcul::Prefixe(operations::moins_unaire),
    },
    OperatorSpec {
        symbole: "!",
        precedence: 5,
        assoc: Assoc::Droite,
        calcul: Calcul::Postfixe(operations::factorielle),
    },
    OperatorSpec {
        symbole: "^",
        precedence: 4,
        assoc: Assoc::Droite,
        calcul: Calcul::Binaire(operations::pow),
    },
    OperatorSpec {
        symbole: "*",
        precedence: 3,
        assoc: Assoc::Gauche,
        calcul: Calcul::Binaire(operations::mul),
    },
    OperatorSpec {
        symbole: "/",
        precedence: 3,
        assoc: Assoc::Gauche,
        calcul: Calcul::Binaire(operations::div),
    },
    OperatorSpec {
        symbole: "%",
        precedence: 3,
        assoc: Assoc::Gauche,
        calcul: Calcul::Binaire(operations::modulo),
    },
    OperatorSpec {
        symbole: "+",
        precedence: 2,
        assoc: Assoc::Gauche,
        calcul: Calcul::Binaire(operations::add),
    },
    OperatorSpec {
        symbole: "-",
        precedence: 2,
        assoc: Assoc::Gauche,
        calcul: Calcul::Binaire(operations::sub),
    },
];

pub const FONCTIONS: &[FunctionSpec] = &[
    FunctionSpec {
        nom: "sin",
        fonction: Fonction::Arite1(f64::sin),
    },
    FunctionSpec {
        nom: "cos",
        fonction: Fonction::Arite1(f64::cos),
    },
    FunctionSpec {
        nom: "tan",
        fonction: Fonction::Arite1(f64::tan),
    },
    FunctionSpec {
        nom: "asin",
        fonction: Fonction::Arite1(f64::asin),
    },
    FunctionSpec {
        nom: "acos",
        fonction: Fonction::Arite1(f64::acos),
    },
    FunctionSpec {
        nom: "atan",
        fonction: Fonction::Arite1(f64::atan),
    },
    FunctionSpec {
        nom: "sqrt",
        fonction: Fonction::Arite1(f64::sqrt),
    },
    // atan2(y, x)
    FunctionSpec {
        nom: "atan2",
        fonction: Fonction::Arite2(f64::atan2),
    },
    FunctionSpec {
        nom: "hypot",
        fonction: Fonction::Arite2(f64::hypot),
    },
];

pub fn operateur(symbole: &str) -> Option<&'static OperatorSpec> {
    OPERATEURS.iter().find(|op| op.symbole == symbole)
}

pub fn fonction(nom: &str) -> Option<&'static FunctionSpec> {
    FONCTIONS.iter().find(|f| f.nom == nom)
}

pub fn est_operateur(s: &str) -> bool {
    operateur(s).is_some()
}

pub fn est_fonction(s: &str) -> bool {
    fonction(s).is_some()
}

pub fn est_symbole(s: &str) -> bool {
    SYMBOLES.contains(&s)
}

/// Caractère qui, seul, forme un opérateur ou un symbole.
pub fn est_caractere_special(c: char) -> bool {
    let mut buf = [0u8; 4];
    let s: &str = c.encode_utf8(&mut buf);
    est_operateur(s) || est_symbole(s)
}

pub fn est_ouvrant(s: &str) -> bool {
    matches!(s, "(" | "[")
}

pub fn est_fermant(s: &str) -> bool {
    matches!(s, ")" | "]")
}

/// Ouvrant attendu pour un fermant : `(` pour `)`, `[` pour `]`.
pub fn ouvrant_pour(fermant: &str) -> Option<&'static str> {
    match fermant {
        ")" => Some("("),
        "]" => Some("["),
        _ => None,
    }
}
