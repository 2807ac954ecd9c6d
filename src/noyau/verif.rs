// src/noyau/verif.rs
//
// Auto-vérification : évalue une expression et la compare à une valeur attendue,
// à TOLERANCE près. Plus le nettoyage d’entrée attendu côté appelant.

use super::erreur::ErreurEval;
use super::eval::Evaluator;

/// Écart maximal accepté entre valeur obtenue et attendue.
pub const TOLERANCE: f64 = 0.01;

#[derive(Clone, Debug, PartialEq)]
pub struct Verification {
    pub expression: String,
    pub attendu: f64,
    pub obtenu: f64,
    pub reussi: bool,
}

/// Le noyau suppose une entrée sans espaces : on les retire tous.
pub fn retirer_espaces(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

pub fn verifier(
    evaluateur: &mut Evaluator,
    expression: &str,
    attendu: f64,
) -> Result<Verification, ErreurEval> {
    let obtenu = evaluateur.eval(expression)?;
    let reussi = (obtenu - attendu).abs() <= TOLERANCE;

    if reussi {
        log::info!("{expression} -> {attendu} | réussi");
    } else {
        log::info!("{expression} -> {attendu} ({obtenu}) | échec");
    }

    Ok(Verification {
        expression: expression.to_string(),
        attendu,
        obtenu,
        reussi,
    })
}
