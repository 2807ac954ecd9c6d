//! Tests scientifiques (campagne) : propriétés du pipeline complet.
//!
//! - priorités / associativité / moins unaire
//! - groupements mal appariés
//! - identifiants inconnus, variables vivantes
//! - piles vides ou insuffisantes : jamais de valeur par défaut silencieuse
//! - stress borné (budget temps)

use std::time::{Duration, Instant};

use super::erreur::ErreurEval;
use super::eval::{evaluate, Evaluator};
use super::variables::cellule;
use super::verif::{retirer_espaces, verifier};

fn eval_ok(expr: &str) -> f64 {
    evaluate(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn assert_proche(expr: &str, attendu: f64) {
    let v = eval_ok(expr);
    assert!(
        (v - attendu).abs() <= 1e-12 * attendu.abs().max(1.0),
        "expr={expr:?} obtenu={v} attendu={attendu}"
    );
}

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Littéraux ------------------------ */

#[test]
fn sci_litteraux_relus_a_l_identique() {
    for s in ["0", "7", "42", "3.5", "0.1", "123.456", ".25", "10.", "007.5"] {
        let attendu: f64 = s.parse().unwrap();
        assert_proche(s, attendu);
        assert_proche(&format!("-{s}"), -attendu);
    }
}

/* ------------------------ Priorités / associativité ------------------------ */

#[test]
fn sci_priorites() {
    assert_eq!(eval_ok("2+3*4"), 14.0);
    assert_eq!(eval_ok("(2+3)*4"), 20.0);
    assert_eq!(eval_ok("2*3+4"), 10.0);
    assert_eq!(eval_ok("2+12/4-1"), 4.0);
    assert_eq!(eval_ok("2*3^2"), 18.0);
    assert_eq!(eval_ok("17%5+1"), 3.0);
}

#[test]
fn sci_associativite() {
    assert_eq!(eval_ok("2^3^2"), 512.0);
    assert_eq!(eval_ok("(2^3)^2"), 64.0);
    assert_eq!(eval_ok("100/10/5"), 2.0);
    assert_eq!(eval_ok("10-3-2"), 5.0);
}

#[test]
fn sci_moins_unaire() {
    assert_eq!(eval_ok("-5+3"), -2.0);
    assert_eq!(eval_ok("3--2"), 5.0);
    assert_eq!(eval_ok("---1"), -1.0);
    assert_eq!(eval_ok("4*-[1+1]"), -8.0);
    assert_eq!(eval_ok("2^-1"), 0.5);
}

/* ------------------------ Groupements ------------------------ */

#[test]
fn sci_groupements_mal_apparies() {
    assert!(matches!(
        evaluate("(2+3"),
        Err(ErreurEval::MismatchedOpeningBracket { .. })
    ));
    assert!(matches!(
        evaluate("2+3)"),
        Err(ErreurEval::MismatchedClosingBracket { .. })
    ));
    assert!(matches!(
        evaluate("(2+3]"),
        Err(ErreurEval::MismatchedClosingBracket { .. })
    ));
    assert!(matches!(
        evaluate("[[1]"),
        Err(ErreurEval::MismatchedOpeningBracket { .. })
    ));
}

#[test]
fn sci_crochets_equivalents_aux_parentheses() {
    assert_eq!(eval_ok("[2+3]*4"), eval_ok("(2+3)*4"));
    assert_eq!(eval_ok("sqrt[16]"), 4.0);
    assert_eq!(eval_ok("([2])*[(3)]"), 6.0);
}

/* ------------------------ Identifiants ------------------------ */

#[test]
fn sci_identifiants_inconnus() {
    assert!(matches!(
        evaluate("2+x"),
        Err(ErreurEval::UnknownOperand { .. })
    ));
    assert!(matches!(
        evaluate("foo(2)"),
        Err(ErreurEval::UnknownOperand { .. })
    ));
}

#[test]
fn sci_variables_aller_retour() {
    let mut ev = Evaluator::new();
    let x = cellule(7.0);
    ev.register_variable("x", x);
    assert_eq!(ev.eval("x*2"), Ok(14.0));

    ev.unregister_variable("x");
    assert!(ev.eval("x").is_err());

    // pi redéfini par l’appelant
    let pi = cellule(3.0);
    ev.register_variable("pi", pi.clone());
    assert_eq!(ev.eval("pi*2"), Ok(6.0));
    pi.set(4.0);
    assert_eq!(ev.eval("pi*2"), Ok(8.0));
}

#[test]
fn sci_constantes() {
    assert_proche("pi", std::f64::consts::PI);
    assert_proche("e", std::f64::consts::E);
    assert_proche("e^2", std::f64::consts::E * std::f64::consts::E);
}

/* ------------------------ Fonctions ------------------------ */

#[test]
fn sci_composition_fonctions() {
    assert_eq!(eval_ok("sqrt(16)+sin(0)"), 4.0);
    assert_proche("sin(pi/6)*2", 1.0);
    assert_proche("sqrt(sqrt(81))", 3.0);
    assert_proche("cos(acos(0.5))", 0.5);
    assert_proche("atan2(0-1,0-1)", -3.0 * std::f64::consts::FRAC_PI_4);
    assert_proche("hypot(sqrt(9),2^2)", 5.0);
}

/* ------------------------ Piles ------------------------ */

#[test]
fn sci_pile_jamais_silencieuse() {
    for s in ["+", "2+", "*3", "!", "-", "sin", "atan2(1)", "()"] {
        match evaluate(s) {
            Err(ErreurEval::StackUnderflow { .. }) | Err(ErreurEval::MalformedExpression { .. }) => {}
            autre => panic!("expr={s:?} : attendu une erreur de pile, obtenu {autre:?}"),
        }
    }
}

/* ------------------------ Idempotence ------------------------ */

#[test]
fn sci_idempotence() {
    let mut ev = Evaluator::new();
    let y = cellule(1.5);
    ev.register_variable("y", y);
    for s in ["y^y", "5!/y", "sqrt(y)*pi-e", "y%1"] {
        let a = ev.eval(s);
        let b = ev.eval(s);
        assert_eq!(a.map(f64::to_bits), b.map(f64::to_bits), "expr={s:?}");
    }
}

/* ------------------------ Auto-vérification ------------------------ */

#[test]
fn sci_verification_entree_utilisateur() {
    let mut ev = Evaluator::new();
    let expr = retirer_espaces(" ( 1 + 2 ) * 3 ! ");
    let v = verifier(&mut ev, &expr, 18.0).unwrap();
    assert!(v.reussi);
    assert_eq!(v.obtenu, 18.0);
}

/* ------------------------ Stress contrôlé ------------------------ */

#[test]
fn sci_stress_longue_somme() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let expr = vec!["1"; 5000].join("+");
    budget(t0, max);

    assert_eq!(eval_ok(&expr), 5000.0);
    budget(t0, max);
}

#[test]
fn sci_stress_imbrication_profonde() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    // tout est itératif : pas de récursion, pas de débordement de pile
    let n = 2000;
    let expr = format!("{}1{}", "(".repeat(n), ")".repeat(n));
    assert_eq!(eval_ok(&expr), 1.0);

    let expr = format!("{}2", "-".repeat(n + 1));
    assert_eq!(eval_ok(&expr), -2.0);
    budget(t0, max);
}
