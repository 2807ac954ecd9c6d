//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - expressions bien formées : valeur comparée à une valeur calculée à la génération
//! - expressions corrompues : jamais de panique, erreur typée ou valeur, et même sortie deux fois

use std::time::{Duration, Instant};

use super::erreur::ErreurEval;
use super::eval::Evaluator;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération (texte + valeur attendue) ------------------------ */

// Entiers petits + profondeur bornée : toutes les valeurs restent exactes en f64.
fn gen_atom(rng: &mut Rng) -> (String, f64) {
    let k = rng.pick(10) as f64;
    if rng.pick(4) == 0 {
        (format!("(-{k})"), -k)
    } else {
        (format!("{k}"), k)
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> (String, f64) {
    if depth == 0 {
        return gen_atom(rng);
    }

    let (a, va) = gen_expr(rng, depth - 1);
    match rng.pick(8) {
        0 => gen_atom(rng),
        1 => {
            let (b, vb) = gen_expr(rng, depth - 1);
            (format!("({a}+{b})"), va + vb)
        }
        2 => {
            let (b, vb) = gen_expr(rng, depth - 1);
            (format!("({a}-{b})"), va - vb)
        }
        3 => {
            let (b, vb) = gen_expr(rng, depth - 1);
            (format!("[{a}*{b}]"), va * vb)
        }
        4 => (format!("-{a}"), -va),
        5 => (format!("sqrt({a}*{a})"), va.abs()),
        6 => (format!("hypot({a},0)"), va.abs()),
        _ => {
            // sans parenthèses : la priorité doit faire le travail
            let (b, vb) = gen_atom(rng);
            let (c, vc) = gen_atom(rng);
            (format!("({a}+{b}*{c})"), va + vb * vc)
        }
    }
}

/// Remplace, insère ou supprime un caractère au hasard.
fn corrompre(rng: &mut Rng, s: &str) -> String {
    const BRUIT: &[char] = &['+', '-', '*', '/', '%', '^', '!', '(', ')', '[', ']', ',', '.', 'x', '&', ' '];

    let mut chars: Vec<char> = s.chars().collect();
    if chars.is_empty() {
        return String::new();
    }
    let i = rng.pick(chars.len() as u32) as usize;
    let c = BRUIT[rng.pick(BRUIT.len() as u32) as usize];
    match rng.pick(3) {
        0 => chars[i] = c,
        1 => chars.insert(i, c),
        _ => {
            chars.remove(i);
        }
    }
    chars.into_iter().collect()
}

fn meme_sortie(a: &Result<f64, ErreurEval>, b: &Result<f64, ErreurEval>) -> bool {
    match (a, b) {
        (Ok(x), Ok(y)) => x.to_bits() == y.to_bits(),
        (Err(x), Err(y)) => x == y,
        _ => false,
    }
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_valeurs_bien_formees() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);
    let mut ev = Evaluator::new();

    for _ in 0..300 {
        budget(t0, max);

        let (expr, attendu) = gen_expr(&mut rng, 4);
        let v = ev
            .eval(&expr)
            .unwrap_or_else(|e| panic!("expr={expr:?} err={e}"));
        assert_eq!(v, attendu, "expr={expr:?}");
    }
}

#[test]
fn fuzz_safe_corruption_sans_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xBADC0DE_u64);
    let mut ev = Evaluator::new();

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..400 {
        budget(t0, max);

        let (base, _) = gen_expr(&mut rng, 3);
        let mut expr = corrompre(&mut rng, &base);
        if rng.coin() {
            expr = corrompre(&mut rng, &expr);
        }

        let a = ev.eval(&expr);
        let b = ev.eval(&expr);
        assert!(meme_sortie(&a, &b), "expr={expr:?} a={a:?} b={b:?}");

        match a {
            Ok(_) => seen_ok += 1,
            Err(e) => {
                // message toujours lisible
                assert!(!e.to_string().is_empty());
                seen_err += 1;
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 10, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 10, "trop peu d’erreurs: {seen_err}");
}

#[test]
fn fuzz_safe_forme_compilee_coherente() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let mut rng = Rng::new(0x5EED_u64);
    let mut ev = Evaluator::new();

    for _ in 0..100 {
        budget(t0, max);

        let (expr, _) = gen_expr(&mut rng, 3);
        ev.eval(&expr)
            .unwrap_or_else(|e| panic!("expr={expr:?} err={e}"));

        let f = ev
            .last_compiled_form()
            .unwrap_or_else(|| panic!("aucune forme compilée pour {expr:?}"));

        // la RPN ne contient jamais de groupement
        assert!(f
            .rpn
            .iter()
            .all(|t| !matches!(t.value.as_str(), "(" | ")" | "[" | "]" | ",")));

        // chaque jeton RPN vient de la suite infixe
        assert!(f.rpn.iter().all(|t| f.infixe.contains(t)));
    }
}
