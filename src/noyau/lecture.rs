// src/noyau/lecture.rs
//
// Lecture des littéraux numériques.
// Un littéral = chiffres + au plus un '.', avec au moins un chiffre ("12", "0.5", ".5", "5.").
// La valeur est d’abord construite exactement (BigRational), puis arrondie une seule fois en f64.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::ToPrimitive;

/// Vrai si `s` est un littéral décimal bien formé (non signé).
pub fn est_litteral(s: &str) -> bool {
    let mut points = 0usize;
    let mut chiffres = 0usize;
    for c in s.chars() {
        match c {
            '0'..='9' => chiffres += 1,
            '.' => points += 1,
            _ => return false,
        }
    }
    chiffres > 0 && points <= 1
}

/// Un jeton qui *ressemble* à un nombre (commence par un chiffre ou un point).
/// Sert au validateur : "2x" ressemble à un nombre mais n’en est pas un.
pub fn ressemble_a_un_nombre(s: &str) -> bool {
    s.starts_with(|c: char| c.is_ascii_digit() || c == '.')
}

/// Valeur exacte d’un littéral : mantisse entière / 10^(chiffres après la virgule).
pub fn litteral_exact(s: &str) -> Option<BigRational> {
    if !est_litteral(s) {
        return None;
    }

    let (entier, frac) = s.split_once('.').unwrap_or((s, ""));
    let mut chiffres = String::with_capacity(entier.len() + frac.len());
    chiffres.push_str(entier);
    chiffres.push_str(frac);

    let mantisse = BigInt::parse_bytes(chiffres.as_bytes(), 10)?;
    let echelle = BigInt::from(10).pow(frac.len() as u32);
    Some(BigRational::new(mantisse, echelle))
}

/// Littéral -> f64 (arrondi unique depuis la valeur exacte).
pub fn lire_litteral(s: &str) -> Option<f64> {
    litteral_exact(s)?.to_f64()
}
