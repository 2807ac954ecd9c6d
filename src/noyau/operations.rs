// src/noyau/operations.rs
//
// Implémentations numériques des opérateurs.
// Signature commune : (a, b, aoe) pour les binaires, (x, aoe) pour les unaires.
// `aoe` = précision plutôt qu’efficacité (ne sert qu’à la factorielle).

use std::f64::consts::{E, PI};

use num_bigint::BigUint;
use num_traits::{One, ToPrimitive};

/// Au-delà, n! dépasse f64::MAX.
const FACTORIELLE_MAX: u32 = 170;

pub fn add(a: f64, b: f64, _aoe: bool) -> f64 {
    a + b
}

pub fn sub(a: f64, b: f64, _aoe: bool) -> f64 {
    a - b
}

pub fn mul(a: f64, b: f64, _aoe: bool) -> f64 {
    a * b
}

pub fn div(a: f64, b: f64, _aoe: bool) -> f64 {
    a / b
}

pub fn pow(a: f64, b: f64, _aoe: bool) -> f64 {
    a.powf(b)
}

/// Reste entier : les deux opérandes sont tronqués avant le calcul.
/// Diviseur nul => NaN.
pub fn modulo(a: f64, b: f64, _aoe: bool) -> f64 {
    a.trunc() % b.trunc()
}

pub fn moins_unaire(x: f64, _aoe: bool) -> f64 {
    -x
}

/// x!
/// - aoe + x entier : produit exact (BigUint), converti une seule fois
/// - sinon : approximation de Stirling sqrt(2πx)·(x/e)^x
pub fn factorielle(x: f64, aoe: bool) -> f64 {
    if x < 0.0 {
        return f64::NAN;
    }
    if aoe && x.fract() == 0.0 {
        if x > FACTORIELLE_MAX as f64 {
            return f64::INFINITY;
        }
        return factorielle_exacte(x as u32)
            .to_f64()
            .unwrap_or(f64::INFINITY);
    }
    stirling(x)
}

fn factorielle_exacte(n: u32) -> BigUint {
    let mut acc = BigUint::one();
    for i in 2..=n {
        acc *= i;
    }
    acc
}

fn stirling(x: f64) -> f64 {
    (2.0 * PI * x).sqrt() * (x / E).powf(x)
}
