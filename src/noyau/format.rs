// src/noyau/format.rs
//
// Affichage d’un résultat f64 pour l’interface.

/// Au-delà, les décimales d’un f64 ne sont plus significatives.
pub const CHIFFRES_MAX: usize = 17;

/// Formate `x` avec au plus `chiffres` décimales, sans zéros inutiles.
/// - NaN      -> "indéfini"
/// - ±inf     -> "∞" / "-∞"
/// - -0       -> "0"
pub fn format_resultat(x: f64, chiffres: usize) -> String {
    if x.is_nan() {
        return "indéfini".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let chiffres = chiffres.min(CHIFFRES_MAX);
    let mut s = format!("{x:.chiffres$}");

    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }

    // "-0" après arrondi
    if s.chars().all(|c| c == '-' || c == '0') {
        return "0".to_string();
    }
    s
}
