// src/noyau/variables.rs
//
// Registre des variables : nom -> cellule partagée.
// L’appelant garde un clone de la cellule et la modifie entre deux `eval` ;
// le registre garde l’autre clone (pas de référence pendante possible).
//
// Invariant : `cellules` et `noms` contiennent exactement les mêmes noms.
// `noms` garde l’ordre d’enregistrement (built-ins d’abord).
//
// La cellule est `Send + Sync` : un évaluateur peut passer d’un thread à
// l’autre derrière un verrou tenu par l’appelant.

use std::collections::HashMap;
use std::f64::consts::{E, PI};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use super::erreur::ErreurEval;

/// Cellule numérique partagée entre l’appelant et le registre.
///
/// Le f64 est stocké par ses bits ; chaque `get`/`set` est une lecture ou
/// une écriture atomique complète (jamais de valeur à moitié écrite).
/// Cloner partage la même cellule.
#[derive(Clone)]
pub struct Cellule(Arc<AtomicU64>);

impl Cellule {
    pub fn new(valeur: f64) -> Self {
        Self(Arc::new(AtomicU64::new(valeur.to_bits())))
    }

    pub fn get(&self) -> f64 {
        f64::from_bits(self.0.load(Ordering::Acquire))
    }

    pub fn set(&self, valeur: f64) {
        self.0.store(valeur.to_bits(), Ordering::Release);
    }
}

impl fmt::Debug for Cellule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Cellule").field(&self.get()).finish()
    }
}

/// Raccourci : nouvelle cellule initialisée.
pub fn cellule(valeur: f64) -> Cellule {
    Cellule::new(valeur)
}

#[derive(Clone, Debug)]
pub struct Registre {
    cellules: HashMap<String, Cellule>,
    noms: Vec<String>,
}

impl Default for Registre {
    fn default() -> Self {
        let mut r = Self {
            cellules: HashMap::new(),
            noms: Vec::new(),
        };
        // pi et e : stockage interne, mais écrasables par l’appelant
        r.register("pi", cellule(PI));
        r.register("e", cellule(E));
        r
    }
}

impl Registre {
    /// Insère ou remplace la cellule liée à `nom` (idempotent sur la liste des noms).
    pub fn register(&mut self, nom: &str, c: Cellule) {
        if self.cellules.insert(nom.to_string(), c).is_none() {
            self.noms.push(nom.to_string());
        }
        log::debug!("variable enregistrée : {nom}");
    }

    /// Retire `nom` ; absent => rien à faire (pas une erreur).
    pub fn unregister(&mut self, nom: &str) {
        if self.cellules.remove(nom).is_some() {
            self.noms.retain(|n| n != nom);
            log::debug!("variable retirée : {nom}");
        }
    }

    pub fn contient(&self, nom: &str) -> bool {
        self.cellules.contains_key(nom)
    }

    /// Valeur courante de la cellule liée à `nom`.
    pub fn lookup(&self, nom: &str) -> Result<f64, ErreurEval> {
        self.cellules
            .get(nom)
            .map(|c| c.get())
            .ok_or_else(|| ErreurEval::UnknownVariable {
                nom: nom.to_string(),
            })
    }

    pub fn noms(&self) -> &[String] {
        &self.noms
    }
}
