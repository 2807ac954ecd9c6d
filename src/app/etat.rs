//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, résultat, erreur, démarche,
//! variables liées, vérification) et offrir des opérations simples (C/CLR/AC).
//!
//! Contrats :
//! - Aucune évaluation ici : l’évaluateur est seulement détenu, vue.rs l’appelle.
//! - Les variables de l’interface partagent leur cellule avec l’évaluateur.

use evaluateur_rpn::noyau::format::CHIFFRES_MAX;
use evaluateur_rpn::{cellule, Cellule, Evaluator};

/// Décimales affichées par défaut.
const DIGITS_DEFAUT: usize = 10;

#[derive(Clone, Default, Debug)]
pub struct Demarche {
    pub jetons: String,
    pub rpn: String,
}

/// Une variable saisie dans l’interface (la cellule est aussi dans l’évaluateur).
#[derive(Clone, Debug)]
pub struct VarUi {
    pub nom: String,
    pub cellule: Cellule,
}

#[derive(Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub resultat: String,
    pub erreur: String,

    // --- démarche (panneau d’explication) ---
    pub demarche: Demarche,

    // --- noyau ---
    pub evaluateur: Evaluator,
    pub variables: Vec<VarUi>,
    pub nouveau_nom: String,

    // --- vérification (valeur attendue saisie à la main) ---
    pub attendu: String,
    pub verdict: String,

    // --- paramètres ---
    pub digits: usize,

    // --- UX ---
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            resultat: String::new(),
            erreur: String::new(),
            demarche: Demarche::default(),
            evaluateur: Evaluator::new(),
            variables: Vec::new(),
            nouveau_nom: String::new(),
            attendu: String::new(),
            verdict: String::new(),
            digits: DIGITS_DEFAUT,
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + résultats + digits + variables utilisateur).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
        for v in self.variables.drain(..) {
            self.evaluateur.unregister_variable(&v.nom);
        }
        self.digits = DIGITS_DEFAUT;
        self.focus_entree = true;
    }

    /// C : effacer seulement l’entrée.
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// CLR : effacer résultat + erreur + démarche + verdict.
    pub fn clear_resultats(&mut self) {
        self.resultat.clear();
        self.erreur.clear();
        self.verdict.clear();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// On garde le dernier résultat affiché ; la démarche n’est plus fiable.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.verdict.clear();
        self.focus_entree = true;
    }

    pub fn set_resultat(&mut self, resultat: impl Into<String>, demarche: Demarche) {
        self.erreur.clear();
        self.resultat = resultat.into();
        self.demarche = demarche;
        self.focus_entree = true;
    }

    pub fn set_digits(&mut self, digits: usize) {
        self.digits = digits.min(CHIFFRES_MAX);
        self.focus_entree = true;
    }

    /// Ajoute (ou remet à 0) une variable `nom` ; refuse les noms non alphabétiques.
    pub fn ajouter_variable(&mut self, nom: &str) -> Result<(), String> {
        let nom = nom.trim();
        if nom.is_empty() || !nom.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(format!("nom de variable invalide : « {nom} » (lettres seulement)"));
        }

        let c = cellule(0.0);
        self.evaluateur.register_variable(nom, c.clone());
        match self.variables.iter_mut().find(|v| v.nom == nom) {
            Some(v) => v.cellule = c,
            None => self.variables.push(VarUi {
                nom: nom.to_string(),
                cellule: c,
            }),
        }
        Ok(())
    }

    pub fn retirer_variable(&mut self, nom: &str) {
        self.evaluateur.unregister_variable(nom);
        self.variables.retain(|v| v.nom != nom);
    }
}
