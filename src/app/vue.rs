// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// - Clavier : Enter évalue (quand le champ est focus)
// - Les espaces saisis sont retirés avant l’évaluation (le noyau n’en veut pas)
// - Une erreur s’affiche, l’utilisateur continue de taper

use eframe::egui;

use evaluateur_rpn::noyau::format::{format_resultat, CHIFFRES_MAX};
use evaluateur_rpn::noyau::jetons::format_tokens;
use evaluateur_rpn::noyau::verif::{retirer_espaces, verifier};

use super::etat::{AppCalc, Demarche};

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Évaluateur RPN");
                ui.add_space(6.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_resultat(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_variables(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_demarche(ui);
            });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.label("Entrée :");

        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: 2^3^2, -5+3, sqrt(16)+sin(0), 5!, atan2(1,1)")
                .id_salt("entree_edit")
                .code_editor(),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.has_focus() && enter {
            self.eval_via_noyau();
        }

        ui.add_space(6.0);

        ui.horizontal(|ui| {
            // Contrat: C = entrée seulement ; CLR = résultats seulement ; AC = tout
            if ui.button("C").on_hover_text("Efface seulement l’entrée").clicked() {
                self.clear_entree();
            }
            if ui
                .button("CLR")
                .on_hover_text("Efface résultat + erreur + démarche")
                .clicked()
            {
                self.clear_resultats();
            }
            if ui.button("AC").on_hover_text("Remise à zéro totale").clicked() {
                self.reset_total();
            }

            ui.separator();

            if ui.add_sized([64.0, 28.0], egui::Button::new("=")).clicked() {
                self.eval_via_noyau();
            }

            ui.separator();

            ui.label("Décimales :");
            let mut d = self.digits as u32;
            let resp = ui.add(
                egui::DragValue::new(&mut d)
                    .speed(1)
                    .range(0..=CHIFFRES_MAX as u32),
            );
            if resp.changed() {
                self.set_digits(d as usize);
            }

            let mut aoe = self.evaluateur.accuracy();
            if ui
                .checkbox(&mut aoe, "n! exacte")
                .on_hover_text("Décoché : approximation de Stirling")
                .changed()
            {
                self.evaluateur.set_accuracy(aoe);
            }
        });

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, self.erreur.as_str());
        }
    }

    fn ui_resultat(&mut self, ui: &mut egui::Ui) {
        ui.label("Résultat :");
        Self::champ_monospace(ui, "resultat_out", &self.resultat, 1);

        ui.add_space(6.0);

        ui.horizontal(|ui| {
            ui.label("Attendu :");
            ui.add(egui::TextEdit::singleline(&mut self.attendu).desired_width(120.0));
            if ui.button("Vérifier").clicked() {
                self.verifier_via_noyau();
            }
            if !self.verdict.is_empty() {
                ui.monospace(self.verdict.as_str());
            }
        });
    }

    fn ui_variables(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Variables")
            .default_open(false)
            .show(ui, |ui| {
                ui.monospace(self.evaluateur.variables().join(", "));

                let mut a_retirer: Option<String> = None;
                egui::Grid::new("variables_grid")
                    .num_columns(3)
                    .spacing([6.0, 6.0])
                    .show(ui, |ui| {
                        for v in &self.variables {
                            ui.label(v.nom.as_str());
                            let mut valeur = v.cellule.get();
                            if ui.add(egui::DragValue::new(&mut valeur).speed(0.1)).changed() {
                                v.cellule.set(valeur);
                            }
                            if ui.small_button("✖").clicked() {
                                a_retirer = Some(v.nom.clone());
                            }
                            ui.end_row();
                        }
                    });
                if let Some(nom) = a_retirer {
                    self.retirer_variable(&nom);
                }

                ui.horizontal(|ui| {
                    ui.add(
                        egui::TextEdit::singleline(&mut self.nouveau_nom)
                            .desired_width(80.0)
                            .hint_text("nom"),
                    );
                    if ui.button("Ajouter").clicked() {
                        let nom = std::mem::take(&mut self.nouveau_nom);
                        if let Err(msg) = self.ajouter_variable(&nom) {
                            self.set_erreur(msg);
                        }
                    }
                });
            });
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(true)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Jetons", "demarche_jetons", &self.demarche.jetons);
                Self::champ_demarche(ui, "RPN", "demarche_rpn", &self.demarche.rpn);
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        Self::champ_monospace(ui, id, contenu, 2);
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.monospace(contenu);
                });
            });
    }

    /// Démarche de la dernière compilation (vide si rien n’a compilé).
    fn demarche_courante(&self) -> Demarche {
        self.evaluateur
            .last_compiled_form()
            .map(|f| Demarche {
                jetons: format_tokens(&f.infixe),
                rpn: f.texte_rpn.clone(),
            })
            .unwrap_or_default()
    }

    /// Évalue l’entrée via le noyau, puis dépose résultat/démarche (ou l’erreur).
    fn eval_via_noyau(&mut self) {
        let s = retirer_espaces(&self.entree);
        if s.is_empty() {
            self.set_erreur("Entrée vide");
            return;
        }

        match self.evaluateur.eval(&s) {
            Ok(v) => {
                let d = self.demarche_courante();
                self.set_resultat(format_resultat(v, self.digits), d);
            }
            Err(e) => {
                log::warn!("évaluation de {s:?} : {e}");
                self.set_erreur(e.to_string());
            }
        }
    }

    fn verifier_via_noyau(&mut self) {
        let s = retirer_espaces(&self.entree);
        let attendu: f64 = match self.attendu.trim().parse() {
            Ok(v) => v,
            Err(_) => {
                self.set_erreur(format!("valeur attendue invalide : « {} »", self.attendu));
                return;
            }
        };

        match verifier(&mut self.evaluateur, &s, attendu) {
            Ok(v) => {
                let d = self.demarche_courante();
                self.set_resultat(format_resultat(v.obtenu, self.digits), d);
                self.verdict = if v.reussi {
                    "réussi".to_string()
                } else {
                    format!("échec (écart {})", format_resultat((v.obtenu - attendu).abs(), 6))
                };
            }
            Err(e) => {
                log::warn!("vérification de {s:?} : {e}");
                self.set_erreur(e.to_string());
            }
        }
    }
}
