// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Affichage : aperçu de l'expression + notation en grand
// - Pavé : table statique PAVE, grille de 4 colonnes
// - Clavier : chiffres/opérateurs/point/égal en texte, Enter évalue,
//   Escape remet à zéro (équivalent du bouton "C")

use eframe::egui;

use super::etat::{AppCalc, RoleTouche, PAVE};

const COLONNES_PAVE: usize = 4;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité "calc"
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.heading("Calculatrice tactile");
        ui.add_space(6.0);

        self.ui_affichage(ui);

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        self.ui_pave(ui);
    }

    fn ui_affichage(&mut self, ui: &mut egui::Ui) {
        // Aperçu : la formule complète, éventuellement incomplète
        Self::cadre_affichage(ui, "apercu_expression", |ui| {
            ui.monospace(&self.saisie.expression);
        });

        ui.add_space(4.0);

        // Notation : la valeur active, en grand
        Self::cadre_affichage(ui, "notation_active", |ui| {
            ui.label(
                egui::RichText::new(self.saisie.notation.as_str())
                    .monospace()
                    .size(28.0),
            );
        });
    }

    fn cadre_affichage(ui: &mut egui::Ui, id: &str, contenu: impl FnOnce(&mut egui::Ui)) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    // alignement à droite, comme une calculatrice de poche
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), contenu);
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_tactile")
            .num_columns(COLONNES_PAVE)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for (i, (etiquette, role)) in PAVE.iter().enumerate() {
                    self.bouton_touche(ui, etiquette, *role);
                    if i % COLONNES_PAVE == COLONNES_PAVE - 1 {
                        ui.end_row();
                    }
                }
                ui.end_row();
            });
    }

    fn bouton_touche(&mut self, ui: &mut egui::Ui, etiquette: &str, role: RoleTouche) {
        let resp = ui.add_sized([56.0, 40.0], egui::Button::new(etiquette));
        if resp.clicked() {
            self.applique(role);
        }
    }

    /// Dispatch clavier : chaque touche connue est routée comme un clic
    /// de bouton (même chemin, mêmes opérations de machine).
    pub fn gere_clavier(&mut self, ctx: &egui::Context) {
        let evenements = ctx.input(|i| i.events.clone());
        for evenement in evenements {
            match evenement {
                egui::Event::Text(texte) => {
                    for c in texte.chars() {
                        if let Some(role) = Self::role_pour_char(c) {
                            self.applique(role);
                        }
                    }
                }
                egui::Event::Key {
                    key: egui::Key::Enter,
                    pressed: true,
                    ..
                } => {
                    self.applique(RoleTouche::Egal);
                }
                egui::Event::Key {
                    key: egui::Key::Escape,
                    pressed: true,
                    ..
                } => {
                    self.applique(RoleTouche::RemiseAZero);
                }
                _ => {}
            }
        }
    }
}
