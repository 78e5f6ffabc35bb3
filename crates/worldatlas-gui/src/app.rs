use eframe::egui;
use egui::{Color32, RichText, TextureHandle, TextureOptions};
use worldatlas_core::{Atlas, Browser, Country, FlagImage, FlagSource, HttpFlagSource, NoFlags};

pub const WINDOW_TITLE: &str = "Continents and Countries Information System";

const TITLE_COLOR: Color32 = Color32::from_rgb(25, 25, 112);
const ACCENT_COLOR: Color32 = Color32::from_rgb(70, 130, 180);
const LABEL_COLOR: Color32 = Color32::from_rgb(47, 79, 79);
const PANEL_FILL: Color32 = Color32::from_rgb(245, 245, 250);
const FLAG_FRAME_FILL: Color32 = Color32::from_rgb(240, 248, 255);
const FLAG_MAX_SIZE: egui::Vec2 = egui::vec2(250.0, 140.0);

pub struct AtlasApp {
    browser: Browser<Box<dyn FlagSource>>,
    flag_texture: Option<TextureHandle>,
    /// `Browser::flag_revision` the texture was built from.
    texture_revision: u64,
}

impl AtlasApp {
    pub fn new(cc: &eframe::CreationContext<'_>, atlas: Atlas) -> Self {
        apply_theme(&cc.egui_ctx);

        let flags: Box<dyn FlagSource> = match HttpFlagSource::new() {
            Ok(http) => Box::new(http),
            Err(error) => {
                tracing::warn!(%error, "HTTP client unavailable, flags disabled");
                Box::new(NoFlags)
            }
        };

        Self {
            browser: Browser::new(atlas, flags),
            flag_texture: None,
            texture_revision: 0,
        }
    }

    fn sync_flag_texture(&mut self, ctx: &egui::Context) {
        if self.browser.flag_revision() == self.texture_revision {
            return;
        }
        self.texture_revision = self.browser.flag_revision();
        self.flag_texture = self.browser.flag().map(|flag| upload(ctx, flag));
    }

    fn selector_panel(&mut self, ui: &mut egui::Ui) {
        let mut picked_continent = None;
        let mut picked_country = None;

        ui.label(section_label("Select Continent:"));
        let current = self
            .browser
            .current_continent()
            .map(|c| c.name.clone())
            .unwrap_or_default();
        egui::ComboBox::from_id_salt("continent")
            .selected_text(current.as_str())
            .width(ui.available_width())
            .show_ui(ui, |ui| {
                for name in self.browser.continent_names() {
                    if ui.selectable_label(name == current, name).clicked() {
                        picked_continent = Some(name.to_string());
                    }
                }
            });

        ui.add_space(16.0);
        ui.label(section_label("Countries:"));

        let selected = self.browser.details().map(|c| c.name.clone());
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for name in self.browser.country_names() {
                    let is_selected = selected.as_deref() == Some(name);
                    if ui.selectable_label(is_selected, name).clicked() {
                        picked_country = Some(name.to_string());
                    }
                }
            });

        if let Some(name) = picked_continent {
            self.browser.select_continent(&name);
        }
        if let Some(name) = picked_country {
            self.browser.select_country(&name);
        }
    }

    fn details_panel(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new("COUNTRY INFORMATION")
                    .size(18.0)
                    .strong()
                    .color(TITLE_COLOR),
            );
            ui.add_space(12.0);

            egui::Frame::new()
                .fill(FLAG_FRAME_FILL)
                .inner_margin(5.0)
                .show(ui, |ui| {
                    ui.set_min_size(FLAG_MAX_SIZE);
                    if let Some(texture) = &self.flag_texture {
                        ui.centered_and_justified(|ui| {
                            ui.add(egui::Image::new(texture).max_size(FLAG_MAX_SIZE));
                        });
                    }
                });
        });

        ui.add_space(20.0);

        let empty = Country::default();
        let country = self.browser.details().unwrap_or(&empty);
        egui::Grid::new("country-details")
            .num_columns(2)
            .spacing([24.0, 14.0])
            .show(ui, |ui| {
                for (label, value) in [
                    ("Country:", &country.name),
                    ("Capital:", &country.capital),
                    ("Population:", &country.population),
                    ("Area:", &country.area),
                    ("Currency:", &country.currency),
                ] {
                    ui.label(section_label(label));
                    ui.label(RichText::new(value).size(15.0));
                    ui.end_row();
                }
            });
    }
}

impl eframe::App for AtlasApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("title").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(8.0);
                ui.label(
                    RichText::new("WORLD CONTINENTS & COUNTRIES")
                        .size(26.0)
                        .strong()
                        .color(TITLE_COLOR),
                );
                ui.add_space(8.0);
            });
        });

        egui::SidePanel::left("selector")
            .resizable(false)
            .exact_width(280.0)
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.selector_panel(ui);
            });

        // Selection may have changed the flag during this frame.
        self.sync_flag_texture(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(12.0);
            self.details_panel(ui);
        });
    }
}

fn section_label(text: &str) -> RichText {
    RichText::new(text).size(15.0).strong().color(LABEL_COLOR)
}

fn upload(ctx: &egui::Context, flag: &FlagImage) -> TextureHandle {
    let image = egui::ColorImage::from_rgba_unmultiplied(flag.size(), &flag.rgba);
    ctx.load_texture("flag", image, TextureOptions::LINEAR)
}

fn apply_theme(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::light();
    visuals.selection.bg_fill = ACCENT_COLOR;
    visuals.selection.stroke.color = Color32::WHITE;
    visuals.panel_fill = PANEL_FILL;
    ctx.set_visuals(visuals);
}
