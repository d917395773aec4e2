use egui::{Align2, Checkbox, Color32, ComboBox, Context, RichText, Sense, Ui};
use log::{debug, error};
use std::sync::{Arc, Mutex};

use super::App;
use crate::plotting::{export_png_async, render_rgb, variation_color, ChartStyle};
use crate::types::{Granularity, LineStyle, Theme};

/// Draw the main application UI
pub fn draw_ui(app: &mut App, ctx: &Context, app_arc: Arc<Mutex<App>>) {
    apply_theme(app, ctx);

    egui::SidePanel::left("side_panel").show(ctx, |ui| {
        ui.heading("Chart Options");
        ui.separator();

        variation_selector(app, ui);

        ui.label("Granularity:");
        let mut granularity = app.granularity;
        ComboBox::new("granularity_selector", "")
            .selected_text(granularity.label())
            .show_ui(ui, |ui| {
                for option in Granularity::ALL {
                    ui.selectable_value(&mut granularity, option, option.label());
                }
            });
        app.set_granularity(granularity);

        ui.label("Line style:");
        let mut line_style = app.line_style;
        ComboBox::new("line_style_selector", "")
            .selected_text(line_style.label())
            .show_ui(ui, |ui| {
                for option in LineStyle::ALL {
                    ui.selectable_value(&mut line_style, option, option.label());
                }
            });
        app.set_line_style(line_style);

        ui.separator();

        let theme_label = match app.theme {
            Theme::Light => "Dark theme",
            Theme::Dark => "Light theme",
        };
        if ui.button(theme_label).clicked() {
            app.toggle_theme();
        }

        let fullscreen_label = if app.fullscreen.is_active(ctx) {
            "Exit fullscreen"
        } else {
            "Fullscreen"
        };
        if ui.button(fullscreen_label).clicked() && !app.fullscreen.toggle(ctx) {
            app.status_message = Some("Fullscreen is not available".to_string());
        }

        if ui
            .add_enabled(!app.is_exporting, egui::Button::new("Export PNG"))
            .clicked()
        {
            start_export(app, ctx, app_arc);
        }
        if app.is_exporting {
            ui.spinner();
        }

        ui.separator();
        ui.label("Zoom:");
        ui.horizontal(|ui| {
            if ui
                .add_enabled(app.zoom.can_zoom_out(), egui::Button::new("-"))
                .on_hover_text("Zoom out")
                .clicked()
            {
                app.zoom_out();
            }
            if ui
                .add_enabled(app.zoom.can_zoom_in(), egui::Button::new("+"))
                .on_hover_text("Zoom in")
                .clicked()
            {
                app.zoom_in();
            }
            if ui
                .add_enabled(app.zoom.can_zoom_out(), egui::Button::new("Reset"))
                .on_hover_text("Reset zoom")
                .clicked()
            {
                app.reset_zoom();
            }
        });
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading("A/B Test Results");
        ui.label("Conversion Rate Over Time");
        ui.separator();

        let status_height = ui.text_style_height(&egui::TextStyle::Body) * 2.0;
        let available = ui.available_size() - egui::vec2(0.0, status_height);
        let ppp = ctx.pixels_per_point();
        app.set_chart_size((
            (available.x * ppp).max(1.0) as u32,
            (available.y * ppp).max(1.0) as u32,
        ));

        if app.update_needed {
            update_chart_texture(app, ctx);
            app.update_needed = false;
        }

        if let Some(texture) = &app.chart_texture {
            let response = ui.add(
                egui::Image::new(texture)
                    .fit_to_exact_size(available.max(egui::vec2(1.0, 1.0)))
                    .sense(Sense::hover()),
            );
            chart_tooltip(app, response);
        }

        ui.separator();
        if let Some(status) = &app.status_message {
            ui.label(status.as_str());
        }
    });

    if let Some(message) = app.error_message.clone() {
        egui::Window::new("Export failed")
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(message);
                if ui.button("OK").clicked() {
                    app.dismiss_error();
                }
            });
    }
}

/// Pin egui to the app theme so a change of the OS theme does not override it.
fn apply_theme(app: &mut App, ctx: &Context) {
    if app.applied_theme != Some(app.theme) {
        ctx.set_theme(match app.theme {
            Theme::Light => egui::Theme::Light,
            Theme::Dark => egui::Theme::Dark,
        });
        app.applied_theme = Some(app.theme);
    }
}

fn variation_selector(app: &mut App, ui: &mut Ui) {
    ui.label("Variations:");
    let summary = app.selection.summary(&app.dataset.variations);
    let mut toggled = None;
    ComboBox::new("variation_selector", "")
        .selected_text(summary)
        .show_ui(ui, |ui| {
            for variation in &app.dataset.variations {
                let mut checked = app.selection.contains(&variation.id);
                let enabled = !app.selection.is_locked(&variation.id);
                if ui
                    .add_enabled(enabled, Checkbox::new(&mut checked, variation.name.as_str()))
                    .changed()
                {
                    toggled = Some(variation.id.clone());
                }
            }
        });
    if let Some(id) = toggled {
        app.toggle_variation(&id);
    }
}

fn update_chart_texture(app: &mut App, ctx: &Context) {
    let view = app.chart_view();
    match render_rgb(&view, app.chart_size, &ChartStyle::default()) {
        Ok((pixels, plot_area)) => {
            let (width, height) = app.chart_size;
            let image = egui::ColorImage::from_rgb([width as usize, height as usize], &pixels);
            match &mut app.chart_texture {
                Some(texture) => texture.set(image, egui::TextureOptions::LINEAR),
                None => {
                    app.chart_texture =
                        Some(ctx.load_texture("chart_texture", image, egui::TextureOptions::LINEAR));
                }
            }
            app.plot_area = Some(plot_area);
            debug!("Rendered chart at {}x{}", width, height);
        }
        Err(e) => error!("Plotting error: {}", e),
    }
}

fn chart_tooltip(app: &App, response: egui::Response) {
    let (Some(pos), Some(plot_area)) = (response.hover_pos(), &app.plot_area) else {
        return;
    };
    let rect = response.rect;
    if rect.width() <= 0.0 {
        return;
    }
    let pixel_x = f64::from((pos.x - rect.left()) / rect.width()) * f64::from(app.chart_size.0);
    let Some(tooltip) = plot_area.index_at(pixel_x).and_then(|i| app.tooltip(i)) else {
        return;
    };

    response.on_hover_ui_at_pointer(|ui| {
        ui.label(RichText::new(&tooltip.header).strong());
        for row in &tooltip.rows {
            let color = variation_color(row.color_index);
            ui.horizontal(|ui| {
                ui.colored_label(Color32::from_rgb(color.0, color.1, color.2), "●");
                ui.label(format!("{}: {}", row.name, row.label));
                if row.is_winner {
                    ui.label(RichText::new("★").color(Color32::GOLD));
                }
            });
        }
    });
}

fn start_export(app: &mut App, ctx: &Context, app_arc: Arc<Mutex<App>>) {
    let today = chrono::Local::now().date_naive();
    let Some(job) = app.begin_export(today) else {
        return;
    };
    let ctx = ctx.clone();

    tokio::spawn(async move {
        let result = export_png_async(job).await;
        match app_arc.lock() {
            Ok(mut app) => app.finish_export(result),
            Err(_) => error!("Failed to acquire app lock after export"),
        }
        ctx.request_repaint();
    });
}
