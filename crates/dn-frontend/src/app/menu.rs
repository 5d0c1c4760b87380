//! Menu bar rendering

/// Actions triggered from the menu bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    OpenPreferences,
    GoHome,
}

/// Render the menu bar and return any triggered action
pub fn render_menu_bar(ctx: &egui::Context) -> Option<MenuAction> {
    let mut menu_action = None;

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Home").clicked() {
                    menu_action = Some(MenuAction::GoHome);
                    ui.close_menu();
                }
                if ui.button("Preferences...").clicked() {
                    menu_action = Some(MenuAction::OpenPreferences);
                    ui.close_menu();
                }
                ui.separator();
                if ui.button("Exit").clicked() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });
        });
    });

    menu_action
}
