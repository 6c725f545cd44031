// Date/time picker demo
// Main entry point

use datetime_picker::services::settings::SettingsService;
use datetime_picker::ui_egui::PickerDemoApp;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting date/time picker demo");

    let settings = SettingsService::from_environment()
        .map(|service| service.load_or_default())
        .unwrap_or_default();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 560.0])
            .with_min_inner_size([480.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Date/Time Picker",
        options,
        Box::new(move |_cc| Ok(Box::new(PickerDemoApp::new(settings)))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run the demo window: {}", e))
}
