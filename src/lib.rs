// Date/Time Picker Library
// Exports all modules for testing and reuse

pub mod models;
pub mod services;
pub mod ui_egui; // egui presentation shell and demo host
pub mod utils;
