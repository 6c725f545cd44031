// Utility modules shared by models, services and the egui shell

pub mod clock;
pub mod date;
