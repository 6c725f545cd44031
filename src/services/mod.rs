// Service module exports

pub mod calendar_grid;
pub mod dismissal;
pub mod field;
pub mod overlay;
pub mod placement;
pub mod selection;
pub mod settings;
pub mod time_slots;
