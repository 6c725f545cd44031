// Module exports for models

pub mod cursor;
pub mod draft;
pub mod settings;
pub mod value;
