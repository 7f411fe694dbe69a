pub mod characteristic;
pub mod descriptor;
pub mod properties;
pub mod service;
