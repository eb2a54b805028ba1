pub mod module;
pub mod tags;
pub mod version;
