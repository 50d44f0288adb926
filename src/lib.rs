pub mod cards;
pub mod config;
pub mod falk_lyom;
pub mod generation;
pub mod history;
pub mod profile;
pub mod readings;
pub mod scoring;
pub mod storage;

pub use config::Config;
pub use readings::Readings;
