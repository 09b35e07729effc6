pub mod config;
pub mod db;
pub mod debounce;
pub mod error;
pub mod menu;
pub mod navigation;
pub mod profile;
pub mod screens;
pub mod state;
pub mod storage;
