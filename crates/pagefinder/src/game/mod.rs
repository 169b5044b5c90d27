pub mod config;
pub mod hud;
pub mod level;
pub mod pagefinder;
pub mod prefab;
pub mod sounds;
