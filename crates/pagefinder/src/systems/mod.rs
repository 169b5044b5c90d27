pub mod animation;
pub mod debug;
pub mod movement;
pub mod progression;
pub mod render;
