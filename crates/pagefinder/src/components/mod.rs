pub mod actor;
pub mod animation;
pub mod entity;
pub mod rect;
pub mod sprite;
