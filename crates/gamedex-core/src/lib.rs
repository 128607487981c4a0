pub mod game;
pub mod index;
pub mod input;
