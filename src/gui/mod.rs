pub mod app;
pub mod board;
pub mod theme;
pub mod window;
