mod colors;
mod playfield;
mod snake_app;

pub use snake_app::SnakeApp;
