pub mod color;
pub mod cookie;
pub mod time;
