pub mod colors;
pub mod events;
pub mod logging;
pub mod print;
