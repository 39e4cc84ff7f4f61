mod clone;
mod constants;
mod food;
mod grid;
mod path;
mod session;
mod snake;

pub mod util;

pub use clone::*;
pub use constants::*;
pub use food::*;
pub use grid::*;
pub use path::*;
pub use session::*;
pub use snake::*;
pub use util::PseudoRandom;
