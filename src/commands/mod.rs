mod check;
mod clean;
mod generate;

pub use check::check;
pub use clean::clean;
pub use generate::generate;
