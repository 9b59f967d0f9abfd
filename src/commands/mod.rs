pub mod deploy;
pub mod theme;
