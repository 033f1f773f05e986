pub mod classify;
pub mod codon;
pub mod orf;
pub mod sequence;

pub use classify::*;
pub use orf::*;
pub use sequence::*;
