pub mod tokenomics;

pub use tokenomics::{GenerationError, TokenomicsService};
