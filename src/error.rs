use thiserror::Error;

#[derive(Debug, Error)]
pub enum WeaselError {
    #[error("target must contain at least one symbol")]
    EmptyTarget,

    #[error("alphabet needs at least 2 distinct symbols, got {distinct}")]
    AlphabetTooSmall { distinct: usize },

    #[error("target symbol {symbol:?} at position {position} is not in the alphabet")]
    SymbolNotInAlphabet { symbol: char, position: usize },

    #[error("mutation rate must be within [0, 1], got {0}")]
    InvalidMutationRate(f64),

    #[error("offspring count must be greater than 0")]
    NoOffspring,

    #[error("a mutation rate of 0 never reaches the target; set max_generations")]
    UnboundedZeroRate,

    #[error("parent has {actual} symbols but the target has {expected}")]
    ParentLengthMismatch { expected: usize, actual: usize },

    #[error("generation cap {cap} reached with {distance} positions still wrong")]
    GenerationCapReached { cap: u64, distance: usize },

    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(String),

    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Toml(#[from] toml::de::Error),
}
