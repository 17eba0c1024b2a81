use thiserror::Error;

/// Errors raised while building host-facing values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TradingError {
    /// A target quantity was negative, NaN or infinite.
    #[error("Invalid target quantity {quantity} for {ticker}")]
    InvalidQuantity { ticker: String, quantity: f64 },

    /// A bar set did not carry a bar for the requested ticker.
    #[error("No bar for {ticker} at offset {offset} from the latest interval")]
    MissingBar { ticker: String, offset: usize },
}

pub type Result<T> = std::result::Result<T, TradingError>;
