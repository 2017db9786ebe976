pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown {quantity} unit `{symbol}`")]
    UnknownUnit { quantity: &'static str, symbol: String },

    #[error("cannot parse {quantity} from `{text}`")]
    InvalidScalar { quantity: &'static str, text: String },

    #[error("cannot parse {quantity} from an empty string")]
    Empty { quantity: &'static str },
}
