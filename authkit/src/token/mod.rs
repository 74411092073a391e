pub mod codec;
pub mod errors;

pub use codec::TokenCodec;
pub use errors::TokenError;
