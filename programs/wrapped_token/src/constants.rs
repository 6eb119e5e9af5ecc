pub const WRAPPER_SEED: &[u8] = b"wrapper";
pub const WRAPPER_AUTH_SEED: &[u8] = b"wrapper-auth";
pub const WRAPPED_MINT_SEED: &[u8] = b"wrapped-mint";
