pub const REGISTRY_SEED: &[u8] = b"registry";
pub const REGISTRY_AUTH_SEED: &[u8] = b"registry-auth";
pub const MAX_POOLS: usize = 64;
