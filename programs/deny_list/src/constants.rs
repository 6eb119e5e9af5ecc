pub const MAX_BLOCKED: usize = 128;
pub const BLOCK_LIST_SEED: &[u8] = b"block-list";
