use anchor_lang::prelude::*;
use anchor_lang::solana_program::{
    ed25519_program,
    hash::hashv,
    instruction::Instruction,
    sysvar::instructions::{load_current_index_checked, load_instruction_at_checked},
};

use crate::{
    constants::{PERMIT_DOMAIN_TAG, PERMIT_TYPE_TAG},
    error::ErrorCode,
};

/// Fields of a gasless approval signed by the share owner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PermitPayload {
    pub owner: Pubkey,
    pub spender: Pubkey,
    pub value: u64,
    pub nonce: u64,
    pub deadline: i64,
}

pub const PERMIT_MESSAGE_LEN: usize = 64;

const ED25519_HEADER_LEN: usize = 16;
const CURRENT_INSTRUCTION: u16 = u16::MAX;

pub fn domain_separator(pool: &Pubkey, name: &[u8]) -> [u8; 32] {
    hashv(&[PERMIT_DOMAIN_TAG, crate::ID.as_ref(), pool.as_ref(), name]).to_bytes()
}

pub fn permit_message(domain: &[u8; 32], payload: &PermitPayload) -> [u8; PERMIT_MESSAGE_LEN] {
    let struct_hash = hashv(&[
        PERMIT_TYPE_TAG,
        payload.owner.as_ref(),
        payload.spender.as_ref(),
        &payload.value.to_le_bytes(),
        &payload.nonce.to_le_bytes(),
        &payload.deadline.to_le_bytes(),
    ])
    .to_bytes();

    let mut message = [0u8; PERMIT_MESSAGE_LEN];
    message[..32].copy_from_slice(domain);
    message[32..].copy_from_slice(&struct_hash);
    message
}

/// The Ed25519 verification must sit immediately before the current instruction.
pub fn load_preceding_instruction(instructions_sysvar: &AccountInfo<'_>) -> Result<Instruction> {
    let current = load_current_index_checked(instructions_sysvar)? as usize;
    require!(current > 0, ErrorCode::InvalidSignature);
    Ok(load_instruction_at_checked(current - 1, instructions_sysvar)?)
}

/// Checks that `ix` is an Ed25519 program verification of `signer` over `message`
/// with every offset pointing into the instruction's own data. The runtime has
/// already verified the signature itself when this instruction executes.
pub fn verify_ed25519_instruction(ix: &Instruction, signer: &Pubkey, message: &[u8]) -> Result<()> {
    require_keys_eq!(ix.program_id, ed25519_program::ID, ErrorCode::InvalidSignature);

    let data = ix.data.as_slice();
    require!(data.len() >= ED25519_HEADER_LEN, ErrorCode::InvalidSignature);
    require!(data[0] == 1, ErrorCode::InvalidSignature);

    let read_u16 = |at: usize| u16::from_le_bytes([data[at], data[at + 1]]);
    let signature_ix = read_u16(4);
    let pubkey_offset = read_u16(6) as usize;
    let pubkey_ix = read_u16(8);
    let message_offset = read_u16(10) as usize;
    let message_size = read_u16(12) as usize;
    let message_ix = read_u16(14);

    require!(
        signature_ix == CURRENT_INSTRUCTION
            && pubkey_ix == CURRENT_INSTRUCTION
            && message_ix == CURRENT_INSTRUCTION,
        ErrorCode::InvalidSignature
    );

    let signed_key = data
        .get(pubkey_offset..pubkey_offset + 32)
        .ok_or_else(|| error!(ErrorCode::InvalidSignature))?;
    let signed_message = data
        .get(message_offset..message_offset + message_size)
        .ok_or_else(|| error!(ErrorCode::InvalidSignature))?;

    require!(signed_key == signer.as_ref(), ErrorCode::InvalidSignature);
    require!(signed_message == message, ErrorCode::InvalidSignature);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ed25519_ix(signer: &Pubkey, message: &[u8]) -> Instruction {
        let pubkey_offset = ED25519_HEADER_LEN;
        let signature_offset = pubkey_offset + 32;
        let message_offset = signature_offset + 64;

        let mut data = vec![1u8, 0];
        for value in [
            signature_offset as u16,
            CURRENT_INSTRUCTION,
            pubkey_offset as u16,
            CURRENT_INSTRUCTION,
            message_offset as u16,
            message.len() as u16,
            CURRENT_INSTRUCTION,
        ] {
            data.extend_from_slice(&value.to_le_bytes());
        }
        data.extend_from_slice(signer.as_ref());
        data.extend_from_slice(&[7u8; 64]);
        data.extend_from_slice(message);

        Instruction {
            program_id: ed25519_program::ID,
            accounts: vec![],
            data,
        }
    }

    fn payload(owner: Pubkey, nonce: u64) -> PermitPayload {
        PermitPayload {
            owner,
            spender: Pubkey::new_unique(),
            value: 1_000_000,
            nonce,
            deadline: 1_700_000_000,
        }
    }

    #[test]
    fn accepts_matching_verification() {
        let pool = Pubkey::new_unique();
        let owner = Pubkey::new_unique();
        let domain = domain_separator(&pool, b"stUSD");
        let message = permit_message(&domain, &payload(owner, 0));

        verify_ed25519_instruction(&ed25519_ix(&owner, &message), &owner, &message).unwrap();
    }

    #[test]
    fn rejects_other_signer() {
        let owner = Pubkey::new_unique();
        let attacker = Pubkey::new_unique();
        let domain = domain_separator(&Pubkey::new_unique(), b"stUSD");
        let message = permit_message(&domain, &payload(owner, 0));

        let err =
            verify_ed25519_instruction(&ed25519_ix(&attacker, &message), &owner, &message).unwrap_err();
        assert_eq!(err, ErrorCode::InvalidSignature.into());
    }

    #[test]
    fn rejects_replayed_nonce() {
        let owner = Pubkey::new_unique();
        let domain = domain_separator(&Pubkey::new_unique(), b"stUSD");
        let first = payload(owner, 0);
        let signed = permit_message(&domain, &first);
        let next = permit_message(&domain, &PermitPayload { nonce: 1, ..first });

        let err = verify_ed25519_instruction(&ed25519_ix(&owner, &signed), &owner, &next).unwrap_err();
        assert_eq!(err, ErrorCode::InvalidSignature.into());
    }

    #[test]
    fn rejects_foreign_program() {
        let owner = Pubkey::new_unique();
        let message = [3u8; PERMIT_MESSAGE_LEN];
        let mut ix = ed25519_ix(&owner, &message);
        ix.program_id = Pubkey::new_unique();

        let err = verify_ed25519_instruction(&ix, &owner, &message).unwrap_err();
        assert_eq!(err, ErrorCode::InvalidSignature.into());
    }

    #[test]
    fn domain_binds_pool() {
        assert_ne!(
            domain_separator(&Pubkey::new_unique(), b"stUSD"),
            domain_separator(&Pubkey::new_unique(), b"stUSD")
        );
    }
}
