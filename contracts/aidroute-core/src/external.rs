use soroban_sdk::contractclient;

/// Interface of the mission verifier contract the ledger consults before
/// releasing funds. Witness accumulation lives entirely in that contract;
/// the ledger only ever asks for the final boolean.
#[allow(dead_code)]
#[contractclient(name = "MissionVerifierClient")]
pub trait MissionVerification {
    /// Returns whether the delivery proof for `mission_id` has met its
    /// witness threshold (or been verified by the verifier admin).
    fn is_proof_verified(mission_id: u64) -> bool;
}
