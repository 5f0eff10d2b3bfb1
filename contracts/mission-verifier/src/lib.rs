#![no_std]
use soroban_sdk::{contract, contractimpl, Address, Env, String, Symbol, Vec};

mod types;
mod verification;

pub use types::*;

#[contract]
pub struct MissionVerifier;

#[contractimpl]
impl MissionVerifier {
    pub fn initialize(env: Env, admin: Address) -> Result<(), VerifierError> {
        if env.storage().instance().has(&DataKey::Admin) {
            return Err(VerifierError::AlreadyInitialized);
        }
        admin.require_auth();
        env.storage().instance().set(&DataKey::Admin, &admin);
        env.events()
            .publish((Symbol::new(&env, "initialized"),), admin);
        Ok(())
    }

    /// Allow an account to attest deliveries.
    pub fn grant_witness(env: Env, account: Address) -> Result<(), VerifierError> {
        verification::require_admin(&env)?;
        env.storage()
            .persistent()
            .set(&DataKey::Witness(account), &true);
        Ok(())
    }

    pub fn revoke_witness(env: Env, account: Address) -> Result<(), VerifierError> {
        verification::require_admin(&env)?;
        env.storage().persistent().remove(&DataKey::Witness(account));
        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    pub fn set_requirements(
        env: Env,
        mission_id: u64,
        min_witnesses: u32,
        require_gps: bool,
        require_photo: bool,
        require_recipient_signature: bool,
        required_proof_types: Vec<String>,
    ) -> Result<(), VerifierError> {
        verification::set_requirements(
            env,
            mission_id,
            min_witnesses,
            require_gps,
            require_photo,
            require_recipient_signature,
            required_proof_types,
        )
    }

    #[allow(clippy::too_many_arguments)]
    pub fn submit_proof(
        env: Env,
        submitter: Address,
        mission_id: u64,
        proof_types: Vec<String>,
        proof_hashes: Vec<String>,
        proof_uris: Vec<String>,
        latitude: i64,
        longitude: i64,
        metadata_uri: String,
    ) -> Result<(), VerifierError> {
        verification::submit_proof(
            env,
            submitter,
            mission_id,
            proof_types,
            proof_hashes,
            proof_uris,
            latitude,
            longitude,
            metadata_uri,
        )
    }

    pub fn add_witness(env: Env, witness: Address, mission_id: u64) -> Result<(), VerifierError> {
        verification::add_witness(env, witness, mission_id)
    }

    pub fn verify_proof(env: Env, mission_id: u64) -> Result<(), VerifierError> {
        verification::verify_proof(env, mission_id)
    }

    // Read surface

    pub fn is_proof_verified(env: Env, mission_id: u64) -> bool {
        verification::is_proof_verified(&env, mission_id)
    }

    pub fn get_proof(env: Env, mission_id: u64) -> Result<DeliveryProof, VerifierError> {
        verification::get_proof(&env, mission_id)
    }

    pub fn get_proof_details(env: Env, mission_id: u64) -> Result<ProofDetails, VerifierError> {
        verification::get_proof_details(&env, mission_id)
    }

    pub fn get_witnesses(env: Env, mission_id: u64) -> Vec<Address> {
        verification::get_witnesses(&env, mission_id)
    }

    pub fn get_requirements(env: Env, mission_id: u64) -> VerificationRequirements {
        verification::get_requirements(&env, mission_id)
    }
}
