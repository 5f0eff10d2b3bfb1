#![no_std]
use soroban_sdk::{contract, contractimpl, Address, Env, String, Symbol, Vec};

mod registry;
mod types;

pub use types::*;

#[contract]
pub struct BeneficiaryRegistry;

#[contractimpl]
impl BeneficiaryRegistry {
    pub fn initialize(env: Env, admin: Address) -> Result<(), BeneficiaryError> {
        if env.storage().instance().has(&DataKey::Admin) {
            return Err(BeneficiaryError::AlreadyInitialized);
        }
        admin.require_auth();
        env.storage().instance().set(&DataKey::Admin, &admin);
        env.events()
            .publish((Symbol::new(&env, "initialized"),), admin);
        Ok(())
    }

    pub fn grant_coordinator(env: Env, account: Address) -> Result<(), BeneficiaryError> {
        registry::require_admin(&env)?;
        env.storage()
            .persistent()
            .set(&DataKey::Coordinator(account), &true);
        Ok(())
    }

    pub fn revoke_coordinator(env: Env, account: Address) -> Result<(), BeneficiaryError> {
        registry::require_admin(&env)?;
        env.storage()
            .persistent()
            .remove(&DataKey::Coordinator(account));
        Ok(())
    }

    pub fn register_beneficiary(
        env: Env,
        caller: Address,
        beneficiary: Address,
        name: String,
        location: String,
        beneficiary_type: String,
        metadata_uri: String,
    ) -> Result<(), BeneficiaryError> {
        registry::register_beneficiary(
            env,
            caller,
            beneficiary,
            name,
            location,
            beneficiary_type,
            metadata_uri,
        )
    }

    pub fn verify_beneficiary(
        env: Env,
        caller: Address,
        beneficiary: Address,
    ) -> Result<(), BeneficiaryError> {
        registry::verify_beneficiary(env, caller, beneficiary)
    }

    pub fn update_beneficiary(
        env: Env,
        caller: Address,
        beneficiary: Address,
        name: String,
        location: String,
        beneficiary_type: String,
        metadata_uri: String,
    ) -> Result<(), BeneficiaryError> {
        registry::update_beneficiary(
            env,
            caller,
            beneficiary,
            name,
            location,
            beneficiary_type,
            metadata_uri,
        )
    }

    pub fn record_aid_delivery(
        env: Env,
        caller: Address,
        beneficiary: Address,
        mission_id: u64,
        value: i128,
        items: Vec<String>,
        quantities: Vec<u32>,
    ) -> Result<(), BeneficiaryError> {
        registry::record_aid_delivery(env, caller, beneficiary, mission_id, value, items, quantities)
    }

    // Read surface

    pub fn get_beneficiary(env: Env, beneficiary: Address) -> Result<Beneficiary, BeneficiaryError> {
        registry::get_beneficiary(&env, &beneficiary)
    }

    pub fn get_all_beneficiaries(env: Env) -> Vec<Beneficiary> {
        registry::get_all_beneficiaries(&env)
    }

    pub fn get_verified_beneficiaries(env: Env) -> Vec<Beneficiary> {
        registry::get_verified_beneficiaries(&env)
    }

    pub fn get_beneficiaries_by_location(env: Env, location: String) -> Vec<Beneficiary> {
        registry::get_beneficiaries_by_location(&env, location)
    }

    pub fn get_aid_history(env: Env, beneficiary: Address) -> Vec<AidRecord> {
        registry::get_aid_history(&env, &beneficiary)
    }

    pub fn get_stats(env: Env) -> RegistryStats {
        registry::get_stats(&env)
    }
}
