#![no_std]
use soroban_sdk::{contract, contractimpl, Address, Env, String, Symbol, Vec};

mod registry;
mod reputation;
mod types;

pub use types::*;

#[contract]
pub struct SupplierRegistry;

#[contractimpl]
impl SupplierRegistry {
    pub fn initialize(env: Env, admin: Address) -> Result<(), SupplierError> {
        if env.storage().instance().has(&DataKey::Admin) {
            return Err(SupplierError::AlreadyInitialized);
        }
        admin.require_auth();
        env.storage().instance().set(&DataKey::Admin, &admin);
        env.events()
            .publish((Symbol::new(&env, "initialized"),), admin);
        Ok(())
    }

    /// Allow an account to verify suppliers.
    pub fn grant_verifier(env: Env, account: Address) -> Result<(), SupplierError> {
        registry::require_admin(&env)?;
        env.storage()
            .persistent()
            .set(&DataKey::Verifier(account), &true);
        Ok(())
    }

    /// Allow an account to record mission outcomes (the mission ledger's
    /// operator, typically).
    pub fn grant_recorder(env: Env, account: Address) -> Result<(), SupplierError> {
        registry::require_admin(&env)?;
        env.storage()
            .persistent()
            .set(&DataKey::Recorder(account), &true);
        Ok(())
    }

    pub fn register_supplier(
        env: Env,
        supplier: Address,
        name: String,
        location: String,
        capabilities: Vec<String>,
        metadata_uri: String,
    ) -> Result<(), SupplierError> {
        registry::register_supplier(env, supplier, name, location, capabilities, metadata_uri)
    }

    pub fn verify_supplier(
        env: Env,
        caller: Address,
        supplier: Address,
    ) -> Result<(), SupplierError> {
        registry::verify_supplier(env, caller, supplier)
    }

    pub fn record_mission(
        env: Env,
        caller: Address,
        supplier: Address,
        mission_id: u64,
        success: bool,
        value: i128,
    ) -> Result<(), SupplierError> {
        reputation::record_mission(env, caller, supplier, mission_id, success, value)
    }

    pub fn add_review(
        env: Env,
        reviewer: Address,
        supplier: Address,
        mission_id: u64,
        rating: u32,
        comment: String,
    ) -> Result<(), SupplierError> {
        reputation::add_review(env, reviewer, supplier, mission_id, rating, comment)
    }

    // Read surface

    pub fn get_supplier(env: Env, supplier: Address) -> Result<Supplier, SupplierError> {
        registry::get_supplier(&env, &supplier)
    }

    pub fn get_all_suppliers(env: Env) -> Vec<Supplier> {
        registry::get_all_suppliers(&env)
    }

    pub fn get_verified_suppliers(env: Env) -> Vec<Supplier> {
        registry::get_verified_suppliers(&env)
    }

    pub fn get_suppliers_by_location(env: Env, location: String) -> Vec<Supplier> {
        registry::get_suppliers_by_location(&env, location)
    }

    pub fn get_reviews(env: Env, supplier: Address) -> Vec<Review> {
        reputation::get_reviews(&env, &supplier)
    }

    pub fn get_success_rate(env: Env, supplier: Address) -> Result<u32, SupplierError> {
        reputation::get_success_rate(&env, &supplier)
    }
}

mod test;
