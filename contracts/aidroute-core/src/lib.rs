#![no_std]
use soroban_sdk::{contract, contractimpl, Address, Env, String, Symbol, Vec};

mod external;
mod funding;
mod missions;
mod roles;
mod types;

pub use types::*;

#[contract]
pub struct AidRouteCore;

#[contractimpl]
impl AidRouteCore {
    /// One-time setup: admin, settlement token, and the mission verifier
    /// contract consulted before any fund release.
    pub fn initialize(
        env: Env,
        admin: Address,
        token: Address,
        verifier_contract: Address,
    ) -> Result<(), AidRouteError> {
        if roles::is_initialized(&env) {
            return Err(AidRouteError::AlreadyInitialized);
        }
        admin.require_auth();
        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage().instance().set(&DataKey::Token, &token);
        env.storage()
            .instance()
            .set(&DataKey::VerifierContract, &verifier_contract);
        env.storage().instance().set(&DataKey::NextMissionId, &1u64);

        env.events()
            .publish((Symbol::new(&env, "initialized"),), admin);
        Ok(())
    }

    // Role management

    pub fn grant_role(env: Env, account: Address, role: Role) -> Result<(), AidRouteError> {
        roles::grant_role(&env, &account, role)
    }

    pub fn revoke_role(env: Env, account: Address, role: Role) -> Result<(), AidRouteError> {
        roles::revoke_role(&env, &account, role)
    }

    pub fn has_role(env: Env, account: Address, role: Role) -> bool {
        roles::has_role(&env, &account, role)
    }

    // Needs

    pub fn register_need(
        env: Env,
        caller: Address,
        id: String,
        location: String,
        urgency: u32,
        estimated_funds: i128,
    ) -> Result<(), AidRouteError> {
        missions::register_need(env, caller, id, location, urgency, estimated_funds)
    }

    // Mission lifecycle

    #[allow(clippy::too_many_arguments)]
    pub fn create_mission(
        env: Env,
        caller: Address,
        need_id: String,
        supplier: Address,
        beneficiary: Address,
        origin: String,
        destination: String,
        items: Vec<String>,
        quantities: Vec<u32>,
        funds_required: i128,
        urgency: u32,
        metadata_uri: String,
    ) -> Result<u64, AidRouteError> {
        missions::create_mission(
            env,
            caller,
            need_id,
            supplier,
            beneficiary,
            origin,
            destination,
            items,
            quantities,
            funds_required,
            urgency,
            metadata_uri,
        )
    }

    pub fn approve_mission(env: Env, caller: Address, mission_id: u64) -> Result<(), AidRouteError> {
        missions::approve_mission(env, caller, mission_id)
    }

    pub fn update_mission_status(
        env: Env,
        caller: Address,
        mission_id: u64,
        new_status: MissionStatus,
    ) -> Result<(), AidRouteError> {
        missions::update_mission_status(env, caller, mission_id, new_status)
    }

    pub fn complete_mission(
        env: Env,
        caller: Address,
        mission_id: u64,
        proof_hash: String,
    ) -> Result<(), AidRouteError> {
        missions::complete_mission(env, caller, mission_id, proof_hash)
    }

    // Fund custody

    pub fn lock_funds(
        env: Env,
        donor: Address,
        mission_id: u64,
        amount: i128,
    ) -> Result<(), AidRouteError> {
        funding::lock_funds(env, donor, mission_id, amount)
    }

    pub fn verify_and_release_funds(
        env: Env,
        caller: Address,
        mission_id: u64,
    ) -> Result<(), AidRouteError> {
        funding::verify_and_release_funds(env, caller, mission_id)
    }

    pub fn cancel_mission(
        env: Env,
        caller: Address,
        mission_id: u64,
        reason: String,
    ) -> Result<(), AidRouteError> {
        funding::cancel_mission(env, caller, mission_id, reason)
    }

    // Read surface

    pub fn get_mission(env: Env, mission_id: u64) -> Result<Mission, AidRouteError> {
        missions::get_mission(&env, mission_id)
    }

    pub fn get_need(env: Env, need_id: String) -> Result<Need, AidRouteError> {
        missions::get_need(&env, need_id)
    }

    pub fn get_need_ids(env: Env) -> Vec<String> {
        missions::get_need_ids(&env)
    }

    pub fn get_donations(env: Env, mission_id: u64) -> Vec<Donation> {
        funding::get_donations(&env, mission_id)
    }

    pub fn get_active_missions(env: Env) -> Vec<Mission> {
        missions::get_active_missions(&env)
    }

    pub fn get_stats(env: Env) -> LedgerStats {
        funding::get_stats(&env)
    }
}
