use crate::roles::require_role;
use crate::types::*;
use soroban_sdk::{Address, Env, String, Symbol, Vec};

pub fn get_mission(env: &Env, mission_id: u64) -> Result<Mission, AidRouteError> {
    env.storage()
        .persistent()
        .get(&DataKey::Mission(mission_id))
        .ok_or(AidRouteError::MissionNotFound)
}

pub fn put_mission(env: &Env, mission: &Mission) {
    env.storage()
        .persistent()
        .set(&DataKey::Mission(mission.id), mission);
}

pub fn get_need(env: &Env, need_id: String) -> Result<Need, AidRouteError> {
    env.storage()
        .persistent()
        .get(&DataKey::Need(need_id))
        .ok_or(AidRouteError::NeedNotFound)
}

pub fn get_need_ids(env: &Env) -> Vec<String> {
    env.storage()
        .instance()
        .get(&DataKey::NeedIds)
        .unwrap_or_else(|| Vec::new(env))
}

pub fn register_need(
    env: Env,
    caller: Address,
    id: String,
    location: String,
    urgency: u32,
    estimated_funds: i128,
) -> Result<(), AidRouteError> {
    require_role(&env, &caller, Role::Coordinator)?;

    if id.is_empty() || location.is_empty() {
        return Err(AidRouteError::EmptyField);
    }
    if env.storage().persistent().has(&DataKey::Need(id.clone())) {
        return Err(AidRouteError::NeedAlreadyExists);
    }

    let need = Need {
        id: id.clone(),
        location,
        urgency,
        estimated_funds,
        registered_by: caller,
        registered_at: env.ledger().timestamp(),
    };
    env.storage()
        .persistent()
        .set(&DataKey::Need(id.clone()), &need);

    let mut ids = get_need_ids(&env);
    ids.push_back(id.clone());
    env.storage().instance().set(&DataKey::NeedIds, &ids);

    env.events()
        .publish((Symbol::new(&env, "need_registered"),), id);

    Ok(())
}

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
    require_role(&env, &caller, Role::Coordinator)?;

    if !env
        .storage()
        .persistent()
        .has(&DataKey::Need(need_id.clone()))
    {
        return Err(AidRouteError::NeedNotFound);
    }
    if items.is_empty() {
        return Err(AidRouteError::EmptyField);
    }
    if items.len() != quantities.len() {
        return Err(AidRouteError::LengthMismatch);
    }
    if funds_required <= 0 {
        return Err(AidRouteError::InvalidAmount);
    }
    if supplier == beneficiary {
        return Err(AidRouteError::SupplierIsBeneficiary);
    }

    let mission_id: u64 = env
        .storage()
        .instance()
        .get(&DataKey::NextMissionId)
        .unwrap_or(1u64);
    env.storage()
        .instance()
        .set(&DataKey::NextMissionId, &(mission_id + 1));

    let mission = Mission {
        id: mission_id,
        need_id,
        coordinator: caller,
        supplier,
        beneficiary,
        origin,
        destination,
        items,
        quantities,
        funds_required,
        funds_locked: 0,
        funds_deployed: 0,
        urgency,
        status: MissionStatus::Pending,
        created_at: env.ledger().timestamp(),
        completed_at: 0,
        delivery_proof: String::from_str(&env, ""),
        metadata_uri,
        cancellation_reason: String::from_str(&env, ""),
    };
    put_mission(&env, &mission);

    env.events().publish(
        (Symbol::new(&env, "mission_created"), mission_id),
        (mission.supplier.clone(), mission.funds_required),
    );

    Ok(mission_id)
}

pub fn approve_mission(env: Env, caller: Address, mission_id: u64) -> Result<(), AidRouteError> {
    require_role(&env, &caller, Role::Coordinator)?;

    let mut mission = get_mission(&env, mission_id)?;
    if mission.status != MissionStatus::Pending {
        return Err(AidRouteError::MissionNotPending);
    }
    mission.status = MissionStatus::Approved;
    put_mission(&env, &mission);

    env.events().publish(
        (Symbol::new(&env, "status_updated"), mission_id),
        MissionStatus::Approved,
    );

    Ok(())
}

/// Coordinator advance through the delivery sub-statuses. Approval,
/// completion and cancellation have their own entry points; this one only
/// accepts the three delivery stages and never moves backward.
pub fn update_mission_status(
    env: Env,
    caller: Address,
    mission_id: u64,
    new_status: MissionStatus,
) -> Result<(), AidRouteError> {
    require_role(&env, &caller, Role::Coordinator)?;

    let mut mission = get_mission(&env, mission_id)?;
    if mission.status.is_terminal() {
        return Err(AidRouteError::MissionTerminal);
    }
    if !new_status.is_delivery_stage() {
        return Err(AidRouteError::InvalidStatusTransition);
    }
    if mission.status.rank() < MissionStatus::FundsLocked.rank() {
        return Err(AidRouteError::InvalidStatusTransition);
    }
    if new_status.rank() <= mission.status.rank() {
        return Err(AidRouteError::InvalidStatusTransition);
    }

    mission.status = new_status;
    put_mission(&env, &mission);

    env.events()
        .publish((Symbol::new(&env, "status_updated"), mission_id), new_status);

    Ok(())
}

pub fn complete_mission(
    env: Env,
    caller: Address,
    mission_id: u64,
    proof_hash: String,
) -> Result<(), AidRouteError> {
    require_role(&env, &caller, Role::Coordinator)?;

    if proof_hash.is_empty() {
        return Err(AidRouteError::EmptyField);
    }

    let mut mission = get_mission(&env, mission_id)?;
    if !mission.status.is_delivery_stage() {
        return Err(AidRouteError::MissionNotDelivering);
    }

    mission.delivery_proof = proof_hash;
    mission.completed_at = env.ledger().timestamp();
    mission.status = MissionStatus::Completed;
    put_mission(&env, &mission);

    env.events().publish(
        (Symbol::new(&env, "status_updated"), mission_id),
        MissionStatus::Completed,
    );

    Ok(())
}

pub fn get_active_missions(env: &Env) -> Vec<Mission> {
    let next_id: u64 = env
        .storage()
        .instance()
        .get(&DataKey::NextMissionId)
        .unwrap_or(1u64);

    let mut active = Vec::new(env);
    for id in 1..next_id {
        if let Some(mission) = env
            .storage()
            .persistent()
            .get::<DataKey, Mission>(&DataKey::Mission(id))
        {
            if !mission.status.is_terminal() {
                active.push_back(mission);
            }
        }
    }
    active
}
