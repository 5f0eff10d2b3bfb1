use crate::types::*;
use soroban_sdk::{Address, Env, String, Symbol, Vec};

pub fn require_admin(env: &Env) -> Result<(), BeneficiaryError> {
    let admin: Address = env
        .storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(BeneficiaryError::NotInitialized)?;
    admin.require_auth();
    Ok(())
}

pub fn require_coordinator(env: &Env, caller: &Address) -> Result<(), BeneficiaryError> {
    caller.require_auth();
    if !env
        .storage()
        .persistent()
        .has(&DataKey::Coordinator(caller.clone()))
    {
        return Err(BeneficiaryError::Unauthorized);
    }
    Ok(())
}

pub fn get_beneficiary(env: &Env, beneficiary: &Address) -> Result<Beneficiary, BeneficiaryError> {
    env.storage()
        .persistent()
        .get(&DataKey::Beneficiary(beneficiary.clone()))
        .ok_or(BeneficiaryError::BeneficiaryNotFound)
}

fn put_beneficiary(env: &Env, record: &Beneficiary) {
    env.storage()
        .persistent()
        .set(&DataKey::Beneficiary(record.address.clone()), record);
}

pub fn beneficiary_list(env: &Env) -> Vec<Address> {
    env.storage()
        .instance()
        .get(&DataKey::BeneficiaryList)
        .unwrap_or_else(|| Vec::new(env))
}

#[allow(clippy::too_many_arguments)]
pub fn register_beneficiary(
    env: Env,
    caller: Address,
    beneficiary: Address,
    name: String,
    location: String,
    beneficiary_type: String,
    metadata_uri: String,
) -> Result<(), BeneficiaryError> {
    require_coordinator(&env, &caller)?;

    if env
        .storage()
        .persistent()
        .has(&DataKey::Beneficiary(beneficiary.clone()))
    {
        return Err(BeneficiaryError::AlreadyRegistered);
    }
    if name.is_empty() || location.is_empty() {
        return Err(BeneficiaryError::EmptyField);
    }

    let record = Beneficiary {
        address: beneficiary.clone(),
        name,
        location,
        beneficiary_type,
        metadata_uri,
        total_aid_received: 0,
        mission_count: 0,
        verified: false,
        registered_at: env.ledger().timestamp(),
    };
    put_beneficiary(&env, &record);

    let mut list = beneficiary_list(&env);
    list.push_back(beneficiary.clone());
    env.storage()
        .instance()
        .set(&DataKey::BeneficiaryList, &list);

    env.events()
        .publish((Symbol::new(&env, "beneficiary_registered"),), beneficiary);

    Ok(())
}

pub fn verify_beneficiary(
    env: Env,
    caller: Address,
    beneficiary: Address,
) -> Result<(), BeneficiaryError> {
    require_coordinator(&env, &caller)?;

    let mut record = get_beneficiary(&env, &beneficiary)?;
    if record.verified {
        return Err(BeneficiaryError::AlreadyVerified);
    }
    record.verified = true;
    put_beneficiary(&env, &record);

    env.events()
        .publish((Symbol::new(&env, "beneficiary_verified"),), beneficiary);

    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub fn update_beneficiary(
    env: Env,
    caller: Address,
    beneficiary: Address,
    name: String,
    location: String,
    beneficiary_type: String,
    metadata_uri: String,
) -> Result<(), BeneficiaryError> {
    require_coordinator(&env, &caller)?;

    if name.is_empty() || location.is_empty() {
        return Err(BeneficiaryError::EmptyField);
    }

    let mut record = get_beneficiary(&env, &beneficiary)?;
    record.name = name;
    record.location = location;
    record.beneficiary_type = beneficiary_type;
    record.metadata_uri = metadata_uri;
    put_beneficiary(&env, &record);

    Ok(())
}

/// Cross-component feed from the mission ledger after a verified delivery.
/// Totals only ever grow.
pub fn record_aid_delivery(
    env: Env,
    caller: Address,
    beneficiary: Address,
    mission_id: u64,
    value: i128,
    items: Vec<String>,
    quantities: Vec<u32>,
) -> Result<(), BeneficiaryError> {
    require_coordinator(&env, &caller)?;

    if items.len() != quantities.len() {
        return Err(BeneficiaryError::LengthMismatch);
    }
    if value < 0 {
        return Err(BeneficiaryError::InvalidValue);
    }

    let mut record = get_beneficiary(&env, &beneficiary)?;
    record.total_aid_received += value;
    record.mission_count += 1;
    put_beneficiary(&env, &record);

    let mut history: Vec<AidRecord> = env
        .storage()
        .persistent()
        .get(&DataKey::AidHistory(beneficiary.clone()))
        .unwrap_or_else(|| Vec::new(&env));
    history.push_back(AidRecord {
        mission_id,
        value,
        items,
        quantities,
        timestamp: env.ledger().timestamp(),
    });
    env.storage()
        .persistent()
        .set(&DataKey::AidHistory(beneficiary.clone()), &history);

    let total: i128 = env
        .storage()
        .instance()
        .get(&DataKey::TotalAidDistributed)
        .unwrap_or(0);
    env.storage()
        .instance()
        .set(&DataKey::TotalAidDistributed, &(total + value));

    env.events().publish(
        (Symbol::new(&env, "aid_recorded"), beneficiary),
        (mission_id, value),
    );

    Ok(())
}

pub fn get_aid_history(env: &Env, beneficiary: &Address) -> Vec<AidRecord> {
    env.storage()
        .persistent()
        .get(&DataKey::AidHistory(beneficiary.clone()))
        .unwrap_or_else(|| Vec::new(env))
}

pub fn get_all_beneficiaries(env: &Env) -> Vec<Beneficiary> {
    let mut beneficiaries = Vec::new(env);
    for address in beneficiary_list(env).iter() {
        if let Ok(record) = get_beneficiary(env, &address) {
            beneficiaries.push_back(record);
        }
    }
    beneficiaries
}

pub fn get_verified_beneficiaries(env: &Env) -> Vec<Beneficiary> {
    let mut beneficiaries = Vec::new(env);
    for address in beneficiary_list(env).iter() {
        if let Ok(record) = get_beneficiary(env, &address) {
            if record.verified {
                beneficiaries.push_back(record);
            }
        }
    }
    beneficiaries
}

pub fn get_beneficiaries_by_location(env: &Env, location: String) -> Vec<Beneficiary> {
    let mut beneficiaries = Vec::new(env);
    for address in beneficiary_list(env).iter() {
        if let Ok(record) = get_beneficiary(env, &address) {
            if record.location == location {
                beneficiaries.push_back(record);
            }
        }
    }
    beneficiaries
}

pub fn get_stats(env: &Env) -> RegistryStats {
    let list = beneficiary_list(env);
    let mut verified = 0u32;
    for address in list.iter() {
        if let Ok(record) = get_beneficiary(env, &address) {
            if record.verified {
                verified += 1;
            }
        }
    }
    RegistryStats {
        total_beneficiaries: list.len(),
        verified_beneficiaries: verified,
        total_aid_distributed: env
            .storage()
            .instance()
            .get(&DataKey::TotalAidDistributed)
            .unwrap_or(0),
    }
}
