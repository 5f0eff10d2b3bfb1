use crate::types::*;
use soroban_sdk::{Address, Env, String, Symbol, Vec};

pub fn require_admin(env: &Env) -> Result<(), SupplierError> {
    let admin: Address = env
        .storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(SupplierError::NotInitialized)?;
    admin.require_auth();
    Ok(())
}

fn require_grant(env: &Env, caller: &Address, key: DataKey) -> Result<(), SupplierError> {
    caller.require_auth();
    if !env.storage().persistent().has(&key) {
        return Err(SupplierError::Unauthorized);
    }
    Ok(())
}

pub fn require_verifier(env: &Env, caller: &Address) -> Result<(), SupplierError> {
    require_grant(env, caller, DataKey::Verifier(caller.clone()))
}

pub fn require_recorder(env: &Env, caller: &Address) -> Result<(), SupplierError> {
    require_grant(env, caller, DataKey::Recorder(caller.clone()))
}

pub fn get_supplier(env: &Env, supplier: &Address) -> Result<Supplier, SupplierError> {
    env.storage()
        .persistent()
        .get(&DataKey::Supplier(supplier.clone()))
        .ok_or(SupplierError::SupplierNotFound)
}

fn put_supplier(env: &Env, record: &Supplier) {
    env.storage()
        .persistent()
        .set(&DataKey::Supplier(record.address.clone()), record);
}

pub fn supplier_list(env: &Env) -> Vec<Address> {
    env.storage()
        .instance()
        .get(&DataKey::SupplierList)
        .unwrap_or_else(|| Vec::new(env))
}

pub fn register_supplier(
    env: Env,
    supplier: Address,
    name: String,
    location: String,
    capabilities: Vec<String>,
    metadata_uri: String,
) -> Result<(), SupplierError> {
    supplier.require_auth();

    if env
        .storage()
        .persistent()
        .has(&DataKey::Supplier(supplier.clone()))
    {
        return Err(SupplierError::AlreadyRegistered);
    }
    if name.is_empty() {
        return Err(SupplierError::EmptyName);
    }
    if capabilities.is_empty() {
        return Err(SupplierError::NoCapabilities);
    }

    let record = Supplier {
        address: supplier.clone(),
        name,
        location,
        capabilities,
        metadata_uri,
        reputation: REPUTATION_BASELINE,
        completed_missions: 0,
        failed_missions: 0,
        verified: false,
        registered_at: env.ledger().timestamp(),
    };
    put_supplier(&env, &record);

    let mut list = supplier_list(&env);
    list.push_back(supplier.clone());
    env.storage().instance().set(&DataKey::SupplierList, &list);

    env.events()
        .publish((Symbol::new(&env, "supplier_registered"),), supplier);

    Ok(())
}

pub fn verify_supplier(env: Env, caller: Address, supplier: Address) -> Result<(), SupplierError> {
    require_verifier(&env, &caller)?;

    let mut record = get_supplier(&env, &supplier)?;
    if record.verified {
        return Err(SupplierError::AlreadyVerified);
    }
    record.verified = true;
    put_supplier(&env, &record);

    env.events()
        .publish((Symbol::new(&env, "supplier_verified"),), supplier);

    Ok(())
}

pub fn get_all_suppliers(env: &Env) -> Vec<Supplier> {
    let mut suppliers = Vec::new(env);
    for address in supplier_list(env).iter() {
        if let Ok(record) = get_supplier(env, &address) {
            suppliers.push_back(record);
        }
    }
    suppliers
}

pub fn get_verified_suppliers(env: &Env) -> Vec<Supplier> {
    let mut suppliers = Vec::new(env);
    for address in supplier_list(env).iter() {
        if let Ok(record) = get_supplier(env, &address) {
            if record.verified {
                suppliers.push_back(record);
            }
        }
    }
    suppliers
}

pub fn get_suppliers_by_location(env: &Env, location: String) -> Vec<Supplier> {
    let mut suppliers = Vec::new(env);
    for address in supplier_list(env).iter() {
        if let Ok(record) = get_supplier(env, &address) {
            if record.location == location {
                suppliers.push_back(record);
            }
        }
    }
    suppliers
}
