use crate::types::{AidRouteError, DataKey, Role};
use soroban_sdk::{Address, Env, Symbol};

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

pub fn require_admin(env: &Env) -> Result<(), AidRouteError> {
    let admin: Address = env
        .storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(AidRouteError::NotInitialized)?;
    admin.require_auth();
    Ok(())
}

fn role_key(account: &Address, role: Role) -> DataKey {
    match role {
        Role::Coordinator => DataKey::Coordinator(account.clone()),
        Role::Verifier => DataKey::Verifier(account.clone()),
    }
}

pub fn has_role(env: &Env, account: &Address, role: Role) -> bool {
    env.storage().persistent().has(&role_key(account, role))
}

/// Auth plus role check for the calling account. Rejected before any
/// state is touched.
pub fn require_role(env: &Env, caller: &Address, role: Role) -> Result<(), AidRouteError> {
    caller.require_auth();
    if !has_role(env, caller, role) {
        return Err(AidRouteError::Unauthorized);
    }
    Ok(())
}

pub fn grant_role(env: &Env, account: &Address, role: Role) -> Result<(), AidRouteError> {
    require_admin(env)?;
    env.storage()
        .persistent()
        .set(&role_key(account, role), &true);
    env.events().publish(
        (Symbol::new(env, "role_granted"), account.clone()),
        role,
    );
    Ok(())
}

pub fn revoke_role(env: &Env, account: &Address, role: Role) -> Result<(), AidRouteError> {
    require_admin(env)?;
    env.storage().persistent().remove(&role_key(account, role));
    env.events().publish(
        (Symbol::new(env, "role_revoked"), account.clone()),
        role,
    );
    Ok(())
}
