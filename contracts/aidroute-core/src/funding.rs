use crate::external::MissionVerifierClient;
use crate::missions::{get_mission, put_mission};
use crate::roles::require_role;
use crate::types::*;
use soroban_sdk::token::Client as TokenClient;
use soroban_sdk::{Address, Env, String, Symbol, Vec};

fn token_client(env: &Env) -> Result<TokenClient, AidRouteError> {
    let token: Address = env
        .storage()
        .instance()
        .get(&DataKey::Token)
        .ok_or(AidRouteError::NotInitialized)?;
    Ok(TokenClient::new(env, &token))
}

pub fn get_donations(env: &Env, mission_id: u64) -> Vec<Donation> {
    env.storage()
        .persistent()
        .get(&DataKey::Donations(mission_id))
        .unwrap_or_else(|| Vec::new(env))
}

/// Donor escrow. The donor must hold and have authorized `amount` of the
/// settlement token; custody moves to this contract until release or refund.
pub fn lock_funds(
    env: Env,
    donor: Address,
    mission_id: u64,
    amount: i128,
) -> Result<(), AidRouteError> {
    donor.require_auth();

    if amount <= 0 {
        return Err(AidRouteError::InvalidAmount);
    }

    let mut mission = get_mission(&env, mission_id)?;
    if mission.status != MissionStatus::Approved {
        return Err(AidRouteError::MissionNotFundable);
    }
    if mission.funds_locked + amount > mission.funds_required {
        return Err(AidRouteError::ExceedsFundsRequired);
    }

    token_client(&env)?.transfer(&donor, &env.current_contract_address(), &amount);

    let mut donations = get_donations(&env, mission_id);
    donations.push_back(Donation {
        donor: donor.clone(),
        amount,
        timestamp: env.ledger().timestamp(),
    });
    env.storage()
        .persistent()
        .set(&DataKey::Donations(mission_id), &donations);

    mission.funds_locked += amount;
    if mission.funds_locked == mission.funds_required {
        mission.status = MissionStatus::FundsLocked;
        env.events().publish(
            (Symbol::new(&env, "mission_funded"), mission_id),
            mission.funds_locked,
        );
    }
    put_mission(&env, &mission);

    env.events().publish(
        (Symbol::new(&env, "donation"), mission_id),
        (donor, amount),
    );

    Ok(())
}

/// Verifier-gated release. The attestation decision lives in the verifier
/// contract; this path only checks its boolean and moves the money.
pub fn verify_and_release_funds(
    env: Env,
    caller: Address,
    mission_id: u64,
) -> Result<(), AidRouteError> {
    require_role(&env, &caller, Role::Verifier)?;

    let mut mission = get_mission(&env, mission_id)?;
    if mission.status != MissionStatus::Completed {
        return Err(AidRouteError::MissionNotCompleted);
    }

    let verifier: Address = env
        .storage()
        .instance()
        .get(&DataKey::VerifierContract)
        .ok_or(AidRouteError::NotInitialized)?;
    if !MissionVerifierClient::new(&env, &verifier).is_proof_verified(&mission_id) {
        return Err(AidRouteError::ProofNotVerified);
    }

    let amount = mission.funds_locked;
    token_client(&env)?.transfer(&env.current_contract_address(), &mission.supplier, &amount);

    mission.funds_deployed = amount;
    mission.status = MissionStatus::Verified;
    put_mission(&env, &mission);

    let total: i128 = env
        .storage()
        .instance()
        .get(&DataKey::TotalFundsDeployed)
        .unwrap_or(0);
    env.storage()
        .instance()
        .set(&DataKey::TotalFundsDeployed, &(total + amount));

    let verified: u64 = env
        .storage()
        .instance()
        .get(&DataKey::VerifiedCount)
        .unwrap_or(0);
    env.storage()
        .instance()
        .set(&DataKey::VerifiedCount, &(verified + 1));

    env.events().publish(
        (Symbol::new(&env, "funds_deployed"), mission_id),
        (mission.supplier.clone(), amount),
    );

    Ok(())
}

/// Abort from any non-terminal state. Every recorded donation goes back to
/// its own donor.
pub fn cancel_mission(
    env: Env,
    caller: Address,
    mission_id: u64,
    reason: String,
) -> Result<(), AidRouteError> {
    require_role(&env, &caller, Role::Coordinator)?;

    let mut mission = get_mission(&env, mission_id)?;
    if mission.status.is_terminal() {
        return Err(AidRouteError::MissionTerminal);
    }

    let token = token_client(&env)?;
    for donation in get_donations(&env, mission_id).iter() {
        token.transfer(
            &env.current_contract_address(),
            &donation.donor,
            &donation.amount,
        );
    }

    mission.funds_locked = 0;
    mission.status = MissionStatus::Cancelled;
    mission.cancellation_reason = reason.clone();
    put_mission(&env, &mission);

    let cancelled: u64 = env
        .storage()
        .instance()
        .get(&DataKey::CancelledCount)
        .unwrap_or(0);
    env.storage()
        .instance()
        .set(&DataKey::CancelledCount, &(cancelled + 1));

    env.events()
        .publish((Symbol::new(&env, "mission_cancelled"), mission_id), reason);

    Ok(())
}

pub fn get_stats(env: &Env) -> LedgerStats {
    let next_id: u64 = env
        .storage()
        .instance()
        .get(&DataKey::NextMissionId)
        .unwrap_or(1u64);
    let total_missions = next_id - 1;
    let verified_missions: u64 = env
        .storage()
        .instance()
        .get(&DataKey::VerifiedCount)
        .unwrap_or(0);
    let cancelled_missions: u64 = env
        .storage()
        .instance()
        .get(&DataKey::CancelledCount)
        .unwrap_or(0);
    let total_funds_deployed: i128 = env
        .storage()
        .instance()
        .get(&DataKey::TotalFundsDeployed)
        .unwrap_or(0);

    LedgerStats {
        total_missions,
        verified_missions,
        cancelled_missions,
        active_missions: total_missions - verified_missions - cancelled_missions,
        total_funds_deployed,
    }
}
