use crate::registry::{get_supplier, require_recorder};
use crate::types::*;
use soroban_sdk::{Address, Env, String, Symbol, Vec};

fn adjust_reputation(current: u32, delta: i32) -> u32 {
    let adjusted = current as i32 + delta;
    adjusted.clamp(0, REPUTATION_MAX as i32) as u32
}

/// Outcome feed from the mission ledger. Success nudges reputation up,
/// failure pulls it down harder.
pub fn record_mission(
    env: Env,
    caller: Address,
    supplier: Address,
    mission_id: u64,
    success: bool,
    value: i128,
) -> Result<(), SupplierError> {
    require_recorder(&env, &caller)?;

    if value < 0 {
        return Err(SupplierError::InvalidValue);
    }

    let mut record = get_supplier(&env, &supplier)?;
    if success {
        record.completed_missions += 1;
        record.reputation = adjust_reputation(record.reputation, REPUTATION_SUCCESS_DELTA);
    } else {
        record.failed_missions += 1;
        record.reputation = adjust_reputation(record.reputation, REPUTATION_FAILURE_DELTA);
    }
    env.storage()
        .persistent()
        .set(&DataKey::Supplier(supplier.clone()), &record);

    env.events().publish(
        (Symbol::new(&env, "mission_recorded"), supplier),
        (mission_id, success, value),
    );

    Ok(())
}

pub fn add_review(
    env: Env,
    reviewer: Address,
    supplier: Address,
    mission_id: u64,
    rating: u32,
    comment: String,
) -> Result<(), SupplierError> {
    reviewer.require_auth();

    if !(1..=5).contains(&rating) {
        return Err(SupplierError::InvalidRating);
    }

    let mut record = get_supplier(&env, &supplier)?;
    // 3 stars is neutral; each star away from it moves reputation one point.
    record.reputation = adjust_reputation(record.reputation, rating as i32 - 3);
    env.storage()
        .persistent()
        .set(&DataKey::Supplier(supplier.clone()), &record);

    let mut reviews: Vec<Review> = env
        .storage()
        .persistent()
        .get(&DataKey::Reviews(supplier.clone()))
        .unwrap_or_else(|| Vec::new(&env));
    reviews.push_back(Review {
        mission_id,
        reviewer,
        rating,
        comment,
        timestamp: env.ledger().timestamp(),
    });
    env.storage()
        .persistent()
        .set(&DataKey::Reviews(supplier.clone()), &reviews);

    env.events().publish(
        (Symbol::new(&env, "review_added"), supplier),
        (mission_id, rating),
    );

    Ok(())
}

pub fn get_reviews(env: &Env, supplier: &Address) -> Vec<Review> {
    env.storage()
        .persistent()
        .get(&DataKey::Reviews(supplier.clone()))
        .unwrap_or_else(|| Vec::new(env))
}

/// Integer percentage of completed missions; 0 when nothing recorded yet.
pub fn get_success_rate(env: &Env, supplier: &Address) -> Result<u32, SupplierError> {
    let record = get_supplier(env, supplier)?;
    let total = record.completed_missions + record.failed_missions;
    if total == 0 {
        return Ok(0);
    }
    Ok(record.completed_missions * 100 / total)
}
