use crate::types::*;
use soroban_sdk::{Address, Env, String, Symbol, Vec};

pub fn require_admin(env: &Env) -> Result<(), VerifierError> {
    let admin: Address = env
        .storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(VerifierError::NotInitialized)?;
    admin.require_auth();
    Ok(())
}

pub fn require_witness_role(env: &Env, caller: &Address) -> Result<(), VerifierError> {
    caller.require_auth();
    if !env
        .storage()
        .persistent()
        .has(&DataKey::Witness(caller.clone()))
    {
        return Err(VerifierError::Unauthorized);
    }
    Ok(())
}

pub fn get_proof(env: &Env, mission_id: u64) -> Result<DeliveryProof, VerifierError> {
    env.storage()
        .persistent()
        .get(&DataKey::Proof(mission_id))
        .ok_or(VerifierError::ProofNotFound)
}

fn put_proof(env: &Env, proof: &DeliveryProof) {
    env.storage()
        .persistent()
        .set(&DataKey::Proof(proof.mission_id), proof);
}

pub fn get_requirements(env: &Env, mission_id: u64) -> VerificationRequirements {
    env.storage()
        .persistent()
        .get(&DataKey::Requirements(mission_id))
        .unwrap_or_else(|| VerificationRequirements {
            min_witnesses: DEFAULT_MIN_WITNESSES,
            require_gps: false,
            require_photo: false,
            require_recipient_signature: false,
            required_proof_types: Vec::new(env),
        })
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
    require_admin(&env)?;

    if min_witnesses == 0 {
        return Err(VerifierError::InvalidRequirements);
    }

    let requirements = VerificationRequirements {
        min_witnesses,
        require_gps,
        require_photo,
        require_recipient_signature,
        required_proof_types,
    };
    env.storage()
        .persistent()
        .set(&DataKey::Requirements(mission_id), &requirements);

    Ok(())
}

fn check_against_requirements(
    env: &Env,
    requirements: &VerificationRequirements,
    proof_types: &Vec<String>,
    latitude: i64,
    longitude: i64,
) -> Result<(), VerifierError> {
    if requirements.require_gps && latitude == 0 && longitude == 0 {
        return Err(VerifierError::MissingGps);
    }
    if requirements.require_photo && !proof_types.contains(String::from_str(env, "photo")) {
        return Err(VerifierError::MissingProofType);
    }
    if requirements.require_recipient_signature
        && !proof_types.contains(String::from_str(env, "recipient-signature"))
    {
        return Err(VerifierError::MissingProofType);
    }
    for required in requirements.required_proof_types.iter() {
        if !proof_types.contains(&required) {
            return Err(VerifierError::MissingProofType);
        }
    }
    Ok(())
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
    submitter.require_auth();

    if env
        .storage()
        .persistent()
        .has(&DataKey::Proof(mission_id))
    {
        return Err(VerifierError::ProofAlreadyExists);
    }
    if proof_types.is_empty() {
        return Err(VerifierError::EmptyProof);
    }
    if proof_types.len() != proof_hashes.len() || proof_types.len() != proof_uris.len() {
        return Err(VerifierError::LengthMismatch);
    }

    let requirements = get_requirements(&env, mission_id);
    check_against_requirements(&env, &requirements, &proof_types, latitude, longitude)?;

    let proof = DeliveryProof {
        mission_id,
        proof_types,
        proof_hashes,
        proof_uris,
        latitude,
        longitude,
        metadata_uri,
        submitted_by: submitter.clone(),
        submitted_at: env.ledger().timestamp(),
        witness_count: 0,
        verified: false,
    };
    put_proof(&env, &proof);

    env.events().publish(
        (Symbol::new(&env, "proof_submitted"), mission_id),
        submitter,
    );

    Ok(())
}

/// One attestation per account per mission. The verified flag flips exactly
/// once, on the attestation that reaches the configured minimum.
pub fn add_witness(env: Env, witness: Address, mission_id: u64) -> Result<(), VerifierError> {
    require_witness_role(&env, &witness)?;

    let mut proof = get_proof(&env, mission_id)?;

    let mut witnesses: Vec<Address> = env
        .storage()
        .persistent()
        .get(&DataKey::Witnesses(mission_id))
        .unwrap_or_else(|| Vec::new(&env));
    if witnesses.contains(&witness) {
        return Err(VerifierError::DuplicateWitness);
    }
    witnesses.push_back(witness.clone());
    env.storage()
        .persistent()
        .set(&DataKey::Witnesses(mission_id), &witnesses);

    proof.witness_count += 1;

    let requirements = get_requirements(&env, mission_id);
    if !proof.verified && proof.witness_count >= requirements.min_witnesses {
        proof.verified = true;
        env.events()
            .publish((Symbol::new(&env, "proof_verified"), mission_id), proof.witness_count);
    }
    put_proof(&env, &proof);

    env.events().publish(
        (Symbol::new(&env, "witness_added"), mission_id),
        (witness, proof.witness_count),
    );

    Ok(())
}

/// Admin override for missions where the witness threshold cannot be met.
pub fn verify_proof(env: Env, mission_id: u64) -> Result<(), VerifierError> {
    require_admin(&env)?;

    let mut proof = get_proof(&env, mission_id)?;
    if proof.verified {
        return Err(VerifierError::AlreadyVerified);
    }
    proof.verified = true;
    put_proof(&env, &proof);

    env.events().publish(
        (Symbol::new(&env, "proof_verified"), mission_id),
        proof.witness_count,
    );

    Ok(())
}

pub fn is_proof_verified(env: &Env, mission_id: u64) -> bool {
    env.storage()
        .persistent()
        .get::<DataKey, DeliveryProof>(&DataKey::Proof(mission_id))
        .map(|proof| proof.verified)
        .unwrap_or(false)
}

pub fn get_witnesses(env: &Env, mission_id: u64) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::Witnesses(mission_id))
        .unwrap_or_else(|| Vec::new(env))
}

pub fn get_proof_details(env: &Env, mission_id: u64) -> Result<ProofDetails, VerifierError> {
    let proof = get_proof(env, mission_id)?;
    let requirements = get_requirements(env, mission_id);
    Ok(ProofDetails {
        mission_id,
        witness_count: proof.witness_count,
        min_witnesses: requirements.min_witnesses,
        verified: proof.verified,
    })
}
