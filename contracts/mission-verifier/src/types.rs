use soroban_sdk::{contracterror, contracttype, Address, String, Vec};

pub const DEFAULT_MIN_WITNESSES: u32 = 2;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,                // Admin address
    Witness(Address),     // Accounts allowed to attest
    Proof(u64),           // Mission ID -> DeliveryProof
    Witnesses(u64),       // Mission ID -> Vec<Address> who attested
    Requirements(u64),    // Mission ID -> VerificationRequirements
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum VerifierError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    Unauthorized = 3,
    ProofAlreadyExists = 4,
    ProofNotFound = 5,
    LengthMismatch = 6,
    EmptyProof = 7,
    MissingGps = 8,
    MissingProofType = 9,
    DuplicateWitness = 10,
    AlreadyVerified = 11,
    InvalidRequirements = 12,
}

/// One proof record per mission. Coordinates are microdegrees so the
/// record stays integer-only.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DeliveryProof {
    pub mission_id: u64,
    pub proof_types: Vec<String>,
    pub proof_hashes: Vec<String>,
    pub proof_uris: Vec<String>,
    pub latitude: i64,
    pub longitude: i64,
    pub metadata_uri: String,
    pub submitted_by: Address,
    pub submitted_at: u64,
    pub witness_count: u32,
    pub verified: bool,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct VerificationRequirements {
    pub min_witnesses: u32,
    pub require_gps: bool,
    pub require_photo: bool,
    pub require_recipient_signature: bool,
    pub required_proof_types: Vec<String>,
}

/// Attestation summary the read surface exposes alongside the full record.
#[contracttype]
#[derive(Clone, Debug)]
pub struct ProofDetails {
    pub mission_id: u64,
    pub witness_count: u32,
    pub min_witnesses: u32,
    pub verified: bool,
}
