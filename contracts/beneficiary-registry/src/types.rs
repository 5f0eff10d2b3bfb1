use soroban_sdk::{contracterror, contracttype, Address, String, Vec};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,                // Admin address
    Coordinator(Address), // Accounts allowed to manage beneficiaries
    Beneficiary(Address), // Beneficiary address -> Beneficiary
    BeneficiaryList,      // Vec<Address> of registered beneficiaries
    AidHistory(Address),  // Beneficiary address -> Vec<AidRecord>
    TotalAidDistributed,  // Registry-wide delivered value
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum BeneficiaryError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    Unauthorized = 3,
    AlreadyRegistered = 4,
    BeneficiaryNotFound = 5,
    EmptyField = 6,
    AlreadyVerified = 7,
    LengthMismatch = 8,
    InvalidValue = 9,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct Beneficiary {
    pub address: Address,
    pub name: String,
    pub location: String,
    pub beneficiary_type: String, // e.g. "family", "clinic", "school"
    pub metadata_uri: String,
    pub total_aid_received: i128,
    pub mission_count: u32,
    pub verified: bool,
    pub registered_at: u64,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct AidRecord {
    pub mission_id: u64,
    pub value: i128,
    pub items: Vec<String>,
    pub quantities: Vec<u32>,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct RegistryStats {
    pub total_beneficiaries: u32,
    pub verified_beneficiaries: u32,
    pub total_aid_distributed: i128,
}
