use soroban_sdk::{contracterror, contracttype, Address, String, Vec};

/// Reputation bounds. Every supplier starts at the baseline and is clamped
/// to the range on every adjustment.
pub const REPUTATION_BASELINE: u32 = 50;
pub const REPUTATION_MAX: u32 = 100;
pub const REPUTATION_SUCCESS_DELTA: i32 = 5;
pub const REPUTATION_FAILURE_DELTA: i32 = -10;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,             // Admin address
    Verifier(Address), // Accounts allowed to verify suppliers
    Recorder(Address), // Accounts allowed to record mission outcomes
    Supplier(Address), // Supplier address -> Supplier
    SupplierList,      // Vec<Address> of registered suppliers
    Reviews(Address),  // Supplier address -> Vec<Review>
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum SupplierError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    Unauthorized = 3,
    AlreadyRegistered = 4,
    SupplierNotFound = 5,
    EmptyName = 6,
    NoCapabilities = 7,
    AlreadyVerified = 8,
    InvalidRating = 9,
    InvalidValue = 10,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct Supplier {
    pub address: Address,
    pub name: String,
    pub location: String,
    pub capabilities: Vec<String>,
    pub metadata_uri: String,
    pub reputation: u32,
    pub completed_missions: u32,
    pub failed_missions: u32,
    pub verified: bool,
    pub registered_at: u64,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct Review {
    pub mission_id: u64,
    pub reviewer: Address,
    pub rating: u32, // 1..=5
    pub comment: String,
    pub timestamp: u64,
}
