use soroban_sdk::{contracterror, contracttype, Address, String, Vec};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,                // Admin address
    Token,                // Settlement token contract address
    VerifierContract,     // Mission verifier contract address
    Coordinator(Address), // Coordinator role grants
    Verifier(Address),    // Verifier role grants
    NextMissionId,        // Counter for mission IDs
    Mission(u64),         // Mission ID -> Mission
    Donations(u64),       // Mission ID -> Vec<Donation>
    Need(String),         // Need ID -> Need
    NeedIds,              // Vec<String> of registered need IDs
    TotalFundsDeployed,   // Ledger-wide released total
    VerifiedCount,        // Missions that reached Verified
    CancelledCount,       // Missions that reached Cancelled
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum AidRouteError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    Unauthorized = 3,
    NeedAlreadyExists = 4,
    NeedNotFound = 5,
    EmptyField = 6,
    MissionNotFound = 7,
    LengthMismatch = 8,
    InvalidAmount = 9,
    SupplierIsBeneficiary = 10,
    MissionNotPending = 11,
    MissionNotFundable = 12,
    ExceedsFundsRequired = 13,
    InvalidStatusTransition = 14,
    MissionNotDelivering = 15,
    MissionNotCompleted = 16,
    ProofNotVerified = 17,
    MissionTerminal = 18,
}

/// Mission lifecycle. Transitions only move forward along this ordering;
/// Cancelled is reachable from any state before Verified.
#[contracttype]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MissionStatus {
    Pending,     // Created, awaiting coordinator approval
    Approved,    // Open for donations
    FundsLocked, // Fully funded, custody held by the contract
    InProgress,  // Supplier preparing delivery
    EnRoute,     // Shipment moving
    Delivering,  // Final-mile handover
    Completed,   // Proof hash attached, awaiting verification
    Verified,    // Proof confirmed, funds released (terminal)
    Cancelled,   // Aborted, donations refunded (terminal)
}

impl MissionStatus {
    pub fn rank(&self) -> u32 {
        match self {
            MissionStatus::Pending => 0,
            MissionStatus::Approved => 1,
            MissionStatus::FundsLocked => 2,
            MissionStatus::InProgress => 3,
            MissionStatus::EnRoute => 4,
            MissionStatus::Delivering => 5,
            MissionStatus::Completed => 6,
            MissionStatus::Verified => 7,
            MissionStatus::Cancelled => 8,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, MissionStatus::Verified | MissionStatus::Cancelled)
    }

    pub fn is_delivery_stage(&self) -> bool {
        matches!(
            self,
            MissionStatus::InProgress | MissionStatus::EnRoute | MissionStatus::Delivering
        )
    }
}

/// Roles grantable by the admin. The admin itself is stored separately.
#[contracttype]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Role {
    Coordinator,
    Verifier,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct Need {
    pub id: String,
    pub location: String,
    pub urgency: u32,
    pub estimated_funds: i128,
    pub registered_by: Address,
    pub registered_at: u64,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct Mission {
    pub id: u64,
    pub need_id: String,
    pub coordinator: Address,
    pub supplier: Address,
    pub beneficiary: Address,
    pub origin: String,
    pub destination: String,
    pub items: Vec<String>,
    pub quantities: Vec<u32>,
    pub funds_required: i128,
    pub funds_locked: i128,
    pub funds_deployed: i128,
    pub urgency: u32,
    pub status: MissionStatus,
    pub created_at: u64,
    pub completed_at: u64,
    pub delivery_proof: String,
    pub metadata_uri: String,
    pub cancellation_reason: String,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct Donation {
    pub donor: Address,
    pub amount: i128,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct LedgerStats {
    pub total_missions: u64,
    pub verified_missions: u64,
    pub cancelled_missions: u64,
    pub active_missions: u64,
    pub total_funds_deployed: i128,
}
