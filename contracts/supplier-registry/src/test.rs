#![cfg(test)]

use crate::{SupplierError, SupplierRegistry, SupplierRegistryClient};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{vec, Address, Env, String, Vec};

struct RegistryTest {
    env: Env,
    admin: Address,
    verifier: Address,
    recorder: Address,
    supplier: Address,
    client: SupplierRegistryClient<'static>,
}

impl RegistryTest {
    fn new() -> Self {
        let env = Env::default();
        env.mock_all_auths();

        let admin = Address::generate(&env);
        let verifier = Address::generate(&env);
        let recorder = Address::generate(&env);
        let supplier = Address::generate(&env);

        let contract_id = env.register(SupplierRegistry, ());
        let client = SupplierRegistryClient::new(&env, &contract_id);
        client.initialize(&admin);
        client.grant_verifier(&verifier);
        client.grant_recorder(&recorder);

        RegistryTest {
            env,
            admin,
            verifier,
            recorder,
            supplier,
            client,
        }
    }

    fn register_default(&self) {
        self.client.register_supplier(
            &self.supplier,
            &String::from_str(&self.env, "Relief Logistics Ltd"),
            &String::from_str(&self.env, "Nairobi"),
            &vec![
                &self.env,
                String::from_str(&self.env, "water"),
                String::from_str(&self.env, "transport"),
            ],
            &String::from_str(&self.env, "ipfs://supplier-meta"),
        );
    }
}

#[test]
fn initialize_only_once() {
    let t = RegistryTest::new();
    let result = t.client.try_initialize(&t.admin);
    assert_eq!(result, Err(Ok(SupplierError::AlreadyInitialized)));
}

#[test]
fn registration_is_one_per_identity() {
    let t = RegistryTest::new();
    t.register_default();

    let record = t.client.get_supplier(&t.supplier);
    assert_eq!(record.name, String::from_str(&t.env, "Relief Logistics Ltd"));
    assert_eq!(record.reputation, 50);
    assert!(!record.verified);

    let result = t.client.try_register_supplier(
        &t.supplier,
        &String::from_str(&t.env, "Someone Else"),
        &String::from_str(&t.env, "Mombasa"),
        &vec![&t.env, String::from_str(&t.env, "food")],
        &String::from_str(&t.env, ""),
    );
    assert_eq!(result, Err(Ok(SupplierError::AlreadyRegistered)));

    // The original record survives the rejected second registration.
    let record = t.client.get_supplier(&t.supplier);
    assert_eq!(record.name, String::from_str(&t.env, "Relief Logistics Ltd"));
    assert_eq!(record.location, String::from_str(&t.env, "Nairobi"));
    assert_eq!(t.client.get_all_suppliers().len(), 1);
}

#[test]
fn registration_validates_fields() {
    let t = RegistryTest::new();

    let result = t.client.try_register_supplier(
        &t.supplier,
        &String::from_str(&t.env, ""),
        &String::from_str(&t.env, "Nairobi"),
        &vec![&t.env, String::from_str(&t.env, "water")],
        &String::from_str(&t.env, ""),
    );
    assert_eq!(result, Err(Ok(SupplierError::EmptyName)));

    let result = t.client.try_register_supplier(
        &t.supplier,
        &String::from_str(&t.env, "Relief Logistics Ltd"),
        &String::from_str(&t.env, "Nairobi"),
        &Vec::new(&t.env),
        &String::from_str(&t.env, ""),
    );
    assert_eq!(result, Err(Ok(SupplierError::NoCapabilities)));
}

#[test]
fn verification_is_one_time_and_role_gated() {
    let t = RegistryTest::new();
    t.register_default();

    let stranger = Address::generate(&t.env);
    let result = t.client.try_verify_supplier(&stranger, &t.supplier);
    assert_eq!(result, Err(Ok(SupplierError::Unauthorized)));

    t.client.verify_supplier(&t.verifier, &t.supplier);
    assert!(t.client.get_supplier(&t.supplier).verified);

    let result = t.client.try_verify_supplier(&t.verifier, &t.supplier);
    assert_eq!(result, Err(Ok(SupplierError::AlreadyVerified)));

    assert_eq!(t.client.get_verified_suppliers().len(), 1);
}

#[test]
fn outcomes_move_reputation_and_counters() {
    let t = RegistryTest::new();
    t.register_default();

    t.client
        .record_mission(&t.recorder, &t.supplier, &1u64, &true, &5000i128);
    let record = t.client.get_supplier(&t.supplier);
    assert_eq!(record.completed_missions, 1);
    assert!(record.reputation > 50);

    let other = Address::generate(&t.env);
    t.client.register_supplier(
        &other,
        &String::from_str(&t.env, "Late Freight Co"),
        &String::from_str(&t.env, "Mombasa"),
        &vec![&t.env, String::from_str(&t.env, "transport")],
        &String::from_str(&t.env, ""),
    );
    t.client
        .record_mission(&t.recorder, &other, &2u64, &false, &0i128);
    let record = t.client.get_supplier(&other);
    assert_eq!(record.failed_missions, 1);
    assert!(record.reputation < 50);
}

#[test]
fn reputation_is_clamped_to_its_range() {
    let t = RegistryTest::new();
    t.register_default();

    // 50 - 6 * 10 would go negative; it floors at zero instead.
    for mission_id in 1u64..=6 {
        t.client
            .record_mission(&t.recorder, &t.supplier, &mission_id, &false, &0i128);
    }
    assert_eq!(t.client.get_supplier(&t.supplier).reputation, 0);

    // 0 + 25 * 5 would pass 100; it caps there.
    for mission_id in 7u64..=31 {
        t.client
            .record_mission(&t.recorder, &t.supplier, &mission_id, &true, &100i128);
    }
    assert_eq!(t.client.get_supplier(&t.supplier).reputation, 100);
}

#[test]
fn success_rate_is_an_integer_percentage() {
    let t = RegistryTest::new();
    t.register_default();
    assert_eq!(t.client.get_success_rate(&t.supplier), 0);

    for mission_id in 1u64..=3 {
        t.client
            .record_mission(&t.recorder, &t.supplier, &mission_id, &true, &1000i128);
    }
    t.client
        .record_mission(&t.recorder, &t.supplier, &4u64, &false, &0i128);

    assert_eq!(t.client.get_success_rate(&t.supplier), 75);
}

#[test]
fn recording_requires_the_recorder_role() {
    let t = RegistryTest::new();
    t.register_default();

    let stranger = Address::generate(&t.env);
    let result = t
        .client
        .try_record_mission(&stranger, &t.supplier, &1u64, &true, &100i128);
    assert_eq!(result, Err(Ok(SupplierError::Unauthorized)));

    let record = t.client.get_supplier(&t.supplier);
    assert_eq!(record.completed_missions, 0);
    assert_eq!(record.reputation, 50);
}

#[test]
fn reviews_nudge_reputation_by_rating() {
    let t = RegistryTest::new();
    t.register_default();
    let reviewer = Address::generate(&t.env);

    let result = t.client.try_add_review(
        &reviewer,
        &t.supplier,
        &1u64,
        &0u32,
        &String::from_str(&t.env, "bad rating value"),
    );
    assert_eq!(result, Err(Ok(SupplierError::InvalidRating)));
    let result = t.client.try_add_review(
        &reviewer,
        &t.supplier,
        &1u64,
        &6u32,
        &String::from_str(&t.env, "bad rating value"),
    );
    assert_eq!(result, Err(Ok(SupplierError::InvalidRating)));

    t.client.add_review(
        &reviewer,
        &t.supplier,
        &1u64,
        &5u32,
        &String::from_str(&t.env, "delivered early"),
    );
    assert_eq!(t.client.get_supplier(&t.supplier).reputation, 52);

    t.client.add_review(
        &reviewer,
        &t.supplier,
        &2u64,
        &1u32,
        &String::from_str(&t.env, "half the cargo missing"),
    );
    assert_eq!(t.client.get_supplier(&t.supplier).reputation, 50);

    let reviews = t.client.get_reviews(&t.supplier);
    assert_eq!(reviews.len(), 2);
    assert_eq!(reviews.get(0).unwrap().rating, 5);
}

#[test]
fn location_filter_matches_exactly() {
    let t = RegistryTest::new();
    t.register_default();

    let other = Address::generate(&t.env);
    t.client.register_supplier(
        &other,
        &String::from_str(&t.env, "Coastal Aid Supply"),
        &String::from_str(&t.env, "Mombasa"),
        &vec![&t.env, String::from_str(&t.env, "food")],
        &String::from_str(&t.env, ""),
    );

    let nairobi = t
        .client
        .get_suppliers_by_location(&String::from_str(&t.env, "Nairobi"));
    assert_eq!(nairobi.len(), 1);
    assert_eq!(nairobi.get(0).unwrap().address, t.supplier);

    let lagos = t
        .client
        .get_suppliers_by_location(&String::from_str(&t.env, "Lagos"));
    assert_eq!(lagos.len(), 0);
}
