/// Integration tests for the due computation
///
/// These run against an in-memory SQLite database, so no external services
/// are required. Run with: cargo test --test billing_tests

use lodgebook_shared::billing::compute_due;
use lodgebook_shared::db::migrations::run_migrations;
use lodgebook_shared::db::pool::{create_pool, DatabaseConfig};
use lodgebook_shared::models::bed::{Bed, CreateBed};
use lodgebook_shared::models::electricity_bill::{CreateElectricityBill, ElectricityBill};
use lodgebook_shared::models::payment::{CreatePayment, Payment};
use lodgebook_shared::models::person::Person;
use lodgebook_shared::models::room::{CreateRoom, Room};
use lodgebook_shared::occupancy::{occupy_bed, NewOccupancy};
use sqlx::SqlitePool;

/// Fresh in-memory database with the schema applied
async fn setup() -> SqlitePool {
    let pool = create_pool(DatabaseConfig::in_memory())
        .await
        .expect("Failed to create pool");
    run_migrations(&pool).await.expect("Failed to run migrations");
    pool
}

/// Creates a room with the given number of vacant beds
async fn make_room(pool: &SqlitePool, name: &str, bed_count: i64) -> (Room, Vec<Bed>) {
    let room = Room::create(pool, CreateRoom { name: name.to_string() })
        .await
        .expect("Failed to create room");

    let mut beds = Vec::new();
    for bed_number in 1..=bed_count {
        let bed = Bed::create(
            pool,
            CreateBed {
                room_id: room.id,
                bed_number,
            },
        )
        .await
        .expect("Failed to create bed");
        beds.push(bed);
    }

    (room, beds)
}

/// Moves a tenant into a bed
async fn move_in(pool: &SqlitePool, bed_id: i64, name: &str, base_rent: f64) -> Person {
    occupy_bed(
        pool,
        NewOccupancy {
            bed_id,
            name: name.to_string(),
            id_proof: None,
            base_rent,
        },
    )
    .await
    .expect("Failed to occupy bed")
}

#[tokio::test]
async fn test_due_for_missing_person_is_none() {
    let pool = setup().await;

    let statement = compute_due(&pool, 999, Some("2025-06")).await.unwrap();
    assert!(statement.is_none());
}

#[tokio::test]
async fn test_eb_share_is_zero_without_a_bill() {
    let pool = setup().await;
    let (_room, beds) = make_room(&pool, "R1", 1).await;
    let person = move_in(&pool, beds[0].id, "Asha", 1000.0).await;

    let statement = compute_due(&pool, person.id, Some("2025-06"))
        .await
        .unwrap()
        .expect("person exists");

    assert_eq!(statement.rent, 1000.0);
    assert_eq!(statement.eb_share, 0.0);
    assert_eq!(statement.paid, 0.0);
    assert_eq!(statement.due, 1000.0);
}

#[tokio::test]
async fn test_eb_share_is_zero_without_a_period() {
    let pool = setup().await;
    let (room, beds) = make_room(&pool, "R1", 1).await;
    let person = move_in(&pool, beds[0].id, "Asha", 1000.0).await;

    ElectricityBill::create(
        &pool,
        CreateElectricityBill {
            room_id: room.id,
            period: "2025-06".to_string(),
            total_amount: 300.0,
            split_evenly: true,
        },
    )
    .await
    .unwrap();

    // No period requested: the bill does not apply
    let statement = compute_due(&pool, person.id, None)
        .await
        .unwrap()
        .expect("person exists");

    assert_eq!(statement.eb_share, 0.0);
    assert_eq!(statement.due, 1000.0);
}

#[tokio::test]
async fn test_split_evenly_divides_by_occupied_beds() {
    let pool = setup().await;
    let (room, beds) = make_room(&pool, "R1", 2).await;
    let tenant_a = move_in(&pool, beds[0].id, "A", 1000.0).await;
    let tenant_b = move_in(&pool, beds[1].id, "B", 1000.0).await;

    ElectricityBill::create(
        &pool,
        CreateElectricityBill {
            room_id: room.id,
            period: "2025-06".to_string(),
            total_amount: 300.0,
            split_evenly: true,
        },
    )
    .await
    .unwrap();

    let a = compute_due(&pool, tenant_a.id, Some("2025-06"))
        .await
        .unwrap()
        .unwrap();
    let b = compute_due(&pool, tenant_b.id, Some("2025-06"))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(a.eb_share, 150.0);
    assert_eq!(b.eb_share, 150.0);
    assert_eq!(a.due, 1150.0);
    assert_eq!(b.due, 1150.0);

    // Paying the full due clears it
    Payment::create(
        &pool,
        CreatePayment {
            person_id: tenant_a.id,
            amount: 1150.0,
            period: Some("2025-06".to_string()),
        },
    )
    .await
    .unwrap();

    let a_after = compute_due(&pool, tenant_a.id, Some("2025-06"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(a_after.paid, 1150.0);
    assert_eq!(a_after.due, 0.0);

    // The roommate's due is untouched
    let b_after = compute_due(&pool, tenant_b.id, Some("2025-06"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(b_after.due, 1150.0);
}

#[tokio::test]
async fn test_split_shares_sum_to_bill_total() {
    let pool = setup().await;
    let (room, beds) = make_room(&pool, "R1", 3).await;
    let mut tenants = Vec::new();
    for (i, bed) in beds.iter().enumerate() {
        tenants.push(move_in(&pool, bed.id, &format!("T{}", i), 900.0).await);
    }

    ElectricityBill::create(
        &pool,
        CreateElectricityBill {
            room_id: room.id,
            period: "2025-07".to_string(),
            total_amount: 100.0,
            split_evenly: true,
        },
    )
    .await
    .unwrap();

    let mut share_sum = 0.0;
    for tenant in &tenants {
        let statement = compute_due(&pool, tenant.id, Some("2025-07"))
            .await
            .unwrap()
            .unwrap();
        share_sum += statement.eb_share;
    }

    // 100 / 3 per head; the sum recovers the total up to rounding
    assert!((share_sum - 100.0).abs() < 0.01);
}

#[tokio::test]
async fn test_unsplit_bill_charges_full_amount_to_each_tenant() {
    let pool = setup().await;
    let (room, beds) = make_room(&pool, "R1", 2).await;
    let tenant_a = move_in(&pool, beds[0].id, "A", 1000.0).await;
    let tenant_b = move_in(&pool, beds[1].id, "B", 1000.0).await;

    ElectricityBill::create(
        &pool,
        CreateElectricityBill {
            room_id: room.id,
            period: "2025-06".to_string(),
            total_amount: 300.0,
            split_evenly: false,
        },
    )
    .await
    .unwrap();

    let a = compute_due(&pool, tenant_a.id, Some("2025-06"))
        .await
        .unwrap()
        .unwrap();
    let b = compute_due(&pool, tenant_b.id, Some("2025-06"))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(a.eb_share, 300.0);
    assert_eq!(b.eb_share, 300.0);
}

#[tokio::test]
async fn test_due_can_go_negative() {
    let pool = setup().await;
    let (_room, beds) = make_room(&pool, "R1", 1).await;
    let person = move_in(&pool, beds[0].id, "Asha", 1000.0).await;

    Payment::create(
        &pool,
        CreatePayment {
            person_id: person.id,
            amount: 1500.0,
            period: Some("2025-06".to_string()),
        },
    )
    .await
    .unwrap();

    let statement = compute_due(&pool, person.id, Some("2025-06"))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(statement.paid, 1500.0);
    assert_eq!(statement.due, -500.0);
}

#[tokio::test]
async fn test_payments_accumulate_regardless_of_order() {
    let pool = setup().await;
    let (_room, beds) = make_room(&pool, "R1", 1).await;
    let person = move_in(&pool, beds[0].id, "Asha", 1000.0).await;

    for amount in [200.0, 50.0, 300.0] {
        Payment::create(
            &pool,
            CreatePayment {
                person_id: person.id,
                amount,
                period: Some("2025-06".to_string()),
            },
        )
        .await
        .unwrap();
    }

    let statement = compute_due(&pool, person.id, Some("2025-06"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(statement.paid, 550.0);
    assert_eq!(statement.due, 450.0);

    let payments = Payment::list_for_person(&pool, person.id, Some("2025-06"))
        .await
        .unwrap();
    assert_eq!(payments.len(), 3);
}

#[tokio::test]
async fn test_period_scoping_is_exact_string_match() {
    let pool = setup().await;
    let (_room, beds) = make_room(&pool, "R1", 1).await;
    let person = move_in(&pool, beds[0].id, "Asha", 1000.0).await;

    Payment::create(
        &pool,
        CreatePayment {
            person_id: person.id,
            amount: 400.0,
            period: Some("2025-05".to_string()),
        },
    )
    .await
    .unwrap();
    Payment::create(
        &pool,
        CreatePayment {
            person_id: person.id,
            amount: 600.0,
            period: Some("2025-06".to_string()),
        },
    )
    .await
    .unwrap();

    let june = compute_due(&pool, person.id, Some("2025-06"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(june.paid, 600.0);

    // No period: the whole ledger counts
    let lifetime = compute_due(&pool, person.id, None).await.unwrap().unwrap();
    assert_eq!(lifetime.paid, 1000.0);
}

#[tokio::test]
async fn test_duplicate_bills_resolve_to_newest_upload() {
    let pool = setup().await;
    let (room, beds) = make_room(&pool, "R1", 1).await;
    let person = move_in(&pool, beds[0].id, "Asha", 1000.0).await;

    ElectricityBill::create(
        &pool,
        CreateElectricityBill {
            room_id: room.id,
            period: "2025-06".to_string(),
            total_amount: 250.0,
            split_evenly: true,
        },
    )
    .await
    .unwrap();
    let corrected = ElectricityBill::create(
        &pool,
        CreateElectricityBill {
            room_id: room.id,
            period: "2025-06".to_string(),
            total_amount: 280.0,
            split_evenly: true,
        },
    )
    .await
    .unwrap();

    let found = ElectricityBill::find_for_room_period(&pool, room.id, "2025-06")
        .await
        .unwrap()
        .expect("bill exists");
    assert_eq!(found.id, corrected.id);

    let statement = compute_due(&pool, person.id, Some("2025-06"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(statement.eb_share, 280.0);
}
