/// Tenant, due-statement, and payment endpoints
///
/// # Endpoints
///
/// - `POST /v1/people` - Occupy a bed, creating the tenant
/// - `GET  /v1/people` - List tenants
/// - `GET  /v1/people/:id` - Tenant detail with payment history
/// - `GET  /v1/people/:id/due` - Due statement, optionally for a period
/// - `GET  /v1/people/:id/payments` - Payment history
/// - `POST /v1/people/:id/payments` - Record a payment
/// - `POST /v1/people/:id/payments/full` - Pay the full amount due

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    routes::ensure_valid_period,
};
use axum::{
    extract::{Path, Query, State},
    Json,
};
use lodgebook_shared::{
    billing::compute_due,
    models::{
        payment::{CreatePayment, Payment},
        person::Person,
    },
    occupancy::{occupy_bed, NewOccupancy},
};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Occupy bed request
///
/// The room is derived from the bed; callers only name the bed.
#[derive(Debug, Deserialize, Validate)]
pub struct OccupyBedRequest {
    /// The bed to occupy
    pub bed_id: i64,

    /// Tenant name
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    /// Identity document reference
    #[validate(length(max = 100, message = "Id proof must be at most 100 characters"))]
    pub id_proof: Option<String>,

    /// Flat rent per billing period
    #[serde(default)]
    #[validate(range(min = 0.0, message = "Rent cannot be negative"))]
    pub base_rent: f64,
}

/// List tenants response
#[derive(Debug, Serialize)]
pub struct PersonListResponse {
    /// All tenants, in creation order
    pub people: Vec<Person>,
}

/// Tenant detail response
#[derive(Debug, Serialize)]
pub struct PersonDetailResponse {
    /// The tenant
    pub person: Person,

    /// Every payment the tenant has made, by timestamp
    pub payments: Vec<Payment>,
}

/// Optional billing-period scope for due and payment queries
#[derive(Debug, Deserialize)]
pub struct PeriodQuery {
    /// Billing-period label ("YYYY-MM")
    pub period: Option<String>,
}

/// Tenant summary embedded in the due statement
#[derive(Debug, Serialize)]
pub struct PersonSummary {
    /// Tenant ID
    pub id: i64,

    /// Tenant name
    pub name: String,
}

/// Due statement response
///
/// The machine-readable result of the due computation.
#[derive(Debug, Serialize)]
pub struct DueResponse {
    /// Flat base rent
    pub rent: f64,

    /// Electricity-bill share for the requested period
    pub eb_share: f64,

    /// Payments netted against the due
    pub paid: f64,

    /// rent + eb_share - paid, rounded to two decimals; negative means
    /// the tenant is in credit
    pub due: f64,

    /// The tenant the statement is for
    pub person: PersonSummary,
}

/// Payment list response
#[derive(Debug, Serialize)]
pub struct PaymentListResponse {
    /// Payments, ordered by timestamp
    pub payments: Vec<Payment>,
}

/// Record payment request
#[derive(Debug, Deserialize, Validate)]
pub struct RecordPaymentRequest {
    /// Amount paid
    #[validate(range(min = 0.0, message = "Amount cannot be negative"))]
    pub amount: f64,

    /// Optional billing-period label
    pub period: Option<String>,
}

/// Pay-full request
#[derive(Debug, Deserialize, Default)]
pub struct PayFullRequest {
    /// Optional billing-period label
    pub period: Option<String>,
}

/// Occupy a bed, creating the tenant
///
/// # Endpoint
///
/// ```text
/// POST /v1/people
/// Content-Type: application/json
///
/// {"bed_id": 1, "name": "Asha", "id_proof": "DL-774", "base_rent": 1000.0}
/// ```
///
/// # Errors
///
/// - `404 Not Found`: Bed does not exist
/// - `409 Conflict`: Bed is already occupied
/// - `422 Unprocessable Entity`: Validation failed
pub async fn create_person(
    State(state): State<AppState>,
    Json(req): Json<OccupyBedRequest>,
) -> ApiResult<Json<Person>> {
    req.validate()?;

    let person = occupy_bed(
        &state.db,
        NewOccupancy {
            bed_id: req.bed_id,
            name: req.name,
            id_proof: req.id_proof,
            base_rent: req.base_rent,
        },
    )
    .await?;

    Ok(Json(person))
}

/// List tenants
///
/// # Endpoint
///
/// ```text
/// GET /v1/people
/// ```
pub async fn list_people(State(state): State<AppState>) -> ApiResult<Json<PersonListResponse>> {
    let people = Person::list(&state.db).await?;

    Ok(Json(PersonListResponse { people }))
}

/// Tenant detail: the person and their payment history
///
/// # Endpoint
///
/// ```text
/// GET /v1/people/:id
/// ```
///
/// # Errors
///
/// - `404 Not Found`: Person does not exist
pub async fn person_detail(
    State(state): State<AppState>,
    Path(person_id): Path<i64>,
) -> ApiResult<Json<PersonDetailResponse>> {
    let person = Person::find_by_id(&state.db, person_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Person {} not found", person_id)))?;

    let payments = Payment::list_for_person(&state.db, person_id, None).await?;

    Ok(Json(PersonDetailResponse { person, payments }))
}

/// Due statement for a tenant, optionally scoped to a period
///
/// # Endpoint
///
/// ```text
/// GET /v1/people/:id/due?period=2025-06
/// ```
///
/// # Response
///
/// ```json
/// {
///   "rent": 1000.0,
///   "eb_share": 150.0,
///   "paid": 0.0,
///   "due": 1150.0,
///   "person": {"id": 1, "name": "Asha"}
/// }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: Malformed billing period
/// - `404 Not Found`: Person does not exist
pub async fn due_statement(
    State(state): State<AppState>,
    Path(person_id): Path<i64>,
    Query(query): Query<PeriodQuery>,
) -> ApiResult<Json<DueResponse>> {
    if let Some(period) = query.period.as_deref() {
        ensure_valid_period(period)?;
    }

    let statement = compute_due(&state.db, person_id, query.period.as_deref())
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Person {} not found", person_id)))?;

    Ok(Json(DueResponse {
        rent: statement.rent,
        eb_share: statement.eb_share,
        paid: statement.paid,
        due: statement.due,
        person: PersonSummary {
            id: statement.person.id,
            name: statement.person.name,
        },
    }))
}

/// Payment history for a tenant, optionally scoped to a period
///
/// # Endpoint
///
/// ```text
/// GET /v1/people/:id/payments?period=2025-06
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: Malformed billing period
/// - `404 Not Found`: Person does not exist
pub async fn list_payments(
    State(state): State<AppState>,
    Path(person_id): Path<i64>,
    Query(query): Query<PeriodQuery>,
) -> ApiResult<Json<PaymentListResponse>> {
    if let Some(period) = query.period.as_deref() {
        ensure_valid_period(period)?;
    }

    if Person::find_by_id(&state.db, person_id).await?.is_none() {
        return Err(ApiError::NotFound(format!("Person {} not found", person_id)));
    }

    let payments =
        Payment::list_for_person(&state.db, person_id, query.period.as_deref()).await?;

    Ok(Json(PaymentListResponse { payments }))
}

/// Record a payment for a tenant
///
/// # Endpoint
///
/// ```text
/// POST /v1/people/:id/payments
/// Content-Type: application/json
///
/// {"amount": 1150.0, "period": "2025-06"}
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: Malformed billing period
/// - `404 Not Found`: Person does not exist
/// - `422 Unprocessable Entity`: Validation failed
pub async fn record_payment(
    State(state): State<AppState>,
    Path(person_id): Path<i64>,
    Json(req): Json<RecordPaymentRequest>,
) -> ApiResult<Json<Payment>> {
    req.validate()?;
    if let Some(period) = req.period.as_deref() {
        ensure_valid_period(period)?;
    }

    if Person::find_by_id(&state.db, person_id).await?.is_none() {
        return Err(ApiError::NotFound(format!("Person {} not found", person_id)));
    }

    let payment = Payment::create(
        &state.db,
        CreatePayment {
            person_id,
            amount: req.amount,
            period: req.period,
        },
    )
    .await?;

    Ok(Json(payment))
}

/// Pay the full amount currently due
///
/// Computes the due (optionally scoped to a period) and records a payment
/// of `max(due, 0)`. A tenant in credit gets a zero-amount payment.
///
/// # Endpoint
///
/// ```text
/// POST /v1/people/:id/payments/full
/// Content-Type: application/json
///
/// {"period": "2025-06"}
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: Malformed billing period
/// - `404 Not Found`: Person does not exist
pub async fn pay_full(
    State(state): State<AppState>,
    Path(person_id): Path<i64>,
    Json(req): Json<PayFullRequest>,
) -> ApiResult<Json<Payment>> {
    if let Some(period) = req.period.as_deref() {
        ensure_valid_period(period)?;
    }

    let statement = compute_due(&state.db, person_id, req.period.as_deref())
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Person {} not found", person_id)))?;

    let payment = Payment::create(
        &state.db,
        CreatePayment {
            person_id,
            amount: statement.due.max(0.0),
            period: req.period,
        },
    )
    .await?;

    Ok(Json(payment))
}
