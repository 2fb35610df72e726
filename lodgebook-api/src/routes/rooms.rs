/// Room, bed, and electricity-bill endpoints
///
/// # Endpoints
///
/// - `POST /v1/rooms` - Create room
/// - `GET  /v1/rooms` - List rooms
/// - `GET  /v1/rooms/:id` - Room detail with beds and bills
/// - `POST /v1/rooms/:id/beds` - Create bed in room
/// - `POST /v1/rooms/:id/bills` - Upload electricity bill

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    routes::ensure_valid_period,
};
use axum::{
    extract::{Path, State},
    Json,
};
use lodgebook_shared::models::{
    bed::{Bed, CreateBed},
    electricity_bill::{CreateElectricityBill, ElectricityBill},
    room::{CreateRoom, Room},
};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Create room request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateRoomRequest {
    /// Display name
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,
}

/// List rooms response
#[derive(Debug, Serialize)]
pub struct RoomListResponse {
    /// All rooms, in creation order
    pub rooms: Vec<Room>,
}

/// Room detail response
#[derive(Debug, Serialize)]
pub struct RoomDetailResponse {
    /// The room itself
    pub room: Room,

    /// Beds in the room, by bed number
    pub beds: Vec<Bed>,

    /// Electricity bills uploaded for the room, by period
    pub bills: Vec<ElectricityBill>,
}

/// Create bed request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateBedRequest {
    /// Position within the room
    #[validate(range(min = 1, message = "Bed number must be at least 1"))]
    pub bed_number: i64,
}

/// Upload electricity bill request
#[derive(Debug, Deserialize, Validate)]
pub struct UploadBillRequest {
    /// Billing-period label ("YYYY-MM")
    pub period: String,

    /// Total billed amount for the room
    #[validate(range(min = 0.0, message = "Amount cannot be negative"))]
    pub total_amount: f64,

    /// Whether the amount is split across occupied beds (default true)
    #[serde(default = "default_split_evenly")]
    pub split_evenly: bool,
}

fn default_split_evenly() -> bool {
    true
}

/// Create room
///
/// # Endpoint
///
/// ```text
/// POST /v1/rooms
/// Content-Type: application/json
///
/// {"name": "Room 1"}
/// ```
///
/// # Errors
///
/// - `422 Unprocessable Entity`: Validation failed
pub async fn create_room(
    State(state): State<AppState>,
    Json(req): Json<CreateRoomRequest>,
) -> ApiResult<Json<Room>> {
    req.validate()?;

    let room = Room::create(&state.db, CreateRoom { name: req.name }).await?;

    Ok(Json(room))
}

/// List rooms
///
/// # Endpoint
///
/// ```text
/// GET /v1/rooms
/// ```
pub async fn list_rooms(State(state): State<AppState>) -> ApiResult<Json<RoomListResponse>> {
    let rooms = Room::list(&state.db).await?;

    Ok(Json(RoomListResponse { rooms }))
}

/// Room detail: the room, its beds, its bills
///
/// # Endpoint
///
/// ```text
/// GET /v1/rooms/:id
/// ```
///
/// # Errors
///
/// - `404 Not Found`: Room does not exist
pub async fn room_detail(
    State(state): State<AppState>,
    Path(room_id): Path<i64>,
) -> ApiResult<Json<RoomDetailResponse>> {
    let room = Room::find_by_id(&state.db, room_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Room {} not found", room_id)))?;

    let beds = Bed::list_by_room(&state.db, room_id).await?;
    let bills = ElectricityBill::list_by_room(&state.db, room_id).await?;

    Ok(Json(RoomDetailResponse { room, beds, bills }))
}

/// Create bed in room
///
/// # Endpoint
///
/// ```text
/// POST /v1/rooms/:id/beds
/// Content-Type: application/json
///
/// {"bed_number": 1}
/// ```
///
/// # Errors
///
/// - `404 Not Found`: Room does not exist
/// - `422 Unprocessable Entity`: Validation failed
pub async fn create_bed(
    State(state): State<AppState>,
    Path(room_id): Path<i64>,
    Json(req): Json<CreateBedRequest>,
) -> ApiResult<Json<Bed>> {
    req.validate()?;

    if Room::find_by_id(&state.db, room_id).await?.is_none() {
        return Err(ApiError::NotFound(format!("Room {} not found", room_id)));
    }

    let bed = Bed::create(
        &state.db,
        CreateBed {
            room_id,
            bed_number: req.bed_number,
        },
    )
    .await?;

    Ok(Json(bed))
}

/// Upload electricity bill for a room and period
///
/// # Endpoint
///
/// ```text
/// POST /v1/rooms/:id/bills
/// Content-Type: application/json
///
/// {"period": "2025-06", "total_amount": 300.0, "split_evenly": true}
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: Malformed billing period
/// - `404 Not Found`: Room does not exist
/// - `422 Unprocessable Entity`: Validation failed
pub async fn upload_bill(
    State(state): State<AppState>,
    Path(room_id): Path<i64>,
    Json(req): Json<UploadBillRequest>,
) -> ApiResult<Json<ElectricityBill>> {
    req.validate()?;
    ensure_valid_period(&req.period)?;

    if Room::find_by_id(&state.db, room_id).await?.is_none() {
        return Err(ApiError::NotFound(format!("Room {} not found", room_id)));
    }

    let bill = ElectricityBill::create(
        &state.db,
        CreateElectricityBill {
            room_id,
            period: req.period,
            total_amount: req.total_amount,
            split_evenly: req.split_evenly,
        },
    )
    .await?;

    Ok(Json(bill))
}
