//! Client-facing DTOs
//!
//! Request/response structures for the HTTP API, shared so the server
//! handlers and the typed client never drift apart.

use serde::{Deserialize, Serialize};

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response: bearer token plus the authenticated admin
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub admin: AdminInfo,
}

/// Admin identity as exposed over the API (no credentials)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminInfo {
    pub id: i64,
    pub email: String,
    pub is_active: bool,
    pub created_at: i64,
}

/// Query string for the public guest lookup endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrefixQuery {
    pub prefix: String,
}

/// One distinct last name matching a prefix query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LastNameEntry {
    pub last_name: String,
}
