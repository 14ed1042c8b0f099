//! User facing texts for action outcomes.

use crate::api::ApiError;

pub const PROGRAM_EXISTS: &str = "Program already exists!";
pub const PROGRAM_NAME_REQUIRED: &str = "Program name required!";
pub const CLIENT_EXISTS: &str = "Email already exists!";
pub const CLIENT_FIELDS_REQUIRED: &str = "Name and email required!";

pub const PROGRAM_DELETED: &str = "Program deleted successfully";
pub const PROGRAM_DELETE_FAILED: &str = "Failed to delete program";
pub const CLIENT_REGISTERED: &str = "Client registered successfully!";
pub const CLIENT_DELETED: &str = "Client deleted successfully";
pub const CLIENT_DELETE_FAILED: &str = "Failed to delete client";

pub const EXIT_PROMPT: &str = "Press Ctrl+C again to exit";

pub fn program_created(name: &str) -> String {
    format!("Program \"{name}\" created!")
}

pub fn program_error(error: &ApiError) -> String {
    match error.status() {
        Some(409) => PROGRAM_EXISTS.to_string(),
        Some(400) => PROGRAM_NAME_REQUIRED.to_string(),
        _ => error.to_string(),
    }
}

pub fn client_error(error: &ApiError) -> String {
    match error.status() {
        Some(409) => CLIENT_EXISTS.to_string(),
        Some(400) => CLIENT_FIELDS_REQUIRED.to_string(),
        _ => error.to_string(),
    }
}
