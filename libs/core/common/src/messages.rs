//! Message templates shared by validators, repositories and services.

use strum::Display;

/// Operation verb used in the service failure envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Operation {
    Creating,
    Updating,
    Removing,
    Retrieving,
}

/// Outcome past tense used in service success messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Outcome {
    Removed,
}

pub const ID: &str = "ID";
pub const USER_ID: &str = "user's ID";

/// "The {field} is required."
pub fn field_required(field: &str) -> String {
    format!("The {field} is required.")
}

/// "The {field} is invalid."
pub fn field_invalid(field: &str) -> String {
    format!("The {field} is invalid.")
}

/// "{entity} not found."
pub fn entity_not_found(entity: &str) -> String {
    format!("{entity} not found.")
}

/// "{entity} not found by {field}."
pub fn entity_not_found_by(entity: &str, field: &str) -> String {
    format!("{entity} not found by {field}.")
}

/// "{entity} removed successfully!"
pub fn entity_removed(entity: &str) -> String {
    format!("{entity} removed successfully!")
}

/// "An error occurred while {operation} the {entity}: {detail}"
pub fn operation_failed(operation: Operation, entity: &str, detail: &str) -> String {
    format!("An error occurred while {operation} the {entity}: {detail}")
}

/// "{entity} {outcome} successfully"
pub fn operation_succeeded(entity: &str, outcome: Outcome) -> String {
    format!("{entity} {outcome} successfully")
}
