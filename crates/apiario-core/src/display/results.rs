//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::models::Record;

/// Wrapper type for displaying the result of an insert.
///
/// Shows a confirmation line with the generated key followed by the stored
/// record as read back from the database.
///
/// ```rust
/// use apiario_core::{display::CreateResult, models::Drum};
///
/// let drum = Drum {
///     id: 7,
///     registration_number: "T-0007".to_string(),
/// };
/// let output = CreateResult::new(drum).to_string();
/// assert!(output.starts_with("Created drum with ID: 7"));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl<T: Record + fmt::Display> fmt::Display for CreateResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Created {} with ID: {}",
            T::ENTITY.to_lowercase(),
            self.resource.key()
        )?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of a delete.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl<T: Record + fmt::Display> fmt::Display for DeleteResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted {} with ID: {}",
            T::ENTITY.to_lowercase(),
            self.resource.key()
        )?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// A one-line success or failure message for the console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: true,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: false,
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = if self.success { "**Success:**" } else { "**Error:**" };
        writeln!(f, "{label} {}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Beekeeper;

    #[test]
    fn test_delete_result_display() {
        let beekeeper = Beekeeper {
            id: 4,
            first_name: "Ana".to_string(),
            last_name: "Ruiz".to_string(),
        };
        let output = DeleteResult::new(beekeeper).to_string();
        assert!(output.starts_with("Deleted beekeeper with ID: 4"));
        assert!(output.contains("# 4. Ana Ruiz"));
    }

    #[test]
    fn test_operation_status_display() {
        assert_eq!(
            OperationStatus::success("Saved").to_string(),
            "**Success:** Saved\n"
        );
        assert!(OperationStatus::failure("Nope").to_string().contains("Error:"));
    }
}
