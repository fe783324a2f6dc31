//! Result type alias for propbind

use super::errors::PropbindError;

/// Result type alias for propbind operations
///
/// # Examples
///
/// ```
/// use propbind::domain::result::Result;
/// use propbind::domain::errors::PropbindError;
///
/// fn failing_function() -> Result<()> {
///     Err(PropbindError::Configuration("file not found".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, PropbindError>;
