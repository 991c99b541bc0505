use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - Season start month must be within 1-12
/// - League and season label filters, when set, cannot be empty
/// - If log file path is provided, it cannot be empty
/// - Log file path parent directory must exist or be creatable
pub fn validate_config(
    season_start_month: u32,
    league: &Option<String>,
    season_label: &Option<String>,
    log_file_path: &Option<String>,
) -> Result<(), AppError> {
    if !(1..=12).contains(&season_start_month) {
        return Err(AppError::config_error(format!(
            "Season start month must be between 1 and 12, got {season_start_month}"
        )));
    }

    if league.as_ref().is_some_and(|l| l.trim().is_empty()) {
        return Err(AppError::config_error("League filter cannot be empty"));
    }

    if season_label.as_ref().is_some_and(|s| s.trim().is_empty()) {
        return Err(AppError::config_error("Season label filter cannot be empty"));
    }

    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        // Check if parent directory exists or can be created
        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_valid_config() {
        assert!(validate_config(7, &None, &None, &None).is_ok());
        assert!(
            validate_config(
                1,
                &Some("Premier-league".to_string()),
                &Some("2022/2023".to_string()),
                &None
            )
            .is_ok()
        );
    }

    #[test]
    fn test_month_out_of_range() {
        assert!(validate_config(0, &None, &None, &None).is_err());
        assert!(validate_config(13, &None, &None, &None).is_err());
    }

    #[test]
    fn test_empty_filters() {
        assert!(validate_config(7, &Some(" ".to_string()), &None, &None).is_err());
        assert!(validate_config(7, &None, &Some(String::new()), &None).is_err());
    }

    #[test]
    fn test_empty_log_path() {
        let result = validate_config(7, &None, &None, &Some(String::new()));
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_log_path_parent_is_created() {
        let temp_dir = tempdir().unwrap();
        let log_path = temp_dir.path().join("logs").join("app.log");
        let log_path_str = log_path.to_string_lossy().to_string();

        validate_config(7, &None, &None, &Some(log_path_str)).unwrap();
        assert!(temp_dir.path().join("logs").exists());
    }
}
