//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod footy_error_tests {
    use super::*;

    #[tokio::test]
    async fn test_network_error_conversion() {
        // A relative URL fails inside reqwest without touching the network
        let client = reqwest::Client::new();
        let reqwest_error = client.get("not a url").send().await.unwrap_err();
        let footy_error = FootyError::from(reqwest_error);

        match footy_error {
            FootyError::Network(_) => (),
            _ => panic!("Expected Network error variant"),
        }
    }

    #[test]
    fn test_json_error_becomes_schema_error() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let footy_error = FootyError::from(json_error);

        match footy_error {
            FootyError::Schema { message } => assert!(!message.is_empty()),
            _ => panic!("Expected Schema error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let footy_error = FootyError::from(io_error);

        match footy_error {
            FootyError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_schema_helper() {
        let error = FootyError::schema("missing data.standings");
        assert_eq!(
            error.to_string(),
            "Unexpected response shape: missing data.standings"
        );
    }

    #[test]
    fn test_empty_result_error() {
        let error = FootyError::EmptyResult {
            season_label: "2025-26".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "No standings data available for the 2025-26 season"
        );
    }

    #[test]
    fn test_league_not_found_error() {
        let error = FootyError::LeagueNotFound {
            league: "Atlantis Premier".to_string(),
        };

        let error_string = error.to_string();
        assert!(error_string.contains("League not found"));
        assert!(error_string.contains("Atlantis Premier"));
    }

    #[test]
    fn test_invalid_season_error() {
        let error = FootyError::InvalidSeason {
            season: 1999,
            earliest: 2016,
            latest: 2025,
        };
        assert_eq!(
            error.to_string(),
            "Season 1999 is outside the selectable range 2016-2025"
        );
    }

    #[test]
    fn test_config_error() {
        let error = FootyError::Config {
            key: "FOOTY_HTTP_TIMEOUT_SECS".to_string(),
            value: "soon".to_string(),
        };

        let error_string = error.to_string();
        assert!(error_string.contains("FOOTY_HTTP_TIMEOUT_SECS"));
        assert!(error_string.contains("soon"));
    }

    #[test]
    fn test_error_source_chain() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let footy_error = FootyError::from(io_error);

        let error_trait: &dyn std::error::Error = &footy_error;
        assert!(error_trait.source().is_some());
    }

    #[test]
    fn test_result_type_alias_error() {
        fn test_function() -> Result<String> {
            Err(FootyError::schema("boom"))
        }

        match test_function().unwrap_err() {
            FootyError::Schema { .. } => (),
            _ => panic!("Expected Schema error"),
        }
    }
}
