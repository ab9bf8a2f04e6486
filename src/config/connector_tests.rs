//! Tests for connector configuration materialization.

use crate::env::MapEnv;

use super::connector::parse_retry_count;
use super::{ConfigError, ConnectorConfig, defaults, vars};

/// Environment with every required variable set.
fn complete_env() -> MapEnv {
    MapEnv::new()
        .with(vars::TOPIC, "orders")
        .with(vars::HTTP_ENDPOINT, "http://localhost:8080/fn")
        .with(vars::MAX_RETRIES, "3")
        .with(vars::CONTENT_TYPE, "application/json")
}

mod required_variables {
    use super::*;

    #[test]
    fn complete_env_materializes() {
        let config = ConnectorConfig::from_env(&complete_env()).unwrap();

        assert_eq!(config.topic, "orders");
        assert_eq!(config.http_endpoint, "http://localhost:8080/fn");
        assert_eq!(config.max_retries, 3);
        assert_eq!(config.content_type, "application/json");
    }

    #[test]
    fn each_missing_variable_is_named() {
        for name in vars::REQUIRED_CONNECTOR {
            let env = complete_env().with(name, "");
            let result = ConnectorConfig::from_env(&env);

            match result {
                Err(ConfigError::MissingVariable { name: missing }) => assert_eq!(missing, name),
                other => panic!("expected MissingVariable({name}), got {other:?}"),
            }
        }
    }

    #[test]
    fn first_missing_variable_in_check_order_is_reported() {
        let env = MapEnv::new().with(vars::MAX_RETRIES, "1");
        let result = ConnectorConfig::from_env(&env);

        assert!(matches!(
            result,
            Err(ConfigError::MissingVariable { name: "TOPIC" })
        ));
    }

    #[test]
    fn missing_variable_message_contains_name() {
        let env = complete_env().with(vars::CONTENT_TYPE, "");
        let err = ConnectorConfig::from_env(&env).unwrap_err();

        assert!(err.to_string().contains("CONTENT_TYPE"));
        assert_eq!(err.variable(), Some("CONTENT_TYPE"));
    }

    #[test]
    fn missing_variable_is_reported_before_bad_retry_count() {
        let env = complete_env()
            .with(vars::MAX_RETRIES, "abc")
            .with(vars::TOPIC, "");

        assert!(matches!(
            ConnectorConfig::from_env(&env),
            Err(ConfigError::MissingVariable { name: "TOPIC" })
        ));
    }
}

mod optional_variables {
    use super::*;

    #[test]
    fn topics_absent_by_default() {
        let config = ConnectorConfig::from_env(&complete_env()).unwrap();

        assert_eq!(config.response_topic, None);
        assert_eq!(config.error_topic, None);
    }

    #[test]
    fn topics_read_when_set() {
        let env = complete_env()
            .with(vars::RESPONSE_TOPIC, "orders-out")
            .with(vars::ERROR_TOPIC, "orders-err");
        let config = ConnectorConfig::from_env(&env).unwrap();

        assert_eq!(config.response_topic.as_deref(), Some("orders-out"));
        assert_eq!(config.error_topic.as_deref(), Some("orders-err"));
    }

    #[test]
    fn source_name_defaults_to_sentinel() {
        let config = ConnectorConfig::from_env(&complete_env()).unwrap();

        assert_eq!(config.source_name, defaults::SOURCE_NAME);
        assert_eq!(config.source_name, "KEDAConnector");
    }

    #[test]
    fn empty_source_name_uses_default() {
        let env = complete_env().with(vars::SOURCE_NAME, "");
        let config = ConnectorConfig::from_env(&env).unwrap();

        assert_eq!(config.source_name, "KEDAConnector");
    }

    #[test]
    fn explicit_source_name_is_kept() {
        let env = complete_env().with(vars::SOURCE_NAME, "kafka-orders");
        let config = ConnectorConfig::from_env(&env).unwrap();

        assert_eq!(config.source_name, "kafka-orders");
    }
}

mod retry_count {
    use super::*;

    #[test]
    fn non_numeric_value_is_parse_error() {
        let env = complete_env().with(vars::MAX_RETRIES, "abc");
        let result = ConnectorConfig::from_env(&env);

        match result {
            Err(ConfigError::InvalidRetryCount { value, .. }) => assert_eq!(value, "abc"),
            other => panic!("expected InvalidRetryCount, got {other:?}"),
        }
    }

    #[test]
    fn parse_error_keeps_raw_value_in_message() {
        let env = complete_env().with(vars::MAX_RETRIES, " 12x ");
        let err = ConnectorConfig::from_env(&env).unwrap_err();

        assert!(err.to_string().contains(" 12x "));
        assert_eq!(err.variable(), Some("MAX_RETRIES"));
    }

    #[test]
    fn negative_value_is_rejected() {
        let env = complete_env().with(vars::MAX_RETRIES, "-1");

        assert!(matches!(
            ConnectorConfig::from_env(&env),
            Err(ConfigError::InvalidRetryCount { .. })
        ));
    }

    #[test]
    fn zero_gives_single_attempt() {
        let env = complete_env().with(vars::MAX_RETRIES, "0");
        let config = ConnectorConfig::from_env(&env).unwrap();

        assert_eq!(config.max_retries, 0);
        assert_eq!(config.attempt_budget(), 1);
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert_eq!(parse_retry_count("  5\n").unwrap(), 5);
    }

    #[test]
    fn decimal() {
        assert_eq!(parse_retry_count("10").unwrap(), 10);
        assert_eq!(parse_retry_count("+7").unwrap(), 7);
        assert_eq!(parse_retry_count("0").unwrap(), 0);
    }

    #[test]
    fn prefixed_bases() {
        assert_eq!(parse_retry_count("0x1F").unwrap(), 31);
        assert_eq!(parse_retry_count("0o17").unwrap(), 15);
        assert_eq!(parse_retry_count("0b101").unwrap(), 5);
        assert_eq!(parse_retry_count("017").unwrap(), 15);
    }

    #[test]
    fn underscores_between_digits() {
        assert_eq!(parse_retry_count("1_000").unwrap(), 1000);
        assert!(parse_retry_count("_1").is_err());
        assert!(parse_retry_count("1_").is_err());
        assert!(parse_retry_count("1__0").is_err());
    }

    #[test]
    fn underscore_directly_after_prefix() {
        assert_eq!(parse_retry_count("0x_1f").unwrap(), 31);
        assert_eq!(parse_retry_count("0b_1_0").unwrap(), 2);
        assert_eq!(parse_retry_count("0_7").unwrap(), 7);
        assert!(parse_retry_count("0x_").is_err());
        assert!(parse_retry_count("0x__1").is_err());
        assert!(parse_retry_count("0_").is_err());
    }

    #[test]
    fn malformed_values() {
        assert!(parse_retry_count("").is_err());
        assert!(parse_retry_count("0x").is_err());
        assert!(parse_retry_count("09").is_err());
        assert!(parse_retry_count("1.5").is_err());
        assert!(parse_retry_count("-").is_err());
    }
}

mod display {
    use super::*;

    #[test]
    fn shows_endpoint_and_retries() {
        let config = ConnectorConfig::from_env(&complete_env()).unwrap();
        let text = config.to_string();

        assert!(text.contains("http_endpoint: http://localhost:8080/fn"));
        assert!(text.contains("max_retries: 3"));
        assert!(text.contains("response_topic: none"));
    }
}
