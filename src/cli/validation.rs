//! Value parsers for CLI arguments.

use std::path::PathBuf;

/// Validates that a configuration file path exists and points to a file.
pub fn validate_config_file_path(value: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(value);
    if !path.exists() {
        return Err(format!("Configuration file '{}' does not exist", value));
    }
    if !path.is_file() {
        return Err(format!("'{}' is not a file", value));
    }
    Ok(path)
}

/// Validates a port number (clap already enforces the u16 range; zero is the
/// one value it accepts that we cannot bind).
pub fn validate_port(value: &str) -> Result<u16, String> {
    let port: u16 = value
        .parse()
        .map_err(|_| format!("'{}' is not a valid port number (1-65535)", value))?;
    if port == 0 {
        return Err("Port 0 is not usable; choose a port between 1 and 65535".to_string());
    }
    Ok(port)
}

/// Validates a host address: localhost, an IPv4/IPv6 address, or a hostname.
pub fn validate_host_address(value: &str) -> Result<String, String> {
    if value.is_empty() {
        return Err("Host address must not be empty".to_string());
    }
    if value == "localhost" || value.parse::<std::net::IpAddr>().is_ok() {
        return Ok(value.to_string());
    }
    // Hostname: alphanumeric labels separated by dots or hyphens.
    let valid_hostname = value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-');
    if valid_hostname {
        Ok(value.to_string())
    } else {
        Err(format!("'{}' is not a valid host address", value))
    }
}

/// Validates rollback step count: between 1 and 100.
pub fn validate_rollback_steps(value: &str) -> Result<u32, String> {
    let steps: u32 = value
        .parse()
        .map_err(|_| format!("'{}' is not a valid number of steps", value))?;
    if steps == 0 || steps > 100 {
        return Err("Rollback steps must be between 1 and 100".to_string());
    }
    Ok(steps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_port_zero() {
        assert!(validate_port("0").is_err());
        assert_eq!(validate_port("8080").unwrap(), 8080);
    }

    #[test]
    fn accepts_localhost_and_ip_addresses() {
        assert!(validate_host_address("localhost").is_ok());
        assert!(validate_host_address("0.0.0.0").is_ok());
        assert!(validate_host_address("::1").is_ok());
        assert!(validate_host_address("db.internal").is_ok());
        assert!(validate_host_address("not a host").is_err());
    }

    #[test]
    fn bounds_rollback_steps() {
        assert!(validate_rollback_steps("0").is_err());
        assert!(validate_rollback_steps("101").is_err());
        assert_eq!(validate_rollback_steps("3").unwrap(), 3);
    }
}
