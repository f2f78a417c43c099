//! The individual connectivity checks.
//!
//! Each check prints its own progress and verdict and returns `true` on
//! pass. Checks never abort the run; a failure is reported and the next
//! check still executes so one pass surfaces every problem.

use hcc_api::ApiClient;
use hcc_config::{ApiConfig, DatabaseConfig, TlsConfig};
use hcc_db::DbGateway;

/// Verify the TLS certificate and key exist when TLS is enabled.
pub fn tls_artifacts(config: &TlsConfig) -> bool {
    println!("\nChecking TLS configuration");
    println!("  enabled: {}", config.enabled);

    if !config.enabled {
        println!("  ⚠ TLS is disabled");
        return true;
    }

    let problems = config.missing_artifacts();
    if problems.is_empty() {
        println!("  ✓ certificate found: {}", config.cert_file);
        println!("  ✓ key found: {}", config.key_file);
        true
    } else {
        for problem in &problems {
            println!("  ✗ {problem}");
        }
        false
    }
}

/// Initialize the catalog pool and probe it.
pub fn database(config: &DatabaseConfig) -> bool {
    println!("\nChecking database connection");
    println!("  descriptor: {}", config.connect_descriptor());
    println!("  user: {}", config.user);

    let gateway = match DbGateway::connect(config) {
        Ok(gateway) => {
            println!("  ✓ connection pool initialized");
            gateway
        }
        Err(error) => {
            println!("  ✗ pool initialization failed: {error}");
            return false;
        }
    };

    if !gateway.test_connection() {
        println!("  ✗ connection test failed");
        return false;
    }
    println!("  ✓ connection test passed");

    let banner = gateway.query("SELECT banner FROM v$version WHERE ROWNUM = 1", &[]);
    if let Some(Some(version)) = banner.rows.first().and_then(|row| row.first()) {
        println!("  ✓ Oracle version: {version}");
    }

    true
}

/// Probe the analysis service: health first, then two representative
/// endpoints.
pub async fn api(config: &ApiConfig) -> bool {
    println!("\nChecking API connection");
    println!("  base URL: {}", config.base_url);
    println!("  username: {}", config.username);

    let client = ApiClient::new(config);

    if !client.health_check().await {
        println!("  ✗ health check failed");
        return false;
    }
    println!("  ✓ health check passed");

    match client.strategies().await {
        Ok(strategies) => println!("  ✓ strategies endpoint working ({} strategies)", strategies.len()),
        Err(error) => {
            println!("  ✗ strategies endpoint failed: {error}");
            return false;
        }
    }

    match client.compression_statistics().await {
        Ok(_) => println!("  ✓ statistics endpoint working"),
        Err(error) => {
            println!("  ✗ statistics endpoint failed: {error}");
            return false;
        }
    }

    true
}
