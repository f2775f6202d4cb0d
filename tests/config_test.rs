use peer_motion::{DatabaseConfig, MotionEnv, PeerDatabase};

#[test]
fn test_partial_config_uses_defaults() {
    let config: DatabaseConfig = serde_json::from_str(r#"{ "port": 8080 }"#).unwrap();
    assert_eq!(config.host, "peer.berkeley.edu");
    assert_eq!(config.port, 8080);
    assert_eq!(config.timeout_secs, 10);
    assert_eq!(config.retries, 1);
}

#[test]
fn test_full_config() {
    let config: DatabaseConfig = serde_json::from_str(
        r#"{ "host": "mirror.example.org", "port": 8000, "timeout_secs": 3, "retries": 0 }"#,
    )
    .unwrap();
    assert_eq!(
        config,
        DatabaseConfig::default()
            .with_host("mirror.example.org")
            .with_port(8000)
            .with_timeout_secs(3)
            .with_retries(0)
    );
}

#[test]
fn test_database_keeps_config() {
    let config = DatabaseConfig::default().with_host("localhost");
    let database: PeerDatabase<MotionEnv> = PeerDatabase::new(config.clone());
    assert_eq!(database.config(), &config);
}
