use crate::{
    Category, EventType, ResourceType, Severity, StorageDriver, TrapPayload, VplexError,
    tests::fixtures,
};
use wiremock::MockServer;

fn trap_info() -> TrapPayload {
    TrapPayload::from([
        ("1.3.6.1.2.1.1.3.0".to_string(), "0".to_string()),
        (
            "1.3.6.1.6.3.1.1.4.1.0".to_string(),
            "1.3.6.1.4.1.1139.21.0".to_string(),
        ),
        (
            "1.3.6.1.4.1.1139.21.1.4".to_string(),
            "this is test".to_string(),
        ),
        ("1.3.6.1.4.1.1139.21.1.3".to_string(), "test".to_string()),
    ])
}

#[tokio::test]
async fn test_parse_alert_success() {
    let mock_server = MockServer::start().await;
    let driver = fixtures::driver_for(&mock_server);

    let alert = driver.parse_alert(&trap_info()).unwrap();
    assert_eq!(alert.alert_id, "0");
    assert_eq!(alert.alert_name, "test");
    assert_eq!(alert.severity, Severity::Informational);
    assert_eq!(alert.category, Category::Fault);
    assert_eq!(alert.event_type, EventType::EquipmentAlarm);
    assert_eq!(alert.description, "this is test");
    assert_eq!(alert.resource_type, ResourceType::Storage);
    assert_eq!(alert.location, "");
    assert!(alert.occur_time > 0);
}

#[tokio::test]
async fn test_parse_alert_critical() {
    let mock_server = MockServer::start().await;
    let driver = fixtures::driver_for(&mock_server);

    let mut trap = trap_info();
    trap.insert(
        "1.3.6.1.6.3.1.1.4.1.0".to_string(),
        "1.3.6.1.4.1.1139.21.0.1".to_string(),
    );
    assert_eq!(
        driver.parse_alert(&trap).unwrap().severity,
        Severity::Critical
    );
}

#[tokio::test]
async fn test_parse_alert_missing_component() {
    let mock_server = MockServer::start().await;
    let driver = fixtures::driver_for(&mock_server);

    let mut trap = trap_info();
    trap.remove("1.3.6.1.4.1.1139.21.1.3");
    assert!(matches!(
        driver.parse_alert(&trap),
        Err(VplexError::InvalidAlertPayload(_))
    ));
}

#[tokio::test]
async fn test_parse_alert_sends_no_requests() {
    let mock_server = MockServer::start().await;
    let driver = fixtures::driver_for(&mock_server);

    driver.parse_alert(&trap_info()).unwrap();
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_trap_config_and_clear_alert_are_no_ops() {
    let mock_server = MockServer::start().await;
    let driver = fixtures::driver_for(&mock_server);
    let trap_config = serde_json::json!({"host": "10.0.0.9", "port": 162});

    driver.add_trap_config(&trap_config).await.unwrap();
    driver.remove_trap_config(&trap_config).await.unwrap();
    driver.clear_alert("1111111").await.unwrap();
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}
