use crate::{
    StorageDriver, StorageStatus, VplexError,
    tests::fixtures::{self, PASSWORD, USERNAME},
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path},
};

#[tokio::test]
async fn test_get_storage_success() {
    let mock_server = MockServer::start().await;
    fixtures::mount_array(&mock_server).await;
    let driver = fixtures::driver_for(&mock_server);

    let storage = driver.get_storage().await.unwrap();
    assert_eq!(storage.name, "cluster-1");
    assert_eq!(storage.vendor, "DELL EMC");
    assert_eq!(storage.description, "EMC VPlex Storage");
    assert_eq!(storage.status, StorageStatus::Offline);
    assert_eq!(storage.serial_number, "FNM00121700047");
    assert_eq!(storage.firmware_version, "");
    assert_eq!(storage.model, "");
    assert_eq!(storage.location, "");
    assert_eq!(storage.subscribed_capacity, 0);
    assert_eq!(storage.raw_capacity, 907373133824);
    assert_eq!(storage.total_capacity, 732212254720);
    assert_eq!(storage.used_capacity, 644245094400);
    assert_eq!(storage.free_capacity, 87967160320);
}

#[tokio::test]
async fn test_get_storage_serializes_like_platform_record() {
    let mock_server = MockServer::start().await;
    fixtures::mount_array(&mock_server).await;
    let driver = fixtures::driver_for(&mock_server);

    let storage = driver.get_storage().await.unwrap();
    let value = serde_json::to_value(&storage).unwrap();
    assert_eq!(value["status"], "offline");
    assert_eq!(value["serial_number"], "FNM00121700047");
    assert_eq!(value["free_capacity"], 87967160320_u64);
}

#[tokio::test]
async fn test_every_request_carries_credentials() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/vplex/clusters"))
        .and(header("username", USERNAME))
        .and(header("password", PASSWORD))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::all_clusters()))
        .expect(2)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/vplex/clusters/cluster-1/devices"))
        .and(header("username", USERNAME))
        .and(header("password", PASSWORD))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::all_devices()))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path(
            "/vplex/clusters/cluster-1/devices/Device_CLARiiON0041_KLM_test01",
        ))
        .and(header("username", USERNAME))
        .and(header("password", PASSWORD))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::device()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let driver = fixtures::driver_for(&mock_server);
    let pools = driver.list_storage_pools().await.unwrap();
    assert_eq!(pools.len(), 1);
}

#[tokio::test]
async fn test_get_storage_relogs_in_once_on_stale_session() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/vplex/clusters/cluster-1"))
        .respond_with(ResponseTemplate::new(403))
        .up_to_n_times(1)
        .expect(1)
        .mount(&mock_server)
        .await;
    fixtures::mount_array(&mock_server).await;
    let driver = fixtures::driver_for(&mock_server);

    let storage = driver.get_storage().await.unwrap();
    assert_eq!(storage.serial_number, "FNM00121700047");
}

#[tokio::test]
async fn test_get_storage_bad_response() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/vplex/clusters/cluster-1"))
        .respond_with(ResponseTemplate::new(403).set_body_string("Forbidden"))
        .mount(&mock_server)
        .await;
    fixtures::mount_array(&mock_server).await;
    let driver = fixtures::driver_for(&mock_server);

    let err = driver.get_storage().await.unwrap_err();
    assert!(matches!(err, VplexError::BadResponse { status: 403, .. }));
    assert!(err.to_string().contains("Bad response from server"));
}

#[tokio::test]
async fn test_get_storage_invalid_credentials() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/vplex/clusters"))
        .respond_with(ResponseTemplate::new(401).set_body_string("User authentication failed"))
        .expect(1)
        .mount(&mock_server)
        .await;
    let driver = fixtures::driver_for(&mock_server);

    assert!(matches!(
        driver.get_storage().await,
        Err(VplexError::InvalidCredentials(_))
    ));
}

#[tokio::test]
async fn test_get_storage_without_context_is_malformed() {
    let mock_server = MockServer::start().await;
    fixtures::mount_get(
        &mock_server,
        "/vplex/clusters",
        serde_json::json!({"response": {"message": "", "exception": "", "custom-data": ""}}),
    )
    .await;
    let driver = fixtures::driver_for(&mock_server);

    assert!(matches!(
        driver.get_storage().await,
        Err(VplexError::MalformedResponse { .. })
    ));
}
