use crate::{
    StorageDriver, StorageStatus, StorageType, VplexError,
    tests::fixtures::{self, CLUSTER, DEVICE, STORAGE_ID},
};
use serde_json::json;
use wiremock::MockServer;

#[tokio::test]
async fn test_list_storage_pools_success() {
    let mock_server = MockServer::start().await;
    fixtures::mount_array(&mock_server).await;
    let driver = fixtures::driver_for(&mock_server);

    let pools = driver.list_storage_pools().await.unwrap();
    assert_eq!(pools.len(), 1);

    let pool = &pools[0];
    assert_eq!(pool.name, DEVICE);
    assert_eq!(pool.storage_id, STORAGE_ID);
    assert_eq!(pool.native_storage_pool_id, DEVICE);
    assert_eq!(pool.description, "EMC VPlex Pool");
    assert_eq!(pool.status, StorageStatus::Normal);
    assert_eq!(pool.storage_type, StorageType::Block);
    assert_eq!(pool.total_capacity, 732212254720);
    assert_eq!(pool.used_capacity, 732212254720);
    assert_eq!(pool.free_capacity, 0);
    assert_eq!(pool.subscribed_capacity, 0);
}

#[tokio::test]
async fn test_list_storage_pools_ignores_other_children() {
    let mock_server = MockServer::start().await;
    fixtures::mount_get(&mock_server, "/vplex/clusters", fixtures::all_clusters()).await;
    fixtures::mount_get(
        &mock_server,
        &format!("/vplex/clusters/{}/devices", CLUSTER),
        json!({"response": {"context": [{
            "type": "devices",
            "attributes": [{"name": "name", "value": "devices"}],
            "children": [
                {"name": DEVICE, "type": "local-device"},
                {"name": "dist_dev_1", "type": "distributed-device"}
            ]
        }]}}),
    )
    .await;
    fixtures::mount_get(
        &mock_server,
        &format!("/vplex/clusters/{}/devices/{}", CLUSTER, DEVICE),
        fixtures::device(),
    )
    .await;
    let driver = fixtures::driver_for(&mock_server);

    let pools = driver.list_storage_pools().await.unwrap();
    assert_eq!(pools.len(), 1);
    assert_eq!(pools[0].name, DEVICE);
}

#[tokio::test]
async fn test_list_storage_pools_empty_cluster() {
    let mock_server = MockServer::start().await;
    fixtures::mount_get(&mock_server, "/vplex/clusters", fixtures::all_clusters()).await;
    fixtures::mount_get(
        &mock_server,
        &format!("/vplex/clusters/{}/devices", CLUSTER),
        json!({"response": {"context": [{
            "type": "devices",
            "attributes": [{"name": "name", "value": "devices"}],
            "children": []
        }]}}),
    )
    .await;
    let driver = fixtures::driver_for(&mock_server);

    assert!(driver.list_storage_pools().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_list_storage_pools_bad_capacity() {
    let mock_server = MockServer::start().await;
    fixtures::mount_get(&mock_server, "/vplex/clusters", fixtures::all_clusters()).await;
    fixtures::mount_get(
        &mock_server,
        &format!("/vplex/clusters/{}/devices", CLUSTER),
        fixtures::all_devices(),
    )
    .await;
    fixtures::mount_get(
        &mock_server,
        &format!("/vplex/clusters/{}/devices/{}", CLUSTER, DEVICE),
        json!({"response": {"context": [{
            "type": "local-device",
            "attributes": [
                {"name": "name", "value": DEVICE},
                {"name": "capacity", "value": "unknown"}
            ],
            "children": []
        }]}}),
    )
    .await;
    let driver = fixtures::driver_for(&mock_server);

    assert!(matches!(
        driver.list_storage_pools().await,
        Err(VplexError::Validation(_))
    ));
}
