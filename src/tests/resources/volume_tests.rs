use crate::{
    DriverConfig, StorageDriver, StorageStatus, ThinProvisioningRule, VplexDriver, VplexError,
    VolumeType,
    tests::fixtures::{self, CLUSTER, STORAGE_ID, VIRTUAL_VOLUME},
};
use serde_json::json;
use wiremock::MockServer;

async fn mount_single_volume(mock_server: &MockServer, volume: serde_json::Value) {
    fixtures::mount_get(mock_server, "/vplex/clusters", fixtures::all_clusters()).await;
    fixtures::mount_get(
        mock_server,
        &format!("/vplex/clusters/{}/virtual-volumes", CLUSTER),
        fixtures::all_virtual_volumes(),
    )
    .await;
    fixtures::mount_get(
        mock_server,
        &format!("/vplex/clusters/{}/virtual-volumes/{}", CLUSTER, VIRTUAL_VOLUME),
        volume,
    )
    .await;
}

#[tokio::test]
async fn test_list_volumes_success() {
    let mock_server = MockServer::start().await;
    fixtures::mount_array(&mock_server).await;
    let driver = fixtures::driver_for(&mock_server);

    let volumes = driver.list_volumes().await.unwrap();
    assert_eq!(volumes.len(), 1);

    let volume = &volumes[0];
    assert_eq!(volume.name, VIRTUAL_VOLUME);
    assert_eq!(volume.storage_id, STORAGE_ID);
    assert_eq!(volume.description, "EMC VPlex volume");
    assert_eq!(volume.status, StorageStatus::Normal);
    assert_eq!(
        volume.native_volume_id,
        "VPD83T3:60001440000000103029208322b81b8c"
    );
    assert_eq!(
        volume.native_storage_pool_id,
        "device_CLAIM_CL_6800V3_VPLEX_LUN0_1"
    );
    assert_eq!(volume.wwn, "60001440000000103029208322b81b8c");
    assert_eq!(volume.volume_type, VolumeType::Thick);
    assert_eq!(volume.total_capacity, 644245094400);
    assert_eq!(volume.used_capacity, 644245094400);
    assert_eq!(volume.free_capacity, 0);
    assert!(!volume.compressed);
    assert!(!volume.deduplicated);

    let value = serde_json::to_value(volume).unwrap();
    assert_eq!(value["type"], "thick");
    assert_eq!(value["status"], "normal");
}

#[tokio::test]
async fn test_list_volumes_empty_volume_is_malformed() {
    let mock_server = MockServer::start().await;
    mount_single_volume(&mock_server, fixtures::empty_virtual_volume()).await;
    let driver = fixtures::driver_for(&mock_server);

    assert!(matches!(
        driver.list_volumes().await,
        Err(VplexError::MalformedResponse { ref node_type, .. }) if node_type == "virtual-volume"
    ));
}

#[tokio::test]
async fn test_thin_rule_is_configurable() {
    let volume = json!({"response": {"context": [{
        "type": "virtual-volume",
        "attributes": [
            {"name": "capacity", "value": "1073741824B"},
            {"name": "name", "value": VIRTUAL_VOLUME},
            {"name": "operational-status", "value": "ok"},
            {"name": "thin-capable", "value": "true"},
            {"name": "thin-enabled", "value": "disabled"},
            {"name": "vpd-id", "value": "VPD83T3:6000144000000010"}
        ],
        "children": []
    }]}});

    let mock_server = MockServer::start().await;
    mount_single_volume(&mock_server, volume).await;

    let positive = fixtures::driver_for(&mock_server);
    let volumes = positive.list_volumes().await.unwrap();
    assert_eq!(volumes[0].volume_type, VolumeType::Thick);

    let lenient: VplexDriver = VplexDriver::builder()
        .from_access_info(fixtures::access_info(&mock_server))
        .secure(false)
        .config(DriverConfig {
            thin_rule: ThinProvisioningRule::NotUnavailable,
            ..Default::default()
        })
        .build()
        .unwrap();
    let volumes = lenient.list_volumes().await.unwrap();
    assert_eq!(volumes[0].volume_type, VolumeType::Thin);
}

#[tokio::test]
async fn test_list_volumes_single_node_context() {
    let mock_server = MockServer::start().await;
    fixtures::mount_get(
        &mock_server,
        "/vplex/clusters",
        json!({"response": {"context": {
            "type": "clusters",
            "attributes": [{"name": "name", "value": "clusters"}],
            "children": [{"name": CLUSTER, "type": "cluster"}]
        }}}),
    )
    .await;
    fixtures::mount_get(
        &mock_server,
        &format!("/vplex/clusters/{}/virtual-volumes", CLUSTER),
        fixtures::all_virtual_volumes(),
    )
    .await;
    fixtures::mount_get(
        &mock_server,
        &format!("/vplex/clusters/{}/virtual-volumes/{}", CLUSTER, VIRTUAL_VOLUME),
        fixtures::virtual_volume(),
    )
    .await;
    let driver = fixtures::driver_for(&mock_server);

    let volumes = driver.list_volumes().await.unwrap();
    assert_eq!(volumes.len(), 1);
    assert_eq!(volumes[0].name, VIRTUAL_VOLUME);
}
