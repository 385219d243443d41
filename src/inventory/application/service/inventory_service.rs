use crate::core::{
    application::{
        entity_builder::{
            CapacitySummary, build_pool, build_storage_system, build_volume, capacity_of,
        },
        walker::{FlatAttributes, children_of_type, flatten_attributes},
    },
    domain::{
        error::{VplexError, VplexResult},
        model::{
            driver_config::ThinProvisioningRule, storage_pool::StoragePool,
            storage_system::StorageSystem, volume::Volume,
        },
        ports::VplexApi,
    },
};
use tracing::debug;

/// Walks the management tree of one array and builds inventory records.
///
/// Every listing is a two-step read: the collection context enumerates child
/// names, then each child is fetched by name.
pub struct InventoryService<'a, A: VplexApi + ?Sized> {
    api: &'a A,
    storage_id: &'a str,
    thin_rule: ThinProvisioningRule,
}

impl<'a, A: VplexApi + ?Sized> InventoryService<'a, A> {
    pub fn new(api: &'a A, storage_id: &'a str, thin_rule: ThinProvisioningRule) -> Self {
        Self {
            api,
            storage_id,
            thin_rule,
        }
    }

    pub async fn cluster_names(&self) -> VplexResult<Vec<String>> {
        let document = self.api.get_context("clusters").await?;
        children_of_type(&document, "cluster")
    }

    pub async fn cluster_attributes(&self, cluster: &str) -> VplexResult<FlatAttributes> {
        let document = self
            .api
            .get_context(&format!("clusters/{}", cluster))
            .await?;
        flatten_attributes(&document)
    }

    pub async fn device_attributes(&self, cluster: &str) -> VplexResult<Vec<FlatAttributes>> {
        self.collect(&format!("clusters/{}/devices", cluster), "local-device")
            .await
    }

    pub async fn virtual_volume_attributes(
        &self,
        cluster: &str,
    ) -> VplexResult<Vec<FlatAttributes>> {
        self.collect(
            &format!("clusters/{}/virtual-volumes", cluster),
            "virtual-volume",
        )
        .await
    }

    pub async fn storage_volume_attributes(
        &self,
        cluster: &str,
    ) -> VplexResult<Vec<FlatAttributes>> {
        self.collect(
            &format!("clusters/{}/storage-elements/storage-volumes", cluster),
            "storage-volume",
        )
        .await
    }

    async fn collect(&self, collection: &str, child_type: &str) -> VplexResult<Vec<FlatAttributes>> {
        let listing = self.api.get_context(collection).await?;
        let names = children_of_type(&listing, child_type)?;
        debug!("{} {} object(s) under {}", names.len(), child_type, collection);

        let mut objects = Vec::with_capacity(names.len());
        for name in names {
            let document = self
                .api
                .get_context(&format!("{}/{}", collection, name))
                .await?;
            objects.push(flatten_attributes(&document)?);
        }
        Ok(objects)
    }

    async fn cluster_capacity(&self, cluster: &str) -> VplexResult<CapacitySummary> {
        let mut summary = CapacitySummary::default();
        for attrs in self.storage_volume_attributes(cluster).await? {
            summary.raw = summary.raw.saturating_add(capacity_of(&attrs)?);
        }
        for attrs in self.device_attributes(cluster).await? {
            summary.total = summary.total.saturating_add(capacity_of(&attrs)?);
        }
        for attrs in self.virtual_volume_attributes(cluster).await? {
            summary.used = summary.used.saturating_add(capacity_of(&attrs)?);
        }
        Ok(summary)
    }

    /// Builds the storage system: identity and status from the first cluster,
    /// capacities summed over every cluster.
    pub async fn get_storage(&self) -> VplexResult<StorageSystem> {
        let clusters = self.cluster_names().await?;
        let first = clusters
            .first()
            .ok_or_else(|| VplexError::malformed("cluster", "clusters"))?;
        let identity = self.cluster_attributes(first).await?;

        let mut capacity = CapacitySummary::default();
        for cluster in &clusters {
            capacity.add(self.cluster_capacity(cluster).await?);
        }
        build_storage_system(&identity, &capacity)
    }

    pub async fn list_storage_pools(&self) -> VplexResult<Vec<StoragePool>> {
        let mut pools = Vec::new();
        for cluster in self.cluster_names().await? {
            for attrs in self.device_attributes(&cluster).await? {
                pools.push(build_pool(&attrs, self.storage_id)?);
            }
        }
        Ok(pools)
    }

    pub async fn list_volumes(&self) -> VplexResult<Vec<Volume>> {
        let mut volumes = Vec::new();
        for cluster in self.cluster_names().await? {
            for attrs in self.virtual_volume_attributes(&cluster).await? {
                volumes.push(build_volume(&attrs, self.storage_id, self.thin_rule)?);
            }
        }
        Ok(volumes)
    }
}
