//! Search topology component descriptors.
//!
//! Plain records standing in for a search service's administrative
//! components. Tests construct them, the code under test reads them, and
//! nothing else happens to them. Field names serialize in camelCase so
//! fixtures can be written as JSON.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminComponent {
    pub server_name: String,
    pub component_id: Uuid,
    pub server_id: Uuid,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrawlComponent {
    pub server_name: String,
    pub component_id: Uuid,
    pub server_id: Uuid,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentProcessingComponent {
    pub server_name: String,
    pub component_id: Uuid,
    pub server_id: Uuid,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsProcessingComponent {
    pub server_name: String,
    pub component_id: Uuid,
    pub server_id: Uuid,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryProcessingComponent {
    pub server_name: String,
    pub component_id: Uuid,
    pub server_id: Uuid,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Index component; the only variant bound to an index partition.
pub struct IndexComponent {
    pub server_name: String,
    pub component_id: Uuid,
    pub index_partition_ordinal: i32,
    pub server_id: Uuid,
}

impl AdminComponent {
    pub fn new(server_name: impl Into<String>, component_id: Uuid, server_id: Uuid) -> Self {
        Self {
            server_name: server_name.into(),
            component_id,
            server_id,
        }
    }
}

impl CrawlComponent {
    pub fn new(server_name: impl Into<String>, component_id: Uuid, server_id: Uuid) -> Self {
        Self {
            server_name: server_name.into(),
            component_id,
            server_id,
        }
    }
}

impl ContentProcessingComponent {
    pub fn new(server_name: impl Into<String>, component_id: Uuid, server_id: Uuid) -> Self {
        Self {
            server_name: server_name.into(),
            component_id,
            server_id,
        }
    }
}

impl AnalyticsProcessingComponent {
    pub fn new(server_name: impl Into<String>, component_id: Uuid, server_id: Uuid) -> Self {
        Self {
            server_name: server_name.into(),
            component_id,
            server_id,
        }
    }
}

impl QueryProcessingComponent {
    pub fn new(server_name: impl Into<String>, component_id: Uuid, server_id: Uuid) -> Self {
        Self {
            server_name: server_name.into(),
            component_id,
            server_id,
        }
    }
}

impl IndexComponent {
    pub fn new(
        server_name: impl Into<String>,
        component_id: Uuid,
        index_partition_ordinal: i32,
        server_id: Uuid,
    ) -> Self {
        Self {
            server_name: server_name.into(),
            component_id,
            index_partition_ordinal,
            server_id,
        }
    }
}
