//! Catalog Merge
//!
//! Consumes records staged by the registration flow. Each staged value is
//! validated before it may enter the catalog; the staging key is cleared
//! afterwards whether or not anything was merged.

use super::{AgentCatalog, AgentRecord};
use crate::error::DiscoveryError;
use crate::storage::StagingStorage;
use anyhow::Result;
use serde_json::Value;

/// Outcome of one merge pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeReport {
    /// Ids appended to the catalog, in staging order
    pub merged: Vec<String>,
    /// Ids skipped because the catalog already held them
    pub duplicates: Vec<String>,
    /// Reasons for entries that failed validation
    pub rejected: Vec<String>,
}

impl MergeReport {
    pub fn is_empty(&self) -> bool {
        self.merged.is_empty() && self.duplicates.is_empty() && self.rejected.is_empty()
    }
}

/// Split a raw staging payload into validated records and rejection reasons.
pub fn parse_staged(key: &str, raw: &str) -> Result<(Vec<AgentRecord>, Vec<String>), DiscoveryError> {
    let payload: Value = serde_json::from_str(raw).map_err(|e| DiscoveryError::MalformedPayload {
        key: key.to_string(),
        reason: e.to_string(),
    })?;

    let Value::Array(entries) = payload else {
        return Err(DiscoveryError::MalformedPayload {
            key: key.to_string(),
            reason: "expected a JSON array".to_string(),
        });
    };

    let mut records = Vec::with_capacity(entries.len());
    let mut rejected = Vec::new();
    for (index, entry) in entries.into_iter().enumerate() {
        match AgentRecord::from_staged(entry) {
            Ok(record) => records.push(record),
            Err(e) => {
                tracing::warn!("[CatalogMerge] Quarantined staged entry #{}: {}", index, e);
                rejected.push(format!("entry {}: {}", index, e));
            }
        }
    }
    Ok((records, rejected))
}

/// Append staged records whose id is not yet in the catalog, then clear the key.
pub async fn merge_staged(
    catalog: &mut AgentCatalog,
    storage: &dyn StagingStorage,
    key: &str,
) -> Result<MergeReport> {
    let raw = match storage.get(key).await {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            tracing::debug!("[CatalogMerge] Nothing staged under '{}'", key);
            return Ok(MergeReport::default());
        }
        Err(e) => {
            tracing::error!("[CatalogMerge] Error reading staged agents: {:#}", e);
            clear_key(storage, key).await;
            return Ok(MergeReport::default());
        }
    };

    let mut report = MergeReport::default();
    match parse_staged(key, &raw) {
        Ok((records, rejected)) => {
            report.rejected = rejected;
            for record in records {
                let id = record.id.clone();
                if catalog.insert(record) {
                    report.merged.push(id);
                } else {
                    report.duplicates.push(id);
                }
            }
        }
        Err(e) => {
            tracing::error!("[CatalogMerge] Error loading staged agents: {}", e);
        }
    }

    clear_key(storage, key).await;

    tracing::info!(
        "[CatalogMerge] Loaded {} new agents ({} duplicates, {} rejected)",
        report.merged.len(),
        report.duplicates.len(),
        report.rejected.len()
    );
    Ok(report)
}

async fn clear_key(storage: &dyn StagingStorage, key: &str) {
    if let Err(e) = storage.remove(key).await {
        tracing::error!("[CatalogMerge] Failed to clear staged key '{}': {:#}", key, e);
    }
}
