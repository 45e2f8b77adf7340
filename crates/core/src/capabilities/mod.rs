//! Construction of [`CapabilitiesDocument`] from the normalized tree.
//!
//! This is the strict second stage of the pipeline: the XML normalizer hands
//! over an untyped [`RawNode`], and everything here maps it onto the typed
//! model with explicit defaults.

mod contents;
mod fields;
mod service;

use crate::xml;
use tilescope_api::models::raw::{RawNode, to_sequence};
use tilescope_api::models::{CapabilitiesDocument, ServiceMetadata};
use tilescope_api::{CapabilitiesError, CapabilitiesResult};

pub const SERVICE_IDENTIFICATION: &str = "ServiceIdentification";

/// Whether the tree has the one section every valid document carries.
pub fn has_service_identification(raw: &RawNode) -> bool {
    raw.contains_key(SERVICE_IDENTIFICATION)
}

/// Build the typed document. Never fails: a missing `Contents` section yields
/// empty collections and a singleton `Layer`/`TileMatrixSet` yields a
/// one-element collection.
pub fn build_document(raw: RawNode) -> CapabilitiesDocument {
    let contents = raw.get("Contents");
    let layers = to_sequence(contents.and_then(|c| c.get("Layer")))
        .into_iter()
        .map(contents::layer)
        .collect::<Vec<_>>();
    let tile_matrix_sets = to_sequence(contents.and_then(|c| c.get("TileMatrixSet")))
        .into_iter()
        .map(contents::tile_matrix_set)
        .collect::<Vec<_>>();

    let metadata = ServiceMetadata {
        version: raw
            .child_text("version")
            .or_else(|| raw.child_text("Version"))
            .unwrap_or_default()
            .to_string(),
        service_identification: raw
            .get(SERVICE_IDENTIFICATION)
            .map(service::service_identification),
        service_provider: raw.get("ServiceProvider").map(service::service_provider),
        operations_metadata: raw
            .get("OperationsMetadata")
            .map(service::operations_metadata),
        service_metadata_url: service::href(raw.get("ServiceMetadataURL")),
    };

    tracing::debug!(
        "Built capabilities document: {} layers, {} tile matrix sets",
        layers.len(),
        tile_matrix_sets.len()
    );

    CapabilitiesDocument::new(metadata, layers, tile_matrix_sets, raw)
}

/// Parse, validate and build in one step. `url` is only used for diagnostics.
pub fn parse_capabilities(url: &str, xml_text: &str) -> CapabilitiesResult<CapabilitiesDocument> {
    let raw = xml::parse(xml_text).map_err(|e| CapabilitiesError::MalformedXml {
        url: url.to_string(),
        message: e.to_string(),
    })?;

    if !has_service_identification(&raw) {
        return Err(CapabilitiesError::InvalidCapabilities {
            url: url.to_string(),
        });
    }

    Ok(build_document(raw))
}
