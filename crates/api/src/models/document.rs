//! The parsed capabilities document and its lookup operations.

use serde::Serialize;

use super::layer::Layer;
use super::ows::{OperationsMetadata, ServiceIdentification, ServiceProvider};
use super::raw::RawNode;
use super::tile_matrix::TileMatrixSet;

/// Service level metadata carried next to the contents.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceMetadata {
    pub version: String,
    pub service_identification: Option<ServiceIdentification>,
    pub service_provider: Option<ServiceProvider>,
    pub operations_metadata: Option<OperationsMetadata>,
    pub service_metadata_url: Option<String>,
}

/// A WMTS capabilities document.
///
/// Layers and tile matrix sets are fixed at construction and only exposed
/// through shared references, so a document can be handed out behind an
/// `Arc` to any number of readers.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CapabilitiesDocument {
    #[serde(flatten)]
    metadata: ServiceMetadata,
    layers: Vec<Layer>,
    tile_matrix_sets: Vec<TileMatrixSet>,
    #[serde(skip)]
    raw: RawNode,
}

impl CapabilitiesDocument {
    pub fn new(
        metadata: ServiceMetadata,
        layers: Vec<Layer>,
        tile_matrix_sets: Vec<TileMatrixSet>,
        raw: RawNode,
    ) -> Self {
        Self {
            metadata,
            layers,
            tile_matrix_sets,
            raw,
        }
    }

    pub fn version(&self) -> &str {
        &self.metadata.version
    }

    pub fn service_identification(&self) -> Option<&ServiceIdentification> {
        self.metadata.service_identification.as_ref()
    }

    pub fn service_provider(&self) -> Option<&ServiceProvider> {
        self.metadata.service_provider.as_ref()
    }

    pub fn operations_metadata(&self) -> Option<&OperationsMetadata> {
        self.metadata.operations_metadata.as_ref()
    }

    pub fn service_metadata_url(&self) -> Option<&str> {
        self.metadata.service_metadata_url.as_deref()
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn tile_matrix_sets(&self) -> &[TileMatrixSet] {
        &self.tile_matrix_sets
    }

    /// The normalized tree the document was built from.
    pub fn raw(&self) -> &RawNode {
        &self.raw
    }

    /// Resolve a layer by identifier or title.
    ///
    /// Names are resolved as follows, first match in document order wins:
    /// * a layer whose identifier or title equals `name`;
    /// * if `name` is namespace qualified (`ns:Layer`), a layer whose
    ///   identifier or title equals the part after the first colon, since
    ///   capabilities documents usually list layers without their namespace.
    ///
    /// Returns `None` when neither pass matches.
    pub fn find_layer(&self, name: &str) -> Option<&Layer> {
        self.layers.iter().find(|layer| layer.matches(name)).or_else(|| {
            let (_, without_namespace) = name.split_once(':')?;
            self.layers
                .iter()
                .find(|layer| layer.matches(without_namespace))
        })
    }

    /// Resolve a tile matrix set by exact identifier.
    pub fn find_tile_matrix(&self, set_identifier: &str) -> Option<&TileMatrixSet> {
        self.tile_matrix_sets
            .iter()
            .find(|set| !set_identifier.is_empty() && set.identifier == set_identifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layer(identifier: Option<&str>, title: &str) -> Layer {
        Layer {
            identifier: identifier.map(str::to_string),
            title: title.to_string(),
            ..Default::default()
        }
    }

    fn document(layers: Vec<Layer>, sets: Vec<TileMatrixSet>) -> CapabilitiesDocument {
        CapabilitiesDocument::new(
            ServiceMetadata::default(),
            layers,
            sets,
            RawNode::empty_map(),
        )
    }

    fn set(identifier: &str) -> TileMatrixSet {
        TileMatrixSet {
            identifier: identifier.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_find_layer_by_identifier_or_title() {
        let doc = document(vec![layer(Some("ns:Foo"), "Foo Title")], vec![]);

        let by_id = doc.find_layer("ns:Foo").expect("identifier should match");
        assert_eq!(by_id.title, "Foo Title");
        let by_title = doc.find_layer("Foo Title").expect("title should match");
        assert_eq!(by_title.identifier.as_deref(), Some("ns:Foo"));
    }

    #[test]
    fn test_find_layer_strips_namespace() {
        let doc = document(vec![layer(Some("Foo"), "Something else")], vec![]);
        let found = doc.find_layer("ns:Foo").expect("namespace fallback");
        assert_eq!(found.identifier.as_deref(), Some("Foo"));
    }

    #[test]
    fn test_find_layer_strips_only_first_namespace_segment() {
        let doc = document(vec![layer(Some("b:Foo"), "t")], vec![]);
        assert!(doc.find_layer("a:b:Foo").is_some());
        assert!(doc.find_layer("a:Foo").is_none());
    }

    #[test]
    fn test_find_layer_exact_match_beats_fallback() {
        let doc = document(
            vec![layer(Some("Foo"), "plain"), layer(Some("ns:Foo"), "qualified")],
            vec![],
        );
        assert_eq!(doc.find_layer("ns:Foo").map(|l| l.title.as_str()), Some("qualified"));
    }

    #[test]
    fn test_find_layer_first_match_wins() {
        let doc = document(
            vec![layer(Some("a"), "Shared"), layer(Some("b"), "Shared")],
            vec![],
        );
        assert_eq!(
            doc.find_layer("Shared").and_then(|l| l.identifier.as_deref()),
            Some("a")
        );
    }

    #[test]
    fn test_find_layer_title_matches_in_same_pass() {
        // The second layer's identifier matches, but the first layer's title
        // matches too and comes first in document order.
        let doc = document(vec![layer(None, "Foo"), layer(Some("Foo"), "Bar")], vec![]);
        assert_eq!(doc.find_layer("Foo").map(|l| l.title.as_str()), Some("Foo"));
    }

    #[test]
    fn test_find_layer_not_found() {
        let doc = document(vec![layer(Some("Foo"), "Foo Title")], vec![]);
        assert!(doc.find_layer("Bar").is_none());
        assert!(doc.find_layer("ns:Bar").is_none());
        assert!(document(vec![], vec![]).find_layer("Foo").is_none());
    }

    #[test]
    fn test_find_tile_matrix() {
        let doc = document(vec![], vec![set("EPSG:3857"), set("EPSG:4326")]);
        assert_eq!(
            doc.find_tile_matrix("EPSG:4326").map(|s| s.identifier.as_str()),
            Some("EPSG:4326")
        );
        assert!(doc.find_tile_matrix("EPSG:2193").is_none());
        assert!(doc.find_tile_matrix("4326").is_none());
    }

    #[test]
    fn test_find_tile_matrix_empty_collection() {
        let doc = document(vec![], vec![]);
        assert!(doc.find_tile_matrix("EPSG:4326").is_none());
    }

    #[test]
    fn test_document_serializes_flattened_metadata() {
        let doc = CapabilitiesDocument::new(
            ServiceMetadata {
                version: "1.0.0".to_string(),
                ..Default::default()
            },
            vec![layer(Some("Foo"), "Foo")],
            vec![],
            RawNode::empty_map(),
        );
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["version"], "1.0.0");
        assert_eq!(json["layers"][0]["identifier"], "Foo");
        assert!(json.get("raw").is_none());
    }

    #[test]
    fn test_empty_names_never_match_defaulted_entries() {
        let doc = document(
            vec![layer(None, ""), layer(Some("roads"), "")],
            vec![set("")],
        );

        assert!(doc.find_layer("").is_none());
        assert!(doc.find_layer("ns:").is_none());
        assert!(doc.find_tile_matrix("").is_none());
        assert_eq!(
            doc.find_layer("ns:roads").and_then(|l| l.identifier.as_deref()),
            Some("roads")
        );
    }
}
