use serde::{Deserialize, Serialize};

/// `Contents/TileMatrixSet`: a named pyramid of tile grids.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TileMatrixSet {
    pub identifier: String,
    pub title: Option<String>,
    pub r#abstract: Option<String>,
    pub keywords: Vec<String>,
    pub supported_crs: Option<String>,
    pub well_known_scale_set: Option<String>,
    pub tile_matrices: Vec<TileMatrix>,
}

impl TileMatrixSet {
    pub fn tile_matrix(&self, identifier: &str) -> Option<&TileMatrix> {
        self.tile_matrices
            .iter()
            .find(|matrix| matrix.identifier == identifier)
    }
}

/// One zoom level of a [`TileMatrixSet`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TileMatrix {
    pub identifier: String,
    pub title: Option<String>,
    pub r#abstract: Option<String>,
    pub keywords: Vec<String>,
    pub scale_denominator: f64,
    /// Two whitespace separated coordinates; axis order follows the CRS.
    pub top_left_corner: String,
    pub tile_width: u32,
    pub tile_height: u32,
    pub matrix_width: u32,
    pub matrix_height: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(identifier: &str, scale: f64) -> TileMatrix {
        TileMatrix {
            identifier: identifier.to_string(),
            scale_denominator: scale,
            ..Default::default()
        }
    }

    #[test]
    fn test_tile_matrix_lookup_first_match() {
        let set = TileMatrixSet {
            identifier: "EPSG:4326".to_string(),
            tile_matrices: vec![matrix("0", 2.0), matrix("1", 1.0), matrix("1", 0.5)],
            ..Default::default()
        };
        assert_eq!(set.tile_matrix("1").map(|m| m.scale_denominator), Some(1.0));
        assert!(set.tile_matrix("2").is_none());
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(matrix("0", 1.0)).unwrap();
        assert!(json.get("scaleDenominator").is_some());
        assert!(json.get("topLeftCorner").is_some());
    }
}
