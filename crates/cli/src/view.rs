use tabled::Tabled;
use tilescope_api::{Layer, TileMatrix};

/// Placeholder for absent values in tables and detail views.
pub const NONE: &str = "-";

#[derive(Tabled)]
pub struct LayerRow {
    #[tabled(rename = "Identifier")]
    pub identifier: String,
    #[tabled(rename = "Title")]
    pub title: String,
    #[tabled(rename = "Formats")]
    pub formats: String,
    #[tabled(rename = "Tile Matrix Sets")]
    pub tile_matrix_sets: String,
}

impl LayerRow {
    pub fn from_layer(layer: &Layer) -> Self {
        Self {
            identifier: layer.identifier.clone().unwrap_or_else(|| NONE.to_string()),
            title: layer.title.clone(),
            formats: join_or_none(layer.formats.iter().map(String::as_str)),
            tile_matrix_sets: join_or_none(layer.tile_matrix_set_ids()),
        }
    }
}

#[derive(Tabled)]
pub struct TileMatrixRow {
    #[tabled(rename = "Identifier")]
    pub identifier: String,
    #[tabled(rename = "Scale Denominator")]
    pub scale_denominator: String,
    #[tabled(rename = "Tile Size")]
    pub tile_size: String,
    #[tabled(rename = "Matrix Size")]
    pub matrix_size: String,
    #[tabled(rename = "Top Left")]
    pub top_left: String,
}

impl TileMatrixRow {
    pub fn from_matrix(matrix: &TileMatrix) -> Self {
        Self {
            identifier: matrix.identifier.clone(),
            scale_denominator: format!("{:.4}", matrix.scale_denominator),
            tile_size: format!("{}x{}", matrix.tile_width, matrix.tile_height),
            matrix_size: format!("{}x{}", matrix.matrix_width, matrix.matrix_height),
            top_left: matrix.top_left_corner.clone(),
        }
    }
}

pub fn join_or_none<'a>(values: impl Iterator<Item = &'a str>) -> String {
    let joined = values.collect::<Vec<_>>().join(", ");
    if joined.is_empty() {
        NONE.to_string()
    } else {
        joined
    }
}

pub fn or_none(value: Option<&str>) -> &str {
    value.unwrap_or(NONE)
}
