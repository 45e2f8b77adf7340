//! Mapping of `Contents/Layer` and `Contents/TileMatrixSet`.

use super::fields::{flag, keywords, list, number, optional_text, required_text};
use super::service::{bounding_box, href};
use tilescope_api::models::raw::{RawNode, to_sequence};
use tilescope_api::models::{
    Layer, LegendUrl, ResourceType, ResourceUrl, Style, TileMatrix, TileMatrixLimits,
    TileMatrixSet, TileMatrixSetLink,
};

pub(crate) fn layer(node: &RawNode) -> Layer {
    Layer {
        title: required_text(node, "Title", "Layer"),
        r#abstract: optional_text(node, "Abstract"),
        identifier: optional_text(node, "Identifier"),
        wgs84_bounding_box: node.get("WGS84BoundingBox").map(bounding_box),
        styles: to_sequence(node.get("Style")).into_iter().map(style).collect(),
        formats: list(node, "Format"),
        info_formats: list(node, "InfoFormat"),
        tile_matrix_set_links: to_sequence(node.get("TileMatrixSetLink"))
            .into_iter()
            .map(tile_matrix_set_link)
            .collect(),
        resource_urls: to_sequence(node.get("ResourceURL"))
            .into_iter()
            .map(resource_url)
            .collect(),
    }
}

fn style(node: &RawNode) -> Style {
    Style {
        identifier: required_text(node, "Identifier", "Style"),
        title: optional_text(node, "Title"),
        r#abstract: optional_text(node, "Abstract"),
        keywords: keywords(node),
        legend_urls: to_sequence(node.get("LegendURL"))
            .into_iter()
            .filter_map(legend_url)
            .collect(),
        is_default: flag(node, "isDefault"),
    }
}

fn legend_url(node: &RawNode) -> Option<LegendUrl> {
    Some(LegendUrl {
        format: optional_text(node, "format"),
        href: href(Some(node))?,
    })
}

fn tile_matrix_set_link(node: &RawNode) -> TileMatrixSetLink {
    let limits = to_sequence(node.get("TileMatrixSetLimits"))
        .into_iter()
        .flat_map(|block| to_sequence(block.get("TileMatrixLimits")))
        .map(|limits| TileMatrixLimits {
            tile_matrix: required_text(limits, "TileMatrix", "TileMatrixLimits"),
            min_row: number(limits, "MinTileRow", "TileMatrixLimits"),
            max_row: number(limits, "MaxTileRow", "TileMatrixLimits"),
            min_col: number(limits, "MinTileCol", "TileMatrixLimits"),
            max_col: number(limits, "MaxTileCol", "TileMatrixLimits"),
        })
        .collect();

    TileMatrixSetLink {
        tile_matrix_set: required_text(node, "TileMatrixSet", "TileMatrixSetLink"),
        limits,
    }
}

fn resource_url(node: &RawNode) -> ResourceUrl {
    ResourceUrl {
        format: required_text(node, "format", "ResourceURL"),
        resource_type: node
            .child_text("resourceType")
            .map(ResourceType::parse)
            .unwrap_or_default(),
        template: required_text(node, "template", "ResourceURL"),
    }
}

pub(crate) fn tile_matrix_set(node: &RawNode) -> TileMatrixSet {
    TileMatrixSet {
        identifier: required_text(node, "Identifier", "TileMatrixSet"),
        title: optional_text(node, "Title"),
        r#abstract: optional_text(node, "Abstract"),
        keywords: keywords(node),
        supported_crs: optional_text(node, "SupportedCRS"),
        well_known_scale_set: optional_text(node, "WellKnownScaleSet"),
        tile_matrices: to_sequence(node.get("TileMatrix"))
            .into_iter()
            .map(tile_matrix)
            .collect(),
    }
}

fn tile_matrix(node: &RawNode) -> TileMatrix {
    TileMatrix {
        identifier: required_text(node, "Identifier", "TileMatrix"),
        title: optional_text(node, "Title"),
        r#abstract: optional_text(node, "Abstract"),
        keywords: keywords(node),
        scale_denominator: number(node, "ScaleDenominator", "TileMatrix"),
        top_left_corner: required_text(node, "TopLeftCorner", "TileMatrix"),
        tile_width: number(node, "TileWidth", "TileMatrix"),
        tile_height: number(node, "TileHeight", "TileMatrix"),
        matrix_width: number(node, "MatrixWidth", "TileMatrix"),
        matrix_height: number(node, "MatrixHeight", "TileMatrix"),
    }
}
