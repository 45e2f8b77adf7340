use serde::{Deserialize, Serialize};
use std::fmt;

use super::ows::BoundingBox;

/// A requestable layer from `Contents/Layer`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layer {
    /// WMTS only guarantees a title; everything else is optional.
    pub title: String,
    pub r#abstract: Option<String>,
    pub identifier: Option<String>,
    pub wgs84_bounding_box: Option<BoundingBox>,
    pub styles: Vec<Style>,
    pub formats: Vec<String>,
    pub info_formats: Vec<String>,
    pub tile_matrix_set_links: Vec<TileMatrixSetLink>,
    pub resource_urls: Vec<ResourceUrl>,
}

impl Layer {
    /// Whether `name` equals this layer's identifier or title. An empty name
    /// never matches, so entries with a defaulted title stay unreachable.
    pub fn matches(&self, name: &str) -> bool {
        !name.is_empty() && (self.identifier.as_deref() == Some(name) || self.title == name)
    }

    /// The style flagged as default, falling back to the first declared one.
    pub fn default_style(&self) -> Option<&Style> {
        self.styles
            .iter()
            .find(|style| style.is_default)
            .or_else(|| self.styles.first())
    }

    pub fn tile_matrix_set_ids(&self) -> impl Iterator<Item = &str> {
        self.tile_matrix_set_links
            .iter()
            .map(|link| link.tile_matrix_set.as_str())
    }

    pub fn tile_matrix_set_link(&self, set_identifier: &str) -> Option<&TileMatrixSetLink> {
        self.tile_matrix_set_links
            .iter()
            .find(|link| link.tile_matrix_set == set_identifier)
    }

    /// REST tile templates (`ResourceURL` entries with `resourceType="tile"`).
    pub fn tile_templates(&self) -> impl Iterator<Item = &ResourceUrl> {
        self.resource_urls
            .iter()
            .filter(|url| url.resource_type == ResourceType::Tile)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Style {
    pub identifier: String,
    pub title: Option<String>,
    pub r#abstract: Option<String>,
    pub keywords: Vec<String>,
    pub legend_urls: Vec<LegendUrl>,
    pub is_default: bool,
}

/// WMTS legends are a flat `format` + `xlink:href` attribute pair, unlike WMS
/// where the link sits in a nested `OnlineResource`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LegendUrl {
    pub format: Option<String>,
    pub href: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TileMatrixSetLink {
    pub tile_matrix_set: String,
    pub limits: Vec<TileMatrixLimits>,
}

impl TileMatrixSetLink {
    pub fn limits_for(&self, tile_matrix: &str) -> Option<&TileMatrixLimits> {
        self.limits
            .iter()
            .find(|limits| limits.tile_matrix == tile_matrix)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TileMatrixLimits {
    pub tile_matrix: String,
    pub min_row: u32,
    pub max_row: u32,
    pub min_col: u32,
    pub max_col: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceUrl {
    pub format: String,
    pub resource_type: ResourceType,
    pub template: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResourceType {
    #[default]
    Tile,
    FeatureInfo,
    Other(String),
}

impl ResourceType {
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("tile") {
            ResourceType::Tile
        } else if value.eq_ignore_ascii_case("FeatureInfo") {
            ResourceType::FeatureInfo
        } else {
            ResourceType::Other(value.to_string())
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceType::Tile => write!(f, "tile"),
            ResourceType::FeatureInfo => write!(f, "FeatureInfo"),
            ResourceType::Other(other) => write!(f, "{}", other),
        }
    }
}
