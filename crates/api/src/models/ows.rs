//! OWS common types shared by the service metadata sections.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceIdentification {
    pub title: Option<String>,
    pub r#abstract: Option<String>,
    pub keywords: Vec<String>,
    pub service_type: Option<String>,
    pub service_type_versions: Vec<String>,
    pub fees: Option<String>,
    pub access_constraints: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceProvider {
    pub provider_name: Option<String>,
    pub provider_site: Option<String>,
    pub service_contact: Option<ServiceContact>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceContact {
    pub individual_name: Option<String>,
    pub position_name: Option<String>,
    pub contact_info: Option<ContactInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    pub voice: Option<String>,
    pub facsimile: Option<String>,
    pub delivery_point: Option<String>,
    pub city: Option<String>,
    pub administrative_area: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub electronic_mail_address: Option<String>,
    pub online_resource: Option<String>,
}

/// `ows:OperationsMetadata`: the request endpoints a service advertises.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OperationsMetadata {
    pub operations: Vec<Operation>,
}

impl OperationsMetadata {
    /// First operation with the given name, e.g. `GetTile`.
    pub fn operation(&self, name: &str) -> Option<&Operation> {
        self.operations.iter().find(|op| op.name == name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    pub name: String,
    pub get: Vec<DcpEndpoint>,
}

impl Operation {
    /// First GET endpoint accepting key-value-pair encoded requests.
    pub fn kvp_endpoint(&self) -> Option<&DcpEndpoint> {
        self.get.iter().find(|endpoint| endpoint.supports_kvp())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DcpEndpoint {
    pub href: String,
    /// Values of the `GetEncoding` constraint (`KVP`, `REST`, ...).
    pub encodings: Vec<String>,
}

impl DcpEndpoint {
    /// An endpoint without a declared encoding is assumed to accept KVP.
    pub fn supports_kvp(&self) -> bool {
        self.encodings.is_empty()
            || self
                .encodings
                .iter()
                .any(|encoding| encoding.eq_ignore_ascii_case("KVP"))
    }
}

/// `ows:WGS84BoundingBox` / `ows:BoundingBox`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundingBox {
    pub lower_corner: String,
    pub upper_corner: String,
    pub crs: Option<String>,
}

impl BoundingBox {
    /// `[min_x, min_y, max_x, max_y]`, or `None` when either corner is not a
    /// pair of numbers.
    pub fn extent(&self) -> Option<[f64; 4]> {
        let [min_x, min_y] = parse_corner(&self.lower_corner)?;
        let [max_x, max_y] = parse_corner(&self.upper_corner)?;
        Some([min_x, min_y, max_x, max_y])
    }
}

fn parse_corner(corner: &str) -> Option<[f64; 2]> {
    let mut parts = corner.split_whitespace().map(str::parse::<f64>);
    let x = parts.next()?.ok()?;
    let y = parts.next()?.ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some([x, y])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounding_box_extent() {
        let bbox = BoundingBox {
            lower_corner: "-180 -90".to_string(),
            upper_corner: "180.0 90".to_string(),
            crs: None,
        };
        assert_eq!(bbox.extent(), Some([-180.0, -90.0, 180.0, 90.0]));
    }

    #[test]
    fn test_bounding_box_extent_rejects_malformed_corner() {
        let bbox = BoundingBox {
            lower_corner: "-180".to_string(),
            upper_corner: "180 90".to_string(),
            crs: None,
        };
        assert!(bbox.extent().is_none());

        let bbox = BoundingBox {
            lower_corner: "a b".to_string(),
            upper_corner: "180 90".to_string(),
            crs: None,
        };
        assert!(bbox.extent().is_none());
    }

    #[test]
    fn test_kvp_endpoint_selection() {
        let op = Operation {
            name: "GetTile".to_string(),
            get: vec![
                DcpEndpoint {
                    href: "https://example.com/rest/".to_string(),
                    encodings: vec!["RESTful".to_string()],
                },
                DcpEndpoint {
                    href: "https://example.com/kvp?".to_string(),
                    encodings: vec!["kvp".to_string()],
                },
            ],
        };
        assert_eq!(
            op.kvp_endpoint().map(|e| e.href.as_str()),
            Some("https://example.com/kvp?")
        );

        let metadata = OperationsMetadata {
            operations: vec![op],
        };
        assert!(metadata.operation("GetTile").is_some());
        assert!(metadata.operation("GetFeatureInfo").is_none());
    }
}
