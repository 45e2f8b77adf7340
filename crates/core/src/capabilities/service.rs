//! Mapping of the OWS service metadata sections.

use super::fields::{keywords, list, optional_text};
use tilescope_api::models::raw::{RawNode, to_sequence};
use tilescope_api::models::{
    BoundingBox, ContactInfo, DcpEndpoint, Operation, OperationsMetadata, ServiceContact,
    ServiceIdentification, ServiceProvider,
};

const XLINK_HREF: &str = "xlink:href";

pub(crate) fn service_identification(node: &RawNode) -> ServiceIdentification {
    ServiceIdentification {
        title: optional_text(node, "Title"),
        r#abstract: optional_text(node, "Abstract"),
        keywords: keywords(node),
        service_type: optional_text(node, "ServiceType"),
        service_type_versions: list(node, "ServiceTypeVersion"),
        fees: optional_text(node, "Fees"),
        access_constraints: list(node, "AccessConstraints"),
    }
}

pub(crate) fn service_provider(node: &RawNode) -> ServiceProvider {
    ServiceProvider {
        provider_name: optional_text(node, "ProviderName"),
        provider_site: href(node.get("ProviderSite")),
        service_contact: node.get("ServiceContact").map(service_contact),
    }
}

fn service_contact(node: &RawNode) -> ServiceContact {
    ServiceContact {
        individual_name: optional_text(node, "IndividualName"),
        position_name: optional_text(node, "PositionName"),
        contact_info: node.get("ContactInfo").map(contact_info),
    }
}

fn contact_info(node: &RawNode) -> ContactInfo {
    let phone = node.get("Phone");
    let address = node.get("Address");
    let from_phone = |key: &str| phone.and_then(|p| optional_text(p, key));
    let from_address = |key: &str| address.and_then(|a| optional_text(a, key));

    ContactInfo {
        voice: from_phone("Voice"),
        facsimile: from_phone("Facsimile"),
        delivery_point: from_address("DeliveryPoint"),
        city: from_address("City"),
        administrative_area: from_address("AdministrativeArea"),
        postal_code: from_address("PostalCode"),
        country: from_address("Country"),
        electronic_mail_address: from_address("ElectronicMailAddress"),
        online_resource: href(node.get("OnlineResource")),
    }
}

pub(crate) fn operations_metadata(node: &RawNode) -> OperationsMetadata {
    let operations = to_sequence(node.get("Operation"))
        .into_iter()
        .map(|op| Operation {
            name: op.child_text("name").unwrap_or_default().to_string(),
            get: to_sequence(op.path(&["DCP", "HTTP", "Get"]))
                .into_iter()
                .filter_map(dcp_endpoint)
                .collect(),
        })
        .collect();
    OperationsMetadata { operations }
}

fn dcp_endpoint(node: &RawNode) -> Option<DcpEndpoint> {
    let href = href(Some(node))?;
    let encodings = to_sequence(node.get("Constraint"))
        .into_iter()
        .filter(|constraint| constraint.child_text("name") == Some("GetEncoding"))
        .flat_map(|constraint| {
            to_sequence(constraint.get("AllowedValues"))
                .into_iter()
                .flat_map(|values| list(values, "Value"))
        })
        .collect();
    Some(DcpEndpoint { href, encodings })
}

pub(crate) fn bounding_box(node: &RawNode) -> BoundingBox {
    BoundingBox {
        lower_corner: node.child_text("LowerCorner").unwrap_or_default().to_string(),
        upper_corner: node.child_text("UpperCorner").unwrap_or_default().to_string(),
        crs: optional_text(node, "crs"),
    }
}

/// `xlink:href` of an online-resource style element.
pub(crate) fn href(node: Option<&RawNode>) -> Option<String> {
    node.and_then(|n| optional_text(n, XLINK_HREF))
}
