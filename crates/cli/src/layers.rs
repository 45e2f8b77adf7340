use crate::view::{LayerRow, NONE, join_or_none, or_none};
use std::sync::Arc;
use tabled::Table;
use tilescope_api::CapabilitiesService;

pub async fn list(
    service: Arc<dyn CapabilitiesService>,
    source: String,
    filter: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = service.fetch_capabilities(&source).await?;

    let rows: Vec<LayerRow> = doc
        .layers()
        .iter()
        .filter(|layer| match &filter {
            Some(pattern) => {
                layer.title.contains(pattern.as_str())
                    || layer
                        .identifier
                        .as_deref()
                        .is_some_and(|id| id.contains(pattern.as_str()))
            }
            None => true,
        })
        .map(LayerRow::from_layer)
        .collect();

    if rows.is_empty() {
        println!("No layers found.");
    } else {
        println!("{}", Table::new(rows));
    }
    Ok(())
}

pub async fn show(
    service: Arc<dyn CapabilitiesService>,
    source: String,
    name: String,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = service.fetch_capabilities(&source).await?;

    let Some(layer) = doc.find_layer(&name) else {
        return Err(format!("Layer '{}' not found in {}", name, source).into());
    };
    tracing::info!("Resolved '{}' to layer '{}'", name, layer.title);

    if json {
        println!("{}", serde_json::to_string_pretty(layer)?);
        return Ok(());
    }

    println!("Title:       {}", layer.title);
    println!("Identifier:  {}", or_none(layer.identifier.as_deref()));
    if let Some(abstract_text) = &layer.r#abstract {
        println!("Abstract:    {}", abstract_text);
    }
    if let Some(bbox) = &layer.wgs84_bounding_box {
        println!("WGS84 Box:   {} / {}", bbox.lower_corner, bbox.upper_corner);
    }
    println!(
        "Formats:     {}",
        join_or_none(layer.formats.iter().map(String::as_str))
    );
    println!(
        "Styles:      {}",
        join_or_none(layer.styles.iter().map(|s| s.identifier.as_str()))
    );
    println!(
        "Default:     {}",
        layer
            .default_style()
            .map(|s| s.identifier.as_str())
            .unwrap_or(NONE)
    );

    println!("\nTile Matrix Sets:");
    for link in &layer.tile_matrix_set_links {
        let known = if doc.find_tile_matrix(&link.tile_matrix_set).is_some() {
            ""
        } else {
            " (not declared)"
        };
        println!(
            "  {}{} - {} limited matrices",
            link.tile_matrix_set,
            known,
            link.limits.len()
        );
    }

    let templates: Vec<_> = layer.tile_templates().collect();
    if !templates.is_empty() {
        println!("\nTile Templates:");
        for url in templates {
            println!("  [{}] {}", url.format, url.template);
        }
    }

    Ok(())
}
