use crate::view::{TileMatrixRow, or_none};
use std::sync::Arc;
use tabled::Table;
use tilescope_api::CapabilitiesService;

pub async fn show(
    service: Arc<dyn CapabilitiesService>,
    source: String,
    identifier: String,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = service.fetch_capabilities(&source).await?;

    let Some(set) = doc.find_tile_matrix(&identifier) else {
        return Err(format!("Tile matrix set '{}' not found in {}", identifier, source).into());
    };

    if json {
        println!("{}", serde_json::to_string_pretty(set)?);
        return Ok(());
    }

    println!("Identifier:     {}", set.identifier);
    println!("Title:          {}", or_none(set.title.as_deref()));
    println!("Supported CRS:  {}", or_none(set.supported_crs.as_deref()));
    println!("Scale Set:      {}", or_none(set.well_known_scale_set.as_deref()));

    let rows: Vec<TileMatrixRow> = set.tile_matrices.iter().map(TileMatrixRow::from_matrix).collect();
    if rows.is_empty() {
        println!("No tile matrices declared.");
    } else {
        println!("{}", Table::new(rows));
    }
    Ok(())
}
