use crate::view::or_none;
use std::sync::Arc;
use tilescope_api::CapabilitiesService;

pub async fn run(
    service: Arc<dyn CapabilitiesService>,
    source: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = service.fetch_capabilities(&source).await?;

    println!("Source:        {}", source);
    println!("Version:       {}", doc.version());

    if let Some(service) = doc.service_identification() {
        println!("Title:         {}", or_none(service.title.as_deref()));
        println!("Service Type:  {}", or_none(service.service_type.as_deref()));
        if !service.keywords.is_empty() {
            println!("Keywords:      {}", service.keywords.join(", "));
        }
    }

    if let Some(provider) = doc.service_provider() {
        println!("Provider:      {}", or_none(provider.provider_name.as_deref()));
        if let Some(site) = &provider.provider_site {
            println!("Provider Site: {}", site);
        }
    }

    if let Some(operations) = doc.operations_metadata() {
        let names: Vec<_> = operations.operations.iter().map(|op| op.name.as_str()).collect();
        println!("Operations:    {}", names.join(", "));
        if let Some(endpoint) = operations
            .operation("GetTile")
            .and_then(|op| op.kvp_endpoint())
        {
            println!("GetTile (KVP): {}", endpoint.href);
        }
    }

    println!("Layers:        {}", doc.layers().len());
    println!("Matrix Sets:   {}", doc.tile_matrix_sets().len());

    Ok(())
}
