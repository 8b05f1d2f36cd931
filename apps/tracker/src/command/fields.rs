use stock::StockRegistry;
use tracing::{debug, info};

use crate::session::Outcome;

pub(crate) fn add(registry: &mut StockRegistry, codes: &str) -> Outcome {
    let Some(record) = registry.active_mut() else {
        return Outcome::NoActiveStock;
    };

    debug!("add: invoked symbol={} raw_input={}", record.symbol(), codes);
    let added = record.add_fields(codes);

    info!(
        "add: completed symbol={} accepted_count={} rejected_count={}",
        record.symbol(),
        added.accepted.len(),
        added.rejected.len()
    );

    Outcome::Added {
        symbol: record.symbol().to_string(),
        added,
    }
}

pub(crate) fn remove(registry: &mut StockRegistry, codes: &str) -> Outcome {
    let Some(record) = registry.active_mut() else {
        return Outcome::NoActiveStock;
    };

    debug!("remove: invoked symbol={} raw_input={}", record.symbol(), codes);
    let removed = record.remove_fields(codes);

    info!(
        "remove: completed symbol={} removed_count={} missing_count={}",
        record.symbol(),
        removed.removed.len(),
        removed.missing.len()
    );

    Outcome::Removed {
        symbol: record.symbol().to_string(),
        removed,
    }
}

pub(crate) fn data(registry: &StockRegistry) -> Outcome {
    match registry.active() {
        Some(record) => Outcome::Data {
            symbol: record.symbol().to_string(),
            fields: record.fields().to_vec(),
        },
        None => Outcome::NoActiveStock,
    }
}
