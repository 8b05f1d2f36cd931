use stock::{QuoteSource, StockRegistry};
use tracing::info;

use crate::session::Outcome;

/// Symbol, selected fields and a report fetched just now.
pub(crate) async fn status<Q: QuoteSource>(registry: &mut StockRegistry, quotes: &Q) -> Outcome {
    let Some(record) = registry.active_mut() else {
        return Outcome::NoActiveStock;
    };

    info!("status: invoked symbol={}", record.symbol());
    let report = record.generate_report(quotes).await.cloned();

    Outcome::Status {
        symbol: record.symbol().to_string(),
        fields: record.fields().to_vec(),
        report,
    }
}

pub(crate) async fn generate<Q: QuoteSource>(
    registry: &mut StockRegistry,
    quotes: &Q,
) -> Outcome {
    let Some(record) = registry.active_mut() else {
        return Outcome::NoActiveStock;
    };

    let symbol = record.symbol().to_string();
    info!("generate: invoked symbol={}", symbol);

    let result = record.generate_report(quotes).await.map(|report| {
        info!(
            "generate: completed symbol={} values=[{}]",
            symbol,
            report.values().join(", ")
        );
    });

    Outcome::Generated { symbol, result }
}
