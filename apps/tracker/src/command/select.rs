use stock::StockRegistry;
use tracing::info;

use crate::session::Outcome;

pub(crate) fn stock(registry: &mut StockRegistry, symbol: &str) -> Outcome {
    info!("stock: invoked raw_input={}", symbol);

    let (symbol, selection) = registry.select_or_create(symbol);

    info!(
        "stock: completed symbol={} selection={:?} tracked={}",
        symbol,
        selection,
        registry.len()
    );

    Outcome::Selected { symbol, selection }
}
