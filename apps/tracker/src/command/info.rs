use stock::StockRegistry;

use crate::session::Outcome;

pub(crate) fn history(registry: &StockRegistry) -> Outcome {
    Outcome::History(registry.history())
}

pub(crate) fn catalog() -> Outcome {
    Outcome::Fields(stock::catalog::FIELDS)
}
