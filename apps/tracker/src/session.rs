use stock::{
    Added, QuoteSource, Removed, Report, ReportError, Selection, StockRegistry, catalog::Field,
};
use tracing::debug;

use crate::command::{self, Command, Input, ParseError};

/// Structured result of one command; `display` turns it into text.
#[derive(Debug)]
pub enum Outcome {
    NoActiveStock,
    Selected {
        symbol: String,
        selection: Selection,
    },
    Added {
        symbol: String,
        added: Added,
    },
    Removed {
        symbol: String,
        removed: Removed,
    },
    Data {
        symbol: String,
        fields: Vec<String>,
    },
    Status {
        symbol: String,
        fields: Vec<String>,
        report: Result<Report, ReportError>,
    },
    Generated {
        symbol: String,
        result: Result<(), ReportError>,
    },
    Fields(&'static [Field]),
    History(Vec<String>),
    Help,
}

/// What the loop should do after a line.
#[derive(Debug)]
pub enum Flow {
    Exit,
    Continue(Result<Outcome, ParseError>),
}

pub struct Session<Q> {
    registry: StockRegistry,
    quotes: Q,
}

impl<Q: QuoteSource> Session<Q> {
    pub fn new(quotes: Q) -> Self {
        Self {
            registry: StockRegistry::new(),
            quotes,
        }
    }

    pub fn registry(&self) -> &StockRegistry {
        &self.registry
    }

    pub async fn handle_line(&mut self, line: &str) -> Flow {
        let (name, args) = match command::parse_line(line) {
            Ok(Input::Exit) => return Flow::Exit,
            Ok(Input::Call { name, args }) => (name, args),
            Err(e) => return Flow::Continue(Err(e)),
        };

        match Command::resolve(name, &args) {
            Ok(cmd) => Flow::Continue(Ok(self.execute(cmd).await)),
            Err(e) => Flow::Continue(Err(e)),
        }
    }

    pub async fn execute(&mut self, cmd: Command) -> Outcome {
        debug!(command = ?cmd, "dispatching");

        match cmd {
            Command::Status => command::status(&mut self.registry, &self.quotes).await,
            Command::Stock(symbol) => command::stock(&mut self.registry, &symbol),
            Command::Add(codes) => command::add(&mut self.registry, &codes),
            Command::Remove(codes) => command::remove(&mut self.registry, &codes),
            Command::Data => command::data(&self.registry),
            Command::Generate => command::generate(&mut self.registry, &self.quotes).await,
            Command::Fields => command::catalog(),
            Command::History => command::history(&self.registry),
            Command::Help => Outcome::Help,
        }
    }
}
