use tracing::{info, info_span, warn};
use tracing_futures::Instrument;

use crate::catalog;
use crate::quote_client::QuoteSource;
use crate::report::{Report, ReportError};

/// Why a field code was not added to a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    Unknown,
    Duplicate,
}

/// Per-code result of an `add_fields` batch.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Added {
    pub accepted: Vec<String>,
    pub rejected: Vec<(String, Rejection)>,
}

/// Per-code result of a `remove_fields` batch.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Removed {
    pub removed: Vec<String>,
    pub missing: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct StockRecord {
    symbol: String,
    fields: Vec<String>,
    last_report: Option<Report>,
}

impl StockRecord {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            fields: Vec::new(),
            last_report: None,
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Selected field codes, in report column order.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn last_report(&self) -> Option<&Report> {
        self.last_report.as_ref()
    }

    /// Add whitespace-separated field codes.
    /// A code is accepted only if the catalog knows it and it is not already selected.
    pub fn add_fields(&mut self, codes: &str) -> Added {
        let mut out = Added::default();

        for code in codes.split_whitespace() {
            if !catalog::is_known(code) {
                out.rejected.push((code.to_string(), Rejection::Unknown));
            } else if self.fields.iter().any(|f| f == code) {
                out.rejected.push((code.to_string(), Rejection::Duplicate));
            } else {
                self.fields.push(code.to_string());
                out.accepted.push(code.to_string());
            }
        }

        out
    }

    /// Remove whitespace-separated field codes that are currently selected.
    pub fn remove_fields(&mut self, codes: &str) -> Removed {
        let mut out = Removed::default();

        for code in codes.split_whitespace() {
            match self.fields.iter().position(|f| f == code) {
                Some(idx) => {
                    self.fields.remove(idx);
                    out.removed.push(code.to_string());
                }
                None => out.missing.push(code.to_string()),
            }
        }

        out
    }

    /// Fetch a fresh snapshot of the selected fields; it replaces `last_report`.
    pub async fn generate_report<Q: QuoteSource>(
        &mut self,
        source: &Q,
    ) -> Result<&Report, ReportError> {
        if self.fields.is_empty() {
            return Err(ReportError::NoFields);
        }

        let span = info_span!("generate_report", symbol = %self.symbol);

        let report = async {
            info!(fields = self.fields.len(), "fetching quote");
            let line = source.fetch_line(&self.symbol, &self.fields).await?;
            let report = Report::from_line(&self.symbol, &self.fields, &line)?;
            info!("report generated");
            Ok::<Report, ReportError>(report)
        }
        .instrument(span)
        .await
        .inspect_err(|e| warn!(symbol = %self.symbol, error = %e, "report failed"))?;

        Ok(&*self.last_report.insert(report))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FIELDS;

    #[test]
    fn add_every_catalog_code_once() {
        for f in FIELDS {
            let mut rec = StockRecord::new("AAPL");

            let first = rec.add_fields(f.code);
            assert_eq!(first.accepted, vec![f.code.to_string()]);
            assert_eq!(rec.fields(), [f.code.to_string()]);

            let second = rec.add_fields(f.code);
            assert!(second.accepted.is_empty());
            assert_eq!(
                second.rejected,
                vec![(f.code.to_string(), Rejection::Duplicate)]
            );
            assert_eq!(rec.fields(), [f.code.to_string()]);
        }
    }

    #[test]
    fn mixed_batch_partially_succeeds() {
        let mut rec = StockRecord::new("MSFT");

        let res = rec.add_fields("p  zz o p");
        assert_eq!(res.accepted, vec!["p", "o"]);
        assert_eq!(
            res.rejected,
            vec![
                ("zz".to_string(), Rejection::Unknown),
                ("p".to_string(), Rejection::Duplicate),
            ]
        );
        assert_eq!(rec.fields(), ["p", "o"]);
    }

    #[test]
    fn remove_absent_code_leaves_fields_unchanged() {
        let mut rec = StockRecord::new("MSFT");
        rec.add_fields("a b c");

        let res = rec.remove_fields("v");
        assert!(res.removed.is_empty());
        assert_eq!(res.missing, vec!["v"]);
        assert_eq!(rec.fields(), ["a", "b", "c"]);
    }

    #[test]
    fn remove_keeps_relative_order() {
        let mut rec = StockRecord::new("MSFT");
        rec.add_fields("a b c");
        rec.remove_fields("b");
        rec.add_fields("b");

        assert_eq!(rec.fields(), ["a", "c", "b"]);
    }

    struct Canned(&'static str);

    impl QuoteSource for Canned {
        async fn fetch_line(
            &self,
            _symbol: &str,
            _codes: &[String],
        ) -> Result<String, crate::quote_client::FetchError> {
            Ok(self.0.to_string())
        }
    }

    #[tokio::test]
    async fn report_requires_fields() {
        let mut rec = StockRecord::new("AAPL");
        let err = rec.generate_report(&Canned("1.0")).await.unwrap_err();

        assert!(matches!(err, ReportError::NoFields));
        assert!(rec.last_report().is_none());
    }

    #[tokio::test]
    async fn report_follows_selection_order_and_replaces_previous() {
        let mut rec = StockRecord::new("AAPL");
        rec.add_fields("v o p");
        rec.remove_fields("v");

        let report = rec.generate_report(&Canned("1.5,2.5\n")).await.unwrap();
        assert_eq!(report.headers(), vec!["Open", "Previous Close"]);
        assert_eq!(report.values(), ["1.5", "2.5"]);

        rec.generate_report(&Canned("3,4")).await.unwrap();
        assert_eq!(
            rec.last_report().map(|r| r.values().to_vec()),
            Some(vec!["3".to_string(), "4".to_string()])
        );
    }

    #[tokio::test]
    async fn failed_fetch_keeps_previous_report() {
        let mut rec = StockRecord::new("AAPL");
        rec.add_fields("o");
        rec.generate_report(&Canned("1.0")).await.unwrap();

        let err = rec.generate_report(&Canned("1.0,2.0")).await.unwrap_err();
        assert!(matches!(err, ReportError::Fetch(_)));
        assert_eq!(
            rec.last_report().map(|r| r.values().to_vec()),
            Some(vec!["1.0".to_string()])
        );
    }

    #[test]
    fn empty_input_is_noop() {
        let mut rec = StockRecord::new("MSFT");
        assert_eq!(rec.add_fields("   "), Added::default());
        assert_eq!(rec.remove_fields(""), Removed::default());
    }
}
