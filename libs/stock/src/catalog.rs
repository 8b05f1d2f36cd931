/// A data point the quote service can report for a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub code: &'static str,
    pub label: &'static str,
}

const fn field(code: &'static str, label: &'static str) -> Field {
    Field { code, label }
}

//
// Match the legacy quotes.csv `f=` format codes
//
pub const FIELDS: &[Field] = &[
    field("a", "Ask"),
    field("b", "Bid"),
    field("b2", "Ask (Realtime)"),
    field("b3", "Bid (Realtime)"),
    field("p", "Previous Close"),
    field("o", "Open"),
    field("y", "Dividend Yield"),
    field("d", "Dividend per Share"),
    field("r1", "Dividend Pay Date"),
    field("q", "Ex-Dividend Date"),
    field("c1", "Change"),
    field("c", "Change & Percent Change"),
    field("c6", "Change (Realtime)"),
    field("k2", "Change Percent (Realtime)"),
    field("p2", "Change in Percent"),
    field("d1", "Last Trade Date"),
    field("d2", "Trade Date"),
    field("t1", "Last Trade Time"),
    field("c8", "After Hours Change (Realtime)"),
    field("c3", "Commission"),
    field("h", "Day's High"),
    field("k1", "Last Trade (Realtime) With Time"),
    field("l", "Last Trade (With Time)"),
    field("l1", "Last Trade (Price Only)"),
    field("t8", "1 yr Target Price"),
    field("m5", "Change From 200-day Moving Average"),
    field("m6", "Percent Change From 200-day Moving Average"),
    field("m7", "Change From 50-day Moving Average"),
    field("m8", "Percent Change From 50-day Moving Average"),
    field("m3", "50-day Moving Average"),
    field("m4", "200-day Moving Average"),
    field("w1", "Day's Value Change"),
    field("w4", "Day's Value Change (Realtime)"),
    field("p1", "Price Paid"),
    field("m", "Day's Range"),
    field("m2", "Day's Range (Realtime)"),
    field("g1", "Holdings Gain Percent"),
    field("g3", "Annualized Gain"),
    field("g4", "Holdings Gain"),
    field("g5", "Holdings Gain Percent (Realtime)"),
    field("g6", "Holdings Gain (Realtime)"),
    field("t7", "Ticker Trend"),
    field("t6", "Trade Links"),
    field("i5", "Order Book (Realtime)"),
    field("l2", "High Limit"),
    field("l3", "Low Limit"),
    field("v1", "Holdings Value"),
    field("v7", "Holdings Value (Realtime)"),
    field("s6", "Revenue"),
    field("k", "52-week High"),
    field("j", "52-week Low"),
    field("j5", "Change From 52-week Low"),
    field("k4", "Change From 52-week High"),
    field("j6", "Percent Change From 52-week Low"),
    field("k5", "Percent Change From 52-week High"),
    field("w", "52-week Range"),
    field("v", "Volume"),
    field("j1", "Market Capitalization"),
    field("j3", "Market Cap (Realtime)"),
    field("f6", "Float Shares"),
    field("n", "Name"),
    field("n4", "Notes"),
    field("s", "Symbol"),
    field("s1", "Shares Owned"),
    field("x", "Stock Exchange"),
    field("j2", "Shares Outstanding"),
    field("a5", "Ask Size"),
    field("b6", "Bid Size"),
    field("k3", "Last Trade Size"),
    field("a2", "Average Daily Volume"),
    field("e", "Earnings per Share"),
    field("e7", "EPS Estimate Current Year"),
    field("e8", "EPS Estimate Next Year"),
    field("e9", "EPS Estimate Next Quarter"),
    field("b4", "Book Value"),
    field("j4", "EBITDA"),
    field("p5", "Price / Sales"),
    field("p6", "Price / Book"),
    field("r", "P/E Ratio"),
    field("r2", "P/E Ratio (Realtime)"),
    field("r5", "PEG Ratio"),
    field("r6", "Price / EPS Estimate Current Year"),
    field("r7", "Price / EPS Estimate Next Year"),
    field("s7", "Short Ratio"),
];

pub fn lookup(code: &str) -> Option<&'static Field> {
    FIELDS.iter().find(|f| f.code == code)
}

pub fn is_known(code: &str) -> bool {
    lookup(code).is_some()
}

/// Human-readable label for `code`, falling back to the code itself.
pub fn label(code: &str) -> &str {
    lookup(code).map_or(code, |f| f.label)
}
