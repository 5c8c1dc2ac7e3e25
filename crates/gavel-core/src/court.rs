//! Court name → facility code reference table.
//!
//! The portal routes queries by an opaque facility code (`B` followed by six
//! digits), not by court name. The table below covers every district court and
//! branch the auction portal serves; it is fixed at build time and never
//! mutated.

/// All known `(court name, facility code)` pairs, in portal order.
pub const COURT_CODES: &[(&str, &str)] = &[
    ("서울중앙지방법원", "B000210"),
    ("서울동부지방법원", "B000211"),
    ("서울서부지방법원", "B000215"),
    ("서울남부지방법원", "B000212"),
    ("서울북부지방법원", "B000213"),
    ("의정부지방법원", "B000214"),
    ("고양지원", "B214807"),
    ("남양주지원", "B214804"),
    ("인천지방법원", "B000240"),
    ("부천지원", "B000241"),
    ("수원지방법원", "B000250"),
    ("성남지원", "B000251"),
    ("여주지원", "B000252"),
    ("평택지원", "B000253"),
    ("안산지원", "B250826"),
    ("안양지원", "B000254"),
    ("춘천지방법원", "B000260"),
    ("강릉지원", "B000261"),
    ("원주지원", "B000262"),
    ("속초지원", "B000263"),
    ("영월지원", "B000264"),
    ("청주지방법원", "B000270"),
    ("충주지원", "B000271"),
    ("제천지원", "B000272"),
    ("영동지원", "B000273"),
    ("대전지방법원", "B000280"),
    ("홍성지원", "B000281"),
    ("논산지원", "B000282"),
    ("천안지원", "B000283"),
    ("공주지원", "B000284"),
    ("서산지원", "B000285"),
    ("대구지방법원", "B000310"),
    ("안동지원", "B000311"),
    ("경주지원", "B000312"),
    ("김천지원", "B000313"),
    ("상주지원", "B000314"),
    ("의성지원", "B000315"),
    ("영덕지원", "B000316"),
    ("포항지원", "B000317"),
    ("대구서부지원", "B000320"),
    ("부산지방법원", "B000410"),
    ("부산동부지원", "B000412"),
    ("부산서부지원", "B000414"),
    ("울산지방법원", "B000411"),
    ("창원지방법원", "B000420"),
    ("마산지원", "B000431"),
    ("진주지원", "B000421"),
    ("통영지원", "B000422"),
    ("밀양지원", "B000423"),
    ("거창지원", "B000424"),
    ("광주지방법원", "B000510"),
    ("목포지원", "B000511"),
    ("장흥지원", "B000512"),
    ("순천지원", "B000513"),
    ("해남지원", "B000514"),
    ("전주지방법원", "B000520"),
    ("군산지원", "B000521"),
    ("정읍지원", "B000522"),
    ("남원지원", "B000523"),
    ("제주지방법원", "B000530"),
];

/// Resolve a court name to its facility code.
pub fn court_code(name: &str) -> Option<&'static str> {
    COURT_CODES
        .iter()
        .find(|(court, _)| *court == name)
        .map(|(_, code)| *code)
}

/// Iterate over every court name the table knows, in table order.
///
/// Feeds the CLI's value parser so unknown names are rejected at the
/// argument-parsing boundary.
pub fn court_names() -> impl Iterator<Item = &'static str> {
    COURT_CODES.iter().map(|(court, _)| *court)
}
