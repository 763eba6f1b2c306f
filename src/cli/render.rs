use crate::domain::entities::combined_record::CombinedRecord;
use crate::domain::values::format::{format_number, format_percentage, positive_or_na};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};

const HEADERS: [&str; 12] = [
    "Project Name",
    "Symbol",
    "Category",
    "Price",
    "Market Cap",
    "24h Volume",
    "Revenue/User",
    "Token Velocity",
    "Burn Rate %",
    "Market Cap/DAU",
    "24h Change",
    "Circulating Supply",
];

pub fn record_row(record: &CombinedRecord) -> Vec<String> {
    let q = &record.quote;
    let m = &record.metrics;
    vec![
        record.project.name.to_string(),
        record.project.symbol.to_string(),
        record.project.category.to_string(),
        format!("${:.4}", q.price),
        format!("${}", format_number(q.market_cap)),
        format!("${}", format_number(q.volume_24h)),
        positive_or_na(m.revenue_per_user, |v| format!("${v:.2}")),
        positive_or_na(m.token_velocity, |v| format!("{v:.4}")),
        positive_or_na(m.burn_rate_estimate, |v| format_percentage(v, 2)),
        positive_or_na(m.mcap_dau_ratio, |v| format!("${}", format_number(v))),
        format_percentage(q.percent_change_24h, 2),
        format_number(q.circulating_supply),
    ]
}

pub fn records_table(records: &[CombinedRecord]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(HEADERS.to_vec());
    for record in records {
        table.add_row(record_row(record));
    }
    table
}
