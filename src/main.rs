use bps_domain::api_client::ApiClient;
use bps_domain::data_exporter::{DataExporter, DEFAULT_EXPORT_FILE};
use bps_domain::logging;
use bps_domain::reporter::{ConsoleReporter, Reporter};
use bps_domain::table_display;

/// Domain list endpoint, API key embedded the way the service hands it out.
const BPS_DOMAIN_URL: &str =
    "https://webapi.bps.go.id/v1/api/domain/type/kab/prov/00000/key/79452e4c302f8921ad36cd2bf55f0630/";

/// Rows shown in the stdout preview of a freshly built table.
const PREVIEW_ROWS: usize = 5;

fn main() {
    logging::init_tracing();

    let reporter = ConsoleReporter;
    let client = ApiClient::new(BPS_DOMAIN_URL);

    let table = client.fetch_domain_table(&reporter);

    if let Some(table) = &table {
        reporter.report("Domain table built:");
        table_display::display_preview(table, PREVIEW_ROWS);
    }

    // Absence is a no-op; failures are reported inside. Either way the
    // process exits normally.
    DataExporter::export(table.as_ref(), DEFAULT_EXPORT_FILE, &reporter);
}
