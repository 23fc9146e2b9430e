use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};

pub fn setup_metrics_recorder() -> Result<PrometheusHandle, BuildError> {
    PrometheusBuilder::new().install_recorder()
}

#[derive(Clone)]
pub struct Metrics {
    pub prometheus_handle: PrometheusHandle,
}

impl Metrics {
    pub fn new(prometheus_handle: PrometheusHandle) -> Self {
        Self { prometheus_handle }
    }

    pub fn render(&self) -> String {
        self.prometheus_handle.render()
    }
}

// The recording functions are no-ops until a recorder is installed, so the
// store and catalog call them unconditionally.

/// Counts every successful `TemplateStore::save`, catalog builds included.
pub fn record_template_saved() {
    ::metrics::increment_counter!("templates_saved_total");
}

/// Counts every successful template deletion.
pub fn record_template_deleted() {
    ::metrics::increment_counter!("templates_deleted_total");
}

/// Counts files written by a catalog build.
pub fn record_catalog_template_written() {
    ::metrics::increment_counter!("catalog_templates_written_total");
}

/// Counts files a catalog build failed to write.
pub fn record_catalog_template_failed() {
    ::metrics::increment_counter!("catalog_templates_failed_total");
}
