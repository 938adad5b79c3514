use ::prometheus::{Encoder, Gauge, Opts, Registry, TextEncoder};

use crate::render::Renderer;
use crate::result;

pub struct PrometheusRenderer {
    pub buffer: Vec<u8>,
    registry: Registry,
    encoder: TextEncoder,
}

impl PrometheusRenderer {
    pub fn new() -> PrometheusRenderer {
        PrometheusRenderer {
            registry: Registry::new(),
            buffer: Vec::new(),
            encoder: TextEncoder::new(),
        }
    }

    pub fn format_type(&self) -> &str {
        self.encoder.format_type()
    }

    fn gauge(&self, name: &str, help: &str, sex: &str, value: f64) {
        let opts = Opts::new(name, help).const_label("sex", sex);

        let registered = Gauge::with_opts(opts).and_then(|gauge| {
            gauge.set(value);
            self.registry.register(Box::new(gauge))
        });

        if let Err(err) = registered {
            error!("Could not register gauge {}: {}", name, err);
        }
    }
}

impl Renderer for PrometheusRenderer {
    fn render(&mut self, result: &result::ProjectionResult) {
        let sex = result.sex.as_str();

        self.gauge(
            "growth_current_age_years",
            "Age of the observation",
            sex,
            f64::from(result.current_age),
        );
        self.gauge(
            "growth_current_height_cm",
            "Observed height",
            sex,
            result.current_height,
        );
        self.gauge(
            "growth_target_age_years",
            "Age the height is projected to",
            sex,
            f64::from(result.target_age),
        );

        match result.percentile_rank {
            Some(rank) => self.gauge(
                "growth_percentile_rank",
                "Share of the age cohort shorter than the observed height",
                sex,
                rank,
            ),
            None => warn!("No percentile rank to export."),
        }

        match result.projected_height {
            Some(height) => self.gauge(
                "growth_projected_height_cm",
                "Height at the same percentile rank in the target age cohort",
                sex,
                height,
            ),
            None => warn!("No projected height to export."),
        }

        let metric_families = self.registry.gather();

        if let Err(err) = self.encoder.encode(&metric_families, &mut self.buffer) {
            error!("Could not encode metrics: {}", err);
        }
    }
}
