use hyper::client;
use crate::render::Renderer;
use crate::result;

pub struct InfluxDbRenderer {
    write_url: String,
    tags: Option<String>,
}

impl InfluxDbRenderer {
    pub fn new(write_url: String, tags: Option<String>) -> InfluxDbRenderer {
        InfluxDbRenderer { write_url, tags }
    }
}

impl Renderer for InfluxDbRenderer {
    fn render(&mut self, result: &result::ProjectionResult) {
        let client = client::Client::new();
        let body = post_body(result, self.tags.as_ref().map(String::as_str));

        debug!("Posting to InfluxDB: {}", body);

        match client.post(self.write_url.as_str()).body(body.as_str()).send() {
            Ok(response) => {
                if !response.status.is_success() {
                    error!("InfluxDB rejected the values: {}", response.status);
                }
            }
            Err(err) => error!("Could not send values to InfluxDB: {}", err),
        }
    }
}

fn post_body(result: &result::ProjectionResult, tags: Option<&str>) -> String {
    let mut fields = vec![
        format!("current_age={}i", result.current_age),
        format!("current_height_cm={}", result.current_height),
        format!("target_age={}i", result.target_age),
    ];

    match result.percentile_rank {
        Some(rank) => fields.push(format!("percentile_rank={}", rank)),
        None => warn!("No percentile rank for InfluxDB."),
    }

    match result.projected_height {
        Some(height) => fields.push(format!("projected_height_cm={}", height)),
        None => warn!("No projected height for InfluxDB."),
    }

    let mut series = format!("growth_projection,sex={}", result.sex);
    if let Some(tags) = tags {
        series.push(',');
        series.push_str(tags);
    }

    format!("{} {}", series, fields.join(","))
}
