use failure::Error;

use crate::args;
use crate::render::prometheus::PrometheusRenderer;
use crate::render::Renderer;
use crate::result;

type RunFn = fn(&args::GrowthProjectionArgs) -> Result<result::ProjectionResult, Error>;

struct HttpHandler {
    args: args::GrowthProjectionArgs,
    run: RunFn,
}

impl HttpHandler {
    /// Reruns the projection and returns the content type and body of the
    /// Prometheus exposition.
    fn metrics(&self) -> Result<(String, Vec<u8>), Error> {
        let result = (self.run)(&self.args)?;

        let mut renderer = PrometheusRenderer::new();
        renderer.render(&result);

        Ok((String::from(renderer.format_type()), renderer.buffer))
    }
}

impl hyper::server::Handler for HttpHandler {
    fn handle(&self, _: hyper::server::Request, mut res: hyper::server::Response) {
        match self.metrics() {
            Ok((content_type, body)) => {
                match content_type.parse::<hyper::mime::Mime>() {
                    Ok(mime) => res.headers_mut().set(hyper::header::ContentType(mime)),
                    Err(_) => warn!("Unparseable content type {}", content_type),
                }

                if let Err(err) = res.send(&body) {
                    error!("Could not send metrics: {}", err);
                }
            }
            Err(err) => {
                error!("{}", err);
                *res.status_mut() = hyper::status::StatusCode::InternalServerError;

                if let Err(err) = res.send(format!("{}\n", err).as_bytes()) {
                    error!("Could not send error response: {}", err);
                }
            }
        }
    }
}

pub fn listen_http(
    args: args::GrowthProjectionArgs,
    run: RunFn,
    binding_address: &str,
) -> Result<(), Error> {
    let handler = HttpHandler { args, run };

    info!("listening addr {:?}", binding_address);
    hyper::server::Server::http(binding_address)?.handle(handler)?;

    Ok(())
}
