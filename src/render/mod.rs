use crate::result;

pub mod graphite;
pub mod influxdb;
pub mod prometheus;
pub mod terminal;

pub trait Renderer {
    fn render(&mut self, result: &result::ProjectionResult);
}
