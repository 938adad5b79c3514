use chrono::*;
use std::io::prelude::*;
use crate::render::Renderer;
use crate::result;

pub struct GraphiteRenderer<'a> {
    time: DateTime<Utc>,
    prefix: Option<String>,
    stream: &'a mut dyn Write,
}

impl<'a> GraphiteRenderer<'a> {
    pub fn new(
        time: DateTime<Utc>,
        prefix: Option<String>,
        stream: &'a mut dyn Write,
    ) -> GraphiteRenderer<'a> {
        GraphiteRenderer {
            time,
            prefix,
            stream,
        }
    }
}

impl<'a> Renderer for GraphiteRenderer<'a> {
    fn render(&mut self, result: &result::ProjectionResult) {
        let prefix = match self.prefix {
            Some(ref p) => format!("{}.", p),
            None => String::new(),
        };
        let timestamp = self.time.timestamp();
        let sex = result.sex.as_str();

        let mut write = |key: &str, value: String| {
            let line = format!("{}growth.{}.{} {} {}\n", prefix, sex, key, value, timestamp);
            if let Err(err) = self.stream.write_all(line.as_bytes()) {
                error!("Could not send value to Graphite: {}", err);
            }
        };

        write("age.current", result.current_age.to_string());
        write("height.current_cm", result.current_height.to_string());
        write("age.target", result.target_age.to_string());

        match result.percentile_rank {
            Some(rank) => write("percentile_rank", rank.to_string()),
            None => warn!("No percentile rank to send to Graphite."),
        }

        match result.projected_height {
            Some(height) => write("height.projected_cm", height.to_string()),
            None => warn!("No projected height to send to Graphite."),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::io::prelude::*;
    use std::str;
    use chrono::*;
    use crate::reference::Sex;
    use super::*;

    struct MockTcpStream {
        write_calls: Vec<String>,
    }

    impl Write for MockTcpStream {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.write_calls.push(
                str::from_utf8(buf).unwrap().to_string(),
            );
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn get_result_fixture() -> result::ProjectionResult {
        result::ProjectionResult {
            sex: Sex::Female,
            current_age: 10,
            current_height: 138.5,
            target_age: 15,
            percentile_rank: Some(0.5),
            projected_height: Some(159.5),
            chart: None,
        }
    }

    fn get_time_fixture() -> DateTime<Utc> {
        let time: DateTime<Utc> =
            DateTime::parse_from_str("22/Sep/2016:22:41:59 +0200", "%d/%b/%Y:%H:%M:%S %z")
                .unwrap()
                .with_timezone(&Utc);

        time
    }

    #[test]
    fn test_render_graphite() {
        let mut mock_tcp_stream = MockTcpStream { write_calls: vec![] };

        {
            let mut renderer =
                GraphiteRenderer::new(get_time_fixture(), None, &mut mock_tcp_stream);
            renderer.render(&get_result_fixture());
        }

        assert_eq!(
            mock_tcp_stream.write_calls,
            vec![
                String::from("growth.female.age.current 10 1474576919\n"),
                String::from("growth.female.height.current_cm 138.5 1474576919\n"),
                String::from("growth.female.age.target 15 1474576919\n"),
                String::from("growth.female.percentile_rank 0.5 1474576919\n"),
                String::from("growth.female.height.projected_cm 159.5 1474576919\n"),
            ]
        );
    }

    #[test]
    fn test_render_graphite_with_prefix() {
        let mut mock_tcp_stream = MockTcpStream { write_calls: vec![] };

        {
            let mut renderer = GraphiteRenderer::new(
                get_time_fixture(),
                Some(String::from("my_prefix")),
                &mut mock_tcp_stream,
            );
            renderer.render(&get_result_fixture());
        }

        assert_eq!(
            &mock_tcp_stream.write_calls[0],
            "my_prefix.growth.female.age.current 10 1474576919\n"
        );
        assert_eq!(
            &mock_tcp_stream.write_calls[4],
            "my_prefix.growth.female.height.projected_cm 159.5 1474576919\n"
        );
    }

    #[test]
    fn test_render_graphite_out_of_range() {
        let mut mock_tcp_stream = MockTcpStream { write_calls: vec![] };

        let result = result::ProjectionResult {
            percentile_rank: None,
            projected_height: None,
            ..get_result_fixture()
        };

        {
            let mut renderer =
                GraphiteRenderer::new(get_time_fixture(), None, &mut mock_tcp_stream);
            renderer.render(&result);
        }

        assert_eq!(mock_tcp_stream.write_calls.len(), 3);
        assert!(!mock_tcp_stream
            .write_calls
            .iter()
            .any(|line| line.contains("percentile_rank") || line.contains("projected")));
    }
}
