use std::io::prelude::*;
use crate::result;
use crate::render::Renderer;
use crate::units;

pub struct TerminalRenderer<'a> {
    stream: &'a mut dyn Write,
}

impl<'a> TerminalRenderer<'a> {
    pub fn new(stream: &'a mut dyn Write) -> TerminalRenderer<'a> {
        TerminalRenderer { stream }
    }
}

fn unavailable(age: u32) -> String {
    format!("unavailable (no reference data for age {})", age)
}

impl<'a> Renderer for TerminalRenderer<'a> {
    fn render(&mut self, result: &result::ProjectionResult) {
        let mut write = |text: String| {
            if let Err(err) = self.stream.write_all(format!("{}\n", text).as_bytes()) {
                error!("Could not write result: {}", err);
            }
        };

        write(format!("sex:\t{}", result.sex));
        write(format!("age.current:\t{}", result.current_age));
        write(format!("height.current_cm:\t{}", result.current_height));

        match result.percentile_rank {
            Some(rank) => write(format!("percentile_rank:\t{}", rank)),
            None => write(format!("percentile_rank:\t{}", unavailable(result.current_age))),
        }

        write(format!("age.target:\t{}", result.target_age));

        match result.projected_height {
            Some(height) => {
                let (feet, inches) = units::cm_to_feet_inches(height);
                write(format!("height.projected_cm:\t{}", height));
                write(format!("height.projected_ft_in:\t{} ft {} in", feet, inches));
            }
            None if result.percentile_rank.is_none() => {
                write(format!("height.projected_cm:\t{}", unavailable(result.current_age)))
            }
            None => write(format!("height.projected_cm:\t{}", unavailable(result.target_age))),
        }

        if let Some(ref bands) = result.chart {
            write(String::from("chart:\tage\tp5\tp50\tp95"));

            for band in bands {
                let mut marks: Vec<String> = Vec::new();
                if band.age == f64::from(result.current_age) {
                    marks.push(format!("current {}", result.current_height));
                }
                if band.age == f64::from(result.target_age) {
                    if let Some(height) = result.projected_height {
                        marks.push(format!("projected {}", height));
                    }
                }

                let line = format!(
                    "chart:\t{}\t{}\t{}\t{}",
                    band.age, band.p5, band.median, band.p95
                );

                if marks.is_empty() {
                    write(line);
                } else {
                    write(format!("{}\t<- {}", line, marks.join(", ")));
                }
            }
        }
    }
}
