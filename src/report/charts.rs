//! @ai:module:intent Chart generation for benchmark results
//! @ai:module:layer infrastructure
//! @ai:module:public_api ChartGenerator
//! @ai:module:stateless true

use crate::metrics::BenchmarkResults;
use anyhow::Result;
use plotters::prelude::*;
use std::path::Path;

/// Rows beyond this rank make the axis unreadable.
const MAX_BARS: usize = 25;

/// @ai:intent Trait for chart generation
pub trait ChartGeneratorTrait: Send + Sync {
    /// @ai:intent Generate all charts from results
    fn generate_all(&self, results: &BenchmarkResults, output_dir: &Path) -> Result<Vec<String>>;
}

/// @ai:intent Generates charts from benchmark results
pub struct ChartGenerator;

impl ChartGenerator {
    /// @ai:intent Create a new chart generator
    /// @ai:effects pure
    pub fn new() -> Self {
        Self
    }

    /// @ai:intent Generate accuracy-by-language bar chart
    /// @ai:effects fs:write
    fn generate_accuracy_chart(
        &self,
        results: &BenchmarkResults,
        output_path: &Path,
    ) -> Result<()> {
        let data: Vec<_> = results
            .languages
            .iter()
            .take(MAX_BARS)
            .map(|l| (l.language.as_str(), l.accuracy))
            .collect();

        if data.is_empty() {
            return Ok(());
        }

        let root = BitMapBackend::new(output_path, (1000, 600)).into_drawing_area();
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .caption("Top-1 Accuracy by Language", ("sans-serif", 30))
            .margin(20)
            .x_label_area_size(40)
            .y_label_area_size(50)
            .build_cartesian_2d(0..data.len() as i32, 0f64..1f64)?;

        chart
            .configure_mesh()
            .y_desc("Accuracy")
            .x_desc("Language")
            .x_label_formatter(&|x| {
                data.get(*x as usize)
                    .map(|(code, _)| code.to_string())
                    .unwrap_or_default()
            })
            .draw()?;

        chart.draw_series(data.iter().enumerate().map(|(i, (_, accuracy))| {
            Rectangle::new([(i as i32, 0.0), (i as i32, *accuracy)], BLUE.mix(0.7).filled())
        }))?;

        root.present()?;
        Ok(())
    }
}

impl Default for ChartGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartGeneratorTrait for ChartGenerator {
    /// @ai:intent Generate all charts
    /// @ai:effects fs:write
    fn generate_all(&self, results: &BenchmarkResults, output_dir: &Path) -> Result<Vec<String>> {
        std::fs::create_dir_all(output_dir)?;

        let mut generated = Vec::new();

        let accuracy_path = output_dir.join("accuracy.png");
        self.generate_accuracy_chart(results, &accuracy_path)?;

        if accuracy_path.exists() {
            generated.push("accuracy.png".to_string());
        }

        Ok(generated)
    }
}
