use crate::common::*;

use crate::enums::movement_category::*;

use crate::model::report::{daily_series::*, report_artifact::*};

use crate::traits::service_traits::chart_service::*;

use crate::utils_modules::time_utils::*;

use plotters::coord::ranged1d::{IntoSegmentedCoord, SegmentValue};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

const CHART_SIZE: (u32, u32) = (2100, 900);
const CHART_FILE_PREFIX: &str = "pacotes_meio_movimento";
const X_AXIS_DESC: &str = "Data";
const Y_AXIS_DESC: &str = "Quantidade em metros cúbicos";

const COMPUTER_COLOR: RGBColor = RGBColor(31, 119, 180);
const COLLECTOR_COLOR: RGBColor = RGBColor(255, 127, 14);
const EXTRA_COLORS: [RGBColor; 4] = [
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
];

#[derive(Debug, Clone, new)]
pub struct ChartServiceImpl {
    output_dir: PathBuf,
}

impl ChartServiceImpl {
    #[doc = "Y-axis upper bound with headroom for the point labels. Counts are never negative, so the axis starts at 0."]
    fn calculate_y_range(&self, max_value: u64) -> (u64, u64) {
        if max_value == 0 {
            return (0, 10);
        }

        let padding: u64 = (max_value.saturating_mul(15).saturating_add(99) / 100).max(1);

        (0, max_value + padding)
    }

    fn chart_title(&self, window_days: u64) -> String {
        format!(
            "Metros Cúbicos Transferidos (Com Coletor vs. Sem Coletor) (últimos {} dias)",
            window_days
        )
    }

    fn chart_file_path(&self, generated_at: DateTime<Local>) -> PathBuf {
        self.output_dir.join(format!(
            "{}_{}.png",
            CHART_FILE_PREFIX,
            file_stamp(generated_at)
        ))
    }

    fn series_color(category: &MovementCategory, extra_idx: usize) -> RGBColor {
        match category {
            MovementCategory::Computer => COMPUTER_COLOR,
            MovementCategory::Collector => COLLECTOR_COLOR,
            MovementCategory::Other(_) => EXTRA_COLORS[extra_idx % EXTRA_COLORS.len()],
        }
    }
}

#[async_trait]
impl ChartService for ChartServiceImpl {
    async fn render_daily_series(
        &self,
        series: &DailySeries,
        window_days: u64,
        generated_at: DateTime<Local>,
    ) -> anyhow::Result<ReportArtifact> {
        if series.is_empty() {
            return Err(anyhow!(
                "[ChartServiceImpl->render_daily_series] Cannot generate chart with empty series"
            ));
        }

        /* Create output directory if it doesn't exist */
        tokio::fs::create_dir_all(&self.output_dir)
            .await
            .with_context(|| {
                format!(
                    "[ChartServiceImpl->render_daily_series] failed to create {}",
                    self.output_dir.display()
                )
            })?;

        let output_path: PathBuf = self.chart_file_path(generated_at);
        let output_path_str: String = output_path.to_string_lossy().to_string();
        let title: String = self.chart_title(window_days);
        let (y_min, y_max) = self.calculate_y_range(series.max_value());

        let point_count: usize = series.len();
        let tick_labels: Vec<String> = series.dates().into_iter().map(format_tick_label).collect();

        let mut extra_idx: usize = 0;
        let columns: Vec<(String, RGBColor, Vec<u64>)> = series
            .categories()
            .iter()
            .map(|category| {
                let color: RGBColor = Self::series_color(category, extra_idx);
                if !category.is_known() {
                    extra_idx += 1;
                }
                (category.to_string(), color, series.values_for(category))
            })
            .collect();

        let handle: tokio::task::JoinHandle<Result<(), anyhow::Error>> =
            tokio::task::spawn_blocking(move || {
                /* ---- 여기부터는 동기 코드 (plotters) ---- */
                let root = BitMapBackend::new(&output_path_str, CHART_SIZE).into_drawing_area();
                root.fill(&WHITE)?;

                let mut chart = ChartBuilder::on(&root)
                    .caption(&title, ("sans-serif", 34).into_font())
                    .margin(30)
                    .x_label_area_size(70)
                    .y_label_area_size(100)
                    .build_cartesian_2d((0..point_count).into_segmented(), y_min..y_max)?;

                let grid_color: RGBColor = RGBColor(225, 225, 225);

                chart
                    .configure_mesh()
                    .x_desc(X_AXIS_DESC)
                    .y_desc(Y_AXIS_DESC)
                    .x_labels(point_count + 1)
                    .y_labels(10)
                    .light_line_style(ShapeStyle::from(&grid_color).stroke_width(1))
                    .bold_line_style(ShapeStyle::from(&grid_color).stroke_width(1))
                    .x_label_style(("sans-serif", 18).into_font())
                    .y_label_style(("sans-serif", 18).into_font())
                    .x_label_formatter(&|x| match x {
                        SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => {
                            tick_labels.get(*i).cloned().unwrap_or_default()
                        }
                        SegmentValue::Last => String::new(),
                    })
                    .y_label_formatter(&|y| y.to_formatted_string(&Locale::pt))
                    .draw()?;

                for (label, color, values) in &columns {
                    let color: RGBColor = *color;

                    chart
                        .draw_series(LineSeries::new(
                            values
                                .iter()
                                .enumerate()
                                .map(|(i, v)| (SegmentValue::CenterOf(i), *v)),
                            ShapeStyle::from(&color).stroke_width(3),
                        ))?
                        .label(label.as_str())
                        .legend(move |(x, y)| {
                            PathElement::new(
                                vec![(x, y), (x + 24, y)],
                                ShapeStyle::from(&color).stroke_width(3),
                            )
                        });

                    chart.draw_series(values.iter().enumerate().map(|(i, v)| {
                        Circle::new((SegmentValue::CenterOf(i), *v), 5, color.filled())
                    }))?;

                    /* 각 포인트 값 표시 */
                    let value_style: TextStyle = ("sans-serif", 16)
                        .into_font()
                        .color(&color)
                        .pos(Pos::new(HPos::Center, VPos::Bottom));

                    chart.draw_series(values.iter().enumerate().map(|(i, v)| {
                        Text::new(
                            v.to_string(),
                            (SegmentValue::CenterOf(i), *v),
                            value_style.clone(),
                        )
                    }))?;
                }

                chart
                    .configure_series_labels()
                    .position(SeriesLabelPosition::UpperLeft)
                    .label_font(("sans-serif", 20))
                    .background_style(&WHITE.mix(0.85))
                    .border_style(&BLACK)
                    .draw()?;

                root.present()?;
                Ok(())
            });

        let drawing_result: Result<(), anyhow::Error> = handle.await.context(
            "[ChartServiceImpl->render_daily_series] blocking task join failed (panic/cancelled)",
        )?;

        drawing_result
            .context("[ChartServiceImpl->render_daily_series] drawing/present failed")?;

        info!("Line chart generated successfully: {:?}", output_path);

        Ok(ReportArtifact::new(output_path, generated_at))
    }
}
