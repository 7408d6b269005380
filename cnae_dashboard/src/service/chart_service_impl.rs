use crate::common::*;
use crate::dto::chart::{grouped_bar_data::*, line_chart_data::*, map_region::*};
use crate::traits::service_traits::chart_service::*;
use crate::utils_modules::number_utils::*;
use plotters::prelude::*;

/* plotly 기본 qualitative 팔레트 */
const PALETTE: [RGBColor; 10] = [
    RGBColor(99, 110, 250),
    RGBColor(239, 85, 59),
    RGBColor(0, 204, 150),
    RGBColor(171, 99, 250),
    RGBColor(255, 161, 90),
    RGBColor(25, 211, 243),
    RGBColor(255, 102, 146),
    RGBColor(182, 232, 128),
    RGBColor(255, 151, 255),
    RGBColor(254, 203, 82),
];

const TITLE_COLOR: RGBColor = RGBColor(40, 40, 40);
const GRID_COLOR: RGBColor = RGBColor(225, 225, 225);
const NO_DATA_COLOR: RGBColor = RGBColor(215, 215, 215);
const OUTLINE_COLOR: RGBColor = RGBColor(90, 90, 90);
const HIGHLIGHT_COLOR: RGBColor = RGBColor(20, 20, 20);
const SCALE_LOW: RGBColor = RGBColor(254, 237, 222);
const SCALE_HIGH: RGBColor = RGBColor(166, 54, 3);

/* 한 카테고리 안에서 막대 묶음이 차지하는 폭 (카테고리 간격 1.0 기준) */
const GROUP_WIDTH: f64 = 0.8;
const BAR_FILL: f64 = 0.9;
const ROTATE_LABEL_THRESHOLD: usize = 10;
const MAX_LABEL_CHARS: usize = 28;
const LEGEND_STEPS: usize = 4;

#[derive(Debug, Clone, new)]
pub struct ChartServiceImpl {
    width: u32,
    height: u32,
}

impl ChartServiceImpl {
    #[doc = "Helper function to determine Y-axis range with padding"]
    fn calculate_y_range(&self, values: &[i64]) -> (i64, i64) {
        if values.is_empty() {
            return (0, 100);
        }

        let min_val: i64 = *values.iter().min().unwrap_or(&0);
        let max_val: i64 = *values.iter().max().unwrap_or(&100);

        let padding: i64 = ((max_val - min_val) as f64 * 0.1).max(1.0) as i64;

        let y_min: i64 = (min_val - padding).max(0);
        let y_max: i64 = max_val + padding;

        (y_min, y_max)
    }

    async fn prepare_output(&self, output_path: &std::path::Path) -> anyhow::Result<String> {
        if let Some(parent) = output_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        Ok(output_path.to_string_lossy().to_string())
    }
}

fn palette_color(idx: usize) -> RGBColor {
    PALETTE[idx % PALETTE.len()]
}

#[doc = "막대 차트 Y축 상한, 최댓값 + 10%"]
fn calculate_bar_y_max(max_value: i64) -> f64 {
    if max_value <= 0 {
        1.0
    } else {
        max_value as f64 * 1.1
    }
}

#[doc = "카테고리(CNAE 코드 등)가 10개를 넘으면 X축 라벨을 세로로 돌린다"]
fn rotate_x_labels(category_count: usize) -> bool {
    category_count > ROTATE_LABEL_THRESHOLD
}

fn truncate_label(label: &str, max_chars: usize) -> String {
    if label.chars().count() <= max_chars {
        return label.to_string();
    }

    let mut truncated: String = label.chars().take(max_chars.saturating_sub(1)).collect();
    truncated.push('…');
    truncated
}

#[doc = "정수 위치에만 카테고리 라벨을 붙인다."]
fn category_label(categories: &[String], x: f64) -> String {
    let rounded: f64 = x.round();
    if (x - rounded).abs() > 1e-6 || rounded < 0.0 {
        return String::new();
    }

    categories
        .get(rounded as usize)
        .map(|c| truncate_label(c, MAX_LABEL_CHARS))
        .unwrap_or_default()
}

#[doc = "0.0 ~ 1.0 위치를 연한 주황 -> 진한 갈색 사이의 색으로"]
fn sequential_color(t: f64) -> RGBColor {
    let t: f64 = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let lerp = |a: u8, b: u8| -> u8 { (a as f64 + (b as f64 - a as f64) * t).round() as u8 };

    RGBColor(
        lerp(SCALE_LOW.0, SCALE_HIGH.0),
        lerp(SCALE_LOW.1, SCALE_HIGH.1),
        lerp(SCALE_LOW.2, SCALE_HIGH.2),
    )
}

fn scale_position(value: i64, min: i64, max: i64) -> f64 {
    if max <= min {
        1.0
    } else {
        (value - min) as f64 / (max - min) as f64
    }
}

#[async_trait]
impl ChartService for ChartServiceImpl {
    async fn generate_grouped_bar_chart(
        &self,
        title: &str,
        data: GroupedBarData,
        output_path: &std::path::Path,
        x_label: &str,
        y_label: &str,
    ) -> anyhow::Result<()> {
        if data.is_empty() {
            return Err(anyhow!(
                "[ChartServiceImpl->generate_grouped_bar_chart] Cannot generate chart with empty data"
            ));
        }

        if let Some(series) = data
            .series()
            .iter()
            .find(|s| s.values().len() != data.categories().len())
        {
            return Err(anyhow!(
                "[ChartServiceImpl->generate_grouped_bar_chart] Series '{}' has {} values for {} categories",
                series.name(),
                series.values().len(),
                data.categories().len()
            ));
        }

        let output_path_str: String = self.prepare_output(output_path).await?;
        let title: String = title.to_string();
        let x_label: String = x_label.to_string();
        let y_label: String = y_label.to_string();
        let (width, height) = (self.width, self.height);

        let y_max: f64 = calculate_bar_y_max(data.max_value());
        let rotate_labels: bool = rotate_x_labels(data.categories().len());

        let handle: tokio::task::JoinHandle<Result<(), anyhow::Error>> =
            tokio::task::spawn_blocking(move || {
                let root = BitMapBackend::new(&output_path_str, (width, height)).into_drawing_area();
                root.fill(&WHITE)?;

                let categories: &Vec<String> = data.categories();
                let category_count: usize = categories.len();

                let x_label_font = if rotate_labels {
                    ("sans-serif", 14).into_font().transform(FontTransform::Rotate90)
                } else {
                    ("sans-serif", 14).into_font()
                };

                let mut chart = ChartBuilder::on(&root)
                    .caption(&title, ("sans-serif", 28).into_font().color(&TITLE_COLOR))
                    .margin(25)
                    .x_label_area_size(if rotate_labels { 190 } else { 70 })
                    .y_label_area_size(90)
                    .build_cartesian_2d(-0.5f64..(category_count as f64 - 0.5), 0f64..y_max)?;

                chart
                    .configure_mesh()
                    .disable_x_mesh()
                    .x_desc(&x_label)
                    .y_desc(&y_label)
                    .x_labels(category_count + 1)
                    .y_labels(10)
                    .light_line_style(ShapeStyle::from(&GRID_COLOR).stroke_width(1))
                    .x_label_style(x_label_font)
                    .y_label_style(("sans-serif", 16))
                    .x_label_formatter(&|x| category_label(categories, *x))
                    .y_label_formatter(&|y| format_compact(*y))
                    .draw()?;

                let slot: f64 = GROUP_WIDTH / data.series().len() as f64;

                for (idx, series) in data.series().iter().enumerate() {
                    let color: RGBColor = palette_color(idx);
                    let offset: f64 = -GROUP_WIDTH / 2.0 + slot * idx as f64;

                    chart
                        .draw_series(series.values().iter().enumerate().map(|(cat_idx, value)| {
                            let x0: f64 = cat_idx as f64 + offset;
                            Rectangle::new(
                                [(x0, 0.0), (x0 + slot * BAR_FILL, *value as f64)],
                                color.filled(),
                            )
                        }))?
                        .label(series.name().as_str())
                        .legend(move |(x, y)| {
                            Rectangle::new([(x, y - 6), (x + 12, y + 6)], color.filled())
                        });
                }

                chart
                    .configure_series_labels()
                    .background_style(&WHITE.mix(0.85))
                    .border_style(&BLACK)
                    .label_font(("sans-serif", 16))
                    .position(SeriesLabelPosition::UpperRight)
                    .draw()?;

                root.present()?;
                Ok(())
            });

        let drawing_result: Result<(), anyhow::Error> = handle.await.context(
            "[ChartServiceImpl->generate_grouped_bar_chart] blocking task join failed (panic/cancelled)",
        )?;

        drawing_result
            .context("[ChartServiceImpl->generate_grouped_bar_chart] drawing/present failed")?;

        info!("Grouped bar chart generated successfully: {:?}", output_path);

        Ok(())
    }

    async fn generate_line_chart(
        &self,
        title: &str,
        data: LineChartData,
        output_path: &std::path::Path,
        x_label: &str,
        y_label: &str,
    ) -> anyhow::Result<()> {
        if data.is_empty() {
            return Err(anyhow!(
                "[ChartServiceImpl->generate_line_chart] Cannot generate chart with empty data"
            ));
        }

        if let Some(series) = data
            .series()
            .iter()
            .find(|s| s.values().len() != data.x_labels().len())
        {
            return Err(anyhow!(
                "[ChartServiceImpl->generate_line_chart] X labels and Y data must have the same length: {} vs {} ({})",
                data.x_labels().len(),
                series.values().len(),
                series.name()
            ));
        }

        let output_path_str: String = self.prepare_output(output_path).await?;
        let title: String = title.to_string();
        let x_label: String = x_label.to_string();
        let y_label: String = y_label.to_string();
        let (width, height) = (self.width, self.height);

        /* Calculate y_range before moving into closure */
        let all_values: Vec<i64> = data
            .series()
            .iter()
            .flat_map(|s| s.values().iter().copied())
            .collect();
        let (y_min, y_max) = self.calculate_y_range(&all_values);

        let handle: tokio::task::JoinHandle<Result<(), anyhow::Error>> =
            tokio::task::spawn_blocking(move || {
                let root = BitMapBackend::new(&output_path_str, (width, height)).into_drawing_area();
                root.fill(&WHITE)?;

                let x_labels: &Vec<String> = data.x_labels();

                let mut chart = ChartBuilder::on(&root)
                    .caption(&title, ("sans-serif", 28).into_font().color(&TITLE_COLOR))
                    .margin(25)
                    .x_label_area_size(70)
                    .y_label_area_size(90)
                    .build_cartesian_2d(0..x_labels.len() - 1, y_min..y_max)?;

                chart
                    .configure_mesh()
                    .x_desc(&x_label)
                    .y_desc(&y_label)
                    .x_labels(x_labels.len())
                    .y_labels(10)
                    .light_line_style(ShapeStyle::from(&GRID_COLOR).stroke_width(1))
                    .bold_line_style(ShapeStyle::from(&GRID_COLOR).stroke_width(1))
                    .x_label_style(("sans-serif", 16))
                    .y_label_style(("sans-serif", 16))
                    .x_label_formatter(&|x| x_labels.get(*x).cloned().unwrap_or_default())
                    .y_label_formatter(&|y| format_thousands(*y))
                    .draw()?;

                for series in data.series() {
                    let color: RGBColor = palette_color(*series.color_group());
                    let style: ShapeStyle = ShapeStyle::from(&color).stroke_width(3);
                    let points: Vec<(usize, i64)> = series
                        .values()
                        .iter()
                        .enumerate()
                        .map(|(i, &y)| (i, y))
                        .collect();

                    /* 섹션 구분용 선 패턴: 실선 / 긴 점선 / 짧은 점선 */
                    let anno = match series.dash_group().map(|g| g % 3) {
                        None | Some(0) => chart.draw_series(LineSeries::new(points.clone(), style))?,
                        Some(1) => {
                            chart.draw_series(DashedLineSeries::new(points.clone(), 14, 8, style))?
                        }
                        _ => chart.draw_series(DashedLineSeries::new(points.clone(), 4, 6, style))?,
                    };

                    anno.label(series.name().as_str()).legend(move |(x, y)| {
                        PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(3))
                    });

                    chart.draw_series(
                        points
                            .iter()
                            .map(|&(x, y)| Circle::new((x, y), 5, color.filled())),
                    )?;
                }

                chart
                    .configure_series_labels()
                    .background_style(&WHITE.mix(0.85))
                    .border_style(&BLACK)
                    .label_font(("sans-serif", 16))
                    .position(SeriesLabelPosition::UpperRight)
                    .draw()?;

                root.present()?;
                Ok(())
            });

        let drawing_result: Result<(), anyhow::Error> = handle.await.context(
            "[ChartServiceImpl->generate_line_chart] blocking task join failed (panic/cancelled)",
        )?;

        drawing_result.context("[ChartServiceImpl->generate_line_chart] drawing/present failed")?;

        info!("Line chart generated successfully: {:?}", output_path);

        Ok(())
    }

    async fn generate_choropleth_map(
        &self,
        title: &str,
        data: ChoroplethData,
        output_path: &std::path::Path,
    ) -> anyhow::Result<()> {
        let (min_x, max_x, min_y, max_y) = data.bounds().ok_or_else(|| {
            anyhow!("[ChartServiceImpl->generate_choropleth_map] Cannot generate map without polygons")
        })?;

        /* 경계에 2% 여백 */
        let pad_x: f64 = ((max_x - min_x) * 0.02).max(1e-3);
        let pad_y: f64 = ((max_y - min_y) * 0.02).max(1e-3);
        let value_range: Option<(i64, i64)> = data.value_range();

        let output_path_str: String = self.prepare_output(output_path).await?;
        let title: String = title.to_string();
        let (width, height) = (self.width, self.height);

        let handle: tokio::task::JoinHandle<Result<(), anyhow::Error>> =
            tokio::task::spawn_blocking(move || {
                let root = BitMapBackend::new(&output_path_str, (width, height)).into_drawing_area();
                root.fill(&WHITE)?;

                let mut chart = ChartBuilder::on(&root)
                    .caption(&title, ("sans-serif", 28).into_font().color(&TITLE_COLOR))
                    .margin(25)
                    .x_label_area_size(50)
                    .y_label_area_size(70)
                    .build_cartesian_2d(
                        (min_x - pad_x)..(max_x + pad_x),
                        (min_y - pad_y)..(max_y + pad_y),
                    )?;

                chart
                    .configure_mesh()
                    .disable_mesh()
                    .x_desc("Longitude")
                    .y_desc("Latitude")
                    .x_label_formatter(&|x| format!("{:.1}", x))
                    .y_label_formatter(&|y| format!("{:.1}", y))
                    .draw()?;

                for region in data.regions() {
                    let fill: RGBColor = match (region.value(), value_range) {
                        (Some(value), Some((min, max))) => {
                            sequential_color(scale_position(*value, min, max))
                        }
                        _ => NO_DATA_COLOR,
                    };

                    chart.draw_series(
                        region
                            .rings()
                            .iter()
                            .map(|ring| Polygon::new(ring.clone(), fill.filled())),
                    )?;
                }

                /* 선택된 municipio 외곽선이 다른 지역에 가려지지 않도록 마지막에 그린다 */
                let mut outline_order: Vec<&MapRegion> = data.regions().iter().collect();
                outline_order.sort_by_key(|r| *r.highlighted());

                for region in outline_order {
                    let (outline, stroke): (RGBColor, u32) = if *region.highlighted() {
                        (HIGHLIGHT_COLOR, 3)
                    } else {
                        (OUTLINE_COLOR, 1)
                    };

                    chart.draw_series(region.rings().iter().map(|ring| {
                        let mut closed: Vec<(f64, f64)> = ring.clone();
                        if let Some(first) = ring.first() {
                            closed.push(*first);
                        }
                        PathElement::new(closed, outline.stroke_width(stroke))
                    }))?;
                }

                if let Some((min, max)) = value_range {
                    for step in 0..=LEGEND_STEPS {
                        let t: f64 = step as f64 / LEGEND_STEPS as f64;
                        let value: f64 = min as f64 + (max - min) as f64 * t;
                        let color: RGBColor = sequential_color(t);

                        chart
                            .draw_series(std::iter::empty::<Rectangle<(f64, f64)>>())?
                            .label(format_thousands(value.round() as i64))
                            .legend(move |(x, y)| {
                                Rectangle::new([(x, y - 6), (x + 12, y + 6)], color.filled())
                            });
                    }

                    chart
                        .configure_series_labels()
                        .background_style(&WHITE.mix(0.85))
                        .border_style(&BLACK)
                        .label_font(("sans-serif", 16))
                        .position(SeriesLabelPosition::LowerRight)
                        .draw()?;
                }

                root.present()?;
                Ok(())
            });

        let drawing_result: Result<(), anyhow::Error> = handle.await.context(
            "[ChartServiceImpl->generate_choropleth_map] blocking task join failed (panic/cancelled)",
        )?;

        drawing_result.context("[ChartServiceImpl->generate_choropleth_map] drawing/present failed")?;

        info!("Choropleth map generated successfully: {:?}", output_path);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_labels_only_on_integer_ticks() {
        let categories: Vec<String> = vec!["Educação".to_string(), "Construção".to_string()];

        assert_eq!(category_label(&categories, 0.0), "Educação");
        assert_eq!(category_label(&categories, 1.0), "Construção");
        assert_eq!(category_label(&categories, 0.5), "");
        assert_eq!(category_label(&categories, -0.5), "");
        assert_eq!(category_label(&categories, 2.0), "");
    }

    #[test]
    fn x_labels_rotate_only_above_ten_categories() {
        assert!(!rotate_x_labels(1));
        assert!(!rotate_x_labels(10));
        assert!(rotate_x_labels(11));
    }

    #[test]
    fn long_labels_are_truncated() {
        let label: &str = "Atividades Financeiras, de Seguros e Serviços Relacionados";
        let truncated: String = truncate_label(label, 10);

        assert_eq!(truncated.chars().count(), 10);
        assert!(truncated.ends_with('…'));
        assert_eq!(truncate_label("Educação", 10), "Educação");
    }

    #[test]
    fn sequential_scale_runs_from_low_to_high() {
        assert_eq!(sequential_color(0.0), SCALE_LOW);
        assert_eq!(sequential_color(1.0), SCALE_HIGH);
        assert_eq!(sequential_color(7.0), SCALE_HIGH);
        assert_eq!(scale_position(50, 0, 100), 0.5);
        assert_eq!(scale_position(5, 5, 5), 1.0);
    }

    #[test]
    fn y_range_is_padded_and_non_negative() {
        let service: ChartServiceImpl = ChartServiceImpl::new(800, 600);

        assert_eq!(service.calculate_y_range(&[]), (0, 100));
        assert_eq!(service.calculate_y_range(&[10, 110]), (0, 120));
        assert_eq!(calculate_bar_y_max(0), 1.0);
    }

    #[tokio::test]
    async fn empty_inputs_are_rejected_before_drawing() {
        let service: ChartServiceImpl = ChartServiceImpl::new(800, 600);
        let dir = tempfile::tempdir().unwrap();
        let path: PathBuf = dir.path().join("empty.png");

        let bar = service
            .generate_grouped_bar_chart(
                "t",
                GroupedBarData::new(vec![], vec![]),
                &path,
                "x",
                "y",
            )
            .await;
        assert!(bar.is_err());

        let line = service
            .generate_line_chart("t", LineChartData::new(vec![], vec![]), &path, "x", "y")
            .await;
        assert!(line.is_err());

        let map = service
            .generate_choropleth_map("t", ChoroplethData::new(vec![]), &path)
            .await;
        assert!(map.is_err());

        assert!(!path.exists());
    }

    #[tokio::test]
    async fn mismatched_series_length_is_rejected() {
        let service: ChartServiceImpl = ChartServiceImpl::new(800, 600);
        let dir = tempfile::tempdir().unwrap();

        let data: GroupedBarData = GroupedBarData::new(
            vec!["a".to_string(), "b".to_string()],
            vec![BarSeries::new("Lages".to_string(), vec![1])],
        );

        let result = service
            .generate_grouped_bar_chart("t", data, &dir.path().join("bar.png"), "x", "y")
            .await;

        assert!(result.is_err());
    }
}
