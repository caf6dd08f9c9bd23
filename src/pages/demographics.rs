//! Demographics Page
//!
//! Population dynamics, vital rates, the age-sex pyramid and migration
//! flows. The trend overlay, mean reference line and the two difference
//! series (net migration, natural increase) come from the stats module.

use crate::chart::{AxisSpec, BarMode, ChartKind, ChartSpec, Series};
use crate::document::{ChangeDirection, ChangeIndicator, Document, Node};
use crate::pages::RegionInfo;
use crate::stats;

/// Resident population by year, thousands
const POPULATION_YEARS: [&str; 10] = [
    "2015", "2016", "2017", "2018", "2019", "2020", "2021", "2022", "2023", "2024",
];
const POPULATION: [f64; 10] = [
    1515.0, 1506.0, 1497.0, 1488.0, 1479.0, 1470.0, 1462.0, 1455.0, 1450.0, 1445.0,
];

/// Births and deaths per 1000 residents
const RATE_YEARS: [&str; 5] = ["2020", "2021", "2022", "2023", "2024"];
const BIRTH_RATE: [f64; 5] = [9.2, 8.9, 8.5, 8.3, 8.2];
const DEATH_RATE: [f64; 5] = [16.8, 18.2, 16.5, 15.8, 15.6];

/// Age-sex structure, thousands per five-year group
const AGE_GROUPS: [&str; 18] = [
    "0-4", "5-9", "10-14", "15-19", "20-24", "25-29", "30-34", "35-39", "40-44", "45-49", "50-54",
    "55-59", "60-64", "65-69", "70-74", "75-79", "80-84", "85+",
];
const MALE: [f64; 18] = [
    35.0, 38.0, 40.0, 42.0, 45.0, 48.0, 52.0, 55.0, 58.0, 60.0, 58.0, 55.0, 50.0, 45.0, 38.0,
    30.0, 20.0, 12.0,
];
const FEMALE: [f64; 18] = [
    33.0, 36.0, 38.0, 41.0, 44.0, 47.0, 51.0, 54.0, 57.0, 62.0, 62.0, 62.0, 60.0, 58.0, 55.0,
    50.0, 45.0, 38.0,
];

/// Migration flows by year, thousands
const MIGRATION_YEARS: [&str; 6] = ["2019", "2020", "2021", "2022", "2023", "2024"];
const ARRIVALS: [f64; 6] = [28.5, 24.2, 26.8, 29.4, 31.2, 32.5];
const DEPARTURES: [f64; 6] = [26.8, 23.5, 25.2, 27.8, 29.5, 30.8];

/// Long-run vital rates for the trend panel
const TREND_YEARS: [&str; 9] = [
    "2015", "2016", "2017", "2018", "2019", "2020", "2021", "2022", "2023",
];
const TREND_BIRTH_RATE: [f64; 9] = [10.2, 10.5, 9.8, 9.5, 9.2, 8.9, 8.5, 8.3, 8.2];
const TREND_DEATH_RATE: [f64; 9] = [16.5, 16.2, 15.9, 15.8, 16.2, 16.8, 18.2, 16.5, 15.8];

/// Compose the demographics document
pub fn compose(region: &RegionInfo) -> Document {
    Document::new("Demographics")
        .subtitle(format!("Demographic situation in {}", region.name))
        .child(Node::row(vec![
            Node::kpi("Population", "1 456 200", ChangeIndicator::percent(-0.3)),
            Node::kpi(
                "Birth rate",
                "8.2 ‰",
                ChangeIndicator::new(ChangeDirection::Down, "0.5‰ vs previous year"),
            ),
            Node::kpi(
                "Death rate",
                "15.6 ‰",
                ChangeIndicator::new(ChangeDirection::Up, "0.2‰ vs previous year"),
            ),
        ]))
        .child(Node::row(vec![
            Node::chart_panel("Population", population_chart()),
            Node::chart_panel("Birth rate", birth_rate_chart()),
            Node::chart_panel("Death rate", death_rate_chart()),
        ]))
        .child(Node::row(vec![
            Node::chart_panel("Age-sex pyramid", age_pyramid()),
            Node::chart_panel("Migration", migration_chart()),
        ]))
        .child(Node::chart_panel(
            "Demographic indicators by year",
            demographic_trends(),
        ))
}

/// Population over the decade with an OLS trend overlay
pub fn population_chart() -> ChartSpec {
    let mut spec = ChartSpec::new(ChartKind::Line, "Population dynamics (thousands)")
        .x_axis("Year")
        .y_axis("Thousands of people")
        .series(
            Series::from_values("Population", &POPULATION_YEARS, &POPULATION)
                .color("#1f77b4")
                .fill_area(),
        )
        .legend(false);

    if let Some(fitted) = stats::linear_trend(&POPULATION) {
        spec = spec.series(
            Series::from_values("Trend", &POPULATION_YEARS, &fitted)
                .color("#d62728")
                .dashed(),
        );
    }

    spec
}

/// Births per 1000 residents with a mean reference line
pub fn birth_rate_chart() -> ChartSpec {
    let mut spec = ChartSpec::new(ChartKind::Bar, "Birth rate dynamics (per 1000 residents)")
        .x_axis("Year")
        .y_axis("Per mille (‰)")
        .series(
            Series::from_values("Birth rate", &RATE_YEARS, &BIRTH_RATE)
                .color("#2ca02c")
                .show_values(),
        )
        .legend(false);

    if let Some(average) = stats::mean(&BIRTH_RATE) {
        spec = spec.reference_line(average, format!("Average: {average:.1}‰"));
    }

    spec
}

/// Deaths per 1000 residents
pub fn death_rate_chart() -> ChartSpec {
    ChartSpec::new(ChartKind::Bar, "Death rate dynamics (per 1000 residents)")
        .x_axis("Year")
        .y_axis("Per mille (‰)")
        .series(
            Series::from_values("Death rate", &RATE_YEARS, &DEATH_RATE)
                .color("#d62728")
                .show_values(),
        )
        .legend(false)
}

/// Age-sex pyramid: overlaid horizontal bars, male counts negated so the
/// sexes mirror around zero
pub fn age_pyramid() -> ChartSpec {
    let male_negated: Vec<f64> = MALE.iter().map(|v| -v).collect();

    ChartSpec::new(ChartKind::Bar, "Age-sex structure of the population")
        .x_axis_spec(AxisSpec::new("Thousands of people").absolute_ticks())
        .y_axis("Age group")
        .series(
            Series::from_values("Men", &AGE_GROUPS, &male_negated)
                .color("#1f77b4")
                .show_values(),
        )
        .series(
            Series::from_values("Women", &AGE_GROUPS, &FEMALE)
                .color("#ff7f0e")
                .show_values(),
        )
        .horizontal()
        .bar_mode(BarMode::Overlay)
}

/// Arrival and departure bars with the net-migration line on the
/// secondary axis
pub fn migration_chart() -> ChartSpec {
    let net = stats::difference(&ARRIVALS, &DEPARTURES);

    ChartSpec::new(ChartKind::Bar, "Migration flows")
        .x_axis("Year")
        .y_axis("Thousands of people")
        .secondary_y_axis("Net migration (thousands)")
        .series(
            Series::from_values("Arrivals", &MIGRATION_YEARS, &ARRIVALS)
                .color("#2ca02c")
                .show_values(),
        )
        .series(
            Series::from_values("Departures", &MIGRATION_YEARS, &DEPARTURES)
                .color("#d62728")
                .show_values(),
        )
        .series(
            Series::from_values("Net migration", &MIGRATION_YEARS, &net)
                .color("#ffd700")
                .as_line()
                .secondary_axis(),
        )
}

/// Birth and death rate lines with natural-increase bars on the
/// secondary axis
pub fn demographic_trends() -> ChartSpec {
    let natural_increase = stats::difference(&TREND_BIRTH_RATE, &TREND_DEATH_RATE);

    ChartSpec::new(ChartKind::Line, "Demographic indicators over time")
        .x_axis("Year")
        .y_axis("Per mille (‰)")
        .secondary_y_axis("Natural increase (‰)")
        .series(
            Series::from_values("Birth rate", &TREND_YEARS, &TREND_BIRTH_RATE)
                .color("#2ca02c")
                .fill_area(),
        )
        .series(
            Series::from_values("Death rate", &TREND_YEARS, &TREND_DEATH_RATE)
                .color("#d62728")
                .fill_area(),
        )
        .series(
            Series::from_values("Natural increase", &TREND_YEARS, &natural_increase)
                .as_bar()
                .secondary_axis()
                .show_values(),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_panel_inventory() {
        let doc = compose(&RegionInfo::default());
        assert_eq!(doc.title, "Demographics");
        assert_eq!(doc.chart_specs().len(), 6);
    }

    #[test]
    fn test_population_chart_carries_trend_overlay() {
        let spec = population_chart();
        assert_eq!(spec.series.len(), 2);
        assert_eq!(spec.series[1].label, "Trend");
        assert!(spec.series[1].style.dashed);

        // Population declines, so the fitted line must too
        let fitted = spec.series[1].values();
        assert!(fitted.first().unwrap() > fitted.last().unwrap());
    }

    #[test]
    fn test_birth_rate_mean_reference_line() {
        let spec = birth_rate_chart();
        assert_eq!(spec.reference_lines.len(), 1);
        let expected = BIRTH_RATE.iter().sum::<f64>() / BIRTH_RATE.len() as f64;
        assert!((spec.reference_lines[0].value - expected).abs() < 1e-9);
    }

    #[test]
    fn test_migration_net_series_is_elementwise_difference() {
        let spec = migration_chart();
        let net = &spec.series[2];

        assert_eq!(net.axis, crate::chart::AxisSide::Secondary);
        for (i, point) in net.points.iter().enumerate() {
            assert!((point.value - (ARRIVALS[i] - DEPARTURES[i])).abs() < 1e-9);
        }
    }

    #[test]
    fn test_natural_increase_is_births_minus_deaths() {
        let spec = demographic_trends();
        let increase = &spec.series[2];

        assert_eq!(increase.mark, Some(crate::chart::Mark::Bar));
        for (i, point) in increase.points.iter().enumerate() {
            assert!((point.value - (TREND_BIRTH_RATE[i] - TREND_DEATH_RATE[i])).abs() < 1e-9);
        }
    }

    #[test]
    fn test_age_pyramid_negates_male_side() {
        let spec = age_pyramid();
        assert!(spec.options.horizontal);
        assert_eq!(spec.options.bar_mode, BarMode::Overlay);
        assert!(spec.x_axis.as_ref().unwrap().absolute_ticks);

        for (i, point) in spec.series[0].points.iter().enumerate() {
            assert_eq!(point.value, -MALE[i]);
        }
        for (i, point) in spec.series[1].points.iter().enumerate() {
            assert_eq!(point.value, FEMALE[i]);
        }
    }
}
