//! Labor Market Page
//!
//! Employment, unemployment and wage panels. Chart data here is the
//! fixed reference material published with the dashboard (annual labor
//! statistics are not part of the monthly indicator table).

use crate::chart::{ChartKind, ChartSpec, Series};
use crate::document::{ChangeIndicator, Document, Node};
use crate::pages::RegionInfo;
use crate::stats;

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const YEARS: [&str; 5] = ["2020", "2021", "2022", "2023", "2024"];

/// Monthly unemployment rate, percent
const UNEMPLOYMENT_2024: [f64; 12] = [3.8, 3.7, 3.6, 3.5, 3.4, 3.3, 3.2, 3.1, 3.2, 3.3, 3.4, 3.4];
const UNEMPLOYMENT_2023: [f64; 12] = [4.2, 4.1, 4.0, 3.9, 3.8, 3.7, 3.6, 3.5, 3.6, 3.7, 3.8, 3.9];

/// Average monthly salary by year, rubles
const SALARY_BY_YEAR: [f64; 5] = [42_300.0, 45_800.0, 49_200.0, 52_100.0, 54_280.0];

/// Employed persons by year, thousands
const EMPLOYED_BY_YEAR: [f64; 5] = [710.0, 720.0, 730.0, 738.0, 745.0];

/// Employed persons by industry, thousands
const INDUSTRY_EMPLOYMENT: [(&str, f64); 10] = [
    ("Manufacturing", 142.0),
    ("Trade", 98.0),
    ("Education", 76.0),
    ("Healthcare", 68.0),
    ("Construction", 52.0),
    ("Transport", 48.0),
    ("Agriculture", 42.0),
    ("Hotels and catering", 35.0),
    ("IT and telecom", 18.0),
    ("Finance", 12.0),
];

/// Open vacancies by sphere
const VACANCIES: [(&str, f64); 8] = [
    ("Sales", 2450.0),
    ("Blue-collar", 2100.0),
    ("IT", 1850.0),
    ("Manufacturing", 1650.0),
    ("Construction", 1200.0),
    ("Transport", 980.0),
    ("Medicine", 750.0),
    ("Education", 620.0),
];

/// Average monthly salary by municipality, rubles
const MUNICIPALITY_SALARIES: [(&str, f64); 10] = [
    ("Tula", 58_900.0),
    ("Novomoskovsk", 51_200.0),
    ("Aleksin", 47_800.0),
    ("Shchekino", 49_500.0),
    ("Efremov", 44_200.0),
    ("Uzlovaya", 45_800.0),
    ("Donskoy", 42_100.0),
    ("Kimovsk", 43_500.0),
    ("Bogoroditsk", 44_800.0),
    ("Suvorov", 41_200.0),
];

/// Compose the labor market document
pub fn compose(region: &RegionInfo) -> Document {
    Document::new("Labor Market")
        .subtitle(format!(
            "Employment, unemployment and wages in {}",
            region.name
        ))
        .child(Node::row(vec![
            Node::kpi(
                "Unemployment rate",
                "3.4%",
                ChangeIndicator::percent(-0.5),
            ),
            Node::kpi("Average salary", "54 280 ₽", ChangeIndicator::percent(8.3)),
            Node::kpi("Employed", "745 k", ChangeIndicator::percent(2.1)),
        ]))
        .child(Node::row(vec![
            Node::chart_panel("Unemployment rate", unemployment_chart()),
            Node::chart_panel("Average salary", salary_chart()),
            Node::chart_panel(
                "Employed",
                employment_chart(&YEARS, &EMPLOYED_BY_YEAR),
            ),
        ]))
        .child(Node::row(vec![
            Node::chart_panel("Employment by industry", industry_employment_chart()),
            Node::chart_panel("Vacancies by sphere", vacancies_chart()),
        ]))
        .child(Node::chart_panel(
            "Salaries by municipality",
            municipality_salary_chart(),
        ))
}

/// Unemployment by month, current year against previous
pub fn unemployment_chart() -> ChartSpec {
    ChartSpec::new(ChartKind::Line, "Unemployment rate dynamics (%)")
        .x_axis("Month")
        .y_axis("%")
        .series(
            Series::from_values("2024", &MONTHS, &UNEMPLOYMENT_2024)
                .color("#1f77b4")
                .fill_area(),
        )
        .series(
            Series::from_values("2023", &MONTHS, &UNEMPLOYMENT_2023)
                .color("#ff7f0e")
                .dashed(),
        )
}

/// Average salary by year
pub fn salary_chart() -> ChartSpec {
    ChartSpec::new(ChartKind::Bar, "Average salary dynamics")
        .x_axis("Year")
        .y_axis("Rubles")
        .series(
            Series::from_values("Average salary", &YEARS, &SALARY_BY_YEAR)
                .color("#1f77b4")
                .show_values(),
        )
        .legend(false)
}

/// Employed persons over years, thousands
///
/// Parameterized by the year/value pairs so callers with a live yearly
/// aggregate reuse the same shape as the published constants.
pub fn employment_chart(years: &[&str], employed_thousands: &[f64]) -> ChartSpec {
    ChartSpec::new(ChartKind::Line, "Employed persons (thousands)")
        .x_axis("Year")
        .y_axis("Thousands of people")
        .series(
            Series::from_values("Employed", years, employed_thousands)
                .color("#2ca02c")
                .fill_area(),
        )
        .legend(false)
}

/// Employed persons by industry, largest at the top
pub fn industry_employment_chart() -> ChartSpec {
    let (industries, values): (Vec<&str>, Vec<f64>) = INDUSTRY_EMPLOYMENT.iter().cloned().unzip();

    ChartSpec::new(ChartKind::Bar, "Distribution of employment by industry")
        .x_axis("Thousands of people")
        .series(Series::from_values("Employed", &industries, &values).show_values())
        .horizontal()
        .legend(false)
}

/// Vacancy structure
pub fn vacancies_chart() -> ChartSpec {
    let (spheres, counts): (Vec<&str>, Vec<f64>) = VACANCIES.iter().cloned().unzip();

    ChartSpec::new(ChartKind::Pie, "Vacancy structure")
        .series(Series::from_values("Vacancies", &spheres, &counts))
        .donut()
        .legend(false)
}

/// Salaries ranked across municipalities, descending
pub fn municipality_salary_chart() -> ChartSpec {
    let pairs: Vec<(String, f64)> = MUNICIPALITY_SALARIES
        .iter()
        .map(|(city, salary)| (city.to_string(), *salary))
        .collect();
    let ranked = stats::rank_descending(&pairs);

    let points = ranked
        .into_iter()
        .map(|(city, salary)| crate::chart::SeriesPoint {
            category: city,
            value: salary,
        })
        .collect();

    ChartSpec::new(ChartKind::Bar, "Average monthly salary by municipality")
        .y_axis("Rubles")
        .series(Series::new("Average salary", points).show_values())
        .legend(false)
}
