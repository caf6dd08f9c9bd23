//! Document Tree
//!
//! Typed, renderer-agnostic page structure. A [`Document`] is a tree of
//! [`Node`] variants (rows, KPI cards, chart panels, tables, text) that an
//! external presentation layer turns into pixels; the core never touches
//! markup or styling.

use crate::chart::ChartSpec;
use serde::{Deserialize, Serialize};

/// A complete page description
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Document {
    /// Page heading
    pub title: String,
    /// Lead paragraph under the heading
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Top-level content nodes in display order
    pub children: Vec<Node>,
}

impl Document {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
            children: Vec::new(),
        }
    }

    /// Builder method: set the lead paragraph
    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Builder method: append a top-level node
    pub fn child(mut self, node: Node) -> Self {
        self.children.push(node);
        self
    }

    /// All chart specs in the document, in display order
    pub fn chart_specs(&self) -> Vec<&ChartSpec> {
        fn walk<'a>(nodes: &'a [Node], out: &mut Vec<&'a ChartSpec>) {
            for node in nodes {
                match node {
                    Node::Row { children } => walk(children, out),
                    Node::ChartPanel { chart, .. } => out.push(chart),
                    _ => {}
                }
            }
        }

        let mut specs = Vec::new();
        walk(&self.children, &mut specs);
        specs
    }
}

/// One node of the document tree
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Node {
    /// Horizontal grouping of sibling nodes
    Row { children: Vec<Node> },
    /// Summary card: title, formatted headline value, change indicator
    KpiCard {
        title: String,
        value: String,
        change: ChangeIndicator,
    },
    /// Titled chart
    ChartPanel { title: String, chart: ChartSpec },
    /// Tabular data, cells pre-formatted as strings
    Table {
        title: String,
        columns: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    /// Plain text block
    Text { body: String },
}

impl Node {
    pub fn row(children: Vec<Node>) -> Self {
        Node::Row { children }
    }

    pub fn kpi(title: impl Into<String>, value: impl Into<String>, change: ChangeIndicator) -> Self {
        Node::KpiCard {
            title: title.into(),
            value: value.into(),
            change,
        }
    }

    pub fn chart_panel(title: impl Into<String>, chart: ChartSpec) -> Self {
        Node::ChartPanel {
            title: title.into(),
            chart,
        }
    }

    pub fn table(title: impl Into<String>, columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Node::Table {
            title: title.into(),
            columns,
            rows,
        }
    }

    pub fn text(body: impl Into<String>) -> Self {
        Node::Text { body: body.into() }
    }
}

/// Year-over-year movement shown on a KPI card
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChangeIndicator {
    pub direction: ChangeDirection,
    /// Pre-formatted caption, e.g. "4.2% vs previous year"
    pub text: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChangeDirection {
    Up,
    Down,
}

impl ChangeIndicator {
    /// Indicator from a signed year-over-year percent delta
    pub fn percent(delta: f64) -> Self {
        Self {
            direction: if delta > 0.0 {
                ChangeDirection::Up
            } else {
                ChangeDirection::Down
            },
            text: format!("{:.1}% vs previous year", delta.abs()),
        }
    }

    /// Indicator with a custom caption (per-mille deltas and the like)
    pub fn new(direction: ChangeDirection, text: impl Into<String>) -> Self {
        Self {
            direction,
            text: text.into(),
        }
    }
}

/// Format a value with space-grouped thousands and no decimals,
/// the card style the dashboard has always used ("1 456 200").
pub fn format_grouped(value: f64) -> String {
    let rounded = value.round() as i64;
    let negative = rounded < 0;
    let digits = rounded.abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-{grouped}")
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{ChartKind, ChartSpec, Series};

    #[test]
    fn test_format_grouped() {
        assert_eq!(format_grouped(1_456_200.0), "1 456 200");
        assert_eq!(format_grouped(54_280.4), "54 280");
        assert_eq!(format_grouped(542.0), "542");
        assert_eq!(format_grouped(0.0), "0");
        assert_eq!(format_grouped(-12_345.0), "-12 345");
    }

    #[test]
    fn test_change_indicator_percent_direction() {
        let up = ChangeIndicator::percent(4.2);
        assert_eq!(up.direction, ChangeDirection::Up);
        assert_eq!(up.text, "4.2% vs previous year");

        let down = ChangeIndicator::percent(-0.3);
        assert_eq!(down.direction, ChangeDirection::Down);
        assert_eq!(down.text, "0.3% vs previous year");
    }

    #[test]
    fn test_chart_specs_walks_nested_rows() {
        let chart = |title: &str| {
            ChartSpec::new(ChartKind::Line, title)
                .series(Series::from_values("s", &["a"], &[1.0]))
        };

        let doc = Document::new("page")
            .child(Node::row(vec![
                Node::chart_panel("first", chart("first")),
                Node::row(vec![Node::chart_panel("nested", chart("nested"))]),
            ]))
            .child(Node::chart_panel("last", chart("last")));

        let titles: Vec<&str> = doc.chart_specs().iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "nested", "last"]);
    }

    #[test]
    fn test_node_serializes_with_type_tag() {
        let node = Node::kpi("GRP", "542", ChangeIndicator::percent(4.2));
        let json = serde_json::to_string(&node).unwrap();
        assert!(json.contains("\"type\":\"kpi_card\""));
        assert!(json.contains("\"direction\":\"up\""));
    }
}
