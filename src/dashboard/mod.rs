//! # Dashboard Module
//!
//! A small figure model for multi-panel plotly dashboards. Panels sit on a
//! fixed grid, each with a title and any number of traces. The figure is
//! serialized to plotly's JSON schema and rendered into a standalone HTML page
//! by [`html`].

/// Standalone HTML rendering
pub mod html;
/// Subplot grid geometry
pub mod layout;

use eyre::{bail, Result};
use layout::{Cell, Grid};
use serde_json::{json, Map, Value};

/// Plotly `mode` of every scatter series
const SCATTER_MODE: &str = "lines+markers";

/// One data series
#[derive(Debug, Clone, PartialEq)]
pub enum Trace {
    /// Numeric x/y series
    Scatter {
        /// Series name
        name: String,
        /// X values
        x: Vec<f64>,
        /// Y values
        y: Vec<f64>,
    },
    /// Categorical bars
    Bar {
        /// Bar categories
        x: Vec<String>,
        /// Bar heights
        y: Vec<f64>,
    },
}

impl Trace {
    /// A `lines+markers` scatter series
    #[must_use]
    pub fn scatter(name: &str, x: Vec<f64>, y: Vec<f64>) -> Self {
        Self::Scatter {
            name: name.to_string(),
            x,
            y,
        }
    }

    /// An unnamed bar series
    #[must_use]
    pub fn bar(categories: &[&str], y: Vec<f64>) -> Self {
        Self::Bar {
            x: categories.iter().map(ToString::to_string).collect(),
            y,
        }
    }

    /// Plotly trace object bound to the axes of `cell`.
    ///
    /// Non-finite values serialize as `null`, which plotly draws as gaps.
    fn to_plotly(&self, cell: &Cell) -> Value {
        let mut trace = match self {
            Self::Scatter { name, x, y } => json!({
                "type": "scatter",
                "name": name,
                "x": x,
                "y": y,
                "mode": SCATTER_MODE,
            }),
            Self::Bar { x, y } => json!({ "type": "bar", "x": x, "y": y }),
        };
        trace["xaxis"] = json!(cell.x_ref());
        trace["yaxis"] = json!(cell.y_ref());
        trace
    }
}

/// A titled grid cell and what is plotted in it
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    /// 1-based row
    pub row: usize,
    /// 1-based column
    pub col: usize,
    /// Title drawn above the cell
    pub title: String,
    /// Series plotted in the cell
    pub traces: Vec<Trace>,
}

impl Panel {
    /// Adds a series to the panel
    pub fn push(&mut self, trace: Trace) -> &mut Self {
        self.traces.push(trace);
        self
    }
}

/// A multi-panel figure
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    /// Figure title
    pub title: String,
    /// Panel grid
    pub grid: Grid,
    /// Whether plotly shows a legend
    pub show_legend: bool,
    /// Panels in insertion order
    pub panels: Vec<Panel>,
}

impl Dashboard {
    /// Creates an empty dashboard on a `rows` x `cols` grid
    #[must_use]
    pub fn new(title: &str, rows: usize, cols: usize) -> Self {
        Self {
            title: title.to_string(),
            grid: Grid::new(rows, cols),
            show_legend: true,
            panels: Vec::new(),
        }
    }

    /// Turns the legend on or off
    #[must_use]
    pub const fn with_legend(mut self, show_legend: bool) -> Self {
        self.show_legend = show_legend;
        self
    }

    /// Adds a titled panel at `(row, col)`.
    ///
    /// # Errors
    /// * If the cell is outside the grid
    /// * If the cell already holds a panel
    pub fn add_panel(&mut self, row: usize, col: usize, title: &str) -> Result<&mut Panel> {
        if !self.grid.contains(row, col) {
            bail!(
                "panel ({row}, {col}) is outside the {}x{} grid",
                self.grid.rows,
                self.grid.cols
            );
        }
        if self.panel(row, col).is_some() {
            bail!("panel ({row}, {col}) is already taken");
        }

        self.panels.push(Panel {
            row,
            col,
            title: title.to_string(),
            traces: Vec::new(),
        });
        let last = self.panels.len() - 1;
        Ok(&mut self.panels[last])
    }

    /// The panel at `(row, col)`, if one was added
    #[must_use]
    pub fn panel(&self, row: usize, col: usize) -> Option<&Panel> {
        self.panels.iter().find(|p| p.row == row && p.col == col)
    }

    /// Serializes the dashboard as a plotly figure: `{"data": [...], "layout": {...}}`.
    ///
    /// Every grid cell gets an axis pair, whether or not a panel was added.
    #[must_use]
    pub fn figure(&self) -> Value {
        let mut data = Vec::new();
        let mut annotations = Vec::new();

        for panel in &self.panels {
            // add_panel only accepts cells inside the grid
            let Some(cell) = self.grid.cell(panel.row, panel.col) else {
                continue;
            };
            data.extend(panel.traces.iter().map(|trace| trace.to_plotly(&cell)));
            annotations.push(json!({
                "text": panel.title,
                "x": cell.x.center(),
                "y": cell.y.end,
                "xref": "paper",
                "yref": "paper",
                "xanchor": "center",
                "yanchor": "bottom",
                "showarrow": false,
                "font": { "size": 16 },
            }));
        }

        let mut layout = Map::new();
        layout.insert("title".to_string(), json!({ "text": self.title }));
        layout.insert("showlegend".to_string(), json!(self.show_legend));
        for cell in self.grid.cells() {
            layout.insert(
                cell.x_axis_key(),
                json!({ "domain": cell.x.as_array(), "anchor": cell.y_ref() }),
            );
            layout.insert(
                cell.y_axis_key(),
                json!({ "domain": cell.y.as_array(), "anchor": cell.x_ref() }),
            );
        }
        layout.insert("annotations".to_string(), Value::Array(annotations));

        json!({ "data": data, "layout": layout })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample() -> Dashboard {
        let mut dashboard = Dashboard::new("Sample", 1, 2).with_legend(false);
        dashboard
            .add_panel(1, 1, "Left")
            .unwrap()
            .push(Trace::scatter(
                "line",
                vec![1.0, 2.0, 3.0, 4.0],
                vec![3.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY],
            ));
        dashboard
            .add_panel(1, 2, "Right")
            .unwrap()
            .push(Trace::bar(&["a", "b"], vec![1.0, 2.0]));
        dashboard
    }

    #[test]
    fn test_figure_traces() {
        let figure = sample().figure();
        let data = figure["data"].as_array().unwrap();
        assert_eq!(data.len(), 2);

        assert_eq!(data[0]["type"], "scatter");
        assert_eq!(data[0]["mode"], "lines+markers");
        assert_eq!(data[0]["name"], "line");
        assert_eq!(data[0]["xaxis"], "x");
        assert_eq!(data[0]["y"], json!([3.0, null, null, null]));

        assert_eq!(data[1]["type"], "bar");
        assert_eq!(data[1]["x"], json!(["a", "b"]));
        assert_eq!(data[1]["xaxis"], "x2");
        assert_eq!(data[1]["yaxis"], "y2");
        assert!(data[1].get("name").is_none());
    }

    #[test]
    fn test_figure_layout() {
        let figure = sample().figure();
        let layout = &figure["layout"];

        assert_eq!(layout["title"]["text"], "Sample");
        assert_eq!(layout["showlegend"], false);
        assert_eq!(layout["xaxis2"]["anchor"], "y2");
        assert_eq!(layout["yaxis"]["domain"], json!([0.0, 1.0]));

        let titles: Vec<&str> = layout["annotations"]
            .as_array()
            .unwrap()
            .iter()
            .map(|a| a["text"].as_str().unwrap())
            .collect();
        assert_eq!(titles, ["Left", "Right"]);
    }

    #[test]
    fn test_empty_cells_still_get_axes() {
        let mut dashboard = Dashboard::new("Sparse", 2, 2);
        dashboard.add_panel(2, 2, "Only").unwrap();

        let figure = dashboard.figure();
        assert!(figure["data"].as_array().unwrap().is_empty());
        assert!(figure["layout"]["xaxis3"].is_object());
        assert!(figure["layout"]["yaxis4"].is_object());
        assert_eq!(figure["layout"]["annotations"][0]["text"], "Only");
    }

    #[test]
    fn test_add_panel_rejects_bad_cells() {
        let mut dashboard = Dashboard::new("Grid", 2, 2);
        assert_eq!(
            dashboard.add_panel(3, 1, "Nope").err().unwrap().to_string(),
            "panel (3, 1) is outside the 2x2 grid"
        );

        dashboard.add_panel(1, 1, "First").unwrap();
        assert_eq!(
            dashboard.add_panel(1, 1, "Again").err().unwrap().to_string(),
            "panel (1, 1) is already taken"
        );
    }
}
