use super::Dashboard;
use crate::utils::file::write_creating_parents;
use eyre::Result;
use std::path::Path;

/// plotly.js build the page loads
pub const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.27.0.min.js";

/// Id of the element the figure is drawn into
const PLOT_ELEMENT_ID: &str = "dashboard";

/// Renders the dashboard as a standalone HTML page.
///
/// The figure JSON is inlined in a `<script>` element. Any `</` in it is
/// written as `<\/` so a title or category cannot end the script early.
///
/// # Errors
/// * If the figure cannot be serialized
pub fn render(dashboard: &Dashboard) -> Result<String> {
    let figure = serde_json::to_string(&dashboard.figure())?.replace("</", "<\\/");
    let title = escape_text(&dashboard.title);

    Ok(format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8" />
<title>{title}</title>
<script src="{PLOTLY_CDN}" charset="utf-8"></script>
</head>
<body>
<div id="{PLOT_ELEMENT_ID}" style="height:100vh;width:100%;"></div>
<script type="text/javascript">
const figure = {figure};
Plotly.newPlot("{PLOT_ELEMENT_ID}", figure.data, figure.layout, {{"responsive": true}});
</script>
</body>
</html>
"#
    ))
}

/// Renders the dashboard and writes it to `path`, creating parent directories.
///
/// # Errors
/// * If rendering fails
/// * If the file or its directories cannot be written
pub fn write<P: AsRef<Path>>(dashboard: &Dashboard, path: P) -> Result<()> {
    let html = render(dashboard)?;
    write_creating_parents(path, html.as_bytes())
}

/// Escapes text placed between HTML tags
fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::dashboard::Trace;

    #[test]
    fn test_render_page() {
        let mut dashboard = Dashboard::new("Data Analysis Dashboard", 1, 1);
        dashboard
            .add_panel(1, 1, "Panel")
            .unwrap()
            .push(Trace::scatter("s", vec![1.0], vec![2.0]));

        let html = render(&dashboard).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Data Analysis Dashboard</title>"));
        assert!(html.contains(PLOTLY_CDN));
        assert!(html.contains(r#"Plotly.newPlot("dashboard", figure.data, figure.layout, {"responsive": true});"#));
        assert!(html.contains(r#""type":"scatter""#));
    }

    #[test]
    fn test_render_escapes_script_end() {
        let mut dashboard = Dashboard::new("A <b> & \"c\"", 1, 1);
        dashboard.add_panel(1, 1, "</script><script>alert(1)").unwrap();

        let html = render(&dashboard).unwrap();
        assert!(html.contains("<title>A &lt;b&gt; &amp; &quot;c&quot;</title>"));
        assert_eq!(html.matches("</script>").count(), 2);
        assert!(html.contains(r"<\/script><script>alert(1)"));
    }

    #[test]
    fn test_write_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("offchain").join("files").join("output.html");

        write(&Dashboard::new("Empty", 1, 1), &path).unwrap();

        let html = std::fs::read_to_string(&path).unwrap();
        assert!(html.contains("<title>Empty</title>"));
    }
}
