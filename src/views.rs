// ABOUTME: View routing table and server-rendered HTML for the three dashboard pages
// ABOUTME: Presentation glue only; all computation lives in the predictor and insights modules
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dashboard views
//!
//! Three static views selected by exact path equality, with the home
//! (predictor) view as the fallback for anything unrecognized. Rendering is
//! plain string assembly over the shared resources; the pages carry a small
//! amount of inline script to wire form inputs to the prediction endpoint.

use crate::insights::ChartPeriod;
use crate::resources::ServerResources;

/// The three static dashboard views
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Home: the run predictor form
    Predictor,
    /// About page
    About,
    /// Health insights: charts and the correlation table
    Insights,
}

impl View {
    /// Map a navigation path to a view; unrecognized paths (including empty)
    /// fall back to the predictor
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        match path {
            "/page-2" => Self::About,
            "/page-3" => Self::Insights,
            _ => Self::Predictor,
        }
    }

    /// Title shown in the page header
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Predictor => "Run Predictor",
            Self::About => "About Me",
            Self::Insights => "Health Insights",
        }
    }
}

/// Render a complete page for the given view
#[must_use]
pub fn render(view: View, resources: &ServerResources) -> String {
    let body = match view {
        View::Predictor => render_predictor(resources),
        View::About => render_about(resources),
        View::Insights => render_insights(resources),
    };
    layout(view, &body)
}

/// Shared page chrome: title bar, menu, footer
fn layout(view: View, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Run With It! - {title}</title>
<style>
body {{ width: 85%; max-width: 1200px; margin: 0 auto; font-family: sans-serif; font-size: 16px; padding: 20px 40px 50px; }}
.menu a {{ margin-right: 24px; }}
.predictor-form {{ background-color: lightgray; padding: 20px; float: left; width: 46%; }}
.prediction-panel {{ background-color: #f4f7cd; padding: 20px; float: right; width: 42%; text-align: center; }}
.insight-table th, .insight-table td {{ padding: 5px 10px; font-size: 18px; }}
.footer {{ clear: both; text-align: center; padding-top: 50px; font-style: italic; }}
iframe {{ border: none; width: 100%; height: 500px; }}
</style>
</head>
<body>
<div class="header">
<h1>Run With It!</h1>
<h5>Insight Data Science Consulting Project</h5>
<h6>by David Alfego</h6>
</div>
<div class="menu">
<h5>Menu</h5>
<a href="/">Run Predictor</a>
<a href="/page-3">Health Insights</a>
<a href="/page-2">About Me</a>
<hr>
</div>
{body}
<div class="footer">
<hr>
<h6>David Alfego</h6>
</div>
</body>
</html>"#,
        title = view.title(),
        body = body,
    )
}

/// Inline image tag, or an empty string when the asset is unavailable
fn inline_image(data_uri: Option<&String>, alt: &str) -> String {
    data_uri.map_or_else(String::new, |uri| {
        format!(r#"<img src="{uri}" alt="{alt}">"#)
    })
}

/// Home page: metric form plus prediction panel
fn render_predictor(resources: &ServerResources) -> String {
    let animation = inline_image(resources.assets.animation.as_ref(), "running");

    let pace_min_options: String = (4..=14)
        .map(|m| format!(r#"<option value="{m}">{m}</option>"#))
        .collect();
    let pace_sec_options: String = (0..60)
        .step_by(5)
        .map(|s| format!(r#"<option value="{s}">{s:02}</option>"#))
        .collect();

    format!(
        r#"{animation}
<h6>How long should you run today? Fill in your metrics:</h6>
<div class="predictor-form">
<label>What is your step goal today?</label><br>
<input id="steps" value="10000"><br>
<label>What is your projected average heart rate? (bpm)</label><br>
<input id="heart_rate" value="75"><br>
<label>What is your weight? (lbs.)</label><br>
<input id="weight" value="155"><br>
<label>What is your body fat percentage?</label><br>
<input id="body_fat" value="20"><br>
<label>What is your sleep goal? (hours)</label><br>
<input id="sleep" value="8"><br>
<label>What is your running pace per mile?</label><br>
<select id="pace_min">{pace_min_options}</select>
<select id="pace_sec">{pace_sec_options}</select>
</div>
<div class="prediction-panel">
<h3>Your predicted running time:</h3>
<div id="prediction"></div>
</div>
<script>
const fields = ["steps", "heart_rate", "weight", "body_fat", "sleep", "pace_min", "pace_sec"];
async function recompute() {{
  const body = {{}};
  for (const f of fields) body[f] = document.getElementById(f).value;
  const res = await fetch("/api/predict", {{
    method: "POST",
    headers: {{"Content-Type": "application/json"}},
    body: JSON.stringify(body)
  }});
  const out = document.getElementById("prediction");
  const data = await res.json();
  if (res.ok) {{
    out.innerHTML = "<h4>" + data.duration + "</h4><h4>" + data.distance + "</h4>";
  }} else {{
    out.innerHTML = "<h4>" + data.error.message + "</h4>";
  }}
}}
for (const f of fields) document.getElementById(f).addEventListener("change", recompute);
recompute();
</script>"#
    )
}

/// About page: headshot, bio, presentation embed
fn render_about(resources: &ServerResources) -> String {
    let headshot = inline_image(resources.assets.headshot.as_ref(), "headshot");

    format!(
        r#"<h1>About Me</h1>
<hr>
{headshot}
<p>David Alfego is currently a Health Data Science Fellow with Insight Data
Science in Boston, MA. He has a Ph.D. in Biomedical Science from Drexel
University, where he researched metabolic stress responses in cellular aging
through computational simulations and next-generation sequencing analysis. As
a consultant for Ongo Science, a company that aims to provide personalized
health insights from wearable tech, David (an avid runner) created a tool to
help users reach their health goals through running.</p>
<p><a href="http://www.linkedin.com/in/davidalfego" target="_blank">Connect with David on LinkedIn</a></p>
<h6>Check out his presentation!</h6>
<iframe src="https://docs.google.com/presentation/d/e/2PACX-1vRMuXmgEnj96iIR-pi8wH5Plx61UKvE9QUzsghD0MPfuuagxTG4o74rrAcFi33ocCwpmiYwuo9dMiDc/embed?start=false&loop=false&delayms=10000"></iframe>
<p><a href="https://goo.gl/rC6x6v" target="_blank">Or follow this link for fullscreen</a></p>
<p><a href="/">Return Home</a> | <a href="/page-3">Health Insights</a></p>"#
    )
}

/// Insights page: chart selector, embedded chart, insight table toggle
fn render_insights(resources: &ServerResources) -> String {
    let animation = inline_image(resources.assets.animation.as_ref(), "running");

    let chart_options: String = resources
        .charts
        .entries()
        .map(|(period, url)| {
            format!(
                r#"<option value="{url}">{label}</option>"#,
                label = period.label()
            )
        })
        .collect();
    let initial_url = resources.charts.url_for(ChartPeriod::Daily);
    let table_html = resources.insights.to_html();

    format!(
        r#"{animation}
<h6>Please select a summary type for User 1:</h6>
<select id="chart-period" onchange="document.getElementById('plot').src = this.value;">
{chart_options}
</select>
<iframe id="plot" src="{initial_url}"></iframe>
<h6>How are your overall metrics correlated? Press the button:</h6>
<button onclick="document.getElementById('insight-target').style.display = 'block';">Generate Insights!</button>
<div id="insight-target" style="display: none;">
<h4>Personalized Health Insights</h4>
{table_html}
</div>
<p><a href="/">Return Home</a> | <a href="/page-2">About Me</a></p>"#
    )
}
