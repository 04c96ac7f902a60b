//! Server-rendered planner page.

mod theme;

use std::fmt::Write;

use household_core::{constants::*, escape_xml, HouseholdFeature, HouseholdProfile};

pub use theme::GLOBAL_CSS;

pub const PAGE_TITLE: &str = "Household Asset Allocation Planner";

/// What the planner page shows.
pub struct PlannerView<'a> {
    /// Values to pre-fill the form with
    pub profile: &'a HouseholdProfile,
    /// Rendered chart, present once a plan was generated
    pub chart_svg: Option<String>,
    pub error: Option<String>,
}

fn slider(name: &str, label: &str, help: &str, min: u8, max: u8, value: u32) -> String {
    format!(
        r#"<div class="field">
  <label for="{name}">{label}: <output id="{name}-value">{value}</output></label>
  <input type="range" id="{name}" name="{name}" min="{min}" max="{max}" step="1" value="{value}" oninput="document.getElementById('{name}-value').value = this.value">
  <div class="help">{help}</div>
</div>
"#
    )
}

fn number_input(name: &str, label: &str, help: &str, min: u8, max: u8, value: u32) -> String {
    format!(
        r#"<div class="field">
  <label for="{name}">{label}</label>
  <input type="number" id="{name}" name="{name}" min="{min}" max="{max}" step="1" value="{value}">
  <div class="help">{help}</div>
</div>
"#
    )
}

fn feature_choices(profile: &HouseholdProfile) -> String {
    let mut html = String::from(
        r#"<div class="field choices">
  <label>Household features</label>
"#,
    );
    for feature in HouseholdFeature::ALL {
        let checked = if profile.has_feature(feature) {
            " checked"
        } else {
            ""
        };
        let _ = writeln!(
            html,
            r#"  <label><input type="checkbox" name="features" value="{value}"{checked}> {label}</label>"#,
            value = feature.as_str(),
            label = feature.label(),
        );
    }
    html.push_str(
        r#"  <div class="help">Select every special need that applies</div>
</div>
"#,
    );
    html
}

fn edu_priority_slider(value: u32) -> String {
    let ticks: String = (EDU_PRIORITY_MIN..=EDU_PRIORITY_MAX)
        .map(|v| format!(r#"<option value="{v}" label="{v}"></option>"#))
        .collect();
    format!(
        r#"<div class="field">
  <label for="eduPriority">Education spending priority: <output id="eduPriority-value">{value}</output></label>
  <input type="range" id="eduPriority" name="eduPriority" list="eduPriority-ticks" min="{EDU_PRIORITY_MIN}" max="{EDU_PRIORITY_MAX}" step="1" value="{value}" oninput="document.getElementById('eduPriority-value').value = this.value">
  <datalist id="eduPriority-ticks">{ticks}</datalist>
  <div class="help">1 is lowest priority, 5 is highest</div>
</div>
"#
    )
}

fn sidebar() -> String {
    format!(
        r#"<aside class="sidebar">
  <h2>Plan history</h2>
  <p class="caption">No saved plans yet</p>
  <hr>
  <button type="button" class="export" disabled data-filename="{EXPORT_FILE_NAME}">Export plan</button>
</aside>
"#
    )
}

/// Renders the full planner page.
pub fn render_planner(view: &PlannerView<'_>) -> String {
    let profile = view.profile;

    let left = [
        slider(
            "age",
            "Age",
            "Age of the household's main earner",
            AGE_MIN,
            AGE_MAX,
            profile.age,
        ),
        slider(
            "risk",
            "Risk tolerance",
            "1 is conservative, 10 is aggressive",
            RISK_MIN,
            RISK_MAX,
            profile.risk,
        ),
    ]
    .concat();
    let right = [
        number_input(
            "familyMembers",
            "Family members",
            "Everyone living in the household",
            FAMILY_MEMBERS_MIN,
            FAMILY_MEMBERS_MAX,
            profile.family_members,
        ),
        feature_choices(profile),
        edu_priority_slider(profile.edu_priority),
    ]
    .concat();

    let error = view
        .error
        .as_deref()
        .map(|e| format!(r#"<div class="error" role="alert">{}</div>"#, escape_xml(e)))
        .unwrap_or_default();
    let chart = view
        .chart_svg
        .as_deref()
        .map(|svg| format!(r#"<section class="chart">{svg}</section>"#))
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{PAGE_TITLE}</title>
<style>{GLOBAL_CSS}</style>
</head>
<body>
<div class="layout">
{sidebar}<main class="main">
<h1>{PAGE_TITLE}</h1>
{error}<form method="get" action="/">
<details class="expander" open>
<summary>Household parameters</summary>
<div class="columns">
<div>
{left}</div>
<div>
{right}</div>
</div>
</details>
<button type="submit" class="primary" name="generate" value="1">Generate plan</button>
</form>
{chart}
</main>
</div>
</body>
</html>
"#,
        sidebar = sidebar(),
    )
}
