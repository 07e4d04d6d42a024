//! Procedural rendering of the `## Logbook` block.

use crate::models::entry::Entry;
use crate::utils::formatting::{display_float, display_opt, euro, round0, truncate};

fn add_headline(md: &mut String, level: usize, title: &str) {
    md.push_str(&format!("\n{} {title}", "#".repeat(level)));
}

fn add_general_stats(md: &mut String, e: &Entry) {
    md.push_str(&format!("\n- **Tag**: #{}", e.text("no")));
}

fn add_distance(md: &mut String, e: &Entry) {
    let time = e.text("time");
    let Some(distance) = e.distance else {
        return;
    };
    if time.is_empty() {
        return;
    }

    md.push_str(&format!(
        "\n- **Unterwegs**: von {}-{} Uhr, Fahrzeit: {time} h",
        e.text("start"),
        e.text("end")
    ));
    md.push_str(&format!(
        "\n  - {} km (⌀ {} kph)",
        display_float(distance),
        e.average_speed.map(round0).unwrap_or_default()
    ));
    if let Some(elevation) = e.elevation {
        md.push_str(&format!(
            " ({} m up, {} m down)",
            display_float(elevation),
            display_opt(e.descent)
        ));
    }
    md.push_str(&format!("\n  - **Gesamt**: {} km", e.text("km_cumulative")));
}

fn add_place(md: &mut String, e: &Entry) {
    md.push_str(&format!(
        "\n- **Ort**: {} ({})",
        e.text("place"),
        e.text("country")
    ));
}

fn add_place_details(md: &mut String, e: &Entry) {
    md.push_str(&format!("\n- **Unterkunft**: {}", e.text("overnight")));
    let detail = e.text("placeDetail");
    if !detail.is_empty() {
        md.push_str(&format!(" ({detail})"));
    }
    if let Some(altitude) = e.altitude {
        md.push_str(&format!(" ({} hm)", display_float(altitude)));
    }
}

fn add_costs(md: &mut String, e: &Entry) {
    md.push_str(&format!("\n- **Ausgaben**: {}", euro(e.cost_p_day)));
    for (label, amount) in [
        ("Essen", e.food_cost),
        ("Schlafen", e.accommodation),
        ("Sonst.", e.other),
    ] {
        if amount > 0.0 {
            md.push_str(&format!(" ({label} {})", truncate(amount)));
        }
    }
}

fn add_section(md: &mut String, title: &str, body: &str) {
    if !body.is_empty() {
        add_headline(md, 3, title);
        md.push('\n');
        md.push_str(body);
    }
}

/// Render an entry without a template file.
pub fn render_markdown(e: &Entry) -> String {
    let mut md = String::new();
    add_headline(&mut md, 2, "Logbook");
    add_general_stats(&mut md, e);
    add_distance(&mut md, e);
    add_place(&mut md, e);
    add_place_details(&mut md, e);
    add_costs(&mut md, e);
    add_section(&mut md, "Summary", e.text("summary"));
    add_section(&mut md, "Notes", e.text("internal_notes"));

    let mut text = md.trim_start().to_string();
    text.push('\n');
    text
}
