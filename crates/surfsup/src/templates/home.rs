use maud::{html, Markup};

const ROUTES: &[(&str, &str, Option<&str>)] = &[
    ("Precipitation", "/api/v1.0/precipitation", None),
    ("Stations", "/api/v1.0/stations", None),
    ("TOBS", "/api/v1.0/tobs", None),
    (
        "Temperatures for a specific start date",
        "/api/v1.0/<start>",
        Some("start date: yyyy-mm-dd"),
    ),
    (
        "Temperatures for a specific start-end range",
        "/api/v1.0/<start>/<end>",
        Some("start/end date: yyyy-mm-dd"),
    ),
];

/// Landing fragment listing the JSON routes
pub fn home_page() -> Markup {
    html! {
        h1 { "Honolulu Climate API" }
        ul {
            @for (label, path, hint) in ROUTES {
                li {
                    (label) ": " strong { (path) }
                    @if let Some(hint) = hint {
                        " (" (hint) ")"
                    }
                }
            }
        }
        p { a href="/docs" { "API Docs" } }
    }
}
