use crate::daily_aggregator::DailySummary;
use crate::manager_forecast::{ForecastQuery, WeeklyForecast};
use crate::manager_nws::models::ForecastPeriod;
use crate::temperature::display_temperature;

const STYLE: &str = "body{font-family:sans-serif;max-width:48em;margin:2em auto;padding:0 1em}\
    form{display:flex;gap:.5em;flex-wrap:wrap;margin-bottom:1.5em}\
    .error{color:#a00}\
    .today{border:1px solid #ccc;border-radius:6px;padding:1em;margin-bottom:1.5em}\
    table{border-collapse:collapse;width:100%}\
    td,th{border-bottom:1px solid #eee;padding:.4em;text-align:left;vertical-align:top}\
    ul{margin:0;padding-left:1.2em}";

/// Escapes text for use in HTML element content and quoted attribute values
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Renders the whole page: the form, then either an error message or the forecast
///
/// # Arguments
///
/// * 'query' - form values to refill the form with
/// * 'forecast' - forecast to show, if any
/// * 'error' - message to show, if any
pub fn page(query: &ForecastQuery, forecast: Option<&WeeklyForecast>, error: Option<&str>) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<title>Weather Forecast</title>\n");
    html.push_str(&format!("<style>{}</style>\n", STYLE));
    html.push_str("</head>\n<body>\n<h1>Weather Forecast</h1>\n");

    form(&mut html, query);

    if let Some(e) = error {
        html.push_str(&format!("<p class=\"error\">{}</p>\n", escape_html(e)));
    }

    if let Some(f) = forecast {
        weekly(&mut html, f);
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn form(html: &mut String, query: &ForecastQuery) {
    let value = |v: &Option<String>| escape_html(v.as_deref().unwrap_or(""));

    html.push_str("<form method=\"post\" action=\"/\">\n");
    html.push_str(&format!("<input type=\"text\" name=\"city\" placeholder=\"City\" value=\"{}\">\n", value(&query.city)));
    html.push_str("<span>or</span>\n");
    html.push_str(&format!("<input type=\"text\" name=\"lat\" placeholder=\"Latitude\" value=\"{}\">\n", value(&query.lat)));
    html.push_str(&format!("<input type=\"text\" name=\"lon\" placeholder=\"Longitude\" value=\"{}\">\n", value(&query.lon)));
    html.push_str("<button type=\"submit\">Get forecast</button>\n</form>\n");
}

fn weekly(html: &mut String, forecast: &WeeklyForecast) {
    html.push_str(&format!("<h2>{}</h2>\n", escape_html(&forecast.place)));

    if let Some(p) = &forecast.today {
        today(html, p);
    }

    if forecast.days.is_empty() {
        html.push_str("<p>No forecast available.</p>\n");
        return;
    }

    html.push_str("<table>\n<tr><th>Day</th><th>High</th><th>Low</th><th>Periods</th></tr>\n");
    for day in &forecast.days {
        day_row(html, day);
    }
    html.push_str("</table>\n");
}

fn today(html: &mut String, period: &ForecastPeriod) {
    let unit = period.temperature_unit.as_deref();

    html.push_str("<div class=\"today\">\n");
    html.push_str(&format!("<h3>{}</h3>\n", escape_html(period.name.as_deref().unwrap_or("Now"))));
    if let Some(icon) = &period.icon {
        html.push_str(&format!("<img src=\"{}\" alt=\"\">\n", escape_html(icon)));
    }
    html.push_str(&format!("<p><strong>{}</strong></p>\n", escape_html(&display_temperature(period.temperature, unit))));
    if let Some(short) = &period.short_forecast {
        html.push_str(&format!("<p>{}</p>\n", escape_html(short)));
    }
    if let (Some(speed), Some(direction)) = (&period.wind_speed, &period.wind_direction) {
        html.push_str(&format!("<p>Wind: {} {}</p>\n", escape_html(speed), escape_html(direction)));
    }
    if let Some(detailed) = &period.detailed_forecast {
        html.push_str(&format!("<p>{}</p>\n", escape_html(detailed)));
    }
    html.push_str("</div>\n");
}

fn day_row(html: &mut String, day: &DailySummary) {
    let unit = day.periods.first().and_then(|p| p.temperature_unit.as_deref());

    html.push_str(&format!("<tr><td>{}<br><small>{}</small></td><td>{}</td><td>{}</td><td><ul>\n",
        escape_html(&day.day_name),
        day.date.format("%Y-%m-%d"),
        escape_html(&display_temperature(day.high_temp, unit)),
        escape_html(&display_temperature(day.low_temp, unit)),
    ));
    for p in &day.periods {
        html.push_str(&format!("<li>{}: {} {}</li>\n",
            escape_html(p.name.as_deref().unwrap_or("")),
            escape_html(&display_temperature(p.temperature, p.temperature_unit.as_deref())),
            escape_html(p.short_forecast.as_deref().unwrap_or("")),
        ));
    }
    html.push_str("</ul></td></tr>\n");
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use super::*;

    fn period(name: &str, temperature: Option<i32>) -> ForecastPeriod {
        ForecastPeriod {
            start_time: Some("2024-05-01T06:00:00-04:00".to_string()),
            is_daytime: Some(true),
            temperature,
            name: Some(name.to_string()),
            temperature_unit: Some("F".to_string()),
            wind_speed: Some("5 mph".to_string()),
            wind_direction: Some("NW".to_string()),
            short_forecast: Some("Sunny".to_string()),
            detailed_forecast: None,
            icon: None,
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<b>\"Tom\" & 'Jerry'</b>"), "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;");
        assert_eq!(escape_html("Seattle"), "Seattle");
    }

    #[test]
    fn test_page_form_only() {
        let html = page(&ForecastQuery::default(), None, None);

        assert!(html.contains("<form method=\"post\""));
        assert!(html.contains("name=\"city\""));
        assert!(!html.contains("class=\"error\""));
        assert!(!html.contains("<table>"));
    }

    #[test]
    fn test_page_error_escaped() {
        let query = ForecastQuery { city: Some("<script>".to_string()), lat: None, lon: None };
        let html = page(&query, None, Some("Could not find a location named '<script>'"));

        assert!(html.contains("value=\"&lt;script&gt;\""));
        assert!(html.contains("<p class=\"error\">Could not find a location named &#39;&lt;script&gt;&#39;</p>"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_page_forecast() {
        let day = DailySummary {
            date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            day_name: "Wednesday".to_string(),
            periods: vec![period("Today", Some(85))],
            high_temp: Some(85),
            low_temp: None,
        };
        let forecast = WeeklyForecast {
            place: "Washington, DC".to_string(),
            today: Some(period("Today", Some(85))),
            days: vec![day],
        };

        let html = page(&ForecastQuery::default(), Some(&forecast), None);

        assert!(html.contains("<h2>Washington, DC</h2>"));
        assert!(html.contains("Wednesday<br><small>2024-05-01</small>"));
        assert!(html.contains("<td>85°F / 29°C</td><td>N/A</td>"));
        assert!(html.contains("Wind: 5 mph NW"));
    }

    #[test]
    fn test_page_no_days() {
        let forecast = WeeklyForecast { place: "Nowhere".to_string(), today: None, days: vec![] };

        let html = page(&ForecastQuery::default(), Some(&forecast), None);

        assert!(html.contains("No forecast available."));
    }
}
