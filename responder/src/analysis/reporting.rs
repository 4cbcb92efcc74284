use std::fmt::Write;

use crate::core::assessment::ResponseReport;
use crate::core::route_scorer::RoutePlan;
use crate::utils::errors::Result;
use crate::utils::logging::{self, OperationCategory};

const RULE_WIDE: usize = 70;
const RULE_NARROW: usize = 50;

pub fn render_sensor_summary(report: &ResponseReport) -> String {
    let s = &report.sensors;
    let mut out = String::new();
    let _ = writeln!(out, "\nSensor Readings:");
    let _ = writeln!(out, "----------------------------------------");
    let _ = writeln!(out, "  Atmospheric Pressure: {:.2} mbar", s.pressure);
    let _ = writeln!(out, "  Temperature: {:.2}°C", s.temperature);
    let _ = writeln!(out, "  Relative Humidity: {:.2}%", s.humidity);
    let _ = writeln!(out, "  Wind Velocity: {:.2} m/s ({:.2} km/h)", s.wind_speed, s.wind_speed_kmh());
    let _ = writeln!(out, "  Max Wind Velocity: {:.2} m/s", s.max_wind_speed());
    let _ = writeln!(out, "  Wind Direction: {:.2}°", s.wind_direction);
    let _ = writeln!(out, "  Dew Point Temperature: {:.2}°C", s.dew_point);
    out
}

fn render_route(out: &mut String, report: &ResponseReport, plan: &RoutePlan) {
    let _ = writeln!(out, "\nEvacuation Instructions:");
    let _ = writeln!(out, "{}", "-".repeat(RULE_NARROW));
    if plan.is_degraded() {
        let _ = writeln!(out, "EVACUATION ROUTE (DEGRADED FALLBACK)");
        let _ = writeln!(out, "Distance: {} meters", plan.distance_meters());
        let _ = writeln!(out, "Path: YOUR_LOCATION -> {}", plan.destination());
    } else {
        let _ = writeln!(out, "OPTIMIZED EVACUATION ROUTE");
        let _ = writeln!(out, "Distance: {} meters", plan.distance_meters());
        let _ = writeln!(out, "Destination: {}", plan.destination());
        if let RoutePlan::Optimal(route) = plan {
            let _ = writeln!(out, "Destination Coordinates: {}", route.zone.position);
        }
    }
    let _ = writeln!(out, "{}: {}", report.category.as_str().to_uppercase(), plan.guidance());
}

/// Plain-text status board for a report.
pub fn render_text(report: &ResponseReport) -> String {
    let _timing = logging::start_timing("render_text", OperationCategory::Reporting);

    let mut out = render_sensor_summary(report);
    let _ = writeln!(out, "\n{}", "=".repeat(RULE_WIDE));
    let _ = writeln!(out, "DISASTER RESPONSE SYSTEM - STATUS");
    let _ = writeln!(out, "{}", "=".repeat(RULE_WIDE));
    if let Some(ts) = report.recorded_at {
        let _ = writeln!(out, "Record Time:            {}", ts.format("%Y-%m-%d %H:%M:%S"));
    }
    let _ = writeln!(out, "Current Position:       {}", report.current_position);
    let _ = writeln!(out, "Disaster Epicenter:     {}", report.epicenter);
    let _ = writeln!(out, "Disaster Type:          {}", report.category.as_str().to_uppercase());
    let _ = writeln!(out, "Risk Assessment:        {:.1}%", report.risk_percentage);
    let _ = writeln!(out);

    match &report.route {
        Some(plan) => {
            let _ = writeln!(out, "Evacuate To:            {}", plan.destination());
        }
        None => {
            let _ = writeln!(out, "Evacuate To:            not required");
        }
    }
    if let Some(meters) = report.distance_to_safety_meters {
        let _ = writeln!(out, "Distance To Safety:     {} meters", meters);
    }
    let _ = writeln!(out, "Distance To Disaster:   {} meters", report.distance_to_epicenter_meters);
    let _ = writeln!(out);
    let _ = writeln!(out, "Safety Recommendation:  {}", report.safety_status.recommendation());

    match &report.route {
        Some(plan) => render_route(&mut out, report, plan),
        None => {
            let _ = writeln!(out, "\nNo evacuation needed. System in monitoring mode.");
        }
    }

    let _ = writeln!(out, "{}", "=".repeat(RULE_WIDE));
    out
}

pub fn render_json(report: &ResponseReport) -> Result<String> {
    let _timing = logging::start_timing("render_json", OperationCategory::Reporting);
    Ok(serde_json::to_string_pretty(report)?)
}

pub fn print_report(report: &ResponseReport) {
    print!("{}", render_text(report));
}
