use crate::control::{flight_phase::FlightPhase, outcome::LandingReport};
use crate::simulation::{PhaseTransition, Snapshot};

pub struct Telemetry {
    pub log: Vec<String>,
    max_speed: f64,
    max_altitude: f64,
    min_fuel: f64,
    max_acceleration: f64,
    phase_times: Vec<(FlightPhase, f64)>,
    simulation_time: f64,
}

impl Default for Telemetry {
    fn default() -> Self {
        Self::new()
    }
}

impl Telemetry {
    pub fn new() -> Self {
        Telemetry {
            log: Vec::new(),
            max_speed: 0.0,
            max_altitude: 0.0,
            min_fuel: f64::MAX,
            max_acceleration: 0.0,
            phase_times: vec![(FlightPhase::Launch, 0.0)],
            simulation_time: 0.0,
        }
    }

    fn format_time(elapsed_time: f64) -> String {
        if elapsed_time >= 3600.0 {
            let hours = (elapsed_time / 3600.0).floor();
            let minutes = ((elapsed_time % 3600.0) / 60.0).floor();
            let seconds = elapsed_time % 60.0;
            format!("{:.0}h {:.0}m {:.2}s", hours, minutes, seconds)
        } else if elapsed_time >= 60.0 {
            let minutes = (elapsed_time / 60.0).floor();
            let seconds = elapsed_time % 60.0;
            format!("{:.0}m {:.2}s", minutes, seconds)
        } else {
            format!("{:.2}s", elapsed_time)
        }
    }

    fn format_altitude(altitude: f64) -> String {
        if altitude >= 1000.0 {
            format!("{:.2} km", altitude / 1000.0)
        } else {
            format!("{:.2} m", altitude)
        }
    }

    /// One status line per tick.
    pub fn format_status_line(snapshot: &Snapshot) -> String {
        format!(
            "Phase: {}, Time: {:.2}s, Altitude: {:.2}m, Velocity: {:.2}m/s, Fuel: {:.2}kg, X: {:.2}m, Y: {:.2}m",
            snapshot.phase,
            snapshot.elapsed_time,
            snapshot.altitude,
            snapshot.vertical_velocity,
            snapshot.fuel_mass,
            snapshot.lateral.x,
            snapshot.lateral.y
        )
    }

    pub fn describe_transition(transition: &PhaseTransition) -> Option<&'static str> {
        match (transition.from, transition.to) {
            (FlightPhase::Launch, FlightPhase::Boostback) => Some("Separating second stage..."),
            (FlightPhase::Boostback, FlightPhase::Landing) => Some("Reorienting for landing..."),
            (_, FlightPhase::Terminated) => Some("Landing complete."),
            _ => None,
        }
    }

    pub fn collect_data(&mut self, snapshot: &Snapshot) {
        self.simulation_time = snapshot.elapsed_time;

        let speed = snapshot.vertical_velocity.abs();
        if speed > self.max_speed {
            self.max_speed = speed;
        }
        if snapshot.altitude > self.max_altitude {
            self.max_altitude = snapshot.altitude;
        }
        if snapshot.fuel_mass < self.min_fuel {
            self.min_fuel = snapshot.fuel_mass;
        }
        let acceleration = snapshot.vertical_acceleration.abs();
        if acceleration > self.max_acceleration {
            self.max_acceleration = acceleration;
        }

        if let Some(transition) = &snapshot.transition {
            if let Some(message) = Self::describe_transition(transition) {
                self.log.push(message.to_string());
            }
            self.phase_times.push((transition.to, snapshot.elapsed_time));
        }
        self.log.push(Self::format_status_line(snapshot));
    }

    pub fn max_altitude(&self) -> f64 {
        self.max_altitude
    }

    pub fn max_speed(&self) -> f64 {
        self.max_speed
    }

    pub fn min_fuel(&self) -> f64 {
        self.min_fuel
    }

    pub fn phase_times(&self) -> &[(FlightPhase, f64)] {
        &self.phase_times
    }

    pub fn summary(&self, report: Option<&LandingReport>) -> String {
        let mut lines = vec![
            "--- Simulation Summary ---".to_string(),
            format!("Flight Time: {}", Self::format_time(self.simulation_time)),
            format!("Max Speed: {:.2} m/s", self.max_speed),
            format!("Max Altitude: {}", Self::format_altitude(self.max_altitude)),
            format!("Min Fuel: {:.2} kg", self.min_fuel),
            format!("Max Acceleration: {:.2} m/s²", self.max_acceleration),
            String::new(),
            "--- Phase Transitions ---".to_string(),
        ];
        for (phase, time) in &self.phase_times {
            lines.push(format!("Phase {} entered at: {}", phase, Self::format_time(*time)));
        }
        if let Some(report) = report {
            lines.push(String::new());
            lines.push(report.to_string());
        }
        lines.join("\n")
    }

    pub fn display_data(&self, report: Option<&LandingReport>) {
        println!("--- Telemetry Data ---");
        for entry in &self.log {
            println!("{}", entry);
        }
        println!("--- End of Telemetry ---\n");
        println!("{}", self.summary(report));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::outcome::LandingOutcome;
    use crate::utils::vector2d::Vector2D;

    fn snapshot(tick: u64, altitude: f64, velocity: f64, fuel: f64) -> Snapshot {
        Snapshot {
            tick,
            elapsed_time: tick as f64 * 0.1,
            phase: FlightPhase::Launch,
            altitude,
            vertical_velocity: velocity,
            vertical_acceleration: 12.0,
            fuel_mass: fuel,
            mass: 120_000.0 + fuel,
            active_engines: 33,
            second_stage_attached: true,
            lateral: Vector2D::new(-999.5, -999.5),
            transition: None,
        }
    }

    #[test]
    fn test_status_line_format() {
        let line = Telemetry::format_status_line(&snapshot(12, 1_234.567, 250.0, 290_100.0));
        assert_eq!(
            line,
            "Phase: launch, Time: 1.20s, Altitude: 1234.57m, Velocity: 250.00m/s, Fuel: 290100.00kg, X: -999.50m, Y: -999.50m"
        );
    }

    #[test]
    fn test_format_time() {
        assert_eq!(Telemetry::format_time(12.5), "12.50s");
        assert_eq!(Telemetry::format_time(125.0), "2m 5.00s");
        assert_eq!(Telemetry::format_time(3_725.0), "1h 2m 5.00s");
    }

    #[test]
    fn test_extremes_tracked() {
        let mut telemetry = Telemetry::new();
        telemetry.collect_data(&snapshot(1, 100.0, 50.0, 1_000.0));
        telemetry.collect_data(&snapshot(2, 300.0, -80.0, 500.0));
        telemetry.collect_data(&snapshot(3, 200.0, 10.0, 500.0));

        assert_eq!(telemetry.max_altitude(), 300.0);
        assert_eq!(telemetry.max_speed(), 80.0);
        assert_eq!(telemetry.min_fuel(), 500.0);
        assert_eq!(telemetry.log.len(), 3);
    }

    #[test]
    fn test_transitions_logged() {
        let mut telemetry = Telemetry::new();
        let mut separation = snapshot(313, 80_100.0, 5_900.0, 41_000.0);
        separation.phase = FlightPhase::Boostback;
        separation.transition = Some(PhaseTransition {
            from: FlightPhase::Launch,
            to: FlightPhase::Boostback,
        });

        telemetry.collect_data(&separation);

        assert_eq!(telemetry.log[0], "Separating second stage...");
        assert!(telemetry.log[1].starts_with("Phase: boostback"));
        assert_eq!(telemetry.phase_times().len(), 2);
        assert_eq!(telemetry.phase_times()[1].0, FlightPhase::Boostback);
    }

    #[test]
    fn test_summary_includes_verdict() {
        let mut telemetry = Telemetry::new();
        telemetry.collect_data(&snapshot(1, 100.0, 50.0, 1_000.0));
        let report = LandingReport {
            outcome: LandingOutcome::Miss,
            distance: 0.91,
        };

        let summary = telemetry.summary(Some(&report));

        assert!(summary.contains("Max Altitude: 100.00 m"));
        assert!(summary.contains("Phase launch entered at: 0.00s"));
        assert!(summary.ends_with("Missed the tower. Distance to beacon: 0.91m"));
    }
}
