use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One flight plan update as received from the controller client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightPlan {
    pub callsign: String,
    #[serde(default)]
    pub origin: String,
    #[serde(default)]
    pub destination: String,
    #[serde(default)]
    pub route: Option<String>,
}

impl FlightPlan {
    pub fn callsign_upper(&self) -> String {
        self.callsign.trim().to_uppercase()
    }

    pub fn origin_upper(&self) -> String {
        self.origin.trim().to_uppercase()
    }

    pub fn destination_upper(&self) -> String {
        self.destination.trim().to_uppercase()
    }

    pub fn route_text(&self) -> &str {
        self.route.as_deref().unwrap_or("")
    }

    /// Fields whose change counts as an amendment.
    pub fn signature(&self) -> String {
        format!(
            "{}|{}|{}",
            self.origin_upper(),
            self.destination_upper(),
            self.route_text()
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripKind {
    Initial,
    Amendment,
}

impl StripKind {
    pub fn title(&self) -> &'static str {
        match self {
            StripKind::Initial => "FLIGHT STRIP",
            StripKind::Amendment => "AMENDMENT",
        }
    }
}

pub fn build_strip(kind: StripKind, plan: &FlightPlan) -> String {
    format!(
        "================ {title} ================\n\
         CS: {cs}   DEP: {dep}   ARR: {arr}\n\
         ROUTE: {route}\n\
         ==============================================\n",
        title = kind.title(),
        cs = plan.callsign_upper(),
        dep = plan.origin_upper(),
        arr = plan.destination_upper(),
        route = plan.route_text(),
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    Departures,
    Arrivals,
    #[default]
    Both,
}

/// The aerodromes a controller is responsible for.
#[derive(Debug, Clone)]
pub struct ControlZone {
    airports: Vec<String>,
    mode: FilterMode,
}

impl ControlZone {
    pub fn new(airports: &[String], mode: FilterMode) -> Self {
        Self {
            airports: airports.iter().map(|a| a.trim().to_uppercase()).collect(),
            mode,
        }
    }

    pub fn airports(&self) -> &[String] {
        &self.airports
    }

    pub fn mode(&self) -> FilterMode {
        self.mode
    }

    pub fn admits(&self, plan: &FlightPlan) -> bool {
        let dep_in = self.airports.contains(&plan.origin_upper());
        let arr_in = self.airports.contains(&plan.destination_upper());

        match self.mode {
            FilterMode::Departures => dep_in,
            FilterMode::Arrivals => arr_in,
            FilterMode::Both => dep_in || arr_in,
        }
    }
}

/// A strip that should go to the printer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripEvent {
    pub callsign: String,
    pub kind: StripKind,
    pub text: String,
}

/// Remembers what was last printed per callsign for one session, so a
/// repeated update prints nothing and a changed plan prints an amendment.
#[derive(Debug)]
pub struct StripTracker {
    zone: ControlZone,
    last_signature: HashMap<String, String>,
}

impl StripTracker {
    pub fn new(zone: ControlZone) -> Self {
        Self {
            zone,
            last_signature: HashMap::new(),
        }
    }

    pub fn tracked_callsigns(&self) -> usize {
        self.last_signature.len()
    }

    pub fn observe(&mut self, plan: &FlightPlan) -> Option<StripEvent> {
        let callsign = plan.callsign_upper();
        if callsign.is_empty() {
            return None;
        }
        if plan.origin_upper().is_empty() && plan.destination_upper().is_empty() {
            return None;
        }
        if !self.zone.admits(plan) {
            tracing::debug!("{} outside control zone, skipping", callsign);
            return None;
        }

        let signature = plan.signature();
        let kind = match self.last_signature.get(&callsign) {
            None => StripKind::Initial,
            Some(previous) if *previous != signature => StripKind::Amendment,
            Some(_) => return None,
        };

        self.last_signature.insert(callsign.clone(), signature);
        Some(StripEvent {
            text: build_strip(kind, plan),
            callsign,
            kind,
        })
    }
}
