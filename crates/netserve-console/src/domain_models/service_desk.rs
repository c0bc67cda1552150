//! Service desk records: tickets, network nodes, assets and the monthly
//! volume series shown on the analytics page.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketPriority {
    Critical,
    High,
    Medium,
    Low,
}

impl TicketPriority {
    pub fn label(self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub code: String,
    pub subject: String,
    pub client: String,
    pub priority: TicketPriority,
    pub open: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeStatus {
    Online,
    Degraded,
    Offline,
}

impl NodeStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Online => "Online",
            Self::Degraded => "Degraded",
            Self::Offline => "Offline",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NetworkNode {
    pub hostname: String,
    pub site: String,
    pub status: NodeStatus,
    pub latency_ms: u32,
    pub uptime_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    pub tag: String,
    pub kind: String,
    pub model: String,
    pub assigned_to: String,
}

fn ticket(code: &str, subject: &str, client: &str, priority: TicketPriority, open: bool) -> Ticket {
    Ticket {
        code: code.to_string(),
        subject: subject.to_string(),
        client: client.to_string(),
        priority,
        open,
    }
}

fn node(hostname: &str, site: &str, status: NodeStatus, latency_ms: u32, uptime_pct: f64) -> NetworkNode {
    NetworkNode {
        hostname: hostname.to_string(),
        site: site.to_string(),
        status,
        latency_ms,
        uptime_pct,
    }
}

fn asset(tag: &str, kind: &str, model: &str, assigned_to: &str) -> Asset {
    Asset {
        tag: tag.to_string(),
        kind: kind.to_string(),
        model: model.to_string(),
        assigned_to: assigned_to.to_string(),
    }
}

pub fn mock_tickets() -> Vec<Ticket> {
    use TicketPriority::*;
    vec![
        ticket("INC-1042", "VPN tunnel flapping", "Banco Austral", Critical, true),
        ticket("INC-1041", "Printer queue stuck", "Colegio Santa María", Low, true),
        ticket("REQ-0388", "New laptop onboarding", "Grupo Solaris", Medium, true),
        ticket("INC-1039", "Email relay rejected", "Acme Logistics", High, true),
        ticket("INC-1035", "Core switch fan alarm", "Andes Mining Corp", High, false),
        ticket("REQ-0381", "Firewall rule change", "Clínica San Rafael", Medium, true),
        ticket("INC-1030", "Wi-Fi dead zone in lab", "Clínica San Rafael", Low, false),
    ]
}

pub fn mock_network_nodes() -> Vec<NetworkNode> {
    use NodeStatus::*;
    vec![
        node("core-sw-01", "Santiago DC", Online, 2, 99.99),
        node("core-sw-02", "Santiago DC", Online, 3, 99.97),
        node("edge-fw-01", "Santiago DC", Degraded, 41, 99.40),
        node("vpn-gw-antof", "Antofagasta", Online, 18, 99.85),
        node("wan-rtr-valpo", "Valparaíso", Offline, 0, 97.10),
        node("ap-cluster-maule", "Talca", Online, 12, 99.62),
    ]
}

pub fn mock_assets() -> Vec<Asset> {
    vec![
        asset("AS-2201", "Laptop", "ThinkPad T14 Gen 4", "Grupo Solaris"),
        asset("AS-2202", "Laptop", "Latitude 5440", "Acme Logistics"),
        asset("AS-1180", "Switch", "Catalyst 9300", "Santiago DC"),
        asset("AS-1181", "Firewall", "FortiGate 200F", "Santiago DC"),
        asset("AS-3307", "Printer", "LaserJet M507", "Colegio Santa María"),
        asset("AS-4410", "Server", "PowerEdge R650", "Banco Austral"),
    ]
}

/// Tickets opened per month over the last half year
pub fn monthly_ticket_volume() -> Vec<(&'static str, u64)> {
    vec![
        ("May", 142),
        ("Jun", 158),
        ("Jul", 131),
        ("Aug", 176),
        ("Sep", 163),
        ("Oct", 149),
    ]
}
