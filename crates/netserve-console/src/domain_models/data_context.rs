use super::{
    mock_assets, mock_clients, mock_network_nodes, mock_tickets, monthly_ticket_volume, Asset,
    ClientEntity, NetworkNode, NodeStatus, Ticket,
};

/// Read-only data every page and the palette draw from
#[derive(Debug, Clone)]
pub struct DataContext {
    pub clients: Vec<ClientEntity>,
    pub tickets: Vec<Ticket>,
    pub nodes: Vec<NetworkNode>,
    pub assets: Vec<Asset>,
    pub ticket_volume: Vec<(&'static str, u64)>,
}

impl Default for DataContext {
    fn default() -> Self {
        Self {
            clients: mock_clients(),
            tickets: mock_tickets(),
            nodes: mock_network_nodes(),
            assets: mock_assets(),
            ticket_volume: monthly_ticket_volume(),
        }
    }
}

impl DataContext {
    pub fn open_tickets(&self) -> usize {
        self.tickets.iter().filter(|t| t.open).count()
    }

    /// Average uptime across all nodes, in percent
    pub fn average_uptime(&self) -> f64 {
        if self.nodes.is_empty() {
            return 0.0;
        }
        self.nodes.iter().map(|n| n.uptime_pct).sum::<f64>() / self.nodes.len() as f64
    }

    pub fn nodes_with_status(&self, status: NodeStatus) -> usize {
        self.nodes.iter().filter(|n| n.status == status).count()
    }

    /// Share of closed tickets, used as the SLA tile
    pub fn sla_compliance(&self) -> f64 {
        if self.tickets.is_empty() {
            return 100.0;
        }
        let closed = self.tickets.len() - self.open_tickets();
        closed as f64 * 100.0 / self.tickets.len() as f64
    }
}
