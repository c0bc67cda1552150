//! Domain models
//!
//! Mock records the dashboard pages display and the palette searches.

mod client;
mod data_context;
mod operator;
mod service_desk;

pub use client::{mock_clients, ClientEntity, EntityId};
pub use data_context::DataContext;
pub use operator::Operator;
pub use service_desk::{
    mock_assets, mock_network_nodes, mock_tickets, monthly_ticket_volume, Asset, NetworkNode,
    NodeStatus, Ticket, TicketPriority,
};
