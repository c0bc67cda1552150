use std::fmt;

/// Identifier of a record in the client collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u32);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CL-{:04}", self.0)
    }
}

/// A client company under a service contract
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientEntity {
    pub id: EntityId,
    pub name: String,
    /// Contract tier (Gold, Silver, Bronze)
    pub tier: String,
    pub region: String,
}

impl ClientEntity {
    pub fn new(id: u32, name: &str, tier: &str, region: &str) -> Self {
        Self {
            id: EntityId(id),
            name: name.to_string(),
            tier: tier.to_string(),
            region: region.to_string(),
        }
    }
}

/// Client collection shipped with the console
pub fn mock_clients() -> Vec<ClientEntity> {
    vec![
        ClientEntity::new(1, "Acme Logistics", "Gold", "Metropolitana"),
        ClientEntity::new(2, "Banco Austral", "Gold", "Metropolitana"),
        ClientEntity::new(3, "Clínica San Rafael", "Silver", "Valparaíso"),
        ClientEntity::new(4, "Andes Mining Corp", "Gold", "Antofagasta"),
        ClientEntity::new(5, "Puerto Nuevo Shipping", "Bronze", "Biobío"),
        ClientEntity::new(6, "Grupo Solaris", "Silver", "Metropolitana"),
        ClientEntity::new(7, "Atlas Retail", "Bronze", "Coquimbo"),
        ClientEntity::new(8, "Colegio Santa María", "Bronze", "Maule"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_id_display() {
        assert_eq!(EntityId(7).to_string(), "CL-0007");
    }

    #[test]
    fn test_mock_client_ids_are_sequential() {
        let ids: Vec<u32> = mock_clients().iter().map(|c| c.id.0).collect();
        assert_eq!(ids, (1..=8).collect::<Vec<_>>());
    }
}
