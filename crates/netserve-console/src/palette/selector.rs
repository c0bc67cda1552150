//! Query filtering and merging
//!
//! Matching is a case-insensitive substring test against the candidate label
//! (or the entity name). The merged list is always pages first, then
//! commands, then at most `ENTITY_MATCH_LIMIT` entities, each group in
//! source order.

use super::candidate::{Candidate, CommandEntry, EntityRecord, Icon, NavigationTarget};
use super::catalog::{command_entries, navigation_targets};
use crate::domain_models::ClientEntity;

/// Maximum number of entity rows in the merged list
pub const ENTITY_MATCH_LIMIT: usize = 3;

/// Filter the static tables and the entity collection against `query`
pub fn filter_and_merge(query: &str, entities: &[ClientEntity]) -> Vec<Candidate> {
    merge_filtered(query, &navigation_targets(), &command_entries(), entities)
}

/// Same as [`filter_and_merge`] over explicit tables
pub fn merge_filtered(
    query: &str,
    targets: &[NavigationTarget],
    commands: &[CommandEntry],
    entities: &[ClientEntity],
) -> Vec<Candidate> {
    let query_lower = query.to_lowercase();
    let matches = |text: &str| text.to_lowercase().contains(&query_lower);

    let pages = targets
        .iter()
        .filter(|target| matches(&target.label))
        .cloned()
        .map(Candidate::Navigation);

    let actions = commands
        .iter()
        .filter(|command| matches(&command.label))
        .cloned()
        .map(Candidate::Command);

    let records = entities
        .iter()
        .filter(|entity| matches(&entity.name))
        .take(ENTITY_MATCH_LIMIT)
        .map(|entity| {
            Candidate::Entity(EntityRecord {
                label: entity.name.clone(),
                icon: Icon::Client,
                entity_id: entity.id,
            })
        });

    pages.chain(actions).chain(records).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_models::{mock_clients, EntityId};

    fn labels(candidates: &[Candidate]) -> Vec<&str> {
        candidates.iter().map(|c| c.label()).collect()
    }

    #[test]
    fn test_tick_matches_only_ticket_manager() {
        let result = filter_and_merge("tick", &mock_clients());
        assert_eq!(labels(&result), vec!["Ticket Manager"]);
        assert_eq!(result[0].path(), Some("/tickets"));
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let lower = filter_and_merge("lockdown", &mock_clients());
        let upper = filter_and_merge("LOCKDOWN", &mock_clients());
        assert_eq!(labels(&lower), vec!["Emergency Lockdown"]);
        assert_eq!(lower, upper);
    }

    #[test]
    fn test_merge_order_pages_commands_entities() {
        let result = filter_and_merge("an", &mock_clients());
        assert_eq!(
            labels(&result),
            vec![
                "Ticket Manager",
                "Analytics",
                "Run Network Scan",
                "Banco Austral",
                "Clínica San Rafael",
                "Andes Mining Corp",
            ]
        );
    }

    #[test]
    fn test_entity_matches_capped_in_source_order() {
        // "an" matches four clients; only the first three survive
        let clients = mock_clients();
        let all_matches = clients
            .iter()
            .filter(|c| c.name.to_lowercase().contains("an"))
            .count();
        assert_eq!(all_matches, 4);

        let result = filter_and_merge("an", &clients);
        let entity_ids: Vec<EntityId> = result
            .iter()
            .filter_map(|c| match c {
                Candidate::Entity(record) => Some(record.entity_id),
                _ => None,
            })
            .collect();
        assert_eq!(entity_ids, vec![EntityId(2), EntityId(3), EntityId(4)]);
    }

    #[test]
    fn test_entity_count_is_min_of_limit_and_matches() {
        let clients = mock_clients();
        for query in ["", "a", "acme", "corp", "zzz", "sa", "o"] {
            let matches = clients
                .iter()
                .filter(|c| c.name.to_lowercase().contains(&query.to_lowercase()))
                .count();
            let entities = filter_and_merge(query, &clients)
                .into_iter()
                .filter(|c| matches!(c, Candidate::Entity(_)))
                .count();
            assert_eq!(entities, matches.min(ENTITY_MATCH_LIMIT), "query {query:?}");
        }
    }

    #[test]
    fn test_empty_query_lists_everything_but_caps_entities() {
        let result = filter_and_merge("", &mock_clients());
        assert_eq!(
            result.len(),
            navigation_targets().len() + command_entries().len() + ENTITY_MATCH_LIMIT
        );
    }

    #[test]
    fn test_no_matches_yields_empty_list() {
        assert!(filter_and_merge("qwerty", &mock_clients()).is_empty());
    }

    #[test]
    fn test_entities_empty_collection() {
        let result = filter_and_merge("", &[]);
        assert!(result.iter().all(|c| !matches!(c, Candidate::Entity(_))));
    }

    #[test]
    fn test_merge_filtered_with_custom_tables() {
        let targets = vec![NavigationTarget {
            label: "Dashboard".to_string(),
            icon: Icon::Overview,
            path: "/".to_string(),
        }];
        let entities = vec![ClientEntity::new(9, "Dash Networks", "Gold", "Norte")];
        let result = merge_filtered("dash", &targets, &[], &entities);
        assert_eq!(labels(&result), vec!["Dashboard", "Dash Networks"]);
    }
}
