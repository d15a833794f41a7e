//! Condition-list resolution.

use onsets_model::DesignTable;

/// Determine the condition labels to emit for every run.
///
/// An explicit non-empty list is used verbatim, in the given order — this is
/// how a design keeps a consistent schema across runs even when a condition
/// has no trials in some of them. Otherwise the table's distinct condition
/// values are used, in first-appearance order.
#[must_use]
pub fn resolve_conditions(table: &DesignTable, explicit: &[String]) -> Vec<String> {
    if !explicit.is_empty() {
        return explicit.to_vec();
    }
    table.observed_conditions()
}

#[cfg(test)]
mod tests {
    use super::*;
    use onsets_model::Trial;

    fn table_with(conditions: &[&str]) -> DesignTable {
        DesignTable {
            trials: conditions
                .iter()
                .enumerate()
                .map(|(idx, label)| Trial {
                    run: 1,
                    onset: Some(idx as f64),
                    duration: Some(0.0),
                    condition: (*label).to_string(),
                    values: Vec::new(),
                    filename: "design.csv".to_string(),
                })
                .collect(),
            modulators: Vec::new(),
        }
    }

    #[test]
    fn explicit_list_wins_verbatim() {
        let table = table_with(&["b", "a"]);
        let explicit = vec!["a".to_string(), "missing".to_string()];
        assert_eq!(resolve_conditions(&table, &explicit), explicit);
    }

    #[test]
    fn discovery_uses_first_appearance_order() {
        let table = table_with(&["zebra", "apple", "zebra", "mango"]);
        assert_eq!(
            resolve_conditions(&table, &[]),
            vec!["zebra".to_string(), "apple".to_string(), "mango".to_string()]
        );
    }
}
