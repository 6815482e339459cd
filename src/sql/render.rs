//! Plan -> SQL text rendering.
//!
//! The one place query text is assembled. Placeholders are numbered from 1
//! in the order the owning descriptor lists its bindings.

use super::plan::Plan;

pub(super) fn render(plan: &Plan) -> String {
    match plan {
        Plan::SelectByKey { table, key } => {
            format!("SELECT * FROM {} WHERE {} = $1", table, key)
        }
        Plan::SelectAll { table } => {
            format!("SELECT * FROM {}", table)
        }
        Plan::SelectViaBridge {
            target,
            target_key,
            bridge,
            bridge_target_key,
            bridge_source_key,
        } => {
            format!(
                "SELECT {target}.* FROM {target} LEFT OUTER JOIN {bridge} \
                 ON {target}.{target_key} = {bridge}.{bridge_target_key} \
                 WHERE {bridge}.{bridge_source_key} = $1",
                target = target,
                target_key = target_key,
                bridge = bridge,
                bridge_target_key = bridge_target_key,
                bridge_source_key = bridge_source_key,
            )
        }
        Plan::Insert { table, columns } => {
            let placeholders: Vec<String> =
                (1..=columns.len()).map(|i| format!("${}", i)).collect();
            format!(
                "INSERT INTO {} ({}) VALUES ({}) RETURNING *",
                table,
                columns.join(", "),
                placeholders.join(", ")
            )
        }
        Plan::Update { table, set, key } => {
            let assignments: Vec<String> = set
                .iter()
                .enumerate()
                .map(|(i, column)| format!("{} = ${}", column, i + 1))
                .collect();
            format!(
                "UPDATE {} SET {} WHERE {} = ${} RETURNING *",
                table,
                assignments.join(", "),
                key,
                set.len() + 1
            )
        }
        Plan::Delete { table, key } => {
            format!("DELETE FROM {} WHERE {} = $1 RETURNING *", table, key)
        }
    }
}
