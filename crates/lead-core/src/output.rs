//! Output shaping: canonical columns followed by passthrough columns.

use std::collections::BTreeSet;

use lead_model::{NormalizedRecord, Result, Role, RoleMap, Table};

/// Canonical output columns, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OutputColumn {
    FirstName,
    LastName,
    Email,
    Phone,
    AddressLine1,
    AddressLine2,
    City,
    State,
    ZipCode,
}

impl OutputColumn {
    pub const ALL: [OutputColumn; 9] = [
        OutputColumn::FirstName,
        OutputColumn::LastName,
        OutputColumn::Email,
        OutputColumn::Phone,
        OutputColumn::AddressLine1,
        OutputColumn::AddressLine2,
        OutputColumn::City,
        OutputColumn::State,
        OutputColumn::ZipCode,
    ];

    pub fn header(self) -> &'static str {
        match self {
            OutputColumn::FirstName => "First Name",
            OutputColumn::LastName => "Last Name",
            OutputColumn::Email => "Email",
            OutputColumn::Phone => "Phone",
            OutputColumn::AddressLine1 => "Address Line 1",
            OutputColumn::AddressLine2 => "Address Line 2",
            OutputColumn::City => "City",
            OutputColumn::State => "State",
            OutputColumn::ZipCode => "Zip Code",
        }
    }

    /// Role the column is derived from.
    pub fn role(self) -> Role {
        match self {
            OutputColumn::FirstName => Role::FirstName,
            OutputColumn::LastName => Role::LastName,
            OutputColumn::Email => Role::Email,
            OutputColumn::Phone => Role::Phone,
            OutputColumn::AddressLine1 | OutputColumn::AddressLine2 => Role::Address,
            OutputColumn::City => Role::City,
            OutputColumn::State => Role::State,
            OutputColumn::ZipCode => Role::Zip,
        }
    }

    fn value(self, record: &NormalizedRecord) -> String {
        let value = match self {
            OutputColumn::AddressLine1 => record.address_line1(),
            OutputColumn::AddressLine2 => record.address_line2(),
            other => record.value(other.role()),
        };
        value.unwrap_or_default().to_string()
    }
}

/// Canonical columns emitted for a run: those whose role is assigned, plus
/// first and last name when a full-name column is being split.
pub fn output_columns(roles: &RoleMap, name_split: bool) -> Vec<OutputColumn> {
    OutputColumn::ALL
        .into_iter()
        .filter(|column| match column {
            OutputColumn::FirstName | OutputColumn::LastName => {
                name_split || roles.is_assigned(column.role())
            }
            other => roles.is_assigned(other.role()),
        })
        .collect()
}

/// Assembles the cleaned table. Passthrough headers that collide with a
/// canonical header get a numeric suffix.
pub(crate) fn build_table(
    records: &[NormalizedRecord],
    columns: &[OutputColumn],
    passthrough: &[String],
) -> Result<Table> {
    let mut taken: BTreeSet<String> = columns.iter().map(|c| c.header().to_string()).collect();
    let mut headers: Vec<String> = columns.iter().map(|c| c.header().to_string()).collect();
    for header in passthrough {
        let name = unique_header(header, &taken);
        taken.insert(name.clone());
        headers.push(name);
    }

    let mut table = Table::new(headers)?;
    for record in records {
        let mut cells: Vec<Option<String>> = columns
            .iter()
            .map(|column| Some(column.value(record)))
            .collect();
        cells.extend(record.passthrough.iter().take(passthrough.len()).cloned());
        table.push_row(cells)?;
    }
    Ok(table)
}

fn unique_header(name: &str, taken: &BTreeSet<String>) -> String {
    if !taken.contains(name) {
        return name.to_string();
    }
    let mut n = 2;
    loop {
        let candidate = format!("{name} ({n})");
        if !taken.contains(&candidate) {
            return candidate;
        }
        n += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_follow_assigned_roles_in_fixed_order() {
        let roles = RoleMap::new(
            [
                (Role::Zip, "zip".to_string()),
                (Role::Address, "addr".to_string()),
                (Role::LastName, "last".to_string()),
            ],
            false,
        );
        assert_eq!(
            output_columns(&roles, false),
            vec![
                OutputColumn::LastName,
                OutputColumn::AddressLine1,
                OutputColumn::AddressLine2,
                OutputColumn::ZipCode,
            ]
        );
    }

    #[test]
    fn name_split_adds_both_name_columns() {
        let roles = RoleMap::new([(Role::FullName, "Owner Name".to_string())], true);
        assert_eq!(
            output_columns(&roles, true),
            vec![OutputColumn::FirstName, OutputColumn::LastName]
        );
        assert!(output_columns(&roles, false).is_empty());
    }

    #[test]
    fn colliding_passthrough_headers_are_suffixed() {
        let columns = [OutputColumn::AddressLine1, OutputColumn::AddressLine2];
        let passthrough = vec!["Address Line 2".to_string(), "Notes".to_string()];
        let table = build_table(&[], &columns, &passthrough).unwrap();
        assert_eq!(
            table.headers(),
            ["Address Line 1", "Address Line 2", "Address Line 2 (2)", "Notes"]
        );
    }
}
