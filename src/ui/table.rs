use crate::record::ServiceRecord;
use crate::ui::{theme, Icons};
use owo_colors::OwoColorize;
use tabled::{settings::Style, Table, Tabled};

/// One line of the list view
#[derive(Tabled)]
pub struct ServiceRow {
    /// Row number for `select`, arrowed when selected
    #[tabled(rename = "#")]
    pub position: String,
    #[tabled(rename = "ID")]
    pub id: i64,
    #[tabled(rename = "Nombre")]
    pub name: String,
    #[tabled(rename = "Direccion recogida")]
    pub pickup_address: String,
    #[tabled(rename = "Direccion entrega")]
    pub delivery_address: String,
    #[tabled(rename = "Celular")]
    pub phone: String,
    #[tabled(rename = "Dinero a recaudar")]
    pub amount: String,
}

impl ServiceRow {
    pub fn new(index: usize, record: &ServiceRecord, selected: bool) -> Self {
        let position = if selected {
            format!("{} {}", Icons::POINTER, index)
                .style(theme().selected.clone())
                .to_string()
        } else {
            index.to_string()
        };

        Self {
            position,
            id: record.id,
            name: record.name.clone(),
            pickup_address: record.pickup_address.clone(),
            delivery_address: record.delivery_address.clone(),
            phone: record.phone.clone(),
            amount: record.amount.to_string(),
        }
    }
}

/// Render the list view. `selected` is the index of the highlighted row.
pub fn render_services(records: &[ServiceRecord], selected: Option<usize>) -> String {
    if records.is_empty() {
        return format!("{} Sin servicios", Icons::EMPTY);
    }

    let rows: Vec<ServiceRow> = records
        .iter()
        .enumerate()
        .map(|(i, r)| ServiceRow::new(i, r, selected == Some(i)))
        .collect();

    Table::new(&rows).with(Style::rounded()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Amount, Field};

    /// Column headings of the list view, id first
    fn column_titles() -> Vec<&'static str> {
        let mut titles = vec!["ID"];
        titles.extend(Field::all().iter().map(Field::label));
        titles
    }

    fn record(id: i64, name: &str) -> ServiceRecord {
        ServiceRecord {
            id,
            name: name.to_string(),
            pickup_address: "Calle 1".to_string(),
            delivery_address: "Calle 2".to_string(),
            phone: "555".to_string(),
            amount: Amount::Whole(100),
        }
    }

    #[test]
    fn test_render_empty() {
        assert!(render_services(&[], None).contains("Sin servicios"));
    }

    #[test]
    fn test_render_has_every_column_and_row() {
        let table = render_services(&[record(3, "Ana"), record(9, "Bruno")], None);
        for title in column_titles() {
            assert!(table.contains(title), "missing {}", title);
        }
        assert!(table.contains("Ana"));
        assert!(table.contains("Bruno"));
        assert!(!table.contains(Icons::POINTER));

        // position gutter plus the six record columns
        let heading = table.lines().nth(1).unwrap();
        assert_eq!(heading.matches('│').count(), 8);
    }

    #[test]
    fn test_render_marks_selection() {
        let table = render_services(&[record(3, "Ana")], Some(0));
        assert!(table.contains(Icons::POINTER));
    }

    #[test]
    fn test_render_raw_amount_verbatim() {
        let mut legacy = record(4, "Bruno");
        legacy.amount = Amount::Raw("1.500.000".into());
        assert!(render_services(&[legacy], None).contains("1.500.000"));
    }
}
